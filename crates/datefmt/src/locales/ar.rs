//! Arabic locale content.

use crate::types::{
    DateFormats, Locale, LocaleKey, Months, RelativeTime, RelativeTimePhrases, WeekDays,
};

pub(crate) static AR: Locale = Locale {
    key: LocaleKey::Ar,
    date_formats: DateFormats {
        short: "DD/MM/YYYY",
        medium: "DD MMM, YYYY",
        long: "DD من MMMM من YYYY",
        full: "EEEE، DD من MMMM من YYYY",
        time: "HH:mm:ss",
        date_time: "DD/MM/YYYY HH:mm:ss",
    },
    week_days: WeekDays {
        short: ["أحد", "إثنين", "ثلاثاء", "أربعاء", "خميس", "جمعة", "سبت"],
        long: [
            "الأحد",
            "الإثنين",
            "الثلاثاء",
            "الأربعاء",
            "الخميس",
            "الجمعة",
            "السبت",
        ],
    },
    // Arabic month names have no abbreviated form; both widths share one table.
    months: Months {
        short: [
            "يناير",
            "فبراير",
            "مارس",
            "أبريل",
            "مايو",
            "يونيو",
            "يوليو",
            "أغسطس",
            "سبتمبر",
            "أكتوبر",
            "نوفمبر",
            "ديسمبر",
        ],
        long: [
            "يناير",
            "فبراير",
            "مارس",
            "أبريل",
            "مايو",
            "يونيو",
            "يوليو",
            "أغسطس",
            "سبتمبر",
            "أكتوبر",
            "نوفمبر",
            "ديسمبر",
        ],
    },
    relative_time: RelativeTime {
        past: RelativeTimePhrases {
            seconds: "الآن",
            minute: "منذ دقيقة",
            minutes: "منذ {count} دقائق",
            hour: "منذ ساعة",
            hours: "منذ {count} ساعات",
            day: "منذ يوم",
            days: "منذ {count} أيام",
            week: "منذ أسبوع",
            weeks: "منذ {count} أسابيع",
            month: "منذ شهر",
            months: "منذ {count} أشهر",
            year: "منذ سنة",
            years: "منذ {count} سنوات",
        },
        future: RelativeTimePhrases {
            seconds: "خلال لحظات",
            minute: "خلال دقيقة",
            minutes: "خلال {count} دقائق",
            hour: "خلال ساعة",
            hours: "خلال {count} ساعات",
            day: "خلال يوم",
            days: "خلال {count} أيام",
            week: "خلال أسبوع",
            weeks: "خلال {count} أسابيع",
            month: "خلال شهر",
            months: "خلال {count} أشهر",
            year: "خلال سنة",
            years: "خلال {count} سنوات",
        },
    },
};
