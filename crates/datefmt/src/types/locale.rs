//! The locale data record.

use bon::Builder;

use crate::types::{DateFormatKey, LocaleKey, NameWidth, RelativeTimeKey, Tense};

/// Date-format templates for one locale, one field per named format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct DateFormats {
    pub short: &'static str,
    pub medium: &'static str,
    pub long: &'static str,
    pub full: &'static str,
    pub time: &'static str,
    pub date_time: &'static str,
}

impl DateFormats {
    /// The template for a named format.
    pub fn template(&self, key: DateFormatKey) -> &'static str {
        match key {
            DateFormatKey::Short => self.short,
            DateFormatKey::Medium => self.medium,
            DateFormatKey::Long => self.long,
            DateFormatKey::Full => self.full,
            DateFormatKey::Time => self.time,
            DateFormatKey::DateTime => self.date_time,
        }
    }
}

/// Weekday names, indexed 0=Sunday..6=Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct WeekDays {
    pub short: [&'static str; 7],
    pub long: [&'static str; 7],
}

impl WeekDays {
    /// The name table for a width.
    pub fn names(&self, width: NameWidth) -> &[&'static str; 7] {
        match width {
            NameWidth::Short => &self.short,
            NameWidth::Long => &self.long,
        }
    }
}

/// Month names, indexed 0=January..11=December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct Months {
    pub short: [&'static str; 12],
    pub long: [&'static str; 12],
}

impl Months {
    /// The name table for a width.
    pub fn names(&self, width: NameWidth) -> &[&'static str; 12] {
        match width {
            NameWidth::Short => &self.short,
            NameWidth::Long => &self.long,
        }
    }
}

/// The thirteen phrase templates of one tense.
///
/// Plural-key templates carry a single `{count}` placeholder; singular-key
/// templates carry none and render the same for any count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct RelativeTimePhrases {
    pub seconds: &'static str,
    pub minute: &'static str,
    pub minutes: &'static str,
    pub hour: &'static str,
    pub hours: &'static str,
    pub day: &'static str,
    pub days: &'static str,
    pub week: &'static str,
    pub weeks: &'static str,
    pub month: &'static str,
    pub months: &'static str,
    pub year: &'static str,
    pub years: &'static str,
}

impl RelativeTimePhrases {
    /// The template for a relative-time key.
    pub fn template(&self, key: RelativeTimeKey) -> &'static str {
        match key {
            RelativeTimeKey::Seconds => self.seconds,
            RelativeTimeKey::Minute => self.minute,
            RelativeTimeKey::Minutes => self.minutes,
            RelativeTimeKey::Hour => self.hour,
            RelativeTimeKey::Hours => self.hours,
            RelativeTimeKey::Day => self.day,
            RelativeTimeKey::Days => self.days,
            RelativeTimeKey::Week => self.week,
            RelativeTimeKey::Weeks => self.weeks,
            RelativeTimeKey::Month => self.month,
            RelativeTimeKey::Months => self.months,
            RelativeTimeKey::Year => self.year,
            RelativeTimeKey::Years => self.years,
        }
    }
}

/// Past and future relative-time phrase sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct RelativeTime {
    pub past: RelativeTimePhrases,
    pub future: RelativeTimePhrases,
}

impl RelativeTime {
    /// The phrase set for a tense.
    pub fn phrases(&self, tense: Tense) -> &RelativeTimePhrases {
        match tense {
            Tense::Past => &self.past,
            Tense::Future => &self.future,
        }
    }
}

/// An immutable bundle of formatting data for one language.
///
/// The struct shape carries the completeness invariants: all six date
/// formats, seven weekday and twelve month names per width, and all thirteen
/// relative-time phrases per tense exist by construction. Registries hand
/// out locales by shared reference; cloning copies only `'static` pointers.
///
/// # Example
///
/// ```
/// use datefmt::{DateFormatKey, LocaleKey, LocaleRegistry, NameWidth};
///
/// let registry = LocaleRegistry::builtin();
/// let locale = registry.resolve(LocaleKey::En).unwrap();
/// assert_eq!(locale.date_format(DateFormatKey::Short), "MM/DD/YYYY");
/// assert_eq!(locale.months.names(NameWidth::Long)[0], "January");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct Locale {
    pub key: LocaleKey,
    pub date_formats: DateFormats,
    pub week_days: WeekDays,
    pub months: Months,
    pub relative_time: RelativeTime,
}

impl Locale {
    /// The template string for a named date format.
    pub fn date_format(&self, key: DateFormatKey) -> &'static str {
        self.date_formats.template(key)
    }

    /// The relative-time template for a key and tense.
    pub fn relative_template(&self, key: RelativeTimeKey, tense: Tense) -> &'static str {
        self.relative_time.phrases(tense).template(key)
    }
}
