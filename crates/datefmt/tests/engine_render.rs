//! Integration tests for absolute date rendering through the engine.
//!
//! Covers token substitution, zero padding, token precedence over real
//! dates, locale name tokens, connector-word pass-through, and the
//! invalid-date sentinel.

use datefmt::engine::{month, render, render_named, weekday};
use datefmt::{DateFormatKey, Error, Locale, LocaleKey, LocaleRegistry, NameWidth};

fn locale(key: LocaleKey) -> Locale {
    LocaleRegistry::builtin().resolve(key).unwrap().clone()
}

// =============================================================================
// Numeric tokens
// =============================================================================

#[test]
fn test_year_month_day_orderings() {
    let en = locale(LocaleKey::En);
    assert_eq!(render("2025-03-29", "YYYY MM DD", &en), "2025 03 29");
    assert_eq!(render("2025-03-29", "DD-MM-YYYY", &en), "29-03-2025");
    assert_eq!(render("2025-03-29", "MM/DD/YYYY", &en), "03/29/2025");
    assert_eq!(render("2025-03-29", "MM-YYYY-DD", &en), "03-2025-29");
}

#[test]
fn test_time_of_day() {
    let en = locale(LocaleKey::En);
    assert_eq!(render("2025-03-29T14:05:09Z", "HH:mm:ss", &en), "14:05:09");
}

#[test]
fn test_single_digit_fields_pad_to_width_two() {
    let en = locale(LocaleKey::En);
    // Every field at a single-digit value.
    let rendered = render("2025-02-03T04:05:06Z", "MM DD HH mm ss", &en);
    assert_eq!(rendered, "02 03 04 05 06");
    for field in rendered.split(' ') {
        assert_eq!(field.len(), 2, "field {field:?}");
    }
}

#[test]
fn test_midnight_pads_all_time_fields() {
    let en = locale(LocaleKey::En);
    assert_eq!(render("2025-03-29", "HH:mm:ss", &en), "00:00:00");
}

#[test]
fn test_year_is_never_padded() {
    let en = locale(LocaleKey::En);
    assert_eq!(render("0987-06-05", "YYYY", &en), "987");
}

// =============================================================================
// Name tokens and precedence
// =============================================================================

#[test]
fn test_month_token_family_resolves_by_length() {
    let en = locale(LocaleKey::En);
    assert_eq!(render("2025-01-15", "MMMM", &en), "January");
    assert_eq!(render("2025-01-15", "MMM", &en), "Jan");
    assert_eq!(render("2025-01-15", "MM", &en), "01");
}

#[test]
fn test_long_month_is_not_two_numeric_months() {
    let en = locale(LocaleKey::En);
    let numeric = render("2025-01-15", "MM", &en);
    assert_ne!(render("2025-01-15", "MMMM", &en), format!("{numeric}{numeric}"));
}

#[test]
fn test_weekday_tokens() {
    let en = locale(LocaleKey::En);
    // 2025-03-29 is a Saturday.
    assert_eq!(render("2025-03-29", "EEEE", &en), "Saturday");
    assert_eq!(render("2025-03-29", "EEE", &en), "Sat");
}

#[test]
fn test_december_and_sunday_boundaries() {
    let en = locale(LocaleKey::En);
    // 2025-12-28 is a Sunday.
    assert_eq!(render("2025-12-28", "EEEE, MMMM DD", &en), "Sunday, December 28");
}

// =============================================================================
// Named formats
// =============================================================================

#[test]
fn test_english_full_format() {
    let en = locale(LocaleKey::En);
    assert_eq!(
        render_named("2021-01-01", DateFormatKey::Full, &en),
        "Friday, January 01, 2021",
    );
}

#[test]
fn test_english_named_formats() {
    let en = locale(LocaleKey::En);
    let date = "2025-03-29T14:05:09Z";
    assert_eq!(render_named(date, DateFormatKey::Short, &en), "03/29/2025");
    assert_eq!(render_named(date, DateFormatKey::Medium, &en), "Mar 29, 2025");
    assert_eq!(render_named(date, DateFormatKey::Long, &en), "March 29, 2025");
    assert_eq!(render_named(date, DateFormatKey::Time, &en), "14:05:09");
    assert_eq!(
        render_named(date, DateFormatKey::DateTime, &en),
        "03/29/2025 14:05:09",
    );
}

#[test]
fn test_spanish_connector_words_pass_through() {
    let es = locale(LocaleKey::Es);
    assert_eq!(
        render_named("2021-01-01", DateFormatKey::Long, &es),
        "01 de Enero de 2021",
    );
    assert_eq!(
        render_named("2021-01-01", DateFormatKey::Full, &es),
        "Viernes, 01 de Enero de 2021",
    );
}

#[test]
fn test_arabic_connector_words_pass_through() {
    let ar = locale(LocaleKey::Ar);
    assert_eq!(
        render_named("2025-03-29", DateFormatKey::Long, &ar),
        "29 من مارس من 2025",
    );
}

// =============================================================================
// Invalid input
// =============================================================================

#[test]
fn test_unparseable_text_renders_sentinel() {
    let en = locale(LocaleKey::En);
    assert_eq!(render("invalid-date", "YYYY-MM-DD", &en), "Invalid Date");
    assert_eq!(render_named("29/03/2025", DateFormatKey::Full, &en), "Invalid Date");
}

#[test]
fn test_instant_input_bypasses_parsing() {
    use chrono::{TimeZone, Utc};

    let en = locale(LocaleKey::En);
    let instant = Utc.with_ymd_and_hms(2025, 3, 29, 14, 5, 9).unwrap();
    assert_eq!(render(instant, "YYYY-MM-DD HH:mm:ss", &en), "2025-03-29 14:05:09");
}

// =============================================================================
// Bounds-checked name lookup
// =============================================================================

#[test]
fn test_weekday_lookup() {
    let en = locale(LocaleKey::En);
    assert_eq!(weekday(0, NameWidth::Long, &en).unwrap(), "Sunday");
    assert_eq!(weekday(6, NameWidth::Short, &en).unwrap(), "Sat");
}

#[test]
fn test_month_lookup() {
    let es = locale(LocaleKey::Es);
    assert_eq!(month(0, NameWidth::Long, &es).unwrap(), "Enero");
    assert_eq!(month(11, NameWidth::Short, &es).unwrap(), "Dic");
}

#[test]
fn test_weekday_index_out_of_range() {
    let en = locale(LocaleKey::En);
    let err = weekday(7, NameWidth::Long, &en).unwrap_err();
    assert!(matches!(
        err,
        Error::IndexOutOfRange { unit: "weekday", index: 7, max: 6 },
    ));
}

#[test]
fn test_month_index_out_of_range() {
    let en = locale(LocaleKey::En);
    let err = month(12, NameWidth::Short, &en).unwrap_err();
    assert!(matches!(
        err,
        Error::IndexOutOfRange { unit: "month", index: 12, max: 11 },
    ));
}
