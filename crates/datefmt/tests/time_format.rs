//! Integration tests for the standalone, locale-independent `time_format`.

use datefmt::time_format;

// =============================================================================
// Minimal vocabulary rendering
// =============================================================================

#[test]
fn test_numeric_orderings() {
    let date = "2025-03-29T14:05:09Z";
    assert_eq!(time_format(date, "MM-YYYY-DD"), "03-2025-29");
    assert_eq!(time_format(date, "DD-MM-YYYY"), "29-03-2025");
    assert_eq!(time_format(date, "YYYY-MM-DD"), "2025-03-29");
    assert_eq!(time_format(date, "DD/MM/YYYY"), "29/03/2025");
    assert_eq!(time_format(date, "MM/DD/YYYY"), "03/29/2025");
    assert_eq!(time_format(date, "YYYY/MM/DD"), "2025/03/29");
    assert_eq!(time_format(date, "HH:mm:ss"), "14:05:09");
}

#[test]
fn test_name_tokens_are_not_substituted() {
    let date = "2025-03-29";
    // MMM scans as MM plus a literal M; weekday tokens stay text.
    assert_eq!(time_format(date, "MMM"), "03M");
    assert_eq!(time_format(date, "MMMM"), "0303");
    assert_eq!(time_format(date, "EEEE, YYYY"), "EEEE, 2025");
}

#[test]
fn test_literal_text_passes_through() {
    assert_eq!(
        time_format("2025-03-29", "year YYYY, day DD!"),
        "year 2025, day 29!",
    );
}

#[test]
fn test_template_with_no_tokens() {
    assert_eq!(time_format("2025-03-29", "no tokens here"), "no tokens here");
}

// =============================================================================
// Input shapes
// =============================================================================

#[test]
fn test_rfc3339_offset_normalizes_to_utc() {
    assert_eq!(
        time_format("2025-03-29T16:05:09+02:00", "HH:mm:ss"),
        "14:05:09",
    );
}

#[test]
fn test_date_only_is_midnight() {
    assert_eq!(
        time_format("2025-03-29", "YYYY-MM-DD HH:mm:ss"),
        "2025-03-29 00:00:00",
    );
}

#[test]
fn test_space_separated_date_time() {
    assert_eq!(
        time_format("2025-03-29 14:05:09", "HH:mm DD"),
        "14:05 29",
    );
}

#[test]
fn test_minutes_precision_shape() {
    assert_eq!(time_format("2025-03-29T14:05", "HH:mm:ss"), "14:05:00");
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    assert_eq!(time_format("  2025-03-29  ", "YYYY"), "2025");
}

#[test]
fn test_instant_input() {
    use chrono::{TimeZone, Utc};

    let instant = Utc.with_ymd_and_hms(2021, 12, 31, 23, 59, 58).unwrap();
    assert_eq!(time_format(instant, "YYYY-MM-DD HH:mm:ss"), "2021-12-31 23:59:58");
}

// =============================================================================
// Invalid input
// =============================================================================

#[test]
fn test_unparseable_text_is_invalid_date() {
    assert_eq!(time_format("invalid-date", "YYYY-MM-DD"), "Invalid Date");
    assert_eq!(time_format("", "YYYY-MM-DD"), "Invalid Date");
    assert_eq!(time_format("2025-13-45", "YYYY-MM-DD"), "Invalid Date");
    assert_eq!(time_format("29/03/2025", "YYYY-MM-DD"), "Invalid Date");
}

#[test]
fn test_sentinel_ignores_template() {
    assert_eq!(time_format("garbage", "literal only"), "Invalid Date");
}
