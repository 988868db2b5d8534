//! The format engine: token substitution over scanned templates, relative
//! time resolution, and bounds-checked name lookups.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::engine::error::Error;
use crate::parser::ast::{FormatToken, Segment, Template, Vocabulary};
use crate::parser::scan;
use crate::types::{Count, DateFormatKey, DateInput, Locale, NameWidth, RelativeTimeKey, Tense};

/// Literal output for date input that does not resolve to an instant.
pub const INVALID_DATE: &str = "Invalid Date";

/// Render a date through a format template with the full token vocabulary.
///
/// Unrecognized substrings pass through unchanged, including literal
/// connector words embedded in locale templates. Input that does not
/// resolve to an instant renders as [`INVALID_DATE`].
///
/// # Example
///
/// ```
/// use datefmt::engine::render;
/// use datefmt::{LocaleKey, LocaleRegistry};
///
/// let registry = LocaleRegistry::builtin();
/// let locale = registry.resolve(LocaleKey::En).unwrap();
/// assert_eq!(render("2025-03-29", "EEE, MMM DD", locale), "Sat, Mar 29");
/// ```
pub fn render(date: impl Into<DateInput>, template: &str, locale: &Locale) -> String {
    let Some(instant) = date.into().resolve() else {
        return INVALID_DATE.to_string();
    };
    render_segments(&instant, &scan(template, Vocabulary::Full), Some(locale))
}

/// Render a date through one of the locale's named formats.
pub fn render_named(date: impl Into<DateInput>, key: DateFormatKey, locale: &Locale) -> String {
    render(date, locale.date_format(key), locale)
}

/// Render a date with the minimal, locale-independent vocabulary.
///
/// Only `YYYY`, `MM`, `DD`, `HH`, `mm`, and `ss` substitute; name tokens
/// stay literal. Unparseable input renders as [`INVALID_DATE`].
///
/// # Example
///
/// ```
/// use datefmt::time_format;
///
/// assert_eq!(time_format("2025-03-29T14:05:09Z", "DD/MM/YYYY"), "29/03/2025");
/// assert_eq!(time_format("2025-03-29T14:05:09Z", "HH:mm:ss"), "14:05:09");
/// assert_eq!(time_format("invalid-date", "YYYY-MM-DD"), "Invalid Date");
/// ```
pub fn time_format(date: impl Into<DateInput>, template: &str) -> String {
    let Some(instant) = date.into().resolve() else {
        return INVALID_DATE.to_string();
    };
    render_segments(&instant, &scan(template, Vocabulary::Minimal), None)
}

/// Render a relative-time phrase.
///
/// The first `{count}` in the template is replaced with the verbatim decimal
/// form of `count`. Singular-key templates carry no placeholder and ignore
/// the count entirely.
///
/// # Example
///
/// ```
/// use datefmt::engine::render_relative;
/// use datefmt::{LocaleKey, LocaleRegistry, RelativeTimeKey, Tense};
///
/// let registry = LocaleRegistry::builtin();
/// let locale = registry.resolve(LocaleKey::En).unwrap();
/// let phrase = render_relative(RelativeTimeKey::Hours, 3, Tense::Future, locale);
/// assert_eq!(phrase, "in 3 hours");
/// ```
pub fn render_relative(
    key: RelativeTimeKey,
    count: impl Into<Count>,
    tense: Tense,
    locale: &Locale,
) -> String {
    let template = locale.relative_template(key, tense);
    template.replacen("{count}", &count.into().to_string(), 1)
}

/// Look up a weekday name with bounds checking, index 0 = Sunday.
pub fn weekday(index: usize, width: NameWidth, locale: &Locale) -> Result<&'static str, Error> {
    locale
        .week_days
        .names(width)
        .get(index)
        .copied()
        .ok_or(Error::IndexOutOfRange {
            unit: "weekday",
            index,
            max: 6,
        })
}

/// Look up a month name with bounds checking, index 0 = January.
pub fn month(index: usize, width: NameWidth, locale: &Locale) -> Result<&'static str, Error> {
    locale
        .months
        .names(width)
        .get(index)
        .copied()
        .ok_or(Error::IndexOutOfRange {
            unit: "month",
            index,
            max: 11,
        })
}

/// Substitute every segment of a scanned template.
fn render_segments(instant: &DateTime<Utc>, template: &Template, locale: Option<&Locale>) -> String {
    let mut out = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Token(token) => push_token(&mut out, *token, instant, locale),
        }
    }
    out
}

/// Append one token's value.
///
/// Name tokens need locale data; the minimal vocabulary never produces
/// them, so the locale-less path cannot reach those arms.
fn push_token(out: &mut String, token: FormatToken, instant: &DateTime<Utc>, locale: Option<&Locale>) {
    match token {
        FormatToken::Year => {
            let mut digits = itoa::Buffer::new();
            out.push_str(digits.format(instant.year()));
        }
        FormatToken::Month => push_two_digit(out, instant.month()),
        FormatToken::Day => push_two_digit(out, instant.day()),
        FormatToken::Hour => push_two_digit(out, instant.hour()),
        FormatToken::Minute => push_two_digit(out, instant.minute()),
        FormatToken::Second => push_two_digit(out, instant.second()),
        FormatToken::MonthShort => {
            if let Some(locale) = locale {
                out.push_str(locale.months.short[month_index(instant)]);
            }
        }
        FormatToken::MonthLong => {
            if let Some(locale) = locale {
                out.push_str(locale.months.long[month_index(instant)]);
            }
        }
        FormatToken::WeekdayShort => {
            if let Some(locale) = locale {
                out.push_str(locale.week_days.short[weekday_index(instant)]);
            }
        }
        FormatToken::WeekdayLong => {
            if let Some(locale) = locale {
                out.push_str(locale.week_days.long[weekday_index(instant)]);
            }
        }
    }
}

/// Zero-pad to width 2 and append.
fn push_two_digit(out: &mut String, value: u32) {
    let mut digits = itoa::Buffer::new();
    if value < 10 {
        out.push('0');
    }
    out.push_str(digits.format(value));
}

/// 0 = January .. 11 = December.
fn month_index(instant: &DateTime<Utc>) -> usize {
    instant.month0() as usize
}

/// 0 = Sunday .. 6 = Saturday.
fn weekday_index(instant: &DateTime<Utc>) -> usize {
    instant.weekday().num_days_from_sunday() as usize
}
