//! Date parameter accepted by the formatting entry points.

use std::time::SystemTime;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// A date value for the formatting entry points: a resolved instant, or raw
/// text parsed on use.
///
/// Text that parses under none of the accepted shapes is an unrepresentable
/// date, which the formatting entry points render as the literal string
/// `"Invalid Date"` instead of failing.
///
/// Accepted text shapes, tried in order (surrounding whitespace ignored):
/// - RFC 3339, e.g. `2025-03-29T14:05:09Z`; explicit offsets are honored and
///   the instant is normalized to UTC
/// - `2025-03-29T14:05:09` and `2025-03-29T14:05`, read as UTC
/// - `2025-03-29 14:05:09`, read as UTC
/// - `2025-03-29`, read as midnight UTC
///
/// # Example
///
/// ```
/// use datefmt::DateInput;
///
/// assert!(DateInput::from("2025-03-29").resolve().is_some());
/// assert!(DateInput::from("invalid-date").resolve().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// A resolved instant.
    Instant(DateTime<Utc>),
    /// Raw text, parsed on use.
    Text(String),
}

impl DateInput {
    /// Resolve to an instant, or `None` when the input is not a
    /// representable date.
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        match self {
            DateInput::Instant(instant) => Some(*instant),
            DateInput::Text(text) => parse_instant(text),
        }
    }
}

fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    for shape in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, shape) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

impl From<DateTime<Utc>> for DateInput {
    fn from(instant: DateTime<Utc>) -> Self {
        DateInput::Instant(instant)
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        DateInput::Instant(instant.with_timezone(&Utc))
    }
}

impl From<SystemTime> for DateInput {
    fn from(time: SystemTime) -> Self {
        DateInput::Instant(DateTime::from(time))
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}
