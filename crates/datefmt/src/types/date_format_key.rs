//! Named date-format identifiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::Error;

/// Names one of the six per-locale date-format templates.
///
/// The wire spelling of [`DateFormatKey::DateTime`] is `dateTime`, matching
/// the locale data field it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateFormatKey {
    /// Numeric date, e.g. `MM/DD/YYYY`.
    Short,
    /// Abbreviated month name, e.g. `MMM DD, YYYY`.
    Medium,
    /// Full month name, e.g. `MMMM DD, YYYY`.
    Long,
    /// Weekday plus full month name, e.g. `EEEE, MMMM DD, YYYY`.
    Full,
    /// Time of day, `HH:mm:ss`.
    Time,
    /// Numeric date plus time of day.
    DateTime,
}

impl DateFormatKey {
    /// Every format key, in declaration order.
    pub const ALL: [DateFormatKey; 6] = [
        DateFormatKey::Short,
        DateFormatKey::Medium,
        DateFormatKey::Long,
        DateFormatKey::Full,
        DateFormatKey::Time,
        DateFormatKey::DateTime,
    ];

    /// The key as its wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            DateFormatKey::Short => "short",
            DateFormatKey::Medium => "medium",
            DateFormatKey::Long => "long",
            DateFormatKey::Full => "full",
            DateFormatKey::Time => "time",
            DateFormatKey::DateTime => "dateTime",
        }
    }
}

impl FromStr for DateFormatKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names = DateFormatKey::ALL.map(DateFormatKey::as_str);
        DateFormatKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::unknown_format_key(s, &names))
    }
}

impl std::fmt::Display for DateFormatKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
