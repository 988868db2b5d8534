//! Relative-time unit identifiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::Error;

/// Names one of the thirteen relative-time phrase templates.
///
/// Singular keys (`Minute`, `Hour`, `Day`, `Week`, `Month`, `Year`) select
/// pre-authored singular phrases whose templates carry no `{count}`
/// placeholder; their plural counterparts substitute the count verbatim.
/// Choosing singular vs. plural for a given magnitude is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeTimeKey {
    /// Sub-minute, e.g. "just now".
    Seconds,
    /// Exactly one minute.
    Minute,
    /// N minutes.
    Minutes,
    /// Exactly one hour.
    Hour,
    /// N hours.
    Hours,
    /// Exactly one day.
    Day,
    /// N days.
    Days,
    /// Exactly one week.
    Week,
    /// N weeks.
    Weeks,
    /// Exactly one month.
    Month,
    /// N months.
    Months,
    /// Exactly one year.
    Year,
    /// N years.
    Years,
}

impl RelativeTimeKey {
    /// Every relative-time key, in declaration order.
    pub const ALL: [RelativeTimeKey; 13] = [
        RelativeTimeKey::Seconds,
        RelativeTimeKey::Minute,
        RelativeTimeKey::Minutes,
        RelativeTimeKey::Hour,
        RelativeTimeKey::Hours,
        RelativeTimeKey::Day,
        RelativeTimeKey::Days,
        RelativeTimeKey::Week,
        RelativeTimeKey::Weeks,
        RelativeTimeKey::Month,
        RelativeTimeKey::Months,
        RelativeTimeKey::Year,
        RelativeTimeKey::Years,
    ];

    /// The key as its wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            RelativeTimeKey::Seconds => "seconds",
            RelativeTimeKey::Minute => "minute",
            RelativeTimeKey::Minutes => "minutes",
            RelativeTimeKey::Hour => "hour",
            RelativeTimeKey::Hours => "hours",
            RelativeTimeKey::Day => "day",
            RelativeTimeKey::Days => "days",
            RelativeTimeKey::Week => "week",
            RelativeTimeKey::Weeks => "weeks",
            RelativeTimeKey::Month => "month",
            RelativeTimeKey::Months => "months",
            RelativeTimeKey::Year => "year",
            RelativeTimeKey::Years => "years",
        }
    }
}

impl FromStr for RelativeTimeKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names = RelativeTimeKey::ALL.map(RelativeTimeKey::as_str);
        RelativeTimeKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::unknown_relative_time_key(s, &names))
    }
}

impl std::fmt::Display for RelativeTimeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
