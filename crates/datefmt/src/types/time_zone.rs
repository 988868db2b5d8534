//! Time zone identifiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::Error;

/// Identifiers accepted for [`TimeZone`]: `UTC`/`GMT`, common zone
/// abbreviations, and a curated set of IANA zone names. The list is closed;
/// names outside it are rejected at construction.
static KNOWN_ZONES: &[&str] = &[
    "AEDT",
    "AEST",
    "BST",
    "CDT",
    "CEST",
    "CET",
    "CST",
    "EDT",
    "EEST",
    "EET",
    "EST",
    "GMT",
    "HST",
    "IST",
    "JST",
    "KST",
    "MDT",
    "MST",
    "PDT",
    "PST",
    "UTC",
    "WET",
    "Africa/Cairo",
    "Africa/Johannesburg",
    "Africa/Lagos",
    "Africa/Nairobi",
    "America/Anchorage",
    "America/Argentina/Buenos_Aires",
    "America/Bogota",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "America/Mexico_City",
    "America/New_York",
    "America/Phoenix",
    "America/Santiago",
    "America/Sao_Paulo",
    "America/Toronto",
    "America/Vancouver",
    "Asia/Bangkok",
    "Asia/Dubai",
    "Asia/Hong_Kong",
    "Asia/Jakarta",
    "Asia/Jerusalem",
    "Asia/Karachi",
    "Asia/Kolkata",
    "Asia/Kuala_Lumpur",
    "Asia/Manila",
    "Asia/Riyadh",
    "Asia/Seoul",
    "Asia/Shanghai",
    "Asia/Singapore",
    "Asia/Taipei",
    "Asia/Tokyo",
    "Atlantic/Reykjavik",
    "Australia/Melbourne",
    "Australia/Perth",
    "Australia/Sydney",
    "Europe/Amsterdam",
    "Europe/Athens",
    "Europe/Berlin",
    "Europe/Brussels",
    "Europe/Bucharest",
    "Europe/Copenhagen",
    "Europe/Dublin",
    "Europe/Helsinki",
    "Europe/Istanbul",
    "Europe/Kyiv",
    "Europe/Lisbon",
    "Europe/London",
    "Europe/Madrid",
    "Europe/Moscow",
    "Europe/Oslo",
    "Europe/Paris",
    "Europe/Prague",
    "Europe/Rome",
    "Europe/Stockholm",
    "Europe/Vienna",
    "Europe/Warsaw",
    "Europe/Zurich",
    "Pacific/Auckland",
    "Pacific/Honolulu",
];

/// A validated time zone identifier.
///
/// The zone is identification metadata only: no formatting path converts or
/// offsets date values by it, and the formatter's `now()` returns the wall
/// clock regardless of the configured zone.
///
/// # Example
///
/// ```
/// use datefmt::TimeZone;
///
/// let zone: TimeZone = "America/New_York".parse().unwrap();
/// assert_eq!(zone.as_str(), "America/New_York");
/// assert!("Mars/Olympus_Mons".parse::<TimeZone>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeZone(#[serde(skip)] &'static str);

impl TimeZone {
    /// Coordinated universal time, the default zone.
    pub const UTC: TimeZone = TimeZone("UTC");

    /// Validate `name` against the known-zone list.
    pub fn new(name: &str) -> Result<TimeZone, Error> {
        KNOWN_ZONES
            .iter()
            .find(|&&zone| zone == name)
            .copied()
            .map(TimeZone)
            .ok_or_else(|| Error::unknown_time_zone(name, KNOWN_ZONES))
    }

    /// The identifier as text.
    pub fn as_str(self) -> &'static str {
        self.0
    }

    /// Every identifier the allow-list accepts.
    pub fn known() -> &'static [&'static str] {
        KNOWN_ZONES
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        TimeZone::UTC
    }
}

impl FromStr for TimeZone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeZone::new(s)
    }
}

impl TryFrom<String> for TimeZone {
    type Error = Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        TimeZone::new(&name)
    }
}

impl From<TimeZone> for String {
    fn from(zone: TimeZone) -> Self {
        zone.0.to_string()
    }
}

impl std::fmt::Display for TimeZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
