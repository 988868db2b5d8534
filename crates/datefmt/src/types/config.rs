//! Formatter configuration.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::types::{LocaleKey, TimeZone};

/// Configuration for the formatter: locale plus informational time zone.
///
/// Serializes with the wire field names `localeKey` and `timeZone`. The time
/// zone is stored for identification only and never applied to formatted
/// values.
///
/// # Example
///
/// ```
/// use datefmt::{Config, LocaleKey};
///
/// let config = Config::builder().locale_key(LocaleKey::Es).build();
/// assert_eq!(config.locale_key, LocaleKey::Es);
/// assert_eq!(config.time_zone.as_str(), "UTC");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Locale used for templates, names, and relative-time phrases.
    #[builder(default = LocaleKey::En)]
    pub locale_key: LocaleKey,

    /// Informational time zone identifier.
    #[builder(default = TimeZone::UTC)]
    pub time_zone: TimeZone,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}
