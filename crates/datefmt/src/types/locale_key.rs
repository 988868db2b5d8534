//! Locale identifiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::Error;

/// Identifies one of the built-in locales.
///
/// The set is closed: adding a locale means adding a variant here plus its
/// content under `locales/`. Keys order by declaration (`en`, `es`, `ar`),
/// which is also the order registries enumerate.
///
/// # Example
///
/// ```
/// use datefmt::LocaleKey;
///
/// let key: LocaleKey = "es".parse().unwrap();
/// assert_eq!(key, LocaleKey::Es);
/// assert_eq!(key.as_str(), "es");
/// assert!("fr".parse::<LocaleKey>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleKey {
    /// English.
    En,
    /// Spanish.
    Es,
    /// Arabic.
    Ar,
}

impl LocaleKey {
    /// Every locale key, in enumeration order.
    pub const ALL: [LocaleKey; 3] = [LocaleKey::En, LocaleKey::Es, LocaleKey::Ar];

    /// The key as its wire string (`"en"`, `"es"`, `"ar"`).
    pub fn as_str(self) -> &'static str {
        match self {
            LocaleKey::En => "en",
            LocaleKey::Es => "es",
            LocaleKey::Ar => "ar",
        }
    }
}

impl FromStr for LocaleKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names = LocaleKey::ALL.map(LocaleKey::as_str);
        LocaleKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::unknown_locale(s, &names))
    }
}

impl std::fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
