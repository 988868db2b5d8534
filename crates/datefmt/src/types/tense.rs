//! Relative-time tense.

use serde::{Deserialize, Serialize};

/// Selects the past or future branch of a locale's relative-time phrases.
///
/// Converts from the boolean "is future" flag used by dynamic callers.
///
/// # Example
///
/// ```
/// use datefmt::Tense;
///
/// assert_eq!(Tense::from(true), Tense::Future);
/// assert_eq!(Tense::default(), Tense::Past);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    /// Elapsed time, e.g. "2 minutes ago".
    #[default]
    Past,
    /// Remaining time, e.g. "in 2 minutes".
    Future,
}

impl Tense {
    /// The tense as its wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Tense::Past => "past",
            Tense::Future => "future",
        }
    }
}

impl From<bool> for Tense {
    fn from(is_future: bool) -> Self {
        if is_future { Tense::Future } else { Tense::Past }
    }
}

impl std::fmt::Display for Tense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
