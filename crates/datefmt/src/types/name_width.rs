//! Name-table width selector.

use serde::{Deserialize, Serialize};

/// Selects the abbreviated or full spelling of weekday and month names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameWidth {
    /// Abbreviated, e.g. "Mon", "Jan".
    Short,
    /// Full, e.g. "Monday", "January".
    Long,
}

impl NameWidth {
    /// The width as its wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            NameWidth::Short => "short",
            NameWidth::Long => "long",
        }
    }
}

impl std::fmt::Display for NameWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
