//! Built-in locale content.

mod ar;
mod en;
mod es;

use crate::types::Locale;

/// All built-in locales, in registry order.
pub(crate) fn all() -> [Locale; 3] {
    [en::EN.clone(), es::ES.clone(), ar::AR.clone()]
}
