//! Locale registry with typed lookup.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use crate::engine::error::Error;
use crate::locales;
use crate::types::{Locale, LocaleKey};

/// Shared instance of the built-in registry.
static BUILTIN: LazyLock<Arc<LocaleRegistry>> =
    LazyLock::new(|| Arc::new(LocaleRegistry::builtin()));

/// An immutable mapping from locale key to locale record.
///
/// Built once and never altered, so reads are safe from any number of
/// threads. Formatters hold a registry behind an [`Arc`]; tests can
/// substitute subsets or hand-built locales without touching process-wide
/// state.
///
/// # Example
///
/// ```
/// use datefmt::{LocaleKey, LocaleRegistry};
///
/// let registry = LocaleRegistry::builtin();
/// let locale = registry.resolve(LocaleKey::Es).unwrap();
/// assert_eq!(locale.date_formats.short, "DD/MM/YYYY");
///
/// let keys: Vec<_> = registry.keys().collect();
/// assert_eq!(keys, vec![LocaleKey::En, LocaleKey::Es, LocaleKey::Ar]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleRegistry {
    locales: BTreeMap<LocaleKey, Locale>,
}

impl LocaleRegistry {
    /// Registry holding the built-in locales (`en`, `es`, `ar`).
    pub fn builtin() -> Self {
        Self::from_locales(locales::all())
    }

    /// Build a registry from arbitrary locales. Later entries win on key.
    pub fn from_locales(entries: impl IntoIterator<Item = Locale>) -> Self {
        LocaleRegistry {
            locales: entries
                .into_iter()
                .map(|locale| (locale.key, locale))
                .collect(),
        }
    }

    /// The process-wide built-in registry.
    pub fn shared() -> Arc<LocaleRegistry> {
        Arc::clone(&BUILTIN)
    }

    /// Look up a locale record.
    pub fn resolve(&self, key: LocaleKey) -> Result<&Locale, Error> {
        self.locales.get(&key).ok_or_else(|| {
            let available: Vec<&str> = self.locales.keys().copied().map(LocaleKey::as_str).collect();
            Error::unknown_locale(key.as_str(), &available)
        })
    }

    /// Whether a key is registered.
    pub fn contains(&self, key: LocaleKey) -> bool {
        self.locales.contains_key(&key)
    }

    /// Registered keys, in stable declaration order.
    pub fn keys(&self) -> impl Iterator<Item = LocaleKey> + '_ {
        self.locales.keys().copied()
    }

    /// Number of registered locales.
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Whether the registry holds no locales.
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
