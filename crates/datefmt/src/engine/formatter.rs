//! Caller-facing formatter facade.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::engine::error::Error;
use crate::engine::registry::LocaleRegistry;
use crate::engine::render;
use crate::types::{
    Config, Count, DateFormatKey, DateInput, Locale, LocaleKey, NameWidth, RelativeTimeKey, Tense,
    TimeZone,
};

/// Locale-aware date/time formatting with mutable session state.
///
/// The formatter holds the current locale record and time zone; all
/// formatting delegates to the pure engine functions. The time zone is
/// identification metadata only: formatted values are never converted or
/// offset by it, and [`DateTimeFormatter::now`] returns the wall clock
/// regardless of the configured zone.
///
/// Locale changes go through `&mut self`, so a shared instance cannot race.
/// Clone the formatter (cheap, the locale record is `'static` pointers) for
/// per-thread use.
///
/// # Example
///
/// ```
/// use datefmt::{Config, DateFormatKey, DateTimeFormatter, LocaleKey};
///
/// let mut formatter = DateTimeFormatter::new(Config::default()).unwrap();
/// assert_eq!(
///     formatter.format_date("2021-01-01", DateFormatKey::Full),
///     "Friday, January 01, 2021",
/// );
///
/// formatter.set_locale(LocaleKey::Es).unwrap();
/// assert_eq!(
///     formatter.format_date("2021-01-01", DateFormatKey::Long),
///     "01 de Enero de 2021",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct DateTimeFormatter {
    registry: Arc<LocaleRegistry>,
    locale: Locale,
    time_zone: TimeZone,
}

impl DateTimeFormatter {
    /// Create a formatter over the built-in registry.
    ///
    /// Fails when the configured locale key is not registered.
    pub fn new(config: Config) -> Result<Self, Error> {
        Self::with_registry(config, LocaleRegistry::shared())
    }

    /// Create a formatter over an explicit registry (subsets, mock locales).
    pub fn with_registry(config: Config, registry: Arc<LocaleRegistry>) -> Result<Self, Error> {
        let locale = registry.resolve(config.locale_key)?.clone();
        Ok(DateTimeFormatter {
            registry,
            locale,
            time_zone: config.time_zone,
        })
    }

    // =========================================================================
    // Session state
    // =========================================================================

    /// The current locale key.
    pub fn locale_key(&self) -> LocaleKey {
        self.locale.key
    }

    /// The configured time zone. Informational only, never applied to
    /// formatted values.
    pub fn time_zone(&self) -> TimeZone {
        self.time_zone
    }

    /// The current instant from the wall clock. The configured time zone
    /// does not shift this value.
    pub fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    /// Switch the current locale. Fails without changing state when the key
    /// is not present in this formatter's registry.
    pub fn set_locale(&mut self, key: LocaleKey) -> Result<(), Error> {
        self.locale = self.registry.resolve(key)?.clone();
        Ok(())
    }

    /// The full record for the current locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// The template string for a named date format.
    pub fn date_format(&self, key: DateFormatKey) -> &'static str {
        self.locale.date_format(key)
    }

    /// A weekday name, index 0 = Sunday.
    pub fn weekday(&self, index: usize, width: NameWidth) -> Result<&'static str, Error> {
        render::weekday(index, width, &self.locale)
    }

    /// A month name, index 0 = January.
    pub fn month(&self, index: usize, width: NameWidth) -> Result<&'static str, Error> {
        render::month(index, width, &self.locale)
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// A relative-time phrase with count 1, past tense.
    pub fn relative_time(&self, key: RelativeTimeKey) -> String {
        self.relative_time_with(key, 1, Tense::Past)
    }

    /// A relative-time phrase for an explicit count and tense.
    ///
    /// # Example
    ///
    /// ```
    /// use datefmt::{Config, DateTimeFormatter, RelativeTimeKey, Tense};
    ///
    /// let formatter = DateTimeFormatter::new(Config::default()).unwrap();
    /// let phrase = formatter.relative_time_with(RelativeTimeKey::Minutes, 2, Tense::Past);
    /// assert_eq!(phrase, "2 minutes ago");
    /// ```
    pub fn relative_time_with(
        &self,
        key: RelativeTimeKey,
        count: impl Into<Count>,
        tense: Tense,
    ) -> String {
        render::render_relative(key, count, tense, &self.locale)
    }

    /// Format a date with one of the locale's named formats.
    ///
    /// Text input that does not resolve to an instant renders as the
    /// literal string `"Invalid Date"`.
    pub fn format_date(&self, date: impl Into<DateInput>, key: DateFormatKey) -> String {
        render::render_named(date, key, &self.locale)
    }
}
