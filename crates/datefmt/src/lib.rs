//! Locale-aware date and time formatting: token templates (`YYYY-MM-DD`),
//! named per-locale formats, weekday and month name lookup, and
//! relative-time phrases ("3 hours ago") for a closed set of built-in
//! locales.
//!
//! Time zones are carried as identification metadata only; no formatting
//! path converts or offsets date values by them.

pub mod engine;
mod locales;
pub mod parser;
pub mod types;

pub use engine::{
    DateTimeFormatter, Error, INVALID_DATE, LocaleRegistry, compute_suggestions, time_format,
};
pub use types::{
    Config, Count, DateFormatKey, DateInput, Locale, LocaleKey, NameWidth, RelativeTimeKey, Tense,
    TimeZone,
};
