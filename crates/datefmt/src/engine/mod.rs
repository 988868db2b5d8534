//! The format engine: locale registry, token substitution, relative-time
//! resolution, and the caller-facing formatter.

mod error;
mod formatter;
mod registry;
mod render;

pub use error::{Error, compute_suggestions};
pub use formatter::DateTimeFormatter;
pub use registry::LocaleRegistry;
pub use render::{INVALID_DATE, month, render, render_named, render_relative, time_format, weekday};
