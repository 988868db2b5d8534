mod config;
mod count;
mod date_format_key;
mod date_input;
mod locale;
mod locale_key;
mod name_width;
mod relative_time_key;
mod tense;
mod time_zone;

pub use config::Config;
pub use count::Count;
pub use date_format_key::DateFormatKey;
pub use date_input::DateInput;
pub use locale::{DateFormats, Locale, Months, RelativeTime, RelativeTimePhrases, WeekDays};
pub use locale_key::LocaleKey;
pub use name_width::NameWidth;
pub use relative_time_key::RelativeTimeKey;
pub use tense::Tense;
pub use time_zone::TimeZone;
