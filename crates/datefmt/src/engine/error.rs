//! Lookup and validation errors.

use thiserror::Error;

/// Errors from locale, key, zone, and index lookups.
///
/// Formatting itself never fails: date input that does not resolve to an
/// instant renders as the sentinel string `"Invalid Date"`. Errors are
/// reserved for lookups, where a silent fallback would hide caller bugs.
#[derive(Debug, Error)]
pub enum Error {
    /// Locale key unknown, or known but absent from the registry in use.
    #[error("unknown locale '{key}', available: {}{}", available.join(", "), did_you_mean(suggestions))]
    UnknownLocale {
        key: String,
        available: Vec<String>,
        suggestions: Vec<String>,
    },

    /// Date-format key outside the six recognized names.
    #[error("unknown date format '{key}', available: {}{}", available.join(", "), did_you_mean(suggestions))]
    UnknownFormatKey {
        key: String,
        available: Vec<String>,
        suggestions: Vec<String>,
    },

    /// Relative-time key outside the thirteen recognized names.
    #[error("unknown relative time key '{key}', available: {}{}", available.join(", "), did_you_mean(suggestions))]
    UnknownRelativeTimeKey {
        key: String,
        available: Vec<String>,
        suggestions: Vec<String>,
    },

    /// Time zone name outside the allow-list.
    #[error("unknown time zone '{name}'{}", did_you_mean(suggestions))]
    UnknownTimeZone {
        name: String,
        suggestions: Vec<String>,
    },

    /// Weekday or month index outside its name table.
    #[error("{unit} index {index} out of range, expected 0..={max}")]
    IndexOutOfRange {
        unit: &'static str,
        index: usize,
        max: usize,
    },
}

impl Error {
    pub(crate) fn unknown_locale(key: &str, available: &[&str]) -> Self {
        Error::UnknownLocale {
            key: key.to_string(),
            available: available.iter().map(ToString::to_string).collect(),
            suggestions: compute_suggestions(key, available),
        }
    }

    pub(crate) fn unknown_format_key(key: &str, available: &[&str]) -> Self {
        Error::UnknownFormatKey {
            key: key.to_string(),
            available: available.iter().map(ToString::to_string).collect(),
            suggestions: compute_suggestions(key, available),
        }
    }

    pub(crate) fn unknown_relative_time_key(key: &str, available: &[&str]) -> Self {
        Error::UnknownRelativeTimeKey {
            key: key.to_string(),
            available: available.iter().map(ToString::to_string).collect(),
            suggestions: compute_suggestions(key, available),
        }
    }

    pub(crate) fn unknown_time_zone(name: &str, known: &[&str]) -> Self {
        Error::UnknownTimeZone {
            name: name.to_string(),
            suggestions: compute_suggestions(name, known),
        }
    }
}

/// Find close matches for an unrecognized key.
///
/// Uses Levenshtein distance with a threshold of 1 for inputs of three
/// characters or fewer, 2 otherwise. Closest first, at most three results.
///
/// # Example
///
/// ```
/// use datefmt::compute_suggestions;
///
/// let keys = ["short", "medium", "long", "full", "time", "dateTime"];
/// assert_eq!(compute_suggestions("shrot", &keys), vec!["short"]);
/// assert!(compute_suggestions("iso8601", &keys).is_empty());
/// ```
pub fn compute_suggestions(input: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if input.len() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &str)> = available
        .iter()
        .map(|candidate| (strsim::levenshtein(input, candidate), *candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by_key(|(distance, _)| *distance);
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

/// Optional "did you mean" suffix for error messages.
fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}
