//! Format-template scanner using winnow.
//!
//! Scans a template left to right, matching format tokens by alternation
//! with longer tokens ordered before their prefixes. Text matching no token
//! becomes literal segments, merged after the pass. Scanning never fails.

use winnow::combinator::{alt, repeat};
use winnow::prelude::*;
use winnow::token::any;

use super::ast::{FormatToken, Segment, Template, Vocabulary};

/// Scan a format template into segments.
///
/// # Example
///
/// ```
/// use datefmt::parser::{FormatToken, Segment, Vocabulary, scan};
///
/// let t = scan("YYYY-MM", Vocabulary::Full);
/// assert_eq!(
///     t.segments,
///     vec![
///         Segment::Token(FormatToken::Year),
///         Segment::Literal("-".to_string()),
///         Segment::Token(FormatToken::Month),
///     ],
/// );
/// ```
pub fn scan(template: &str, vocabulary: Vocabulary) -> Template {
    let mut remaining = template;
    let scanned: ModalResult<Vec<Segment>> =
        repeat(0.., segment(vocabulary)).parse_next(&mut remaining);
    match scanned {
        Ok(segments) => Template {
            segments: merge_literals(segments),
        },
        // The literal fallback consumes any character, so the repetition
        // stops only at end of input. Pass the template through untouched
        // if that ever changes.
        Err(_) => Template {
            segments: vec![Segment::Literal(template.to_string())],
        },
    }
}

/// Merge adjacent literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse one segment: a token from the active vocabulary, else one literal char.
fn segment(vocabulary: Vocabulary) -> impl FnMut(&mut &str) -> ModalResult<Segment> {
    move |input| alt((token(vocabulary).map(Segment::Token), literal_char)).parse_next(input)
}

/// Parse one format token from the active vocabulary.
fn token(vocabulary: Vocabulary) -> impl FnMut(&mut &str) -> ModalResult<FormatToken> {
    move |input| match vocabulary {
        Vocabulary::Minimal => numeric_token(input),
        Vocabulary::Full => alt((name_token, numeric_token)).parse_next(input),
    }
}

/// Tokens shared by both vocabularies.
fn numeric_token(input: &mut &str) -> ModalResult<FormatToken> {
    alt((
        "YYYY".value(FormatToken::Year),
        "MM".value(FormatToken::Month),
        "DD".value(FormatToken::Day),
        "HH".value(FormatToken::Hour),
        "mm".value(FormatToken::Minute),
        "ss".value(FormatToken::Second),
    ))
    .parse_next(input)
}

/// Locale-dependent name tokens. Longest first, and tried before the numeric
/// tokens so `MMMM`/`MMM` win over `MM`.
fn name_token(input: &mut &str) -> ModalResult<FormatToken> {
    alt((
        "MMMM".value(FormatToken::MonthLong),
        "MMM".value(FormatToken::MonthShort),
        "EEEE".value(FormatToken::WeekdayLong),
        "EEE".value(FormatToken::WeekdayShort),
    ))
    .parse_next(input)
}

/// Any single character as literal text.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}
