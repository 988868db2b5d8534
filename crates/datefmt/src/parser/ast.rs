//! Format-template AST.

/// A scanned format template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Segments in source order.
    pub segments: Vec<Segment>,
}

/// One piece of a format template: literal text or a recognized token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text passed through unchanged.
    Literal(String),
    /// A recognized format token.
    Token(FormatToken),
}

/// A reserved substring a template replaces with a computed value.
///
/// Matching precedence is fixed: longer tokens win over their prefixes
/// (`MMMM` over `MMM` over `MM`, `EEEE` over `EEE`), so greedy left-to-right
/// scanning never splits a long token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatToken {
    /// `YYYY`: calendar year, unpadded.
    Year,
    /// `MMMM`: long month name.
    MonthLong,
    /// `MMM`: short month name.
    MonthShort,
    /// `MM`: two-digit month, 01-12.
    Month,
    /// `DD`: two-digit day of month.
    Day,
    /// `EEEE`: long weekday name.
    WeekdayLong,
    /// `EEE`: short weekday name.
    WeekdayShort,
    /// `HH`: two-digit hour, 00-23.
    Hour,
    /// `mm`: two-digit minute.
    Minute,
    /// `ss`: two-digit second.
    Second,
}

/// The token set a scan recognizes.
///
/// Minimal is the numeric subset used by locale-independent formatting.
/// Under it the name tokens are ordinary text, so `MMM` scans as `MM` plus a
/// literal `M` and `EEEE` stays literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    /// Numeric tokens only: `YYYY`, `MM`, `DD`, `HH`, `mm`, `ss`.
    Minimal,
    /// All tokens, including locale month and weekday names.
    Full,
}
