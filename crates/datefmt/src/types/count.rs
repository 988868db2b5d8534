//! Relative-time magnitude.

/// A relative-time count, substituted verbatim into phrase templates.
///
/// Counts are not validated or rounded: negative and fractional values
/// render exactly as given (`-3` → `"-3"`, `2.5` → `"2.5"`), and a float
/// with no fractional part renders without one (`2.0` → `"2"`).
///
/// # Example
///
/// ```
/// use datefmt::Count;
///
/// assert_eq!(Count::from(2).to_string(), "2");
/// assert_eq!(Count::from(2.5).to_string(), "2.5");
/// assert_eq!(Count::from(-3).to_string(), "-3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Count {
    /// An integer count.
    Integer(i64),
    /// A fractional count.
    Float(f64),
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Count::Integer(n) => write!(f, "{n}"),
            Count::Float(n) => write!(f, "{n}"),
        }
    }
}

// From implementations for common numeric types

impl From<i32> for Count {
    fn from(n: i32) -> Self {
        Count::Integer(n as i64)
    }
}

impl From<i64> for Count {
    fn from(n: i64) -> Self {
        Count::Integer(n)
    }
}

impl From<u32> for Count {
    fn from(n: u32) -> Self {
        Count::Integer(n as i64)
    }
}

impl From<u64> for Count {
    fn from(n: u64) -> Self {
        Count::Integer(n as i64)
    }
}

impl From<usize> for Count {
    fn from(n: usize) -> Self {
        Count::Integer(n as i64)
    }
}

impl From<f32> for Count {
    fn from(n: f32) -> Self {
        Count::Float(n as f64)
    }
}

impl From<f64> for Count {
    fn from(n: f64) -> Self {
        Count::Float(n)
    }
}
