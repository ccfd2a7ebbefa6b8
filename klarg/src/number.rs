//! Numeric values extracted from flag arguments.

use std::fmt;

/// A number following a flag.
///
/// Tokens containing a `.` are read as floats, all others as integers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A signed integer.
    Int(i64),
    /// A floating-point value.
    Float(f64),
}

impl Number {
    /// Parses `raw` following the float-if-dotted rule.
    ///
    /// Returns `None` for anything that is not a whole integer or float
    /// token, including malformed floats such as `1.2.3`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.contains('.') {
            raw.parse().ok().map(Self::Float)
        } else {
            raw.parse().ok().map(Self::Int)
        }
    }

    /// The integer value, if this is an integer.
    #[must_use]
    pub const fn as_i64(self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(value),
            Self::Float(_) => None,
        }
    }

    /// The value as a float. Large integers lose precision.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "integers are widened on request"
    )]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
