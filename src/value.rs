//! Numeric values accepted and produced by number formats.

use crate::error::FormatError;

/// A number handled by a [`NumberFormat`](crate::NumberFormat).
///
/// This is the closed set of numeric widths a format accepts. Conversion to
/// the internal millisecond representation happens once, at the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit integer
    Int(i64),
    /// A 64-bit float
    Float(f64),
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Int(n as i64)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::Int(n as i64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Float(n)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::Float(n as f64)
    }
}

impl Number {
    /// Returns the value as a float (may lose precision above 2^53).
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(n) => *n as f64,
            Number::Float(n) => *n,
        }
    }

    /// Returns the value as a whole number of milliseconds.
    ///
    /// Floats are truncated toward zero. NaN, infinities, and floats outside
    /// the `i64` range are reported as [`FormatError::DateOutOfRange`].
    pub fn to_millis(self) -> Result<i64, FormatError> {
        match self {
            Number::Int(n) => Ok(n),
            Number::Float(n) => {
                // i64::MAX as f64 rounds up to 2^63, which is already out of range
                if !n.is_finite() || n >= i64::MAX as f64 || n < i64::MIN as f64 {
                    return Err(FormatError::DateOutOfRange { millis: n });
                }
                Ok(n.trunc() as i64)
            }
        }
    }

    /// Returns a type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Number::Int(_) => "integer",
            Number::Float(_) => "float",
        }
    }
}
