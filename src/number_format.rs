//! The number format capability and a plain locale-aware implementation.

use crate::error::FormatError;
use crate::formatter::number::{format_float, format_integer};
use crate::locale::Locale;
use crate::value::Number;

/// Formats numbers to text and parses them back under a regional convention.
///
/// `parse(format(v))` equals `v` numerically for any value the
/// implementation can represent without loss.
pub trait NumberFormat {
    /// Format a number.
    fn format(&self, value: Number) -> Result<String, FormatError>;

    /// Parse text back into a number.
    ///
    /// # Errors
    /// Returns a [`FormatError`] when the text is not in a recognized form.
    fn parse(&self, text: &str) -> Result<Number, FormatError>;

    /// Format a 64-bit float.
    fn format_f64(&self, value: f64) -> Result<String, FormatError> {
        self.format(Number::Float(value))
    }

    /// Format a 64-bit integer.
    fn format_i64(&self, value: i64) -> Result<String, FormatError> {
        self.format(Number::Int(value))
    }
}

/// Decimal numbers written with a locale's decimal and grouping separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleNumberFormat {
    decimal_separator: char,
    thousands_separator: char,
    grouping: bool,
}

impl LocaleNumberFormat {
    /// A format using `locale`'s separators, with digit grouping.
    pub fn new(locale: &Locale) -> Self {
        LocaleNumberFormat {
            decimal_separator: locale.decimal_separator,
            thousands_separator: locale.thousands_separator,
            grouping: true,
        }
    }

    /// Enable or disable digit grouping on output. Parsing accepts both.
    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    fn thousands(&self) -> Option<char> {
        self.grouping.then_some(self.thousands_separator)
    }

    /// Rewrite locale text into the form Rust's number parsers accept.
    fn normalize(&self, text: &str) -> Option<String> {
        let mut normalized = String::with_capacity(text.len());
        for (i, ch) in text.chars().enumerate() {
            match ch {
                c if c == self.thousands_separator => {}
                c if c == self.decimal_separator => normalized.push('.'),
                '0'..='9' => normalized.push(ch),
                '-' | '+' if i == 0 => normalized.push(ch),
                _ => return None,
            }
        }
        Some(normalized)
    }
}

impl Default for LocaleNumberFormat {
    fn default() -> Self {
        Self::new(&Locale::default())
    }
}

impl NumberFormat for LocaleNumberFormat {
    fn format(&self, value: Number) -> Result<String, FormatError> {
        Ok(match value {
            Number::Int(n) => format_integer(n, self.thousands()),
            Number::Float(n) => format_float(n, self.decimal_separator, self.thousands()),
        })
    }

    fn parse(&self, text: &str) -> Result<Number, FormatError> {
        let trimmed = text.trim();
        let invalid = || FormatError::InvalidNumber {
            text: text.to_string(),
        };

        match trimmed {
            "NaN" => return Ok(Number::Float(f64::NAN)),
            "Infinity" => return Ok(Number::Float(f64::INFINITY)),
            "-Infinity" => return Ok(Number::Float(f64::NEG_INFINITY)),
            _ => {}
        }

        let normalized = self.normalize(trimmed).ok_or_else(invalid)?;
        if !normalized.bytes().any(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        if normalized.contains('.') {
            normalized
                .parse::<f64>()
                .map(Number::Float)
                .map_err(|_| invalid())
        } else {
            // Integers beyond i64 still parse, as floats
            normalized
                .parse::<i64>()
                .map(Number::Int)
                .or_else(|_| normalized.parse::<f64>().map(Number::Float))
                .map_err(|_| invalid())
        }
    }
}
