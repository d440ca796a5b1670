//! Error types for pattern parsing, configuration, and conversion.

use thiserror::Error;

/// Errors that can occur when parsing a date pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("empty date pattern")]
    EmptyPattern,

    #[error("unterminated quoted literal starting at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("escape character at position {position} has nothing to escape")]
    TrailingEscape { position: usize },

    #[error("'%' at position {position} must be followed by a pattern letter")]
    DanglingPercent { position: usize },

    #[error("fractional seconds at position {position} allow at most 7 digits")]
    TooManyFractionDigits { position: usize },
}

/// Errors that can occur when converting between numbers and text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("text is not a recognizable date/time: '{text}'")]
    InvalidDate { text: String },

    #[error("date out of range: {millis} ms from the epoch")]
    DateOutOfRange { millis: f64 },

    #[error("local time '{text}' does not exist in the configured time zone")]
    SkippedLocalTime { text: String },

    #[error("text is not a recognizable number: '{text}'")]
    InvalidNumber { text: String },

    #[error(transparent)]
    InvalidPattern(#[from] PatternError),
}

/// Errors raised while building a [`NumberDateFormat`](crate::NumberDateFormat).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("both an explicit pattern and a date/time style pair were supplied")]
    ConflictingFormats,

    #[error("neither an explicit pattern nor a date/time style pair was supplied")]
    MissingFormat,

    #[error("a date style and a time style must be supplied together")]
    IncompleteStyles,

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] PatternError),

    #[error("unknown date style '{0}'")]
    UnknownStyle(String),

    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("invalid time zone '{0}'")]
    InvalidZone(String),
}

/// Errors raised by attribute slots.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error("cannot copy the values from attribute {expected} to an instance of {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
}
