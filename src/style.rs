//! Verbosity levels for the date and time portions of a rendered value.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// How verbose the date or time portion of a synthesized pattern is.
///
/// Styles are ordered from least to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DateStyle {
    /// Numeric date (`M/d/yyyy`), hours and minutes only
    Short,
    /// Abbreviated month name, no weekday; time with seconds
    Medium,
    /// Full month name, no weekday; time with seconds and UTC offset
    Long,
    /// Full long-date pattern including the weekday; time with seconds and UTC offset
    Full,
}

impl DateStyle {
    /// All styles, least verbose first.
    pub const ALL: [DateStyle; 4] = [
        DateStyle::Short,
        DateStyle::Medium,
        DateStyle::Long,
        DateStyle::Full,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateStyle::Short => "short",
            DateStyle::Medium => "medium",
            DateStyle::Long => "long",
            DateStyle::Full => "full",
        }
    }
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(DateStyle::Short),
            "medium" => Ok(DateStyle::Medium),
            "long" => Ok(DateStyle::Long),
            "full" => Ok(DateStyle::Full),
            _ => Err(ConfigError::UnknownStyle(s.to_string())),
        }
    }
}
