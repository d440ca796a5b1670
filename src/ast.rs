//! AST types for parsed date patterns.

use crate::error::PatternError;

/// A date/time field in a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    /// `d` / `dd` - Day of month, optionally zero-padded
    Day { pad: bool },
    /// `ddd` - Abbreviated weekday name
    WeekdayAbbr,
    /// `dddd` - Full weekday name
    WeekdayFull,
    /// `M` / `MM` - Month number, optionally zero-padded
    Month { pad: bool },
    /// `MMM` - Abbreviated month name
    MonthAbbr,
    /// `MMMM` - Full month name
    MonthFull,
    /// `y` - year of century; `yy` - padded year of century; `yyy`+ - full
    /// year zero-padded to the run length
    Year(u8),
    /// `h` / `hh` - Hour on a 12-hour clock
    Hour12 { pad: bool },
    /// `H` / `HH` - Hour on a 24-hour clock
    Hour24 { pad: bool },
    /// `m` / `mm` - Minute
    Minute { pad: bool },
    /// `s` / `ss` - Second
    Second { pad: bool },
    /// `f`..`fffffff` (trim = false) or `F`..`FFFFFFF` (trim = true) - fractional seconds
    Fraction { digits: u8, trim: bool },
    /// `t` (first letter) / `tt` (full) - AM/PM designator
    AmPm { full: bool },
    /// `g` - Era
    Era,
    /// `z` (+5), `zz` (+05), `zzz` / `K` (+05:30) - Offset from UTC
    Offset(u8),
}

impl DateField {
    /// Returns true if this field renders part of the calendar date.
    pub fn is_date_field(&self) -> bool {
        matches!(
            self,
            DateField::Day { .. }
                | DateField::WeekdayAbbr
                | DateField::WeekdayFull
                | DateField::Month { .. }
                | DateField::MonthAbbr
                | DateField::MonthFull
                | DateField::Year(_)
                | DateField::Era
        )
    }

    /// Returns true if this field renders part of the time of day.
    pub fn is_time_field(&self) -> bool {
        matches!(
            self,
            DateField::Hour12 { .. }
                | DateField::Hour24 { .. }
                | DateField::Minute { .. }
                | DateField::Second { .. }
                | DateField::Fraction { .. }
                | DateField::AmPm { .. }
        )
    }
}

/// A single part of a date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternPart {
    /// A date/time field
    Field(DateField),
    /// Literal text to display as-is
    Literal(String),
    /// `/` - the convention's date separator
    DateSeparator,
    /// `:` - the convention's time separator
    TimeSeparator,
}

/// A parsed date pattern.
///
/// This is the main type returned by parsing. It can be reused to render
/// many values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    parts: Vec<PatternPart>,
}

impl DatePattern {
    /// Create a DatePattern from its source text and parsed parts.
    pub(crate) fn from_parts(source: &str, parts: Vec<PatternPart>) -> Self {
        DatePattern {
            source: source.to_string(),
            parts,
        }
    }

    /// Parse a pattern string into a DatePattern.
    pub fn parse(pattern: &str) -> Result<DatePattern, PatternError> {
        crate::parser::parse(pattern)
    }

    /// The pattern text this was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Get the parts of this pattern.
    pub fn parts(&self) -> &[PatternPart] {
        &self.parts
    }

    fn fields(&self) -> impl Iterator<Item = &DateField> {
        self.parts.iter().filter_map(|p| match p {
            PatternPart::Field(f) => Some(f),
            _ => None,
        })
    }

    /// Returns true if the pattern renders the year with all its digits.
    pub fn has_full_year(&self) -> bool {
        self.fields().any(|f| matches!(f, DateField::Year(n) if *n >= 3))
    }

    /// Returns true if this pattern contains any date fields.
    pub fn has_date_fields(&self) -> bool {
        self.fields().any(|f| f.is_date_field())
    }

    /// Returns true if this pattern contains any time fields.
    pub fn has_time_fields(&self) -> bool {
        self.fields().any(|f| f.is_time_field())
    }

    /// Returns true if this pattern renders the UTC offset.
    pub fn has_offset(&self) -> bool {
        self.fields().any(|f| matches!(f, DateField::Offset(_)))
    }
}
