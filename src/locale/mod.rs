//! Regional conventions: pattern fragments, name tables, and text recognition.

mod builtin;
mod recognize;

use std::fmt;

use chrono::{FixedOffset, NaiveDateTime};

pub use builtin::{Locale, Symbols};
pub use recognize::{date_order, recognize, DateOrder};

/// A calendar point recognized in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDateTime {
    /// Wall-clock date and time as written
    pub local: NaiveDateTime,
    /// Offset from UTC, when the text carried one (`Z`, `UTC`, `+05:30`, ...)
    pub offset: Option<FixedOffset>,
}

/// The regional convention a [`NumberDateFormat`](crate::NumberDateFormat) formats and parses under.
///
/// Implement this to substitute custom locales or test doubles; style synthesis
/// only ever goes through these methods.
pub trait Convention: fmt::Debug + Send + Sync {
    /// Numeric date pattern, e.g. `M/d/yyyy`.
    fn short_date_pattern(&self) -> &str;

    /// Long date pattern, usually with weekday and full month name.
    fn long_date_pattern(&self) -> &str;

    /// Time pattern without seconds.
    fn short_time_pattern(&self) -> &str;

    /// Time pattern with seconds.
    fn long_time_pattern(&self) -> &str;

    /// General-purpose recognizer for date/time text.
    ///
    /// This is pattern-free: it accepts any form the convention understands,
    /// not only the forms its patterns produce.
    fn parse_datetime(&self, text: &str) -> Option<ParsedDateTime>;

    /// Names and separators used when rendering.
    fn symbols(&self) -> &Symbols;
}
