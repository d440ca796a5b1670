//! numdate - locale-aware bridge between epoch milliseconds and date text
//!
//! This crate lets a query parser treat dates as numbers: date text is parsed
//! into milliseconds since 1970-01-01T00:00:00 UTC for numeric range
//! comparison, and numbers are rendered back as dates for display, using an
//! explicit pattern or one synthesized from a date style and a time style.

pub mod ast;
pub mod attribute;
pub mod epoch;
pub mod error;
pub mod locale;
pub mod number_date;
pub mod number_format;
pub mod options;
pub mod parser;
pub mod style;
pub mod synthesis;
pub mod value;

mod cache;
mod formatter;

pub use ast::{DateField, DatePattern, PatternPart};
pub use attribute::{Attribute, UniqueFieldAttribute};
pub use error::{AttributeError, ConfigError, FormatError, PatternError};
pub use locale::{Convention, DateOrder, Locale, ParsedDateTime, Symbols};
pub use number_date::{FormatMode, NumberDateFormat};
pub use number_format::{LocaleNumberFormat, NumberFormat};
pub use options::{DateFormatConfig, Zone};
pub use style::DateStyle;
pub use value::Number;

/// Render a number of epoch milliseconds with a pattern, in UTC.
///
/// Patterns are cached, so repeated calls with the same pattern parse it once.
pub fn format(value: impl Into<Number>, pattern: &str, locale: &Locale) -> Result<String, FormatError> {
    let pattern = cache::get_or_parse(pattern)?;
    let millis = value.into().to_millis()?;
    let utc = epoch::millis_to_datetime(millis)?.and_utc().fixed_offset();
    Ok(pattern.render(&utc, &locale.symbols))
}

/// Render a number of epoch milliseconds with a pattern, in UTC, under the
/// invariant locale.
pub fn format_default(value: impl Into<Number>, pattern: &str) -> Result<String, FormatError> {
    format(value, pattern, &Locale::invariant())
}
