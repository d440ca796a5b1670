//! Date pattern rendering engine

mod date;
pub(crate) mod number;

use chrono::{DateTime, FixedOffset};

use crate::ast::{DatePattern, PatternPart};
use crate::locale::Symbols;

impl DatePattern {
    /// Render a zoned calendar point using this pattern.
    ///
    /// Rendering itself cannot fail; range checks happen before a calendar
    /// point is built.
    pub fn render(&self, datetime: &DateTime<FixedOffset>, symbols: &Symbols) -> String {
        let mut result = String::with_capacity(self.source().len() * 2);

        for part in self.parts() {
            match part {
                PatternPart::Field(field) => {
                    date::format_field(&mut result, *field, datetime, symbols);
                }
                PatternPart::Literal(s) => result.push_str(s),
                PatternPart::DateSeparator => result.push_str(symbols.date_separator),
                PatternPart::TimeSeparator => result.push_str(symbols.time_separator),
            }
        }

        result
    }
}
