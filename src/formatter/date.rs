//! Date and time field formatting

use std::fmt::Write;

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::ast::DateField;
use crate::locale::Symbols;

/// Append a single date/time field to `out`.
pub fn format_field(
    out: &mut String,
    field: DateField,
    datetime: &DateTime<FixedOffset>,
    symbols: &Symbols,
) {
    // Writing to a String cannot fail
    let _ = match field {
        // Day formatting
        DateField::Day { pad } => write_number(out, datetime.day(), pad),
        DateField::WeekdayAbbr => {
            out.push_str(symbols.day_names_short[weekday_index(datetime)]);
            Ok(())
        }
        DateField::WeekdayFull => {
            out.push_str(symbols.day_names_full[weekday_index(datetime)]);
            Ok(())
        }

        // Month formatting
        DateField::Month { pad } => write_number(out, datetime.month(), pad),
        DateField::MonthAbbr => {
            out.push_str(symbols.month_names_short[datetime.month0() as usize]);
            Ok(())
        }
        DateField::MonthFull => {
            out.push_str(symbols.month_names_full[datetime.month0() as usize]);
            Ok(())
        }

        // Year formatting
        DateField::Year(1) => write!(out, "{}", datetime.year() % 100),
        DateField::Year(2) => write!(out, "{:02}", datetime.year() % 100),
        DateField::Year(width) => write!(out, "{:0width$}", datetime.year(), width = width as usize),

        // Hour formatting
        DateField::Hour12 { pad } => write_number(out, to_12_hour(datetime.hour()), pad),
        DateField::Hour24 { pad } => write_number(out, datetime.hour(), pad),

        // Minute and second formatting
        DateField::Minute { pad } => write_number(out, datetime.minute(), pad),
        DateField::Second { pad } => write_number(out, datetime.second(), pad),

        // Sub-second formatting
        DateField::Fraction { digits, trim } => {
            format_fraction(out, datetime.nanosecond() % 1_000_000_000, digits, trim);
            Ok(())
        }

        DateField::AmPm { full } => {
            let designator = if datetime.hour() >= 12 {
                symbols.pm_string
            } else {
                symbols.am_string
            };
            if full {
                out.push_str(designator);
            } else if let Some(first) = designator.chars().next() {
                out.push(first);
            }
            Ok(())
        }

        DateField::Era => {
            out.push_str(symbols.era);
            Ok(())
        }

        DateField::Offset(width) => {
            format_offset(out, datetime.offset().local_minus_utc(), width);
            Ok(())
        }
    };
}

fn write_number(out: &mut String, value: u32, pad: bool) -> std::fmt::Result {
    if pad {
        write!(out, "{:02}", value)
    } else {
        write!(out, "{}", value)
    }
}

fn weekday_index(datetime: &DateTime<FixedOffset>) -> usize {
    datetime.weekday().num_days_from_sunday() as usize
}

/// Convert 24-hour time to 12-hour format.
/// 0 -> 12, 1-12 -> 1-12, 13-23 -> 1-11
fn to_12_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}

/// Append the leading `digits` digits of the fractional second.
///
/// With `trim`, trailing zeros are dropped, and when nothing is left the
/// decimal point written just before the field is removed too.
fn format_fraction(out: &mut String, nanos: u32, digits: u8, trim: bool) {
    let digits = digits as usize;
    let scaled = nanos / 10u32.pow(9 - digits as u32);
    let text = format!("{:0width$}", scaled, width = digits);

    if !trim {
        out.push_str(&text);
        return;
    }

    let trimmed = text.trim_end_matches('0');
    if trimmed.is_empty() {
        if out.ends_with('.') {
            out.pop();
        }
    } else {
        out.push_str(trimmed);
    }
}

/// Append the UTC offset: `+5` (width 1), `+05` (width 2), or `+05:30`.
fn format_offset(out: &mut String, seconds: i32, width: u8) {
    let sign = if seconds < 0 { '-' } else { '+' };
    let total_minutes = seconds.unsigned_abs() / 60;
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);

    out.push(sign);
    let _ = match width {
        1 => write!(out, "{}", hours),
        2 => write!(out, "{:02}", hours),
        _ => write!(out, "{:02}:{:02}", hours, minutes),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_12_hour() {
        assert_eq!(to_12_hour(0), 12);
        assert_eq!(to_12_hour(1), 1);
        assert_eq!(to_12_hour(11), 11);
        assert_eq!(to_12_hour(12), 12);
        assert_eq!(to_12_hour(13), 1);
        assert_eq!(to_12_hour(23), 11);
    }

    #[test]
    fn test_fraction() {
        let mut out = String::new();
        format_fraction(&mut out, 120_000_000, 3, false);
        assert_eq!(out, "120");

        let mut out = String::from("05.");
        format_fraction(&mut out, 120_000_000, 3, true);
        assert_eq!(out, "05.12");

        let mut out = String::from("05.");
        format_fraction(&mut out, 0, 3, true);
        assert_eq!(out, "05");
    }

    #[test]
    fn test_offset() {
        let mut out = String::new();
        format_offset(&mut out, 19_800, 3);
        assert_eq!(out, "+05:30");

        let mut out = String::new();
        format_offset(&mut out, -3_600, 1);
        assert_eq!(out, "-1");

        let mut out = String::new();
        format_offset(&mut out, 0, 2);
        assert_eq!(out, "+00");
    }
}
