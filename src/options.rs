//! Time zones and construction-time configuration.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

use crate::error::ConfigError;
use crate::locale::Locale;
use crate::number_date::NumberDateFormat;
use crate::style::DateStyle;

/// The time zone calendar points are rendered in and parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The host's local time zone
    #[default]
    Local,
    /// Coordinated Universal Time
    Utc,
    /// A fixed offset from UTC
    Fixed(FixedOffset),
    /// An IANA time zone (requires the `tz` feature)
    #[cfg(feature = "tz")]
    Named(chrono_tz::Tz),
}

impl Zone {
    /// The offset in effect at the given UTC instant.
    pub fn offset_at(&self, utc: &NaiveDateTime) -> FixedOffset {
        match self {
            Zone::Local => chrono::Local.offset_from_utc_datetime(utc),
            Zone::Utc => Utc.fix(),
            Zone::Fixed(offset) => *offset,
            #[cfg(feature = "tz")]
            Zone::Named(tz) => tz.offset_from_utc_datetime(utc).fix(),
        }
    }

    /// The offset that maps the given wall-clock time back to UTC.
    ///
    /// When a wall-clock time occurs twice (clocks turned back), the earlier
    /// instant wins. Returns `None` when the time was skipped (clocks turned
    /// forward).
    pub fn offset_for_local(&self, local: &NaiveDateTime) -> Option<FixedOffset> {
        match self {
            Zone::Local => chrono::Local.offset_from_local_datetime(local).earliest(),
            Zone::Utc => Some(Utc.fix()),
            Zone::Fixed(offset) => Some(*offset),
            #[cfg(feature = "tz")]
            Zone::Named(tz) => tz
                .offset_from_local_datetime(local)
                .earliest()
                .map(|offset| offset.fix()),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => f.write_str("local"),
            Zone::Utc => f.write_str("UTC"),
            Zone::Fixed(offset) => write!(f, "{}", offset),
            #[cfg(feature = "tz")]
            Zone::Named(tz) => f.write_str(tz.name()),
        }
    }
}

impl FromStr for Zone {
    type Err = ConfigError;

    /// Accepts `local`, `UTC`/`Z`/`GMT`, numeric offsets (`+05:30`, `-0800`,
    /// `+09`), and with the `tz` feature IANA names (`Europe/Berlin`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "local" => return Ok(Zone::Local),
            "utc" | "z" | "gmt" => return Ok(Zone::Utc),
            _ => {}
        }
        parse_utc_offset(trimmed)
            .map(Zone::Fixed)
            .or_else(|| parse_named_zone(trimmed))
            .ok_or_else(|| ConfigError::InvalidZone(s.to_string()))
    }
}

#[cfg(feature = "tz")]
fn parse_named_zone(s: &str) -> Option<Zone> {
    s.parse::<chrono_tz::Tz>().ok().map(Zone::Named)
}

#[cfg(not(feature = "tz"))]
fn parse_named_zone(_: &str) -> Option<Zone> {
    None
}

/// Parse `+hh`, `+hhmm`, or `+hh:mm` (or `-`) into an offset.
fn parse_utc_offset(s: &str) -> Option<FixedOffset> {
    let (negative, rest) = match *s.as_bytes().first()? {
        b'+' => (false, &s[1..]),
        b'-' => (true, &s[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        1 | 2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if minutes > 59 {
        return None;
    }
    let seconds = hours * 3600 + minutes * 60;
    if negative {
        FixedOffset::west_opt(seconds)
    } else {
        FixedOffset::east_opt(seconds)
    }
}

/// Configuration for building a [`NumberDateFormat`].
///
/// Exactly one of `pattern` or the `date_style`/`time_style` pair must be set.
#[derive(Debug, Clone, Default)]
pub struct DateFormatConfig {
    /// Explicit pattern, used verbatim.
    pub pattern: Option<String>,
    /// Style of the date portion when no pattern is given.
    pub date_style: Option<DateStyle>,
    /// Style of the time portion when no pattern is given.
    pub time_style: Option<DateStyle>,
    /// Locale tag; `None` selects the default locale (en-US).
    pub locale: Option<String>,
    /// The time zone to render and parse in.
    pub zone: Zone,
}

impl DateFormatConfig {
    /// Build the format, checking that exactly one formatting mode is configured.
    pub fn build(&self) -> Result<NumberDateFormat, ConfigError> {
        let locale = match &self.locale {
            Some(tag) => tag.parse::<Locale>()?,
            None => Locale::default(),
        };
        let convention = Arc::new(locale);

        let format = match (&self.pattern, self.date_style, self.time_style) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(ConfigError::ConflictingFormats)
            }
            (Some(pattern), None, None) => NumberDateFormat::with_pattern(pattern, convention)?,
            (None, Some(date), Some(time)) => NumberDateFormat::with_styles(date, time, convention)?,
            (None, None, None) => return Err(ConfigError::MissingFormat),
            (None, _, _) => return Err(ConfigError::IncompleteStyles),
        };
        Ok(format.with_time_zone(self.zone))
    }
}
