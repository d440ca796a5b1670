//! The bridge between epoch milliseconds and date text.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, TimeZone};
use tracing::debug;

use crate::ast::DatePattern;
use crate::cache;
use crate::epoch;
use crate::error::{ConfigError, FormatError};
use crate::locale::Convention;
use crate::number_format::NumberFormat;
use crate::options::Zone;
use crate::style::DateStyle;
use crate::synthesis;
use crate::value::Number;

/// How the rendering pattern of a [`NumberDateFormat`] was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// A caller-supplied pattern, used verbatim
    Explicit,
    /// A pattern synthesized from a style pair and the convention
    Styles { date: DateStyle, time: DateStyle },
}

/// A [`NumberFormat`] whose numbers are milliseconds since the epoch and whose
/// text is a date.
///
/// Values are rendered with an explicit pattern or with one synthesized from
/// a date style and a time style. Text is parsed with the convention's own
/// recognizer, so parsing accepts more forms than formatting produces.
///
/// A format is a snapshot of its configuration. Changing the time zone
/// produces a new snapshot ([`with_time_zone`](Self::with_time_zone)) or needs
/// exclusive access ([`set_time_zone`](Self::set_time_zone)); the convention
/// is shared between snapshots.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use numdate::{DateStyle, Locale, NumberDateFormat, NumberFormat, Zone};
///
/// let format = NumberDateFormat::with_styles(DateStyle::Medium, DateStyle::Short, Arc::new(Locale::en_us()))
///     .unwrap()
///     .with_time_zone(Zone::Utc);
///
/// assert_eq!(format.format_i64(0).unwrap(), "Jan 1, 1970 12:00 AM");
/// assert_eq!(format.parse_millis("Jan 2, 1970 12:00 AM").unwrap(), 86_400_000);
/// ```
#[derive(Debug, Clone)]
pub struct NumberDateFormat {
    mode: FormatMode,
    pattern: DatePattern,
    convention: Arc<dyn Convention>,
    zone: Zone,
}

impl NumberDateFormat {
    /// Create a format that renders with an explicit pattern.
    pub fn with_pattern(pattern: &str, convention: Arc<dyn Convention>) -> Result<Self, ConfigError> {
        let pattern = cache::get_or_parse(pattern)?;
        debug!(pattern = pattern.source(), "built explicit-pattern date format");
        Ok(NumberDateFormat {
            mode: FormatMode::Explicit,
            pattern,
            convention,
            zone: Zone::default(),
        })
    }

    /// Create a format that renders with a pattern synthesized from a style pair.
    ///
    /// The convention is fixed for the life of the format, so the pattern is
    /// synthesized once, here.
    pub fn with_styles(
        date_style: DateStyle,
        time_style: DateStyle,
        convention: Arc<dyn Convention>,
    ) -> Result<Self, ConfigError> {
        let synthesized = synthesis::synthesize(date_style, time_style, convention.as_ref());
        let pattern = cache::get_or_parse(&synthesized)?;
        Ok(NumberDateFormat {
            mode: FormatMode::Styles {
                date: date_style,
                time: time_style,
            },
            pattern,
            convention,
            zone: Zone::default(),
        })
    }

    /// How the pattern was chosen.
    pub fn mode(&self) -> FormatMode {
        self.mode
    }

    /// The pattern text values are rendered with.
    pub fn pattern(&self) -> &str {
        self.pattern.source()
    }

    /// The parsed rendering pattern.
    pub fn date_pattern(&self) -> &DatePattern {
        &self.pattern
    }

    /// The regional convention.
    pub fn convention(&self) -> &Arc<dyn Convention> {
        &self.convention
    }

    /// The time zone values are rendered in.
    pub fn time_zone(&self) -> Zone {
        self.zone
    }

    /// Change the time zone in place.
    pub fn set_time_zone(&mut self, zone: Zone) {
        self.zone = zone;
    }

    /// A snapshot of this format bound to another time zone.
    pub fn with_time_zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    /// The calendar point `millis` after the epoch, in this format's zone.
    ///
    /// # Errors
    /// [`FormatError::DateOutOfRange`] if the instant, or its wall-clock time
    /// in the zone, falls outside years 1 through 9999.
    pub fn to_calendar(&self, millis: i64) -> Result<DateTime<FixedOffset>, FormatError> {
        let utc = epoch::millis_to_datetime(millis)?;
        let offset = self.zone.offset_at(&utc);
        let datetime = offset.from_utc_datetime(&utc);
        epoch::check_year_range(&datetime.naive_local(), millis)?;
        Ok(datetime)
    }

    /// Render `millis` after the epoch as text.
    pub fn format_millis(&self, millis: i64) -> Result<String, FormatError> {
        let datetime = self.to_calendar(millis)?;
        Ok(self.pattern.render(&datetime, self.convention.symbols()))
    }

    /// Parse date text to milliseconds since the epoch.
    ///
    /// An offset written in the text wins over the format's time zone.
    pub fn parse_millis(&self, text: &str) -> Result<i64, FormatError> {
        let Some(parsed) = self.convention.parse_datetime(text) else {
            debug!(text, "date text not recognized");
            return Err(FormatError::InvalidDate {
                text: text.to_string(),
            });
        };

        let offset = match parsed.offset {
            Some(offset) => offset,
            None => self.zone.offset_for_local(&parsed.local).ok_or_else(|| {
                FormatError::SkippedLocalTime {
                    text: text.to_string(),
                }
            })?,
        };

        let millis = offset
            .from_local_datetime(&parsed.local)
            .single()
            .map(|datetime| epoch::datetime_to_millis(&datetime.naive_utc()))
            .ok_or_else(|| FormatError::InvalidDate {
                text: text.to_string(),
            })?;

        if !(epoch::MIN_MILLIS..=epoch::MAX_MILLIS).contains(&millis) {
            return Err(FormatError::DateOutOfRange {
                millis: millis as f64,
            });
        }
        Ok(millis)
    }
}

impl NumberFormat for NumberDateFormat {
    fn format(&self, value: Number) -> Result<String, FormatError> {
        self.format_millis(value.to_millis()?)
    }

    /// Parse date text; the result is a [`Number::Float`] of milliseconds.
    fn parse(&self, text: &str) -> Result<Number, FormatError> {
        self.parse_millis(text).map(|millis| Number::Float(millis as f64))
    }
}
