//! Conversion between epoch milliseconds and calendar points.
//!
//! Numbers handled by this crate count milliseconds since the Unix epoch,
//! 1970-01-01T00:00:00 UTC, in the proleptic Gregorian calendar. Negative
//! values are instants before the epoch.
//!
//! The supported calendar range is year 1 through year 9999, the range a
//! four-digit year pattern can express:
//! - Minimum: 0001-01-01T00:00:00.000 = -62 135 596 800 000 ms
//! - Maximum: 9999-12-31T23:59:59.999 = 253 402 300 799 999 ms

use chrono::{DateTime, Datelike, NaiveDateTime};

use crate::error::FormatError;

/// Smallest supported value (0001-01-01T00:00:00.000).
pub const MIN_MILLIS: i64 = -62_135_596_800_000;

/// Largest supported value (9999-12-31T23:59:59.999).
pub const MAX_MILLIS: i64 = 253_402_300_799_999;

/// Earliest supported year.
pub const MIN_YEAR: i32 = 1;

/// Latest supported year.
pub const MAX_YEAR: i32 = 9999;

/// Convert milliseconds since the epoch to a UTC calendar point.
///
/// # Errors
/// [`FormatError::DateOutOfRange`] if the value falls outside
/// [`MIN_MILLIS`]..=[`MAX_MILLIS`].
pub fn millis_to_datetime(millis: i64) -> Result<NaiveDateTime, FormatError> {
    if !(MIN_MILLIS..=MAX_MILLIS).contains(&millis) {
        return Err(FormatError::DateOutOfRange {
            millis: millis as f64,
        });
    }
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.naive_utc())
        .ok_or(FormatError::DateOutOfRange {
            millis: millis as f64,
        })
}

/// Convert a UTC calendar point to milliseconds since the epoch.
///
/// Sub-millisecond precision is truncated toward negative infinity, so the
/// result always names the millisecond the point falls in.
pub fn datetime_to_millis(datetime: &NaiveDateTime) -> i64 {
    datetime.and_utc().timestamp_millis()
}

/// Check that a calendar point lies within the supported year range.
pub fn check_year_range(datetime: &NaiveDateTime, millis: i64) -> Result<(), FormatError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&datetime.year()) {
        Ok(())
    } else {
        Err(FormatError::DateOutOfRange {
            millis: millis as f64,
        })
    }
}
