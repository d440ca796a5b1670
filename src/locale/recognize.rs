//! Pattern-free recognition of date/time text.
//!
//! The recognizer is lenient in the way a general date parser is: it does not
//! need the text to match any particular pattern. It accepts
//! - numeric dates ordered by the convention (`1/2/1970`, `02.01.1970`)
//! - ISO-style dates, since a leading 3+ digit number is always the year
//!   (`1970-01-02T03:04:05Z`)
//! - month names and abbreviations (`January 2, 1970`, `2. Januar 1970`)
//! - weekday names, which are ignored
//! - times `H:mm[:ss[.fff]]`, optionally joined to the date by `T`
//! - AM/PM designators, full (`PM`) or first letter only (`P`); with a
//!   designator the hour must be 0 through 12
//! - the convention's era text (`A.D.`), which is ignored
//! - a trailing `Z`, `UTC`, `GMT`, or numeric offset (`+05:30`, `-0800`)
//!   after the time, or directly after a complete date (`1970-01-02-05:00`)
//!
//! A date is always required.

use std::borrow::Cow;

use chrono::{FixedOffset, NaiveDate, NaiveTime};

use crate::epoch;
use crate::locale::{ParsedDateTime, Symbols};
use crate::parser::lexer::Lexer;

/// Longest run of digits accepted as one number.
const MAX_DIGITS: usize = 9;

/// Order of day, month, and year in a numeric date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    Mdy,
    Dmy,
    Ymd,
}

/// Derive the numeric date order from a short date pattern.
///
/// Falls back to month-day-year when the pattern does not name all three.
pub fn date_order(short_date_pattern: &str) -> DateOrder {
    let Ok(tokens) = Lexer::new(short_date_pattern).tokenize() else {
        return DateOrder::Mdy;
    };
    let position = |letter: char| tokens.iter().position(|t| t.token.is_field(letter));
    match (position('y'), position('M'), position('d')) {
        (Some(y), Some(m), Some(d)) if y < m && m < d => DateOrder::Ymd,
        (Some(_), Some(m), Some(d)) if d < m => DateOrder::Dmy,
        _ => DateOrder::Mdy,
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Number { value: u32, digits: usize },
    Word(String),
    Sep(char),
}

/// Split text into numbers, lowercased words, and separators.
/// Whitespace only delimits. Any other character rejects the text.
fn scan(text: &str) -> Option<Vec<Piece>> {
    let mut pieces = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
        } else if ch.is_ascii_digit() {
            let mut value: u32 = 0;
            let mut digits = 0;
            while let Some(&d) = chars.peek() {
                let Some(digit) = d.to_digit(10) else { break };
                digits += 1;
                if digits > MAX_DIGITS {
                    return None;
                }
                value = value * 10 + digit;
                chars.next();
            }
            pieces.push(Piece::Number { value, digits });
        } else if ch.is_alphabetic() {
            let mut word = String::new();
            while let Some(&c) = chars.peek() {
                if !c.is_alphabetic() {
                    break;
                }
                word.extend(c.to_lowercase());
                chars.next();
            }
            pieces.push(Piece::Word(word));
        } else if matches!(ch, '/' | '-' | '.' | ',' | ':' | '+') {
            pieces.push(Piece::Sep(ch));
            chars.next();
        } else {
            return None;
        }
    }
    Some(pieces)
}

/// Case-insensitive lookup of `word` in a name table, ignoring a trailing period
/// on abbreviations. Returns the zero-based index.
fn lookup(word: &str, names: &[&str]) -> Option<usize> {
    names.iter().position(|name| {
        let name = name.trim_end_matches('.');
        !name.is_empty() && name.to_lowercase() == word
    })
}

/// Match a full or first-letter AM/PM designator.
fn is_designator(word: &str, designator: &str, fallback: &str) -> bool {
    let designator = designator.to_lowercase();
    let initial = |s: &str| s.chars().next().map(String::from);
    word == fallback
        || initial(fallback).as_deref() == Some(word)
        || (!designator.is_empty()
            && (designator == word || initial(&designator).as_deref() == Some(word)))
}

/// Blank out the first whole-word occurrence of `era` in lowercased `text`.
fn strip_era<'a>(text: &'a str, era: &str) -> Cow<'a, str> {
    let era = era.trim().to_lowercase();
    if era.is_empty() {
        return Cow::Borrowed(text);
    }
    let bounded = |ch: Option<char>| !ch.is_some_and(char::is_alphanumeric);
    for (start, _) in text.match_indices(&era) {
        let end = start + era.len();
        if bounded(text[..start].chars().next_back()) && bounded(text[end..].chars().next()) {
            return Cow::Owned(format!("{} {}", &text[..start], &text[end..]));
        }
    }
    Cow::Borrowed(text)
}

/// Resolve a two-digit year to the latest year not after `two_digit_year_max`.
fn expand_year(value: u32, digits: usize, two_digit_year_max: i32) -> i32 {
    let year = value as i32;
    if digits > 2 {
        return year;
    }
    let candidate = two_digit_year_max - two_digit_year_max.rem_euclid(100) + year;
    if candidate > two_digit_year_max {
        candidate - 100
    } else {
        candidate
    }
}

/// Scale a fractional-second run to milliseconds, truncating extra digits.
fn fraction_to_millis(value: u32, digits: usize) -> u32 {
    if digits >= 3 {
        value / 10u32.pow((digits - 3) as u32)
    } else {
        value * 10u32.pow((3 - digits) as u32)
    }
}

#[derive(Debug, Default)]
struct Fields {
    numbers: Vec<(u32, usize)>,
    month_name: Option<u32>,
    time: Option<(u32, u32, u32, u32)>,
    pm: Option<bool>,
    offset: Option<FixedOffset>,
}

/// Recognize a date/time in `text` under the given names and date order.
pub fn recognize(
    text: &str,
    symbols: &Symbols,
    order: DateOrder,
    two_digit_year_max: i32,
) -> Option<ParsedDateTime> {
    let lowered = text.to_lowercase();
    let pieces = scan(&strip_era(&lowered, symbols.era))?;
    let fields = collect(&pieces, symbols)?;

    let (year, month, day) = resolve_date(&fields, order, two_digit_year_max)?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    let (hour, minute, second, millis) = fields.time.unwrap_or((0, 0, 0, 0));
    let hour = match fields.pm {
        None => hour,
        Some(_) if fields.time.is_none() || hour > 12 => return None,
        Some(true) => hour % 12 + 12,
        Some(false) => hour % 12,
    };
    let time = NaiveTime::from_hms_milli_opt(hour, minute, second, millis)?;

    Some(ParsedDateTime {
        local: date.and_time(time),
        offset: fields.offset,
    })
}

/// Walk the pieces, sorting them into date numbers, time, and zone.
fn collect(pieces: &[Piece], symbols: &Symbols) -> Option<Fields> {
    let mut fields = Fields::default();
    // True right after a time, designator, or zone word; enables a signed offset
    let mut after_time = false;
    let mut i = 0;

    while i < pieces.len() {
        match &pieces[i] {
            Piece::Number { value, digits } => {
                if fields.time.is_none() && pieces.get(i + 1) == Some(&Piece::Sep(':')) {
                    i = read_time(pieces, i, &mut fields)?;
                    after_time = true;
                    continue;
                }
                fields.numbers.push((*value, *digits));
                if fields.numbers.len() > 3 {
                    return None;
                }
                after_time = false;
            }
            // `T` only joins a date to the time that follows it
            Piece::Word(word) if word == "t" => {
                let time_follows = matches!(pieces.get(i + 1), Some(Piece::Number { .. }))
                    && pieces.get(i + 2) == Some(&Piece::Sep(':'));
                if fields.time.is_some() || !time_follows {
                    return None;
                }
                after_time = false;
            }
            Piece::Word(word) => {
                after_time = read_word(word, symbols, &mut fields)?;
            }
            Piece::Sep(sign @ ('+' | '-'))
                if after_time || (fields.time.is_none() && fields.offset.is_none() && date_complete(&fields)) =>
            {
                i = read_offset(pieces, i, *sign == '-', &mut fields)?;
                after_time = false;
                continue;
            }
            Piece::Sep(_) => {}
        }
        i += 1;
    }
    Some(fields)
}

/// Returns true once day, month, and year have all been seen.
fn date_complete(fields: &Fields) -> bool {
    let needed = if fields.month_name.is_some() { 2 } else { 3 };
    fields.numbers.len() == needed
}

/// Read `H:mm[:ss[.fff]]` starting at `start`; returns the index after it.
fn read_time(pieces: &[Piece], start: usize, fields: &mut Fields) -> Option<usize> {
    let number = |at: usize| match pieces.get(at) {
        Some(Piece::Number { value, digits }) => Some((*value, *digits)),
        _ => None,
    };

    let (hour, _) = number(start)?;
    let (minute, _) = number(start + 2)?;
    let mut i = start + 3;
    let mut second = 0;
    let mut millis = 0;

    if pieces.get(i) == Some(&Piece::Sep(':')) {
        if let Some((s, _)) = number(i + 1) {
            second = s;
            i += 2;
            if pieces.get(i) == Some(&Piece::Sep('.')) {
                if let Some((fraction, digits)) = number(i + 1) {
                    millis = fraction_to_millis(fraction, digits);
                    i += 2;
                }
            }
        }
    }

    fields.time = Some((hour, minute, second, millis));
    Some(i)
}

/// Classify a word. Returns whether a signed offset may follow it.
fn read_word(word: &str, symbols: &Symbols, fields: &mut Fields) -> Option<bool> {
    let month = lookup(word, &symbols.month_names_full)
        .or_else(|| lookup(word, &symbols.month_names_short));
    if let Some(index) = month {
        if fields.month_name.is_some() {
            return None;
        }
        fields.month_name = Some(index as u32 + 1);
        return Some(false);
    }

    if lookup(word, &symbols.day_names_full).is_some()
        || lookup(word, &symbols.day_names_short).is_some()
    {
        return Some(false);
    }

    if is_designator(word, symbols.am_string, "am") {
        fields.pm = Some(false);
        return Some(true);
    }
    if is_designator(word, symbols.pm_string, "pm") {
        fields.pm = Some(true);
        return Some(true);
    }

    match word {
        "z" | "utc" | "gmt" => {
            fields.offset = Some(FixedOffset::east_opt(0)?);
            Some(true)
        }
        _ => None,
    }
}

/// Read `hh`, `hhmm`, or `hh:mm` after a sign at `start`; returns the index after it.
fn read_offset(pieces: &[Piece], start: usize, negative: bool, fields: &mut Fields) -> Option<usize> {
    let Some(Piece::Number { value, digits }) = pieces.get(start + 1) else {
        return None;
    };
    let mut i = start + 2;
    let (hours, minutes) = match *digits {
        4 => (value / 100, value % 100),
        1 | 2 => match (pieces.get(i), pieces.get(i + 1)) {
            (Some(Piece::Sep(':')), Some(Piece::Number { value: m, digits: 2 })) => {
                i += 2;
                (*value, *m)
            }
            _ => (*value, 0),
        },
        _ => return None,
    };
    if hours > 14 || minutes > 59 {
        return None;
    }
    let seconds = (hours * 3600 + minutes * 60) as i32;
    let offset = if negative {
        FixedOffset::west_opt(seconds)?
    } else {
        FixedOffset::east_opt(seconds)?
    };
    fields.offset = Some(offset);
    Some(i)
}

/// Assign the collected numbers to year, month, and day.
fn resolve_date(fields: &Fields, order: DateOrder, two_digit_year_max: i32) -> Option<(i32, u32, u32)> {
    let (year, month, day) = match (fields.month_name, fields.numbers.as_slice()) {
        (Some(month), [first, second]) => {
            if first.1 >= 3 {
                (*first, month, second.0)
            } else {
                (*second, month, first.0)
            }
        }
        (None, [a, b, c]) => {
            if a.1 >= 3 {
                (*a, b.0, c.0)
            } else {
                match order {
                    DateOrder::Mdy => (*c, a.0, b.0),
                    DateOrder::Dmy => (*c, b.0, a.0),
                    DateOrder::Ymd => (*a, b.0, c.0),
                }
            }
        }
        _ => return None,
    };

    let year = expand_year(year.0, year.1, two_digit_year_max);
    if !(epoch::MIN_YEAR..=epoch::MAX_YEAR).contains(&year) {
        return None;
    }
    Some((year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use chrono::NaiveDateTime;

    fn en_us(text: &str) -> Option<ParsedDateTime> {
        let locale = Locale::en_us();
        recognize(text, &locale.symbols, DateOrder::Mdy, 2029)
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_milli_opt(h, mi, s, ms)
            .unwrap()
    }

    #[test]
    fn test_date_order() {
        assert_eq!(date_order("M/d/yyyy"), DateOrder::Mdy);
        assert_eq!(date_order("dd.MM.yyyy"), DateOrder::Dmy);
        assert_eq!(date_order("yyyy-MM-dd"), DateOrder::Ymd);
        assert_eq!(date_order("'unterminated"), DateOrder::Mdy);
    }

    #[test]
    fn test_numeric_date() {
        let parsed = en_us("1/2/1970").unwrap();
        assert_eq!(parsed.local, at(1970, 1, 2, 0, 0, 0, 0));
        assert_eq!(parsed.offset, None);
    }

    #[test]
    fn test_long_date_with_weekday_and_time() {
        let parsed = en_us("Friday, January 2, 1970 3:04:05 PM").unwrap();
        assert_eq!(parsed.local, at(1970, 1, 2, 15, 4, 5, 0));
    }

    #[test]
    fn test_iso_with_offset() {
        let parsed = en_us("1970-01-02T03:04:05.678-05:30").unwrap();
        assert_eq!(parsed.local, at(1970, 1, 2, 3, 4, 5, 678));
        assert_eq!(parsed.offset, FixedOffset::west_opt(5 * 3600 + 30 * 60));
    }

    #[test]
    fn test_zulu() {
        let parsed = en_us("1970-01-01T00:00:00Z").unwrap();
        assert_eq!(parsed.offset, FixedOffset::east_opt(0));
    }

    #[test]
    fn test_twelve_am_is_midnight() {
        let parsed = en_us("Jan 1, 1970 12:30 AM").unwrap();
        assert_eq!(parsed.local, at(1970, 1, 1, 0, 30, 0, 0));
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(en_us("1/1/29").unwrap().local.date(), NaiveDate::from_ymd_opt(2029, 1, 1).unwrap());
        assert_eq!(en_us("1/1/30").unwrap().local.date(), NaiveDate::from_ymd_opt(1930, 1, 1).unwrap());
    }

    #[test]
    fn test_german_long_date() {
        let locale = Locale::de_de();
        let parsed = recognize("Freitag, 2. Januar 1970 13:00:00", &locale.symbols, DateOrder::Dmy, 2029).unwrap();
        assert_eq!(parsed.local, at(1970, 1, 2, 13, 0, 0, 0));
    }

    #[test]
    fn test_offset_after_date_only() {
        let parsed = en_us("1970-01-02-05:00").unwrap();
        assert_eq!(parsed.local, at(1970, 1, 2, 0, 0, 0, 0));
        assert_eq!(parsed.offset, FixedOffset::west_opt(5 * 3600));

        let parsed = en_us("Jan 2, 1970 +0130").unwrap();
        assert_eq!(parsed.offset, FixedOffset::east_opt(90 * 60));
    }

    #[test]
    fn test_single_letter_designators() {
        assert_eq!(en_us("1/9/2026 3:04 P").unwrap().local, at(2026, 1, 9, 15, 4, 0, 0));
        assert_eq!(en_us("1/9/2026 3:04 a").unwrap().local, at(2026, 1, 9, 3, 4, 0, 0));
    }

    #[test]
    fn test_hour_zero_with_designator() {
        assert_eq!(en_us("1/1/1970 0:30 AM").unwrap().local, at(1970, 1, 1, 0, 30, 0, 0));
        assert_eq!(en_us("1/1/1970 0:30 PM").unwrap().local, at(1970, 1, 1, 12, 30, 0, 0));
    }

    #[test]
    fn test_era_is_ignored() {
        assert_eq!(en_us("1/1/1970 A.D.").unwrap().local, at(1970, 1, 1, 0, 0, 0, 0));
        let de = Locale::de_de();
        let parsed = recognize("01.01.1970 n. Chr.", &de.symbols, DateOrder::Dmy, 2029).unwrap();
        assert_eq!(parsed.local, at(1970, 1, 1, 0, 0, 0, 0));
    }

    #[test]
    fn test_strip_era_needs_word_boundaries() {
        assert_eq!(strip_era("1 a.d.", "A.D."), "1  ");
        assert_eq!(strip_era("bad", "AD"), "bad");
        assert_eq!(strip_era("1 ad", ""), "1 ad");
    }

    #[test]
    fn test_lone_t_is_rejected() {
        assert!(en_us("1/1/1970 T").is_none());
        assert!(en_us("1970-01-01T").is_none());
        assert!(en_us("1970-01-01 12:00 T 13:00").is_none());
    }

    #[test]
    fn test_rejects() {
        assert!(en_us("not a date").is_none());
        assert!(en_us("").is_none());
        assert!(en_us("12:00").is_none());
        assert!(en_us("2/30/1970").is_none());
        assert!(en_us("1/1/1970 13:00 PM").is_none());
        assert!(en_us("1/1/1970 25:00").is_none());
        assert!(en_us("1/1/1970/5").is_none());
        assert!(en_us("1/1/1970 #").is_none());
    }
}
