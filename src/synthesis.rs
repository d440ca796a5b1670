//! Pattern synthesis from a date/time style pair.
//!
//! A convention supplies four raw fragments (short/long date, short/long
//! time). Each style picks a fragment and, for MEDIUM and LONG dates, edits it:
//!
//! | date style | source     | edit                                         |
//! |------------|------------|----------------------------------------------|
//! | SHORT      | short date | none                                         |
//! | MEDIUM     | long date  | drop weekday, abbreviate full month to `MMM` |
//! | LONG       | long date  | drop weekday                                 |
//! | FULL       | long date  | none                                         |
//!
//! Times use the short fragment for SHORT and the long one otherwise; LONG
//! and FULL append the UTC offset (`zzz`). Zone names would need a zone
//! database, so FULL renders the same as LONG.
//!
//! Edits work on lexed tokens, so quoted literals are never rewritten.

use tracing::debug;

use crate::locale::Convention;
use crate::parser::lexer::Lexer;
use crate::parser::tokens::{SpannedToken, Token};
use crate::style::DateStyle;

/// Offset suffix appended to LONG and FULL time patterns.
const OFFSET_SUFFIX: &str = " zzz";

/// Synthesize the combined `date time` pattern for a style pair.
pub fn synthesize(
    date_style: DateStyle,
    time_style: DateStyle,
    convention: &dyn Convention,
) -> String {
    let pattern = format!(
        "{} {}",
        date_pattern(date_style, convention),
        time_pattern(time_style, convention)
    );
    debug!(%date_style, %time_style, %pattern, "synthesized date pattern");
    pattern
}

/// The date portion for a style.
pub fn date_pattern(style: DateStyle, convention: &dyn Convention) -> String {
    match style {
        DateStyle::Short => convention.short_date_pattern().to_string(),
        DateStyle::Medium => abbreviate_month(&strip_weekday(convention.long_date_pattern())),
        DateStyle::Long => strip_weekday(convention.long_date_pattern()),
        DateStyle::Full => convention.long_date_pattern().to_string(),
    }
}

/// The time portion for a style.
pub fn time_pattern(style: DateStyle, convention: &dyn Convention) -> String {
    match style {
        DateStyle::Short => convention.short_time_pattern().to_string(),
        DateStyle::Medium => convention.long_time_pattern().to_string(),
        DateStyle::Long | DateStyle::Full => {
            format!("{}{}", convention.long_time_pattern(), OFFSET_SUFFIX)
        }
    }
}

/// Lex a pattern, dropping the trailing Eof.
///
/// A pattern that does not lex is left to fail when it is parsed for use.
fn lex(pattern: &str) -> Option<Vec<SpannedToken>> {
    let mut tokens = Lexer::new(pattern).tokenize().ok()?;
    tokens.pop();
    Some(tokens)
}

/// Returns true for literals that join a weekday to the rest of a date.
fn is_joiner(token: &Token) -> bool {
    matches!(token, Token::Literal(c) if c.is_whitespace() || matches!(*c, ',' | '-' | '.'))
}

/// The closing bracket for an opening one.
fn closing_bracket(token: &Token) -> Option<char> {
    match token {
        Token::Literal('(') => Some(')'),
        Token::Literal('[') => Some(']'),
        _ => None,
    }
}

/// Remove weekday fields (`ddd`, `dddd`) together with the separators that
/// joined them to the rest of the pattern.
///
/// The separators after the weekday go with it; when the weekday ends the
/// pattern, the separators before it go instead. A weekday wrapped in
/// brackets, as in `(dddd)`, takes the brackets along.
pub fn strip_weekday(pattern: &str) -> String {
    let Some(tokens) = lex(pattern) else {
        return pattern.to_string();
    };
    let mut keep = vec![true; tokens.len()];

    for (index, spanned) in tokens.iter().enumerate() {
        if !matches!(spanned.token, Token::Field { letter: 'd', count } if count >= 3) {
            continue;
        }
        keep[index] = false;

        let mut first = index;
        let mut after = index + 1;
        if let Some(close) = index.checked_sub(1).and_then(|open| closing_bracket(&tokens[open].token)) {
            if tokens.get(after).map(|t| &t.token) == Some(&Token::Literal(close)) {
                first = index - 1;
                keep[first] = false;
                keep[after] = false;
                after += 1;
            }
        }
        while after < tokens.len() && is_joiner(&tokens[after].token) {
            keep[after] = false;
            after += 1;
        }

        if after == tokens.len() {
            let mut before = first;
            while before > 0 && is_joiner(&tokens[before - 1].token) {
                keep[before - 1] = false;
                before -= 1;
            }
        }
    }

    tokens
        .iter()
        .zip(keep)
        .filter(|(_, kept)| *kept)
        .map(|(spanned, _)| &pattern[spanned.start..spanned.end])
        .collect()
}

/// Replace full month names (`MMMM`) with abbreviated ones (`MMM`).
pub fn abbreviate_month(pattern: &str) -> String {
    let Some(tokens) = lex(pattern) else {
        return pattern.to_string();
    };

    tokens
        .iter()
        .map(|spanned| match spanned.token {
            Token::Field { letter: 'M', count } if count >= 4 => "MMM",
            _ => &pattern[spanned.start..spanned.end],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn test_strip_leading_weekday() {
        assert_eq!(strip_weekday("dddd, MMMM d, yyyy"), "MMMM d, yyyy");
        assert_eq!(strip_weekday("dddd, d. MMMM yyyy"), "d. MMMM yyyy");
        assert_eq!(strip_weekday("dddd d MMMM yyyy"), "d MMMM yyyy");
    }

    #[test]
    fn test_strip_trailing_weekday() {
        assert_eq!(strip_weekday("d MMMM yyyy, dddd"), "d MMMM yyyy");
        assert_eq!(strip_weekday("yyyy-MM-dd ddd"), "yyyy-MM-dd");
    }

    #[test]
    fn test_strip_period_after_weekday() {
        assert_eq!(strip_weekday("dddd. d MMMM yyyy"), "d MMMM yyyy");
        assert_eq!(strip_weekday("d MMMM yyyy. dddd"), "d MMMM yyyy");
    }

    #[test]
    fn test_strip_bracketed_weekday() {
        assert_eq!(strip_weekday("d MMMM yyyy (dddd)"), "d MMMM yyyy");
        assert_eq!(strip_weekday("[ddd] d MMM yyyy"), "d MMM yyyy");
        assert_eq!(strip_weekday("d MMMM (dddd) yyyy"), "d MMMM yyyy");
        // Unbalanced brackets stay
        assert_eq!(strip_weekday("(dddd d MMMM)"), "(d MMMM)");
    }

    #[test]
    fn test_strip_leaves_day_and_quotes() {
        assert_eq!(strip_weekday("d 'dddd' yyyy"), "d 'dddd' yyyy");
        assert_eq!(strip_weekday("dd/MM/yyyy"), "dd/MM/yyyy");
    }

    #[test]
    fn test_abbreviate_month() {
        assert_eq!(abbreviate_month("MMMM d, yyyy"), "MMM d, yyyy");
        assert_eq!(abbreviate_month("MMM d"), "MMM d");
        assert_eq!(abbreviate_month("'MMMM' MM"), "'MMMM' MM");
    }

    #[test]
    fn test_unlexable_pattern_is_untouched() {
        assert_eq!(strip_weekday("dddd 'open"), "dddd 'open");
    }

    #[test]
    fn test_en_us_styles() {
        let locale = Locale::en_us();
        assert_eq!(date_pattern(DateStyle::Short, &locale), "M/d/yyyy");
        assert_eq!(date_pattern(DateStyle::Medium, &locale), "MMM d, yyyy");
        assert_eq!(date_pattern(DateStyle::Long, &locale), "MMMM d, yyyy");
        assert_eq!(date_pattern(DateStyle::Full, &locale), "dddd, MMMM d, yyyy");

        assert_eq!(time_pattern(DateStyle::Short, &locale), "h:mm tt");
        assert_eq!(time_pattern(DateStyle::Medium, &locale), "h:mm:ss tt");
        assert_eq!(time_pattern(DateStyle::Long, &locale), "h:mm:ss tt zzz");
        assert_eq!(time_pattern(DateStyle::Full, &locale), "h:mm:ss tt zzz");
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let locale = Locale::en_us();
        let first = synthesize(DateStyle::Medium, DateStyle::Short, &locale);
        for _ in 0..10 {
            assert_eq!(synthesize(DateStyle::Medium, DateStyle::Short, &locale), first);
        }
        assert_eq!(first, "MMM d, yyyy h:mm tt");
    }
}
