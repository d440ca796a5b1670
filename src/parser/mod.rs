//! Parser for date pattern strings.

pub mod lexer;
pub mod tokens;

use crate::ast::{DateField, DatePattern, PatternPart};
use crate::error::PatternError;
use lexer::Lexer;
use tokens::{SpannedToken, Token};

/// Most fractional-second digits a pattern may request.
const MAX_FRACTION_DIGITS: usize = 7;

/// Parse a pattern string into a DatePattern.
pub fn parse(pattern: &str) -> Result<DatePattern, PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::EmptyPattern);
    }

    let tokens = Lexer::new(pattern).tokenize()?;
    let mut builder = PatternBuilder::new();
    for spanned in &tokens {
        builder.add_token(spanned)?;
    }
    Ok(DatePattern::from_parts(pattern, builder.finish()))
}

/// Builds pattern parts, merging adjacent literals.
struct PatternBuilder {
    parts: Vec<PatternPart>,
}

impl PatternBuilder {
    fn new() -> Self {
        Self { parts: Vec::new() }
    }

    fn add_token(&mut self, spanned: &SpannedToken) -> Result<(), PatternError> {
        match &spanned.token {
            Token::Field { letter, count } => {
                let field = field_for(*letter, *count, spanned.start)?;
                self.parts.push(PatternPart::Field(field));
            }
            Token::Literal(c) | Token::EscapedChar(c) => self.push_literal(&c.to_string()),
            Token::QuotedString(s) => self.push_literal(s),
            Token::DateSeparator => self.parts.push(PatternPart::DateSeparator),
            Token::TimeSeparator => self.parts.push(PatternPart::TimeSeparator),
            Token::Eof => {}
        }
        Ok(())
    }

    fn push_literal(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(PatternPart::Literal(existing)) = self.parts.last_mut() {
            existing.push_str(text);
        } else {
            self.parts.push(PatternPart::Literal(text.to_string()));
        }
    }

    fn finish(self) -> Vec<PatternPart> {
        self.parts
    }
}

/// Map a run of a pattern letter to the field it renders.
fn field_for(letter: char, count: usize, position: usize) -> Result<DateField, PatternError> {
    let pad = count >= 2;
    let field = match letter {
        'd' => match count {
            1 | 2 => DateField::Day { pad },
            3 => DateField::WeekdayAbbr,
            _ => DateField::WeekdayFull,
        },
        'M' => match count {
            1 | 2 => DateField::Month { pad },
            3 => DateField::MonthAbbr,
            _ => DateField::MonthFull,
        },
        'y' => DateField::Year(count.min(u8::MAX as usize) as u8),
        'h' => DateField::Hour12 { pad },
        'H' => DateField::Hour24 { pad },
        'm' => DateField::Minute { pad },
        's' => DateField::Second { pad },
        'f' | 'F' => {
            if count > MAX_FRACTION_DIGITS {
                return Err(PatternError::TooManyFractionDigits { position });
            }
            DateField::Fraction {
                digits: count as u8,
                trim: letter == 'F',
            }
        }
        't' => DateField::AmPm { full: pad },
        'g' => DateField::Era,
        'z' => DateField::Offset(count.min(3) as u8),
        _ => DateField::Offset(3), // 'K'
    };
    Ok(field)
}
