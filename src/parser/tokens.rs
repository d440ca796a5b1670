//! Token types for the date pattern lexer.

/// A token in a date pattern string.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A run of one pattern letter, e.g. `dddd` is `Field { letter: 'd', count: 4 }`
    Field { letter: char, count: usize },

    // Literals
    Literal(char),
    EscapedChar(char),
    QuotedString(String),

    // Separators replaced by the convention's own
    DateSeparator, // /
    TimeSeparator, // :

    // End of input
    Eof,
}

impl Token {
    /// Returns true if this token is a run of the given pattern letter.
    pub fn is_field(&self, ch: char) -> bool {
        matches!(self, Token::Field { letter, .. } if *letter == ch)
    }
}

/// A token with its byte span in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}

/// Returns true if `ch` starts a pattern field.
pub fn is_pattern_letter(ch: char) -> bool {
    matches!(
        ch,
        'd' | 'M' | 'y' | 'h' | 'H' | 'm' | 's' | 'f' | 'F' | 't' | 'g' | 'z' | 'K'
    )
}
