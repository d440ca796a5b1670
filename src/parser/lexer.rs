//! Lexer for tokenizing date pattern strings.
//!
//! The lexer converts pattern strings such as `dddd, MMMM d, yyyy` into a
//! stream of tokens. It handles:
//! - Runs of the same pattern letter (`yyyy`) become a single Field token
//! - Quoted strings ('text' or "text") become QuotedString tokens
//! - Escaped characters (\d) become EscapedChar tokens
//! - `%x` forces a single pattern letter to be read as a field
//! - `/` and `:` are placeholders for the convention's separators

use crate::error::PatternError;
use crate::parser::tokens::{is_pattern_letter, SpannedToken, Token};

/// A lexer for date pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, PatternError> {
        let start = self.position;
        let Some(ch) = self.current_char() else {
            return Ok(SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            });
        };

        let token = match ch {
            '\'' | '"' => self.lex_quoted_string(ch)?,
            '\\' => self.lex_escaped_char()?,
            '%' => self.lex_single_field()?,
            '/' => {
                self.advance();
                Token::DateSeparator
            }
            ':' => {
                self.advance();
                Token::TimeSeparator
            }
            c if is_pattern_letter(c) => {
                let count = self.count_run(|other| other == c);
                Token::Field { letter: c, count }
            }
            _ => {
                self.advance();
                Token::Literal(ch)
            }
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Counts and consumes consecutive characters matching the predicate.
    /// Returns the count (always >= 1 since current char matches).
    #[inline]
    fn count_run<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(char) -> bool,
    {
        let mut count = 0;
        while let Some(ch) = self.current_char() {
            if predicate(ch) {
                count += 1;
                self.advance();
            } else {
                break;
            }
        }
        count
    }

    /// Lexes a quoted string delimited by `quote`. A backslash inside the
    /// quotes escapes the next character.
    fn lex_quoted_string(&mut self, quote: char) -> Result<Token, PatternError> {
        let start = self.position;
        self.advance(); // Skip the opening quote

        let mut content = String::new();
        loop {
            match self.current_char() {
                Some(ch) if ch == quote => {
                    self.advance();
                    return Ok(Token::QuotedString(content));
                }
                Some('\\') => {
                    self.advance();
                    match self.current_char() {
                        Some(escaped) => {
                            content.push(escaped);
                            self.advance();
                        }
                        None => return Err(PatternError::UnterminatedQuote { position: start }),
                    }
                }
                Some(ch) => {
                    content.push(ch);
                    self.advance();
                }
                None => return Err(PatternError::UnterminatedQuote { position: start }),
            }
        }
    }

    /// Lexes an escaped character (\x).
    fn lex_escaped_char(&mut self) -> Result<Token, PatternError> {
        let start = self.position;
        self.advance(); // Skip the backslash

        match self.current_char() {
            Some(ch) => {
                self.advance();
                Ok(Token::EscapedChar(ch))
            }
            None => Err(PatternError::TrailingEscape { position: start }),
        }
    }

    /// Lexes `%x`: a single pattern letter read as a one-letter field.
    fn lex_single_field(&mut self) -> Result<Token, PatternError> {
        let start = self.position;
        self.advance(); // Skip the percent sign

        match self.current_char() {
            Some(ch) if is_pattern_letter(ch) => {
                self.advance();
                Ok(Token::Field {
                    letter: ch,
                    count: 1,
                })
            }
            Some(ch) if ch != '%' => {
                self.advance();
                Ok(Token::Literal(ch))
            }
            _ => Err(PatternError::DanglingPercent { position: start }),
        }
    }

    /// Returns all remaining tokens, including the final Eof.
    /// This consumes the lexer.
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, PatternError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.token, Token::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}
