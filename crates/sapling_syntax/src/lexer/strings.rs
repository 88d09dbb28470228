//! String scanning for the Sapling lexer
//!
//! Strings are delimited by matching `"` or `'` and must close on the line they open.

use super::tokens::TokenKind;
use super::{Lexer, Mark};
use crate::diagnostics::LexError;

// ============================================================================
// Escape sequence handling
// ============================================================================

/// Result of processing an escape sequence
enum EscapeResult {
    /// Successfully parsed escape character
    Char(char),
    /// Unknown escape - preserve as-is (backslash + char)
    Unknown(char),
    /// End of line or input right after the backslash
    End,
}

impl<'a> Lexer<'a> {
    /// Process an escape sequence. Called after consuming the backslash.
    ///
    /// A newline after the backslash is left unconsumed so the string is reported as unterminated.
    fn scan_escape(&mut self, quote: char) -> EscapeResult {
        match self.peek() {
            None | Some('\n') => return EscapeResult::End,
            Some(_) => {}
        }
        match self.advance() {
            Some('n') => EscapeResult::Char('\n'),
            Some('t') => EscapeResult::Char('\t'),
            Some('r') => EscapeResult::Char('\r'),
            Some('0') => EscapeResult::Char('\0'),
            Some('\\') => EscapeResult::Char('\\'),
            Some(q) if q == quote => EscapeResult::Char(q),
            Some(c) => EscapeResult::Unknown(c),
            None => EscapeResult::End,
        }
    }

    /// Scan a string literal whose opening `quote` has already been consumed.
    ///
    /// On failure the lexer stops at end of input or just before the newline, so scanning can
    /// resume on the next line.
    pub(super) fn scan_string(&mut self, start: Mark, quote: char) -> Result<TokenKind, LexError> {
        let mut value = String::new();

        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(LexError::UnterminatedString {
                        span: self.span_from(start),
                    });
                }
                Some(c) if c == quote => {
                    self.advance();
                    return Ok(TokenKind::String(value));
                }
                Some('\\') => {
                    self.advance();
                    match self.scan_escape(quote) {
                        EscapeResult::Char(c) => value.push(c),
                        EscapeResult::Unknown(c) => {
                            value.push('\\');
                            value.push(c);
                        }
                        EscapeResult::End => {
                            return Err(LexError::UnterminatedString {
                                span: self.span_from(start),
                            });
                        }
                    }
                }
                Some(c) => {
                    self.advance();
                    value.push(c);
                }
            }
        }
    }
}
