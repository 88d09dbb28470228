//! Number scanning for the Sapling lexer
//!
//! Integer literals are plain runs of ASCII decimal digits. The token keeps the digit text;
//! range checking belongs to the parser so overflow is reported as a parse error.

use super::tokens::TokenKind;
use super::{Lexer, Mark};

impl<'a> Lexer<'a> {
    /// Scan the rest of an integer literal whose first digit has already been consumed.
    pub(super) fn scan_number(&mut self, start: Mark) -> TokenKind {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }
        TokenKind::Int(self.source[start.offset..self.current_pos].to_string())
    }
}
