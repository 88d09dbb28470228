//! Whitespace and comment skipping for the Sapling lexer

use super::Lexer;
use crate::diagnostics::LexError;

impl<'a> Lexer<'a> {
    /// Skip whitespace, `// line` comments and `/* block */` comments.
    pub(super) fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\r' | '\n') => {
                    self.advance();
                }
                Some('/') if self.peek_next() == Some('/') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                Some('/') if self.peek_next() == Some('*') => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Block comments do not nest: the first `*/` closes the comment.
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start = self.mark();
        self.advance(); // '/'
        self.advance(); // '*'

        loop {
            match self.advance() {
                None => {
                    return Err(LexError::UnterminatedComment {
                        span: self.span_from(start),
                    });
                }
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return Ok(());
                }
                Some(_) => {}
            }
        }
    }
}
