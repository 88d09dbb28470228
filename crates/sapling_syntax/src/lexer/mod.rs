//! Lexer for the Sapling language
//!
//! Handles tokenization including:
//! - Keywords (`import`, `func`, `var`) and identifiers
//! - Integer and string literals
//! - Punctuation (`=`)
//! - Whitespace and comments (`//`, `/* */`), which are skipped but still tracked for line/column
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, TokenClass, Token)
//! - `trivia` - Whitespace and comment skipping
//! - `strings` - String literal scanning and escapes
//! - `numbers` - Integer literal scanning
//!
//! The lexer is an [`Iterator`] of `Result<Token, LexError>`: tokens are produced on demand, the
//! stream always ends with an `Eof` token, and errors are yielded in-band so the caller decides
//! whether to stop or keep going.

mod numbers;
mod strings;
pub mod tokens;
mod trivia;

pub use tokens::{Token, TokenClass, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::LexError;
use sapling_core::lang::punctuation::PunctuationId;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Start position of a token being scanned.
#[derive(Debug, Clone, Copy)]
struct Mark {
    offset: usize,
    line: usize,
    column: usize,
}

/// Lexer for Sapling source code.
///
/// Converts source text into a lazy stream of tokens. A fresh `Lexer` can be created for any
/// input; an existing one cannot be rewound.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    column: usize,
    /// Set once `Eof` has been yielded.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            column: 1,
            finished: false,
        };
        // A leading byte-order mark is not part of the program.
        if lexer.peek() == Some('\u{feff}') {
            lexer.advance();
            lexer.column = 1;
        }
        lexer
    }

    /// Tokenize the entire source code, stopping at the first error.
    ///
    /// The token vector always ends with an `Eof` token.
    pub fn tokenize(self) -> Result<Vec<Token>, LexError> {
        self.collect()
    }

    /// Scan the next token.
    ///
    /// After an error the lexer has already moved past the offending input, so calling this again
    /// resumes scanning.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia()?;

        let start = self.mark();

        let Some(c) = self.advance() else {
            self.finished = true;
            return Ok(Token::new(TokenKind::Eof, self.span_from(start)));
        };

        let kind = match c {
            '=' => TokenKind::Punctuation(PunctuationId::Eq),

            // Strings
            '"' | '\'' => self.scan_string(start, c)?,

            // Numbers
            '0'..='9' => self.scan_number(start),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => {
                return Err(LexError::UnexpectedChar {
                    ch: c,
                    span: self.span_from(start),
                });
            }
        };

        Ok(Token::new(kind, self.span_from(start)))
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn mark(&self) -> Mark {
        Mark {
            offset: self.current_pos,
            line: self.line,
            column: self.column,
        }
    }

    fn span_from(&self, mark: Mark) -> Span {
        Span::new(mark.offset, self.current_pos, mark.line, mark.column)
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: Mark) -> TokenKind {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start.offset..self.current_pos];

        // Look up identifier spelling in the reserved-word registry (no allocation for keywords).
        match keyword_id(spelling) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident(spelling.to_string()),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string, stopping at the first error.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Lex a source string, collecting every lexical error instead of stopping at the first.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex_all(source: &str) -> Result<Vec<Token>, Vec<LexError>> {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    for item in Lexer::new(source) {
        match item {
            Ok(token) => tokens.push(token),
            Err(e) => errors.push(e),
        }
    }
    if errors.is_empty() {
        Ok(tokens)
    } else {
        tracing::debug!(error_count = errors.len(), "lexing failed");
        Err(errors)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sapling_core::lang::keywords::{self, KeywordId};

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keyword_registry_parity() {
        for k in keywords::KEYWORDS {
            let tokens = lex(k.canonical).unwrap_or_else(|err| panic!("lex({:?}) failed: {:?}", k.canonical, err));
            assert_eq!(tokens.len(), 2, "expected token + EOF for keyword {:?}, got {:?}", k.id, tokens);
            assert!(tokens[0].kind.is_keyword(k.id));
            assert!(matches!(tokens[1].kind, TokenKind::Eof));
        }
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("import func var funcs _var x1"),
            vec![
                TokenKind::Keyword(KeywordId::Import),
                TokenKind::Keyword(KeywordId::Func),
                TokenKind::Keyword(KeywordId::Var),
                TokenKind::Ident("funcs".into()),
                TokenKind::Ident("_var".into()),
                TokenKind::Ident("x1".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_declaration_tokens() {
        assert_eq!(
            kinds("var x = 42"),
            vec![
                TokenKind::Keyword(KeywordId::Var),
                TokenKind::Ident("x".into()),
                TokenKind::Punctuation(PunctuationId::Eq),
                TokenKind::Int("42".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_spans_track_lines_and_columns() {
        let tokens = lex("var x = 1\n  func f = \"s\"").unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 3, 1, 1));
        assert_eq!(tokens[3].span, Span::new(8, 9, 1, 9));
        // `func` on line 2, after two spaces
        assert_eq!(tokens[4].span, Span::new(12, 16, 2, 3));
        // string literal span includes the quotes
        assert_eq!(tokens[7].span, Span::new(21, 24, 2, 12));
        // Eof sits at the end of input
        assert_eq!(tokens[8].span, Span::new(24, 24, 2, 15));
    }

    #[test]
    fn test_comments_are_skipped_but_counted() {
        let source = "// header\n/* block\n comment */ var\n// trailing";
        let tokens = lex(source).unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].kind.is_keyword(KeywordId::Var));
        assert_eq!(tokens[0].span.line, 3);
        assert_eq!(tokens[0].span.column, 13);
        assert_eq!(tokens[1].span.line, 4);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = lex("var /* never closed").unwrap_err();
        assert_eq!(
            err,
            LexError::UnterminatedComment {
                span: Span::new(4, 19, 1, 5)
            }
        );
    }

    #[test]
    fn test_unexpected_character() {
        let err = lex("var x = -5").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedChar {
                ch: '-',
                span: Span::new(8, 9, 1, 9)
            }
        );
    }

    #[test]
    fn test_unicode_identifier_rejected() {
        // Identifiers are ASCII-only; columns count characters, offsets count bytes.
        let err = lex("var π = 1").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedChar {
                ch: 'π',
                span: Span::new(4, 6, 1, 5)
            }
        );
    }

    #[test]
    fn test_lone_slash_is_rejected() {
        assert!(matches!(lex("/"), Err(LexError::UnexpectedChar { ch: '/', .. })));
    }

    #[test]
    fn test_lazy_stream_yields_tokens_before_error() {
        let mut lexer = Lexer::new("var x @");
        assert!(lexer.next().unwrap().unwrap().kind.is_keyword(KeywordId::Var));
        assert!(matches!(lexer.next().unwrap().unwrap().kind, TokenKind::Ident(_)));
        assert!(lexer.next().unwrap().is_err());
        // The lexer resumes after the bad character and still terminates with Eof.
        assert!(matches!(lexer.next().unwrap().unwrap().kind, TokenKind::Eof));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_lex_all_collects_every_error() {
        let errors = lex_all("var a = @\nvar b = \"open\nvar c = #").unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], LexError::UnexpectedChar { ch: '@', .. }));
        assert!(matches!(errors[1], LexError::UnterminatedString { .. }));
        assert!(matches!(errors[2], LexError::UnexpectedChar { ch: '#', .. }));
    }

    #[test]
    fn test_empty_input_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds("  \n\t\r\n"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_byte_order_mark_is_skipped() {
        let tokens = lex("\u{feff}var").unwrap();
        assert_eq!(tokens[0].span, Span::new(3, 6, 1, 1));
    }

    #[test]
    fn test_token_stream_snapshot() {
        let rendered: Vec<String> = lex("import \"fmt\"\n// c\nvar x = 42\n")
            .unwrap()
            .iter()
            .map(|t| format!("{} {}", t.span, t.kind))
            .collect();
        insta::assert_snapshot!(rendered.join("\n"), @r#"
        1:1 `import`
        1:8 string literal "fmt"
        3:1 `var`
        3:5 identifier `x`
        3:7 `=`
        3:9 integer literal `42`
        4:1 end of input
        "#);
    }
}
