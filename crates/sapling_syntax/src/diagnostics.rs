//! Diagnostics for Sapling syntax errors
//!
//! Two error families exist:
//! - [`LexError`]: malformed lexical input (unterminated string/comment, stray character)
//! - [`ParseError`]: a token stream that does not match the grammar, or an integer literal that does
//!   not fit in `i64`
//!
//! [`SyntaxError`] is the union returned by the fail-fast entry points. All three implement
//! [`miette::Diagnostic`] so callers can render them against the original source.

use std::fmt;

use miette::{Diagnostic, LabeledSpan};
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::{TokenClass, TokenKind};

/// Malformed lexical input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A string literal reached end-of-line or end-of-input before its closing quote.
    /// The span runs from the opening quote to where scanning stopped.
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },

    /// A `/*` comment without a matching `*/`.
    #[error("unterminated block comment")]
    UnterminatedComment { span: Span },

    #[error("unexpected character {ch:?}")]
    UnexpectedChar { ch: char, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString { span }
            | LexError::UnterminatedComment { span }
            | LexError::UnexpectedChar { span, .. } => *span,
        }
    }

    /// Stable diagnostic code.
    pub fn diagnostic_code(&self) -> &'static str {
        match self {
            LexError::UnterminatedString { .. } => "sapling::lex::unterminated_string",
            LexError::UnterminatedComment { .. } => "sapling::lex::unterminated_comment",
            LexError::UnexpectedChar { .. } => "sapling::lex::unexpected_char",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LexError::UnterminatedString { .. } => "string starts here and is never closed",
            LexError::UnterminatedComment { .. } => "comment starts here and is never closed",
            LexError::UnexpectedChar { .. } => "not part of any token",
        }
    }

    fn help_text(&self) -> Option<&'static str> {
        match self {
            LexError::UnterminatedString { .. } => {
                Some("close the string with the same quote it was opened with; strings cannot span lines")
            }
            LexError::UnterminatedComment { .. } => Some("add `*/` to close the comment"),
            LexError::UnexpectedChar { .. } => None,
        }
    }
}

/// The token stream does not match the grammar at the current position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {}, found {found}", describe_expected(.expected))]
    UnexpectedToken {
        expected: Vec<TokenClass>,
        found: TokenKind,
        span: Span,
    },

    #[error("integer literal `{digits}` does not fit in a signed 64-bit integer")]
    IntegerOverflow { digits: String, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. } | ParseError::IntegerOverflow { span, .. } => *span,
        }
    }

    /// The token classes that would have been accepted, if this is an unexpected-token error.
    pub fn expected(&self) -> &[TokenClass] {
        match self {
            ParseError::UnexpectedToken { expected, .. } => expected,
            ParseError::IntegerOverflow { .. } => &[],
        }
    }

    /// Stable diagnostic code.
    pub fn diagnostic_code(&self) -> &'static str {
        match self {
            ParseError::UnexpectedToken { .. } => "sapling::parse::unexpected_token",
            ParseError::IntegerOverflow { .. } => "sapling::parse::integer_overflow",
        }
    }

    fn label(&self) -> String {
        match self {
            ParseError::UnexpectedToken { expected, .. } => format!("expected {} here", describe_expected(expected)),
            ParseError::IntegerOverflow { .. } => format!("maximum is {}", i64::MAX),
        }
    }
}

/// Any error the fail-fast pipeline can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Lex(e) => e.span(),
            SyntaxError::Parse(e) => e.span(),
        }
    }

    pub fn diagnostic_code(&self) -> &'static str {
        match self {
            SyntaxError::Lex(e) => e.diagnostic_code(),
            SyntaxError::Parse(e) => e.diagnostic_code(),
        }
    }

    pub fn is_lex(&self) -> bool {
        matches!(self, SyntaxError::Lex(_))
    }
}

/// Render an "expected" set for messages: `identifier`, `` `func` or `var` ``, `` a, b or c ``.
pub fn describe_expected(expected: &[TokenClass]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{} or {}", init.join(", "), last)
        }
    }
}

fn labels_at(span: Span, label: String) -> Option<Box<dyn Iterator<Item = LabeledSpan>>> {
    Some(Box::new(std::iter::once(LabeledSpan::new(
        Some(label),
        span.start,
        span.len(),
    ))))
}

impl Diagnostic for LexError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.diagnostic_code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help_text().map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        labels_at(self.span(), self.label().to_string())
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.diagnostic_code()))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        labels_at(self.span(), self.label())
    }
}

impl Diagnostic for SyntaxError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            SyntaxError::Lex(e) => e.code(),
            SyntaxError::Parse(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            SyntaxError::Lex(e) => e.help(),
            SyntaxError::Parse(e) => e.help(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            SyntaxError::Lex(e) => e.labels(),
            SyntaxError::Parse(e) => e.labels(),
        }
    }
}
