//! Token types for the Sapling lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the parser and printers.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::Span;
use sapling_core::lang::keywords::{self, KeywordId};
use sapling_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // ========== Keyword / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    /// Raw decimal digits; the parser converts them to `i64`.
    Int(String),
    /// Unescaped string contents.
    String(String),

    // ========== Special ==========
    Eof,
}

/// Payload-free classification of a token, used for "expected ..." sets in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Keyword(KeywordId),
    Punctuation(PunctuationId),
    Ident,
    Int,
    String,
    Eof,
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "`{}`", keywords::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "`{}`", punctuation::as_str(*id)),
            TokenKind::Ident(name) => write!(f, "identifier `{}`", name),
            TokenKind::Int(digits) => write!(f, "integer literal `{}`", digits),
            TokenKind::String(s) => write!(f, "string literal {:?}", s),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenClass::Keyword(id) => write!(f, "`{}`", keywords::as_str(*id)),
            TokenClass::Punctuation(id) => write!(f, "`{}`", punctuation::as_str(*id)),
            TokenClass::Ident => write!(f, "identifier"),
            TokenClass::Int => write!(f, "integer literal"),
            TokenClass::String => write!(f, "string literal"),
            TokenClass::Eof => write!(f, "end of input"),
        }
    }
}
