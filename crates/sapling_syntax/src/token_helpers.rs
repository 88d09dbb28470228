//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenClass, TokenKind};
use sapling_core::lang::keywords::KeywordId;
use sapling_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Classify this token, dropping any payload.
    pub fn class(&self) -> TokenClass {
        match self {
            TokenKind::Keyword(id) => TokenClass::Keyword(*id),
            TokenKind::Punctuation(id) => TokenClass::Punctuation(*id),
            TokenKind::Ident(_) => TokenClass::Ident,
            TokenKind::Int(_) => TokenClass::Int,
            TokenKind::String(_) => TokenClass::String,
            TokenKind::Eof => TokenClass::Eof,
        }
    }

    /// Return `true` if this token's class is `class`.
    pub fn is(&self, class: TokenClass) -> bool {
        self.class() == class
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }

    /// Convenience wrapper for `self.kind.class()`.
    pub fn class(&self) -> TokenClass {
        self.kind.class()
    }
}
