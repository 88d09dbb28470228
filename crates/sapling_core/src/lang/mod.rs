//! Sapling language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords and punctuation.
//!
//! Callers work with **stable IDs** (`KeywordId`, `PunctuationId`) and look up spellings/metadata via
//! registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   formatting, docs).
//!
//! ## Examples
//! ```rust
//! use sapling_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("var"), Some(KeywordId::Var));
//! assert_eq!(keywords::as_str(KeywordId::Var), "var");
//! ```

pub mod keywords;
pub mod punctuation;
pub mod registry;
