//! Parser for the Sapling language
//!
//! Recursive descent over a lazily produced token stream:
//!
//! ```text
//! SourceFile   := Import* Declaration*
//! Import       := "import" StringLiteral
//! Declaration  := ("func" | "var") Identifier "=" Literal
//! Literal      := IntegerLiteral | StringLiteral
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use sapling_syntax::parser;
//!
//! let file = parser::parse_str("import \"fmt\"\nfunc f = \"hello\"\n").unwrap();
//! assert_eq!(file.imports.len(), 1);
//! assert_eq!(file.declarations.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::{LexError, ParseError, SyntaxError};
use crate::lexer::{Lexer, Token, TokenClass, TokenKind};
use sapling_core::lang::keywords::KeywordId;
use sapling_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while keeping each
// file focused.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
