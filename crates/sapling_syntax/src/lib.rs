//! Syntax frontend for the Sapling language: lexer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the CLI, the formatter and any future
//! tooling.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: no name resolution, no type checking, no IO.
//! - Vocabulary identity (keywords/punctuation) comes from `sapling_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use sapling_syntax::ast::{DeclarationKind, Literal};
//! use sapling_syntax::parser;
//!
//! let file = parser::parse_str("import \"fmt\"\nvar x = 42\n").unwrap();
//! assert_eq!(file.import_paths().collect::<Vec<_>>(), vec!["fmt"]);
//! assert_eq!(file.declarations[0].node.kind, DeclarationKind::Variable);
//! assert_eq!(file.declarations[0].node.value, Literal::Integer(42));
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
