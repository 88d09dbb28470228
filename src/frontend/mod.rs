//! Sapling frontend
//!
//! Syntax components are provided by the shared `sapling_syntax` crate:
//! - `lexer`: tokenization of source code
//! - `parser`: parsing tokens into the tree
//! - `ast`: tree definitions
//!
//! `diagnostics` re-exports the syntax error types and adds terminal rendering.

pub use sapling_syntax::{ast, lexer, parser};

pub mod diagnostics;
