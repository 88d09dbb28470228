#![forbid(unsafe_code)]
//! Sapling: a small declaration language
//!
//! A Sapling file lists its imports and then its `func` / `var` declarations, each bound to one
//! integer or string literal. This crate provides the tooling around the syntax crate: source
//! and tree printers, diagnostic rendering and the `sapling` command-line interface.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (logic error), use `.expect("INVARIANT: reason")` with a clear
//!   explanation.

pub mod cli;
pub mod format;
pub mod frontend;
pub mod version;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;

pub use format::{FormatConfig, TreePrinter, check_formatted, format_diff, format_source, format_source_with_config};
