//! Canonical language vocabulary for Sapling.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that the lexer,
//! parser, printers and diagnostics share, so no component needs to repeat a keyword spelling as a
//! string literal.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no AST types.

pub mod lang;
