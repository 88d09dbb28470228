//! Punctuation vocabulary.
//!
//! This module defines the canonical set of punctuation tokens used by the lexer/parser.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use sapling_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("="), Some(PunctuationId::Eq));
//! assert_eq!(punctuation::as_str(PunctuationId::Eq), "=");
//! ```

use super::registry::{Example, Since, Stability};

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Binds a name to a value.
    Binding,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    /// `=` between a declared name and its literal.
    Eq,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub category: PunctuationCategory,
    pub since: Since,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[PunctuationInfo {
    id: PunctuationId::Eq,
    canonical: "=",
    aliases: &[],
    category: PunctuationCategory::Binding,
    since: Since(0, 1),
    stability: Stability::Stable,
    examples: &[Example {
        code: "var x = 1",
        note: None,
    }],
}];

/// Canonical spelling.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry has no entry for `id` (a registry bug, guarded by tests).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("INVARIANT: every PunctuationId has a registry entry")
}

/// Lookup by spelling (canonical or alias).
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION
        .iter()
        .find(|p| {
            let aliases: &[&str] = p.aliases;
            p.canonical == s || aliases.contains(&s)
        })
        .map(|p| p.id)
}
