//! Abstract Syntax Tree definitions for Sapling
//!
//! A source file is a list of imports followed by a list of declarations. Each declaration binds
//! a name to exactly one literal.

use std::fmt;

/// Source location span.
///
/// `start`/`end` are byte offsets (end exclusive). `line`/`column` are 1-based and describe `start`;
/// columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest span covering both `self` and `other`; line/column come from whichever starts first.
    pub fn merge(self, other: Span) -> Span {
        let first = if self.start <= other.start { self } else { other };
        Span {
            start: first.start,
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(0, 0, 1, 1)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Identifier
pub type Ident = String;

/// The result of parsing one source file.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SourceFile {
    /// Import paths, in source order.
    pub imports: Vec<Spanned<String>>,
    /// Declarations, in source order.
    pub declarations: Vec<Spanned<Declaration>>,
}

impl SourceFile {
    /// Iterate over the import paths without their spans.
    pub fn import_paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.imports.iter().map(|i| i.node.as_str())
    }

    /// Iterate over the declarations without their spans.
    pub fn declaration_nodes(&self) -> impl Iterator<Item = &Declaration> + '_ {
        self.declarations.iter().map(|d| &d.node)
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.declarations.is_empty()
    }

    /// Compare two files ignoring spans.
    pub fn same_structure(&self, other: &SourceFile) -> bool {
        self.import_paths().eq(other.import_paths()) && self.declaration_nodes().eq(other.declaration_nodes())
    }
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DeclarationKind {
    Function,
    Variable,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationKind::Function => write!(f, "Function"),
            DeclarationKind::Variable => write!(f, "Variable"),
        }
    }
}

/// `func name = literal` or `var name = literal`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub name: Ident,
    pub value: Literal,
}

// ============================================================================
// Literals
// ============================================================================

/// A literal value. The payload type is fixed by the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Literal {
    Integer(i64),
    String(String),
}

/// Tag-only view of a [`Literal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Integer,
    String,
}

impl Literal {
    pub fn kind(&self) -> LiteralKind {
        match self {
            Literal::Integer(_) => LiteralKind::Integer,
            Literal::String(_) => LiteralKind::String,
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralKind::Integer => write!(f, "Integer"),
            LiteralKind::String => write!(f, "String"),
        }
    }
}
