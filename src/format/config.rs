//! Formatting configuration for Sapling
//!
//! Shared by the source printer and the tree listing.

/// Formatting configuration
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Number of spaces per indentation level (tree listing)
    pub indent_width: usize,
    /// Quote style for string literals
    pub quote_style: QuoteStyle,
    /// Whether a blank line separates the import block from the declarations
    pub blank_line_after_imports: bool,
}

/// Quote style for string literals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    Double,
    Single,
}

impl QuoteStyle {
    /// The delimiter character for this style.
    pub fn delimiter(self) -> char {
        match self {
            QuoteStyle::Double => '"',
            QuoteStyle::Single => '\'',
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            quote_style: QuoteStyle::Double,
            blank_line_after_imports: true,
        }
    }
}

impl FormatConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the quote style
    pub fn with_quote_style(mut self, style: QuoteStyle) -> Self {
        self.quote_style = style;
        self
    }

    pub fn with_blank_line_after_imports(mut self, enabled: bool) -> Self {
        self.blank_line_after_imports = enabled;
        self
    }
}
