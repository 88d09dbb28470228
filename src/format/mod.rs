//! Sapling printers
//!
//! Printing is separate from parsing. Every printer here is a pure function of a parsed
//! [`SourceFile`](crate::frontend::ast::SourceFile):
//! - [`Formatter`]: canonical source (`sapling fmt`)
//! - [`TreePrinter`]: indented outline (`sapling parse --emit tree`)
//! - [`to_json`]: JSON dump (`sapling parse --emit json`)

mod config;
mod formatter;
mod tree;
mod writer;

pub use config::{FormatConfig, QuoteStyle};
pub use formatter::{Formatter, quote_string};
pub use tree::TreePrinter;

use crate::frontend::ast::SourceFile;
use crate::frontend::diagnostics::SyntaxError;
use crate::frontend::parser;

/// Format Sapling source code with default settings
pub fn format_source(source: &str) -> Result<String, SyntaxError> {
    format_source_with_config(source, FormatConfig::default())
}

/// Format Sapling source code with custom configuration
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn format_source_with_config(source: &str, config: FormatConfig) -> Result<String, SyntaxError> {
    let file = parser::parse_str(source)?;
    Ok(Formatter::new(config).format(&file))
}

/// Check if source code is already formatted
pub fn check_formatted(source: &str) -> Result<bool, SyntaxError> {
    let formatted = format_source(source)?;
    Ok(source == formatted)
}

/// Get the diff between original and formatted source, or `None` if nothing would change.
pub fn format_diff(source: &str) -> Result<Option<String>, SyntaxError> {
    format_diff_with_config(source, FormatConfig::default())
}

pub fn format_diff_with_config(source: &str, config: FormatConfig) -> Result<Option<String>, SyntaxError> {
    let formatted = format_source_with_config(source, config)?;

    if source == formatted {
        return Ok(None);
    }

    // Simple line-by-line diff
    let mut diff = String::new();
    let original_lines: Vec<&str> = source.lines().collect();
    let formatted_lines: Vec<&str> = formatted.lines().collect();

    for i in 0..original_lines.len().max(formatted_lines.len()) {
        let orig = original_lines.get(i).copied();
        let fmt = formatted_lines.get(i).copied();

        if orig != fmt {
            if let Some(line) = orig {
                diff.push_str(&format!("-{:4} | {}\n", i + 1, line));
            }
            if let Some(line) = fmt {
                diff.push_str(&format!("+{:4} | {}\n", i + 1, line));
            }
        }
    }

    Ok(Some(diff))
}

/// Pretty-printed JSON for a parsed file, spans included.
pub fn to_json(file: &SourceFile) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(file)
}
