//! Diagnostic rendering
//!
//! The error types live in `sapling_syntax::diagnostics`. This module renders them against the
//! source text with miette's graphical report handler.

use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource, Report};

pub use sapling_syntax::diagnostics::*;

/// Render an error with source context.
///
/// The output has no ANSI colors so it reads the same in a terminal, a log file or a test.
pub fn format_error(file_name: &str, source: &str, error: &SyntaxError) -> String {
    let report = Report::new(error.clone()).with_source_code(NamedSource::new(file_name, source.to_string()));
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor()).with_width(120);

    let mut out = String::new();
    if handler.render_report(&mut out, &*report).is_err() {
        // Fall back to a single line.
        out = format!("{file_name}:{}: {error}\n", error.span());
    }
    out
}

/// Render several errors from the same file, one report after another.
pub fn format_errors(file_name: &str, source: &str, errors: &[SyntaxError]) -> String {
    errors
        .iter()
        .map(|err| format_error(file_name, source, err))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::parser;

    #[test]
    fn test_format_error_names_file_and_location() {
        let source = "var = 5\n";
        let err = parser::parse_str(source).unwrap_err();
        let rendered = format_error("demo.sap", source, &err);

        assert!(rendered.contains("sapling::parse::unexpected_token"), "{rendered}");
        assert!(rendered.contains("expected identifier, found `=`"), "{rendered}");
        assert!(rendered.contains("demo.sap:1:5"), "{rendered}");
    }

    #[test]
    fn test_format_error_includes_help() {
        let source = "var x = \"unterminated";
        let err = parser::parse_str(source).unwrap_err();
        let rendered = format_error("demo.sap", source, &err);

        assert!(rendered.contains("unterminated string literal"), "{rendered}");
        assert!(rendered.contains("strings cannot span lines"), "{rendered}");
    }

    #[test]
    fn test_format_errors_renders_each() {
        let source = "var = 1\nfunc = 2\n";
        let errors = parser::parse_recovering(source).unwrap_err();
        let rendered = format_errors("multi.sap", source, &errors);

        assert_eq!(errors.len(), 2);
        assert!(rendered.contains("multi.sap:1:5"), "{rendered}");
        assert!(rendered.contains("multi.sap:2:6"), "{rendered}");
    }
}
