//! Source printer for Sapling
//!
//! Walks the tree and emits canonical source: imports first, then declarations, one per line.

use super::config::{FormatConfig, QuoteStyle};
use super::writer::FormatWriter;
use crate::frontend::ast::*;
use sapling_core::lang::keywords::{self, KeywordId};
use sapling_core::lang::punctuation::{self, PunctuationId};

/// Formatter that transforms a parsed file back to formatted source code
pub struct Formatter {
    writer: FormatWriter,
}

impl Formatter {
    /// Create a new formatter with the given config
    pub fn new(config: FormatConfig) -> Self {
        Self {
            writer: FormatWriter::new(config),
        }
    }

    /// Format a file and return the formatted source
    pub fn format(mut self, file: &SourceFile) -> String {
        self.format_source_file(file);
        self.writer.finish()
    }

    // ========================================================================
    // File
    // ========================================================================

    fn format_source_file(&mut self, file: &SourceFile) {
        for import in file.import_paths() {
            self.format_import(import);
        }

        if !file.imports.is_empty() && !file.declarations.is_empty() && self.writer.config().blank_line_after_imports {
            self.writer.blank_lines(1);
        }

        for decl in file.declaration_nodes() {
            self.format_declaration(decl);
        }
    }

    fn format_import(&mut self, path: &str) {
        let quoted = self.quote(path);
        self.writer.write(keywords::as_str(KeywordId::Import));
        self.writer.write(" ");
        self.writer.writeln(&quoted);
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn format_declaration(&mut self, decl: &Declaration) {
        let keyword = match decl.kind {
            DeclarationKind::Function => KeywordId::Func,
            DeclarationKind::Variable => KeywordId::Var,
        };
        let value = self.format_literal(&decl.value);
        let line = format!(
            "{} {} {} {}",
            keywords::as_str(keyword),
            decl.name,
            punctuation::as_str(PunctuationId::Eq),
            value
        );
        self.writer.writeln(&line);
    }

    fn format_literal(&self, literal: &Literal) -> String {
        match literal {
            Literal::Integer(n) => n.to_string(),
            Literal::String(s) => self.quote(s),
        }
    }

    fn quote(&self, value: &str) -> String {
        quote_string(value, self.writer.config().quote_style)
    }
}

/// Quote and escape a string value so it lexes back to the same value.
pub fn quote_string(value: &str, style: QuoteStyle) -> String {
    let delim = style.delimiter();
    let mut out = String::with_capacity(value.len() + 2);
    out.push(delim);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::parser::parse_str;

    fn format(source: &str) -> String {
        Formatter::new(FormatConfig::default()).format(&parse_str(source).unwrap())
    }

    #[test]
    fn test_canonical_layout() {
        let source = "import   'fmt'  import \"os\" var x=42 /* c */ func f = 'hi'";
        assert_eq!(
            format(source),
            "import \"fmt\"\nimport \"os\"\n\nvar x = 42\nfunc f = \"hi\"\n"
        );
    }

    #[test]
    fn test_empty_file_formats_to_nothing() {
        assert_eq!(format(""), "");
        assert_eq!(format("// only a comment\n"), "");
    }

    #[test]
    fn test_no_blank_line_without_both_sections() {
        assert_eq!(format("import \"a\""), "import \"a\"\n");
        assert_eq!(format("var a = 1"), "var a = 1\n");
    }

    #[test]
    fn test_blank_line_after_imports_can_be_disabled() {
        let config = FormatConfig::new().with_blank_line_after_imports(false);
        let file = parse_str("import \"a\"\nvar a = 1").unwrap();
        assert_eq!(Formatter::new(config).format(&file), "import \"a\"\nvar a = 1\n");
    }

    #[test]
    fn test_single_quote_style() {
        let config = FormatConfig::new().with_quote_style(QuoteStyle::Single);
        let file = parse_str(r#"func f = "it's""#).unwrap();
        assert_eq!(Formatter::new(config).format(&file), "func f = 'it\\'s'\n");
    }

    #[test]
    fn test_quote_string_escapes() {
        assert_eq!(quote_string("a\"b", QuoteStyle::Double), r#""a\"b""#);
        assert_eq!(quote_string("a'b", QuoteStyle::Double), r#""a'b""#);
        assert_eq!(quote_string("tab\there\n", QuoteStyle::Double), r#""tab\there\n""#);
        assert_eq!(quote_string("back\\slash", QuoteStyle::Single), r"'back\\slash'");
        assert_eq!(quote_string("nul\0cr\r", QuoteStyle::Double), r#""nul\0cr\r""#);
    }

    #[test]
    fn test_unknown_escape_survives_round_trip() {
        let once = format(r#"var s = "\q""#);
        assert_eq!(once, "var s = \"\\\\q\"\n");
        let file = parse_str(&once).unwrap();
        assert_eq!(file.declarations[0].node.value, Literal::String("\\q".to_string()));
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let once = format("import 'x'\nvar big = 9223372036854775807\nfunc s = 'a\\tb'");
        assert_eq!(format(&once), once);
    }
}
