//! Indented tree listing of a parsed file
//!
//! ```text
//! SourceFile
//!   imports
//!     "fmt"
//!   declarations
//!     Variable x
//!       Integer 42
//! ```

use super::config::{FormatConfig, QuoteStyle};
use super::formatter::quote_string;
use super::writer::FormatWriter;
use crate::frontend::ast::*;

/// Prints a [`SourceFile`] as an indented outline, one node per line.
pub struct TreePrinter {
    writer: FormatWriter,
}

impl TreePrinter {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            writer: FormatWriter::new(config),
        }
    }

    pub fn print(mut self, file: &SourceFile) -> String {
        self.writer.writeln("SourceFile");
        self.writer.indent();

        self.writer.writeln("imports");
        self.writer.indent();
        if file.imports.is_empty() {
            self.writer.writeln("(none)");
        }
        for path in file.import_paths() {
            self.writer.writeln(&quote_string(path, QuoteStyle::Double));
        }
        self.writer.dedent();

        self.writer.writeln("declarations");
        self.writer.indent();
        if file.declarations.is_empty() {
            self.writer.writeln("(none)");
        }
        for decl in file.declaration_nodes() {
            self.print_declaration(decl);
        }
        self.writer.dedent();

        self.writer.dedent();
        self.writer.finish()
    }

    fn print_declaration(&mut self, decl: &Declaration) {
        self.writer.writeln(&format!("{} {}", decl.kind, decl.name));
        self.writer.indent();
        let value = match &decl.value {
            Literal::Integer(n) => n.to_string(),
            Literal::String(s) => quote_string(s, QuoteStyle::Double),
        };
        self.writer.writeln(&format!("{} {}", decl.value.kind(), value));
        self.writer.dedent();
    }
}
