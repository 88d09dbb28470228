//! CLI module for Sapling
//!
//! ## Commands
//!
//! - `sapling [FILES]...` - Parse files and print their tree listing
//! - `parse [FILES]... [--emit tree|source|json] [--recover] [--indent N]` - Parse files and print them
//! - `lex <FILE>` - Print the token stream
//! - `fmt [PATH]` - Format `.sap` source files
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use crate::format::{FormatConfig, QuoteStyle};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = crate::version::SAPLING_VERSION;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Parser and formatter for the Sapling declaration language
#[derive(Parser, Debug)]
#[command(name = "sapling")]
#[command(version = VERSION)]
#[command(about = "Parser and formatter for the Sapling declaration language", long_about = None)]
#[command(arg_required_else_help = true, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Files to parse (default action when no subcommand given)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse files and print the result
    Parse {
        /// Source files to parse
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,
        /// Output representation
        #[arg(long, value_enum, default_value_t = Emit::Tree)]
        emit: Emit,
        /// Report every error in a file instead of stopping at the first
        #[arg(long)]
        recover: bool,
        /// Indentation width of the tree listing
        #[arg(long, value_name = "N", default_value_t = 2)]
        indent: usize,
    },

    /// Print the token stream of a file
    Lex {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Format Sapling source files
    Fmt {
        /// File or directory to format
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
        /// Check formatting without modifying files
        #[arg(long)]
        check: bool,
        /// Show diff of formatting changes
        #[arg(long)]
        diff: bool,
        /// Use single quotes for string literals
        #[arg(long)]
        single_quotes: bool,
    },
}

/// What `parse` prints for each successfully parsed file.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emit {
    /// Indented tree listing
    #[default]
    Tree,
    /// Canonical source
    Source,
    /// JSON, spans included
    Json,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Parse {
            files,
            emit,
            recover,
            indent,
        }) => commands::parse_files(&files, emit, recover, &FormatConfig::new().with_indent_width(indent)),
        Some(Command::Lex { file }) => commands::lex_file(&file),
        Some(Command::Fmt {
            path,
            check,
            diff,
            single_quotes,
        }) => commands::format_files(&path, check, diff, fmt_config(single_quotes)),
        None => {
            if cli.files.is_empty() {
                // Unreachable through `run()` (clap shows help), but keep `execute` total.
                return Err(CliError::failure("error: no input files"));
            }
            commands::parse_files(&cli.files, Emit::Tree, false, &FormatConfig::default())
        }
    }
}

fn fmt_config(single_quotes: bool) -> FormatConfig {
    let quote_style = if single_quotes {
        QuoteStyle::Single
    } else {
        QuoteStyle::Double
    };
    FormatConfig::new().with_quote_style(quote_style)
}

// ============================================================================
// Tests
// ============================================================================
