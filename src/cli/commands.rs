//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! Commands that take several files keep going after a failure: each failing file is reported on
//! stderr and the command fails at the end.

use std::fs;
use std::path::{Path, PathBuf};

use crate::format::{self, FormatConfig, TreePrinter, format_diff_with_config, format_source_with_config};
use crate::frontend::ast::SourceFile;
use crate::frontend::diagnostics::{self, SyntaxError};
use crate::frontend::lexer::{Lexer, TokenKind};
use crate::frontend::parser;

use super::{CliError, CliResult, Emit, ExitCode};

/// Extension of Sapling source files.
pub const SOURCE_EXTENSION: &str = "sap";

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected before they are read.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(path: &Path) -> CliResult<String> {
    let metadata =
        fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path.display(), e)))
}

// ============================================================================
// parse
// ============================================================================

/// Parse one source text and render it as `emit`. `config` drives the tree and source printers.
///
/// ## Errors
///
/// The syntax errors found: the first one, or all of them with `recover`.
pub fn render_source(
    source: &str,
    emit: Emit,
    recover: bool,
    config: &FormatConfig,
) -> Result<String, Vec<SyntaxError>> {
    let file = if recover {
        parser::parse_recovering(source)?
    } else {
        parser::parse_str(source).map_err(|e| vec![e])?
    };
    Ok(emit_file(&file, emit, config))
}

fn emit_file(file: &SourceFile, emit: Emit, config: &FormatConfig) -> String {
    match emit {
        Emit::Tree => TreePrinter::new(config.clone()).print(file),
        Emit::Source => format::Formatter::new(config.clone()).format(file),
        Emit::Json => match format::to_json(file) {
            Ok(mut json) => {
                json.push('\n');
                json
            }
            // The tree holds only strings, integers and plain structs.
            Err(e) => format!("{{\"error\": {:?}}}\n", e.to_string()),
        },
    }
}

/// Parse each file and print it. Files are processed independently; a failure in one does not
/// stop the others.
pub fn parse_files(files: &[PathBuf], emit: Emit, recover: bool, config: &FormatConfig) -> CliResult<ExitCode> {
    let mut failed = 0;

    for path in files {
        tracing::debug!(path = %path.display(), ?emit, recover, "parsing file");

        let source = match read_source(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("{}", e.message);
                failed += 1;
                continue;
            }
        };

        match render_source(&source, emit, recover, config) {
            Ok(rendered) => {
                if files.len() > 1 {
                    println!("==> {} <==", path.display());
                }
                print!("{}", rendered);
            }
            Err(errors) => {
                tracing::debug!(path = %path.display(), errors = errors.len(), "parse failed");
                eprint!("{}", diagnostics::format_errors(&path.to_string_lossy(), &source, &errors));
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(CliError::failure(format!("{} of {} file(s) failed", failed, files.len())));
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// lex
// ============================================================================

/// Render a token stream, one token per line as `line:col  token`. Lexical errors are collected
/// and scanning continues after each one.
pub fn render_tokens(source: &str) -> (String, Vec<SyntaxError>) {
    let mut out = String::new();
    let mut errors = Vec::new();

    for result in Lexer::new(source) {
        match result {
            Ok(token) => {
                let position = token.span.to_string();
                out.push_str(&format!("{:<8} {}\n", position, token.kind));
                if token.kind == TokenKind::Eof {
                    break;
                }
            }
            Err(e) => errors.push(e.into()),
        }
    }

    (out, errors)
}

/// Lex and display tokens.
pub fn lex_file(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let (tokens, errors) = render_tokens(&source);
    print!("{}", tokens);

    if !errors.is_empty() {
        let msg = diagnostics::format_errors(&path.to_string_lossy(), &source, &errors);
        return Err(CliError::failure(msg.trim_end()));
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// fmt
// ============================================================================

/// Format Sapling source files.
pub fn format_files(path: &Path, check_mode: bool, diff_mode: bool, config: FormatConfig) -> CliResult<ExitCode> {
    let files = collect_sap_files(path);

    if files.is_empty() {
        return Err(CliError::failure(format!("No .{} files found", SOURCE_EXTENSION)));
    }

    let mut needs_formatting = false;
    let mut formatted_count = 0;
    let mut error_count = 0;

    for file_path in &files {
        let source = match read_source(file_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{}", e.message);
                error_count += 1;
                continue;
            }
        };

        match format_source_with_config(&source, config.clone()) {
            Ok(formatted) => {
                let changed = source != formatted;

                if diff_mode && changed {
                    println!("--- {}", file_path.display());
                    if let Ok(Some(diff)) = format_diff_with_config(&source, config.clone()) {
                        print!("{}", diff);
                    }
                    println!();
                }

                if check_mode {
                    if changed {
                        println!("Would reformat: {}", file_path.display());
                        needs_formatting = true;
                    }
                } else if diff_mode {
                    if changed {
                        needs_formatting = true;
                    }
                } else if changed {
                    if let Err(e) = fs::write(file_path, &formatted) {
                        eprintln!("Error writing {}: {}", file_path.display(), e);
                        error_count += 1;
                    } else {
                        println!("Formatted: {}", file_path.display());
                        formatted_count += 1;
                    }
                }
            }
            Err(e) => {
                eprint!("{}", diagnostics::format_error(&file_path.to_string_lossy(), &source, &e));
                error_count += 1;
            }
        }
    }

    if check_mode || diff_mode {
        if needs_formatting {
            let msg = if diff_mode {
                "need formatting"
            } else {
                "would be reformatted"
            };
            return Err(CliError::failure(format!("\n{} file(s) {}", files.len(), msg)));
        } else if error_count == 0 {
            println!("✓ {} file(s) already formatted", files.len());
        }
    } else {
        println!("\n✓ {} file(s) formatted, {} error(s)", formatted_count, error_count);
    }

    if error_count > 0 {
        return Err(CliError::new("", ExitCode::FAILURE));
    }

    Ok(ExitCode::SUCCESS)
}

/// Collect `.sap` files under `path`, sorted. Hidden directories and `target` are skipped.
pub fn collect_sap_files(path: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if path.is_file() {
        if path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
            files.push(path.to_path_buf());
        }
    } else if path.is_dir() {
        match fs::read_dir(path) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let entry_path = entry.path();
                    if entry_path.is_dir() {
                        let name = entry_path.file_name().and_then(|n| n.to_str()).unwrap_or("");
                        if !name.starts_with('.') && name != "target" {
                            files.extend(collect_sap_files(&entry_path));
                        }
                    } else if entry_path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
                        files.push(entry_path);
                    }
                }
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "cannot read directory"),
        }
    }

    files.sort();
    files
}
