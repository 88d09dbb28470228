use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use sapling::frontend::lexer::{TokenKind, lex};
use sapling_core::lang::keywords::KEYWORDS;
use sapling_core::lang::punctuation::PUNCTUATION;

/// Guardrail against stringly-typed vocabulary checks.
///
/// Looks for patterns like `== "func"` or `"var" =>` in Rust sources where callers should go through the
/// `sapling_core::lang` registries instead.
///
/// Notes:
/// - Occurrences in `crates/sapling_core/src/lang/**` (the registries themselves) and in `tests/` are allowed.
/// - This is a coarse net, meant to catch "oops I added a string match".
#[test]
fn no_stringly_vocab_checks_in_rust_sources() {
    let root = repo_root();
    let spellings = vocabulary_spellings();
    let mut offenders: Vec<(PathBuf, usize, String)> = Vec::new();

    let targets = [root.join("src"), root.join("crates")];
    for dir in targets {
        if dir.exists() {
            scan_dir(&root, &dir, &spellings, &mut offenders);
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::new();
        msg.push_str("Found potential stringly-typed vocabulary checks. Prefer sapling_core registries.\n\n");
        for (path, line_no, line) in offenders.into_iter().take(80) {
            msg.push_str(&format!(
                "- {}:{}: {}\n",
                path.strip_prefix(&root).unwrap_or(&path).display(),
                line_no,
                line.trim()
            ));
        }
        panic!("{msg}");
    }
}

/// Every registry spelling must lex to the token it names.
#[test]
fn lexer_recognizes_every_registry_spelling() {
    for kw in KEYWORDS {
        for spelling in std::iter::once(kw.canonical).chain(kw.aliases.iter().copied()) {
            let tokens = lex(spelling).unwrap();
            assert_eq!(tokens[0].kind, TokenKind::Keyword(kw.id), "keyword {spelling:?}");
        }
    }
    for p in PUNCTUATION {
        for spelling in std::iter::once(p.canonical).chain(p.aliases.iter().copied()) {
            let tokens = lex(spelling).unwrap();
            assert_eq!(tokens[0].kind, TokenKind::Punctuation(p.id), "punctuation {spelling:?}");
        }
    }
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn vocabulary_spellings() -> Vec<&'static str> {
    let mut set: BTreeSet<&'static str> = BTreeSet::new();

    for kw in KEYWORDS {
        set.insert(kw.canonical);
        for &a in kw.aliases {
            set.insert(a);
        }
    }
    for p in PUNCTUATION {
        set.insert(p.canonical);
        for &a in p.aliases {
            set.insert(a);
        }
    }

    set.into_iter().collect()
}

fn is_allowed_file(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    if !rel.ends_with(".rs") {
        return true;
    }
    // Registries define the spellings; allow them.
    if rel.starts_with("crates/sapling_core/src/lang/") {
        return true;
    }
    // Tests can mention spellings directly.
    if rel.starts_with("tests/") || rel.contains("/tests/") {
        return true;
    }
    false
}

fn scan_dir(root: &Path, dir: &Path, spellings: &[&'static str], offenders: &mut Vec<(PathBuf, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan_dir(root, &path, spellings, offenders);
            continue;
        }
        if is_allowed_file(root, &path) {
            continue;
        }
        let Ok(contents) = fs::read_to_string(&path) else {
            continue;
        };
        for (idx, line) in contents.lines().enumerate() {
            if is_suspicious_line(line, spellings) {
                offenders.push((path.clone(), idx + 1, line.to_string()));
            }
        }
    }
}

fn is_suspicious_line(line: &str, spellings: &[&'static str]) -> bool {
    // Avoid false positives in comments/docstrings.
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") {
        return false;
    }

    // Only flag explicit equality checks or match arms for known vocabulary spellings:
    // - `... == "spelling"`
    // - `"spelling" => ...`
    for s in spellings {
        let eq = format!("== \"{s}\"");
        let arm = format!("\"{s}\" =>");
        if line.contains(&eq) || line.contains(&arm) {
            return true;
        }
    }

    false
}
