#![no_main]

use libfuzzer_sys::fuzz_target;
use sapling::format::format_source;
use sapling::frontend::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Lazy and eager pipelines must agree
        let direct = parser::parse_str(s);
        if let Ok(tokens) = lexer::lex(s) {
            assert_eq!(parser::parse(&tokens), direct);
        }

        // Recovery must never panic, and agrees with fail-fast on clean input
        let recovered = parser::parse_recovering(s);
        if let Ok(file) = &direct {
            assert_eq!(recovered.as_ref(), Ok(file));
        }

        // Formatted output must parse back to the same structure
        if let (Ok(file), Ok(formatted)) = (&direct, format_source(s)) {
            let reparsed = parser::parse_str(&formatted).expect("formatter output must parse");
            assert!(reparsed.same_structure(file));
        }
    }
});
