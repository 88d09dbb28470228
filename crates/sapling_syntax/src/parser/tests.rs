#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    fn parse_ok(source: &str) -> SourceFile {
        match parse_str(source) {
            Ok(file) => file,
            Err(e) => panic!("failed to parse {source:?}: {e}"),
        }
    }

    fn parse_err(source: &str) -> SyntaxError {
        match parse_str(source) {
            Ok(file) => panic!("expected an error for {source:?}, got {file:?}"),
            Err(e) => e,
        }
    }

    #[test]
    fn test_import_only() {
        let file = parse_ok(r#"import "fmt""#);
        assert_eq!(file.import_paths().collect::<Vec<_>>(), vec!["fmt"]);
        assert!(file.declarations.is_empty());
        assert_eq!(file.imports[0].span, Span::new(7, 12, 1, 8));
    }

    #[test]
    fn test_variable_declaration() {
        let file = parse_ok("var x = 42");
        assert!(file.imports.is_empty());
        let decl = &file.declarations[0];
        assert_eq!(decl.node.kind, DeclarationKind::Variable);
        assert_eq!(decl.node.name, "x");
        assert_eq!(decl.node.value, Literal::Integer(42));
        assert_eq!(decl.span, Span::new(0, 10, 1, 1));
    }

    #[test]
    fn test_function_declaration() {
        let file = parse_ok(r#"func f = "hello""#);
        let decl = &file.declarations[0];
        assert_eq!(decl.node.kind, DeclarationKind::Function);
        assert_eq!(decl.node.name, "f");
        assert_eq!(decl.node.value, Literal::String("hello".to_string()));
    }

    #[test]
    fn test_unterminated_string_is_lex_error() {
        let err = parse_err(r#"var x = "unterminated"#);
        assert_eq!(
            err,
            SyntaxError::Lex(LexError::UnterminatedString {
                span: Span::new(8, 21, 1, 9)
            })
        );
    }

    #[test]
    fn test_missing_identifier() {
        let err = parse_err("var = 5");
        match &err {
            SyntaxError::Parse(ParseError::UnexpectedToken { expected, found, span }) => {
                assert_eq!(expected, &vec![TokenClass::Ident]);
                assert_eq!(found, &TokenKind::Punctuation(PunctuationId::Eq));
                assert_eq!(*span, Span::new(4, 5, 1, 5));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "expected identifier, found `=`");
    }

    #[test]
    fn test_empty_and_trivia_only_input() {
        assert!(parse_ok("").is_empty());
        assert!(parse_ok("  // nothing here\n/* or here */\n").is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let source = r#"
import "fmt"
import 'os'

var a = 1
func b = "two"
var c = 3
"#;
        let file = parse_ok(source);
        assert_eq!(file.import_paths().collect::<Vec<_>>(), vec!["fmt", "os"]);
        let names: Vec<&str> = file.declaration_nodes().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        let kinds: Vec<DeclarationKind> = file.declaration_nodes().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![DeclarationKind::Variable, DeclarationKind::Function, DeclarationKind::Variable]
        );
    }

    #[test]
    fn test_declarations_may_share_a_line() {
        let file = parse_ok("var a = 1 var b = 2");
        assert_eq!(file.declarations.len(), 2);
        assert_eq!(file.declarations[1].span, Span::new(10, 19, 1, 11));
    }

    #[test]
    fn test_import_after_declaration_is_rejected() {
        let err = parse_err("var x = 1\nimport \"fmt\"");
        assert_eq!(err.to_string(), "expected `func`, `var` or end of input, found `import`");
        assert_eq!(err.span(), Span::new(10, 16, 2, 1));
    }

    #[test]
    fn test_stray_token_at_top_level() {
        let err = parse_err("x = 1");
        assert_eq!(
            err.to_string(),
            "expected `import`, `func`, `var` or end of input, found identifier `x`"
        );
    }

    #[test]
    fn test_import_requires_string_path() {
        let err = parse_err("import fmt");
        assert_eq!(err.to_string(), "expected string literal, found identifier `fmt`");
    }

    #[test]
    fn test_missing_equals() {
        let err = parse_err("var x 42");
        assert_eq!(err.to_string(), "expected `=`, found integer literal `42`");
    }

    #[test]
    fn test_missing_literal_at_end_of_input() {
        let err = parse_err("func f =");
        assert_eq!(
            err.to_string(),
            "expected integer literal or string literal, found end of input"
        );
        assert_eq!(err.span(), Span::new(8, 8, 1, 9));
    }

    #[test]
    fn test_identifier_is_not_a_literal() {
        let err = parse_err("var x = y");
        assert!(matches!(
            err,
            SyntaxError::Parse(ParseError::UnexpectedToken { found: TokenKind::Ident(ref name), .. }) if name == "y"
        ));
    }

    #[test]
    fn test_keyword_cannot_be_a_name() {
        let err = parse_err("var func = 1");
        assert_eq!(err.to_string(), "expected identifier, found `func`");
    }

    #[test]
    fn test_integer_bounds() {
        let file = parse_ok("var max = 9223372036854775807");
        assert_eq!(file.declarations[0].node.value, Literal::Integer(i64::MAX));

        let err = parse_err("var big = 9223372036854775808");
        assert_eq!(
            err,
            SyntaxError::Parse(ParseError::IntegerOverflow {
                digits: "9223372036854775808".to_string(),
                span: Span::new(10, 29, 1, 11)
            })
        );
    }

    #[test]
    fn test_leading_zeros() {
        let file = parse_ok("var x = 007");
        assert_eq!(file.declarations[0].node.value, Literal::Integer(7));
    }

    #[test]
    fn test_negative_numbers_are_not_literals() {
        let err = parse_err("var x = -1");
        assert!(err.is_lex());
    }

    #[test]
    fn test_fail_fast_stops_at_first_error() {
        // The unterminated string on line 3 is never reached.
        let err = parse_err("var = 1\nvar y = 2\nvar z = \"oops");
        assert!(!err.is_lex());
        assert_eq!(err.span().line, 1);
    }

    #[test]
    fn test_parse_token_slice() {
        let tokens = lex("import \"fmt\"\nvar x = 42").unwrap();
        let file = parse(&tokens).unwrap();
        assert!(file.same_structure(&parse_ok("import \"fmt\"\nvar x = 42")));
        assert_eq!(file, parse_ok("import \"fmt\"\nvar x = 42"));
    }

    #[test]
    fn test_parse_token_slice_without_eof() {
        let mut tokens = lex("var x = 42").unwrap();
        tokens.pop();
        let file = parse(&tokens).unwrap();
        assert_eq!(file.declarations.len(), 1);

        tokens.pop();
        let err = parse(&tokens).unwrap_err();
        assert!(matches!(
            err,
            SyntaxError::Parse(ParseError::UnexpectedToken { found: TokenKind::Eof, .. })
        ));
    }

    #[test]
    fn test_synthesized_eof_counts_chars_after_string() {
        let tokens = lex("import \"h\u{e9}llo\"").unwrap();
        let eof = eof_after(&tokens[1]);
        assert_eq!(eof.span, Span::new(15, 15, 1, 15));

        let tokens = lex("var count").unwrap();
        assert_eq!(eof_after(&tokens[1]).span, Span::new(9, 9, 1, 10));
    }

    #[test]
    fn test_recovery_collects_every_error() {
        let source = "var = 1\nvar ok = 2\nfunc f \"x\"\nvar last = 3\n";
        let errors = parse_recovering(source).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].to_string(), "expected identifier, found `=`");
        assert_eq!(errors[0].span().line, 1);
        assert_eq!(errors[1].to_string(), "expected `=`, found string literal \"x\"");
        assert_eq!(errors[1].span().line, 3);
    }

    #[test]
    fn test_recovery_mixes_lex_and_parse_errors_in_order() {
        let source = "var a = @\nvar b = \"open\nvar = 3\n";
        let errors = parse_recovering(source).unwrap_err();
        let lines: Vec<usize> = errors.iter().map(|e| e.span().line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
        assert!(errors[0].is_lex());
        assert!(errors[1].is_lex());
        assert!(!errors[2].is_lex());
    }

    #[test]
    fn test_recovery_resumes_at_keyword_inside_failed_declaration() {
        // The second `var` is both the error site and the start of the next declaration.
        let errors = parse_recovering("var var y = 1\nvar = 2").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].span(), Span::new(4, 7, 1, 5));
        assert_eq!(errors[1].span().line, 2);
    }

    #[test]
    fn test_recovery_reports_misplaced_import_once() {
        let errors = parse_recovering("var x = 1\nimport \"fmt\"\nvar y = 2").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].span().line, 2);
    }

    #[test]
    fn test_recovery_keeps_misplaced_import_after_lex_error() {
        let errors = parse_recovering("var x = 1\n@ import \"a\"").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], SyntaxError::Lex(LexError::UnexpectedChar { ch: '@', .. })));
        assert_eq!(
            errors[1],
            SyntaxError::Parse(ParseError::UnexpectedToken {
                expected: vec![
                    TokenClass::Keyword(KeywordId::Func),
                    TokenClass::Keyword(KeywordId::Var),
                    TokenClass::Eof,
                ],
                found: TokenKind::Keyword(KeywordId::Import),
                span: Span::new(12, 18, 2, 3),
            })
        );
    }

    #[test]
    fn test_recovery_drops_error_repeating_a_lex_error() {
        // `@` ends the first declaration early; the missing literal is not reported again.
        let errors = parse_recovering("var a = @\nvar b = 2").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_lex());
    }

    #[test]
    fn test_recovery_on_valid_input_matches_fail_fast() {
        let source = "import \"a\"\nfunc f = 'x'\nvar v = 10\n";
        assert_eq!(parse_recovering(source).unwrap(), parse_ok(source));
    }
}
