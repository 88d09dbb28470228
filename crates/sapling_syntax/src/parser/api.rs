// ============================================================================
// Public API
// ============================================================================

/// Lex and parse source text, stopping at the first error.
///
/// Tokens are pulled from the lexer on demand; nothing is lexed past the first error.
///
/// ## Errors
/// The first [`SyntaxError`]: either a lexical error or a syntax error.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_str(source: &str) -> Result<SourceFile, SyntaxError> {
    Parser::new(Lexer::new(source)).parse()
}

/// Parse an already-lexed token sequence.
///
/// The sequence normally ends with [`TokenKind::Eof`]; if it does not, end of input is assumed after
/// the last token.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<SourceFile, SyntaxError> {
    Parser::new(tokens.iter().cloned().map(Ok::<Token, LexError>)).parse()
}

/// Lex and parse source text, reporting every error found.
///
/// ## Errors
/// All lexical and syntax errors, in source order.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_recovering(source: &str) -> Result<SourceFile, Vec<SyntaxError>> {
    Parser::new(Lexer::new(source)).parse_all()
}
