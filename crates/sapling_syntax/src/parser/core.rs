/// Parser core types and entrypoints.
///
/// This chunk defines the [`Parser`] type and its two driving modes:
/// - [`Parser::parse`]: fail-fast, returns the first error
/// - [`Parser::parse_all`]: collects every error, resynchronizing at declaration keywords
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`.

/// Anything that yields lexer output: a live [`Lexer`] or a replayed token slice.
pub trait TokenSource: Iterator<Item = Result<Token, LexError>> {}

impl<T: Iterator<Item = Result<Token, LexError>>> TokenSource for T {}

/// Parser state.
///
/// ## Notes
/// - One token of lookahead (`current`); the next token is pulled only when `current` is consumed.
/// - Tokens are never buffered beyond that lookahead.
pub struct Parser<I> {
    tokens: I,
    current: Token,
    /// Number of tokens consumed so far; used to detect "no progress" during recovery.
    consumed: usize,
    /// Whether lexical errors are collected (recovery mode) or returned immediately.
    recover: bool,
    /// A lexical error was recorded while pulling `current`.
    lex_error_before_current: bool,
    errors: Vec<SyntaxError>,
}

impl<I: TokenSource> Parser<I> {
    /// Create a new parser over a token source.
    ///
    /// ## Parameters
    /// - `tokens`: usually a [`Lexer`]; anything yielding `Result<Token, LexError>` works.
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            current: Token::new(TokenKind::Eof, Span::default()),
            consumed: 0,
            recover: false,
            lex_error_before_current: false,
            errors: Vec::new(),
        }
    }

    /// Parse the whole token stream into a [`SourceFile`], stopping at the first error.
    ///
    /// ## Errors
    /// Returns the first lexical or syntactic error. No partial tree is returned.
    pub fn parse(mut self) -> Result<SourceFile, SyntaxError> {
        self.recover = false;
        self.source_file()
    }

    /// Parse the whole token stream, collecting every error.
    ///
    /// After a syntax error the parser skips ahead to the next `import`, `func` or `var` keyword and
    /// continues. Lexical errors are recorded and the offending input skipped.
    ///
    /// ## Errors
    /// Returns all collected errors, in source order, if there was at least one.
    pub fn parse_all(mut self) -> Result<SourceFile, Vec<SyntaxError>> {
        self.recover = true;
        let result = self.source_file();
        if let Err(e) = result.as_ref() {
            self.errors.push(e.clone());
        }
        if self.errors.is_empty() {
            return result.map_err(|e| vec![e]);
        }
        self.errors.sort_by_key(|e| e.span().start);
        Err(self.errors)
    }

    /// Assemble the [`SourceFile`]: imports and declarations, in the order they are parsed.
    fn source_file(&mut self) -> Result<SourceFile, SyntaxError> {
        // Prime the lookahead.
        self.current = self.pull()?;

        let mut file = SourceFile::default();

        loop {
            let consumed_before = self.consumed;
            match self.item(&mut file) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    if !self.recover {
                        return Err(e);
                    }
                    // A production cut short by a lexical error would only repeat it. A dispatch error at
                    // the top level is a grammar violation of its own and is always kept.
                    let cascaded = self.lex_error_before_current
                        && self.consumed != consumed_before
                        && matches!(e, SyntaxError::Parse(ParseError::UnexpectedToken { .. }));
                    if !cascaded {
                        self.errors.push(e);
                    }
                    self.synchronize(consumed_before)?;
                }
            }
        }

        tracing::debug!(
            imports = file.imports.len(),
            declarations = file.declarations.len(),
            "parsed source file"
        );
        Ok(file)
    }

    /// Parse one top-level item into `file`.
    ///
    /// Returns `Ok(false)` at end of input. Imports are only accepted before the first declaration.
    fn item(&mut self, file: &mut SourceFile) -> Result<bool, SyntaxError> {
        match self.peek().kind {
            TokenKind::Eof => Ok(false),
            TokenKind::Keyword(KeywordId::Import) if file.declarations.is_empty() => {
                let import = self.import()?;
                file.imports.push(import);
                Ok(true)
            }
            TokenKind::Keyword(KeywordId::Func | KeywordId::Var) => {
                let decl = self.declaration()?;
                file.declarations.push(decl);
                Ok(true)
            }
            _ => {
                let expected: &[TokenClass] = if file.declarations.is_empty() {
                    &[
                        TokenClass::Keyword(KeywordId::Import),
                        TokenClass::Keyword(KeywordId::Func),
                        TokenClass::Keyword(KeywordId::Var),
                        TokenClass::Eof,
                    ]
                } else {
                    &[
                        TokenClass::Keyword(KeywordId::Func),
                        TokenClass::Keyword(KeywordId::Var),
                        TokenClass::Eof,
                    ]
                };
                Err(self.unexpected(expected))
            }
        }
    }
}
