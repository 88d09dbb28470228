/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Pulling tokens from the source (`pull`, `advance`)
/// - Matching / expecting keywords and punctuation
/// - Error construction (`unexpected`)
/// - Error recovery (`synchronize`)
impl<I: TokenSource> Parser<I> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Pull the next token from the source.
    ///
    /// In recovery mode lexical errors are recorded and skipped; otherwise the first one is returned.
    /// A source that runs dry without an `Eof` token is treated as ending at the current token.
    fn pull(&mut self) -> Result<Token, SyntaxError> {
        self.lex_error_before_current = false;
        loop {
            match self.tokens.next() {
                Some(Ok(token)) => return Ok(token),
                Some(Err(e)) if self.recover => {
                    self.errors.push(e.into());
                    self.lex_error_before_current = true;
                }
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(eof_after(&self.current)),
            }
        }
    }

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        self.peek().kind.is(TokenClass::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        &self.current
    }

    fn current_span(&self) -> Span {
        self.current.span
    }

    /// Consume the current token and return it. At end of input this returns `Eof` without moving.
    fn advance(&mut self) -> Result<Token, SyntaxError> {
        if self.is_at_end() {
            return Ok(self.current.clone());
        }
        let next = self.pull()?;
        self.consumed += 1;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> Result<bool, SyntaxError> {
        if self.check_keyword(id) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect_keyword(&mut self, id: KeywordId) -> Result<Token, SyntaxError> {
        if self.check_keyword(id) {
            self.advance()
        } else {
            Err(self.unexpected(&[TokenClass::Keyword(id)]))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId) -> Result<Token, SyntaxError> {
        if self.check_punct(id) {
            self.advance()
        } else {
            Err(self.unexpected(&[TokenClass::Punctuation(id)]))
        }
    }

    /// Build an "expected X, found <current>" error at the current token.
    fn unexpected(&self, expected: &[TokenClass]) -> SyntaxError {
        ParseError::UnexpectedToken {
            expected: expected.to_vec(),
            found: self.peek().kind.clone(),
            span: self.current_span(),
        }
        .into()
    }

    /// Return `true` if the current token starts a top-level item. Every keyword does.
    fn at_item_start(&self) -> bool {
        self.peek().keyword_id().is_some()
    }

    /// Skip to the next top-level item after an error.
    ///
    /// If the failed production consumed nothing, the offending token is skipped first so the
    /// parser always makes progress.
    fn synchronize(&mut self, consumed_before: usize) -> Result<(), SyntaxError> {
        if self.consumed == consumed_before {
            self.advance()?;
        }
        while !self.is_at_end() && !self.at_item_start() {
            self.advance()?;
        }
        Ok(())
    }
}

/// Synthesize the `Eof` that directly follows `last`, for token sources that end without one.
fn eof_after(last: &Token) -> Token {
    let span = last.span;
    // Columns count chars. Only string payloads can hold non-ASCII text, and the lexer copies it
    // verbatim, so the raw text carries the same surplus bytes as the payload.
    let surplus = match &last.kind {
        TokenKind::String(value) => value.len() - value.chars().count(),
        _ => 0,
    };
    let width = span.len().saturating_sub(surplus);
    Token::new(TokenKind::Eof, Span::new(span.end, span.end, span.line, span.column + width))
}
