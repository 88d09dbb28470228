/// Terminal parsing: identifiers and literals.
impl<I: TokenSource> Parser<I> {
    fn identifier(&mut self) -> Result<Ident, SyntaxError> {
        if !matches!(self.peek().kind, TokenKind::Ident(_)) {
            return Err(self.unexpected(&[TokenClass::Ident]));
        }
        match self.advance()?.kind {
            TokenKind::Ident(name) => Ok(name),
            _ => unreachable!("checked above"),
        }
    }

    /// Parse a string literal token, returning its decoded value and span.
    fn string_literal(&mut self) -> Result<(String, Span), SyntaxError> {
        if !matches!(self.peek().kind, TokenKind::String(_)) {
            return Err(self.unexpected(&[TokenClass::String]));
        }
        let token = self.advance()?;
        match token.kind {
            TokenKind::String(value) => Ok((value, token.span)),
            _ => unreachable!("checked above"),
        }
    }

    /// Parse an integer or string literal, returning it with its span.
    ///
    /// ## Errors
    /// - [`ParseError::IntegerOverflow`] when the digits do not fit in an `i64`.
    fn literal(&mut self) -> Result<(Literal, Span), SyntaxError> {
        if !matches!(self.peek().kind, TokenKind::Int(_) | TokenKind::String(_)) {
            return Err(self.unexpected(&[TokenClass::Int, TokenClass::String]));
        }
        let token = self.advance()?;
        match token.kind {
            TokenKind::Int(digits) => match digits.parse::<i64>() {
                Ok(n) => Ok((Literal::Integer(n), token.span)),
                Err(_) => Err(ParseError::IntegerOverflow {
                    digits,
                    span: token.span,
                }
                .into()),
            },
            TokenKind::String(value) => Ok((Literal::String(value), token.span)),
            _ => unreachable!("checked above"),
        }
    }
}
