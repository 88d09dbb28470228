/// Top-level item parsing: imports and declarations.
impl<I: TokenSource> Parser<I> {
    // ========================================================================
    // Imports
    // ========================================================================

    /// Parse `import "path"`. The resulting span covers the path literal.
    fn import(&mut self) -> Result<Spanned<String>, SyntaxError> {
        self.expect_keyword(KeywordId::Import)?;
        let (path, span) = self.string_literal()?;
        tracing::trace!(%path, "import");
        Ok(Spanned::new(path, span))
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// Parse `func name = literal` or `var name = literal`.
    ///
    /// The resulting span runs from the keyword through the literal.
    fn declaration(&mut self) -> Result<Spanned<Declaration>, SyntaxError> {
        let start = self.current_span();
        let kind = if self.match_keyword(KeywordId::Func)? {
            DeclarationKind::Function
        } else if self.match_keyword(KeywordId::Var)? {
            DeclarationKind::Variable
        } else {
            return Err(self.unexpected(&[
                TokenClass::Keyword(KeywordId::Func),
                TokenClass::Keyword(KeywordId::Var),
            ]));
        };

        let name = self.identifier()?;
        self.expect_punct(PunctuationId::Eq)?;
        let (value, end) = self.literal()?;

        tracing::trace!(%kind, %name, "declaration");
        Ok(Spanned::new(Declaration { kind, name, value }, start.merge(end)))
    }
}
