use tinyc_lex::{Token, TokenKind};
use tinyc_util::{ParserError, ParserResult, SourceLocation, Symbol};

/// A recursive-descent parser over a fully materialized token stream.
///
/// The frontend is LL(1): every production below looks at exactly
/// [`Parser::current`] before deciding how to proceed, never further
/// ahead. Tokenizing up front (rather than driving [`tinyc_lex::Lexer`]
/// lazily) keeps the parser itself free of lexer error plumbing — by the
/// time a `Parser` exists, the whole token stream is known good.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    filename: Symbol,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, filename: Symbol) -> Self {
        Self {
            tokens,
            pos: 0,
            filename,
        }
    }

    pub(crate) fn filename(&self) -> Symbol {
        self.filename
    }

    /// The token the parser is currently looking at. Never runs past the
    /// final `EndOfFile` token.
    pub(crate) fn current(&self) -> &Token {
        self.tokens
            .get(self.pos)
            .unwrap_or_else(|| self.tokens.last().expect("token stream always has EndOfFile"))
    }

    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind()
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.current().location()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::EndOfFile
    }

    /// Consumes and returns the current token, advancing by one unless
    /// already at `EndOfFile`.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consumes the current token if it matches `kind`.
    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if it matches `kind`, else raises a
    /// [`ParserError`] naming what was expected.
    pub(crate) fn expect(&mut self, kind: TokenKind, what: &str) -> ParserResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(format!(
                "expected {what}, found {:?}",
                self.current_kind()
            )))
        }
    }

    pub(crate) fn error(&self, message: impl Into<String>) -> ParserError {
        ParserError::new(message, self.current_location())
    }
}
