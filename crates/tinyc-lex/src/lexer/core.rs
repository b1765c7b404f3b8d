use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use tinyc_util::{LexerError, LexerResult, SourceLocation, Symbol};

/// Produces a lazy, 1-token-lookahead stream of [`Token`]s from a source
/// string.
///
/// Construction takes the source text and the filename that every token's
/// [`SourceLocation`] will carry. The lexer owns no state beyond its cursor,
/// the filename, and an optional peeked token — no part of it is shared
/// across instances.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    filename: Symbol,
    peeked: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, filename: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
            filename: Symbol::intern(filename),
            peeked: None,
        }
    }

    /// Consumes and returns the next token. Returns `EndOfFile` forever
    /// once the input is exhausted.
    pub fn next(&mut self) -> LexerResult<Token> {
        if let Some(token) = self.peeked.take() {
            return Ok(token);
        }
        self.scan_token()
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> LexerResult<&Token> {
        if self.peeked.is_none() {
            let token = self.scan_token()?;
            self.peeked = Some(token);
        }
        Ok(self.peeked.as_ref().expect("just populated"))
    }

    /// Drains the lexer to end of file, returning every token including
    /// the final `EndOfFile`. Stops at (and returns) the first
    /// [`LexerError`] encountered.
    pub fn tokenize(mut self) -> LexerResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next()?;
            let is_eof = token.kind() == TokenKind::EndOfFile;
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    fn scan_token(&mut self) -> LexerResult<Token> {
        self.skip_whitespace_and_comments()?;

        // Snapshot the start position before consuming a single character
        // of the token about to be lexed. Every token's reported column
        // comes from this snapshot, never from the cursor after advancing.
        let start = TokenStart {
            pos: self.cursor.position(),
            line: self.cursor.line(),
            column: self.cursor.column(),
        };

        if self.cursor.is_at_end() {
            return Ok(self.make_token(TokenKind::EndOfFile, start));
        }

        let c = self.cursor.current_char();
        if c == '_' || c.is_ascii_alphabetic() {
            return Ok(self.lex_identifier(start));
        }
        if c.is_ascii_digit() {
            return self.lex_number(start);
        }
        if c == '\'' {
            return self.lex_char(start);
        }
        if c == '"' {
            return self.lex_string(start);
        }
        if let Some(token) = self.lex_punctuation(start) {
            return Ok(token);
        }

        self.cursor.advance();
        Err(self.error_at(format!("unexpected character '{c}'"), start))
    }

    /// Builds a token tagged `kind` whose lexeme is the source text from
    /// `start` to the cursor's current position, located at `start`.
    pub(super) fn make_token(&self, kind: TokenKind, start: TokenStart) -> Token {
        let lexeme = Symbol::intern(self.cursor.slice_from(start.pos));
        let location = SourceLocation::new(self.filename, start.line, start.column);
        Token::new(kind, lexeme, location)
    }

    pub(super) fn filename(&self) -> Symbol {
        self.filename
    }

    pub(super) fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    pub(super) fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    pub(super) fn error_at(&self, message: impl Into<String>, start: TokenStart) -> LexerError {
        LexerError::new(
            message,
            SourceLocation::new(self.filename, start.line, start.column),
        )
    }

    pub(super) fn error_here(&self, message: impl Into<String>) -> LexerError {
        LexerError::new(
            message,
            SourceLocation::new(self.filename, self.cursor.line(), self.cursor.column()),
        )
    }
}

/// The cursor position, line, and column captured *before* any character
/// of the token being lexed is consumed. Passing this around (rather than
/// re-reading the cursor after advancing) is what keeps every token's
/// reported column equal to where it actually starts.
#[derive(Clone, Copy)]
pub(super) struct TokenStart {
    pub pos: usize,
    pub line: u32,
    pub column: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_stops_at_eof_and_is_idempotent() {
        let mut lexer = Lexer::new("", "t.tc");
        let first = lexer.next().unwrap();
        assert_eq!(first.kind(), TokenKind::EndOfFile);
        let second = lexer.next().unwrap();
        assert_eq!(second.kind(), TokenKind::EndOfFile);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut lexer = Lexer::new("+ -", "t.tc");
        assert_eq!(lexer.peek().unwrap().kind(), TokenKind::Plus);
        assert_eq!(lexer.peek().unwrap().kind(), TokenKind::Plus);
        assert_eq!(lexer.next().unwrap().kind(), TokenKind::Plus);
        assert_eq!(lexer.next().unwrap().kind(), TokenKind::Minus);
    }

    #[test]
    fn tokenize_collects_all_tokens_through_eof() {
        let tokens = Lexer::new("+ -", "t.tc").tokenize().unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens.last().unwrap().kind(), TokenKind::EndOfFile);
    }

    #[test]
    fn unexpected_character_is_a_lexer_error() {
        let err = Lexer::new("@", "t.tc").next().unwrap_err();
        assert!(err.message.contains('@'));
    }

    #[test]
    fn operator_token_column_points_at_its_own_start_not_its_end() {
        // Regression test: the column must be snapshotted before consuming
        // any of the operator's characters, not after.
        let mut lexer = Lexer::new("a == b", "t.tc");
        lexer.next().unwrap(); // `a`
        let eqeq = lexer.next().unwrap();
        assert_eq!(eqeq.kind(), TokenKind::EqEq);
        assert_eq!(eqeq.location().column(), 3);
    }
}
