use super::core::{Lexer, TokenStart};
use crate::token::{LiteralValue, Token, TokenKind};
use tinyc_util::{LexerResult, SourceLocation, Symbol};

/// Decodes a single recognized escape character (the character following
/// a `\`), or `None` if it is not in the recognized table.
fn decode_escape(c: char) -> Option<char> {
    Some(match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '0' => '\0',
        '\\' => '\\',
        '\'' => '\'',
        '"' => '"',
        _ => return None,
    })
}

impl<'a> Lexer<'a> {
    /// Lexes a character literal: `'` then either an escape sequence or a
    /// single raw byte, then `'`.
    pub(super) fn lex_char(&mut self, start: TokenStart) -> LexerResult<Token> {
        self.cursor_mut().advance(); // opening '

        if self.cursor().is_at_end() {
            return Err(self.error_at("unterminated character literal", start));
        }

        let decoded = if self.cursor().current_char() == '\\' {
            self.cursor_mut().advance();
            let escape = self.cursor().current_char();
            if self.cursor().is_at_end() {
                return Err(self.error_at("unterminated character literal", start));
            }
            let decoded = decode_escape(escape)
                .ok_or_else(|| self.error_here(format!("unrecognized escape '\\{escape}'")))?;
            self.cursor_mut().advance();
            decoded
        } else {
            let raw = self.cursor().current_char();
            self.cursor_mut().advance();
            raw
        };

        if self.cursor().current_char() != '\'' {
            return Err(self.error_at("unterminated character literal", start));
        }
        self.cursor_mut().advance(); // closing '

        let text = self.cursor().slice_from(start.pos);
        let lexeme = Symbol::intern(text);
        let location = SourceLocation::new(self.filename(), start.line, start.column);
        Ok(
            Token::new_literal(TokenKind::CharLiteral, lexeme, location, LiteralValue::Char(decoded))
                .expect("kind matches value by construction"),
        )
    }

    /// Lexes a string literal: `"` ... `"`, arbitrarily long, with the same
    /// escape table as character literals.
    pub(super) fn lex_string(&mut self, start: TokenStart) -> LexerResult<Token> {
        self.cursor_mut().advance(); // opening "

        loop {
            if self.cursor().is_at_end() {
                return Err(self.error_at("unterminated string literal", start));
            }
            let c = self.cursor().current_char();
            if c == '"' {
                break;
            }
            if c == '\\' {
                self.cursor_mut().advance();
                if self.cursor().is_at_end() {
                    return Err(self.error_at("unterminated string literal", start));
                }
                let escape = self.cursor().current_char();
                if decode_escape(escape).is_none() {
                    return Err(self.error_here(format!("unrecognized escape '\\{escape}'")));
                }
                self.cursor_mut().advance();
            } else {
                self.cursor_mut().advance();
            }
        }
        self.cursor_mut().advance(); // closing "

        let text = self.cursor().slice_from(start.pos);
        let lexeme = Symbol::intern(text);
        let location = SourceLocation::new(self.filename(), start.line, start.column);
        Ok(Token::new(TokenKind::StringLiteral, lexeme, location))
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::Lexer;
    use crate::token::{LiteralValue, TokenKind};

    #[test]
    fn plain_char_literal() {
        let mut lexer = Lexer::new("'a'", "t.tc");
        let token = lexer.next().unwrap();
        assert_eq!(token.kind(), TokenKind::CharLiteral);
        assert_eq!(token.value(), Some(LiteralValue::Char('a')));
    }

    #[test]
    fn escaped_char_literal() {
        let mut lexer = Lexer::new(r"'\n'", "t.tc");
        let token = lexer.next().unwrap();
        assert_eq!(token.value(), Some(LiteralValue::Char('\n')));
    }

    #[test]
    fn unrecognized_escape_is_an_error() {
        let err = Lexer::new(r"'\q'", "t.tc").next().unwrap_err();
        assert!(err.message.contains("escape"));
    }

    #[test]
    fn unterminated_char_literal_is_an_error() {
        let err = Lexer::new("'a", "t.tc").next().unwrap_err();
        assert!(err.message.contains("unterminated"));
    }

    #[test]
    fn plain_string_literal() {
        let mut lexer = Lexer::new(r#""hello world""#, "t.tc");
        let token = lexer.next().unwrap();
        assert_eq!(token.kind(), TokenKind::StringLiteral);
        assert_eq!(token.lexeme().as_str(), r#""hello world""#);
    }

    #[test]
    fn string_literal_with_escapes() {
        let mut lexer = Lexer::new(r#""a\nb""#, "t.tc");
        let token = lexer.next().unwrap();
        assert_eq!(token.kind(), TokenKind::StringLiteral);
    }

    #[test]
    fn unterminated_string_literal_reports_opening_location() {
        let err = Lexer::new(r#"  "abc"#, "t.tc").next().unwrap_err();
        assert!(err.message.contains("unterminated"));
        assert_eq!(err.location.column(), 3);
    }
}
