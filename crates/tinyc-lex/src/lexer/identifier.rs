use super::core::{Lexer, TokenStart};
use crate::token::{Token, TokenKind};
use tinyc_util::Symbol;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, then post-filters it against the keyword
    /// table. ASCII letters and `_` start an identifier; digits may
    /// continue one.
    pub(super) fn lex_identifier(&mut self, start: TokenStart) -> Token {
        while {
            let c = self.cursor().current_char();
            c == '_' || c.is_ascii_alphanumeric()
        } {
            self.cursor_mut().advance();
        }

        let text = self.cursor().slice_from(start.pos);
        let kind = TokenKind::keyword_from_text(text).unwrap_or(TokenKind::Identifier);
        let lexeme = Symbol::intern(text);
        let location = tinyc_util::SourceLocation::new(self.filename(), start.line, start.column);
        Token::new(kind, lexeme, location)
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::Lexer;
    use crate::token::TokenKind;

    #[test]
    fn plain_identifier() {
        let mut lexer = Lexer::new("foo_bar1", "t.tc");
        let token = lexer.next().unwrap();
        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(token.lexeme().as_str(), "foo_bar1");
    }

    #[test]
    fn underscore_only_identifier() {
        let mut lexer = Lexer::new("_", "t.tc");
        let token = lexer.next().unwrap();
        assert_eq!(token.kind(), TokenKind::Identifier);
    }

    #[test]
    fn keyword_table_is_case_sensitive_and_closed() {
        for kw in [
            "if", "else", "while", "do", "for", "switch", "case", "default", "break",
            "continue", "return", "int", "double", "char", "void", "struct", "typedef", "cast",
        ] {
            let mut lexer = Lexer::new(kw, "t.tc");
            let token = lexer.next().unwrap();
            assert_ne!(token.kind(), TokenKind::Identifier, "{kw} should be a keyword");
        }

        let mut lexer = Lexer::new("IF", "t.tc");
        let token = lexer.next().unwrap();
        assert_eq!(token.kind(), TokenKind::Identifier);
    }
}
