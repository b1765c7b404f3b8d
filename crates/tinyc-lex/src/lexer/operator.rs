use super::core::{Lexer, TokenStart};
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Lexes an operator or punctuation token, longest-match first.
    /// Returns `None` if the current character starts neither — the
    /// caller then reports it as an unexpected character.
    pub(super) fn lex_punctuation(&mut self, start: TokenStart) -> Option<Token> {
        let c = self.cursor().current_char();
        let second = self.cursor().peek_char(1);

        let (kind, width) = match (c, second) {
            ('=', '=') => (TokenKind::EqEq, 2),
            ('!', '=') => (TokenKind::NotEq, 2),
            ('<', '=') => (TokenKind::LtEq, 2),
            ('>', '=') => (TokenKind::GtEq, 2),
            ('<', '<') => (TokenKind::ShiftLeft, 2),
            ('>', '>') => (TokenKind::ShiftRight, 2),
            ('&', '&') => (TokenKind::AmpAmp, 2),
            ('|', '|') => (TokenKind::PipePipe, 2),
            ('+', '+') => (TokenKind::PlusPlus, 2),
            ('-', '-') => (TokenKind::MinusMinus, 2),
            ('-', '>') => (TokenKind::Arrow, 2),

            ('+', _) => (TokenKind::Plus, 1),
            ('-', _) => (TokenKind::Minus, 1),
            ('*', _) => (TokenKind::Star, 1),
            ('/', _) => (TokenKind::Slash, 1),
            ('%', _) => (TokenKind::Percent, 1),
            ('=', _) => (TokenKind::Assign, 1),
            ('<', _) => (TokenKind::Lt, 1),
            ('>', _) => (TokenKind::Gt, 1),
            ('&', _) => (TokenKind::Amp, 1),
            ('|', _) => (TokenKind::Pipe, 1),
            ('!', _) => (TokenKind::Bang, 1),
            ('~', _) => (TokenKind::Tilde, 1),
            ('.', _) => (TokenKind::Dot, 1),
            ('(', _) => (TokenKind::LParen, 1),
            (')', _) => (TokenKind::RParen, 1),
            ('{', _) => (TokenKind::LBrace, 1),
            ('}', _) => (TokenKind::RBrace, 1),
            ('[', _) => (TokenKind::LBracket, 1),
            (']', _) => (TokenKind::RBracket, 1),
            (';', _) => (TokenKind::Semicolon, 1),
            (':', _) => (TokenKind::Colon, 1),
            (',', _) => (TokenKind::Comma, 1),

            _ => return None,
        };

        for _ in 0..width {
            self.cursor_mut().advance();
        }
        Some(self.make_token(kind, start))
    }
}
