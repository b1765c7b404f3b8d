use super::core::{Lexer, TokenStart};
use crate::token::{LiteralValue, Token, TokenKind};
use tinyc_util::{LexerResult, Symbol};

impl<'a> Lexer<'a> {
    /// Lexes an integer or double literal.
    ///
    /// Integer form: one or more digits, decoded as signed decimal. Double
    /// form: integer part, `.`, zero or more fractional digits, optional
    /// exponent `e|E` with optional sign and at least one digit.
    pub(super) fn lex_number(&mut self, start: TokenStart) -> LexerResult<Token> {
        while self.cursor().current_char().is_ascii_digit() {
            self.cursor_mut().advance();
        }

        let mut is_double = false;

        if self.cursor().current_char() == '.' {
            is_double = true;
            self.cursor_mut().advance(); // '.'
            while self.cursor().current_char().is_ascii_digit() {
                self.cursor_mut().advance();
            }
        }

        if matches!(self.cursor().current_char(), 'e' | 'E') {
            is_double = true;
            self.cursor_mut().advance();
            if matches!(self.cursor().current_char(), '+' | '-') {
                self.cursor_mut().advance();
            }
            if !self.cursor().current_char().is_ascii_digit() {
                return Err(self.error_at("exponent has no digits", start));
            }
            while self.cursor().current_char().is_ascii_digit() {
                self.cursor_mut().advance();
            }
        }

        let text = self.cursor().slice_from(start.pos);
        let lexeme = Symbol::intern(text);
        let location = tinyc_util::SourceLocation::new(self.filename(), start.line, start.column);

        if is_double {
            let value: f64 = text
                .parse()
                .map_err(|_| self.error_at(format!("malformed double literal '{text}'"), start))?;
            Ok(Token::new_literal(
                TokenKind::DoubleLiteral,
                lexeme,
                location,
                LiteralValue::Double(value),
            )
            .expect("kind matches value by construction"))
        } else {
            let value: i64 = text
                .parse()
                .map_err(|_| self.error_at(format!("malformed integer literal '{text}'"), start))?;
            Ok(Token::new_literal(
                TokenKind::IntegerLiteral,
                lexeme,
                location,
                LiteralValue::Integer(value),
            )
            .expect("kind matches value by construction"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::Lexer;
    use crate::token::{LiteralValue, TokenKind};

    #[test]
    fn plain_integer() {
        let mut lexer = Lexer::new("42", "t.tc");
        let token = lexer.next().unwrap();
        assert_eq!(token.kind(), TokenKind::IntegerLiteral);
        assert_eq!(token.value(), Some(LiteralValue::Integer(42)));
    }

    #[test]
    fn double_with_fraction() {
        let mut lexer = Lexer::new("3.14", "t.tc");
        let token = lexer.next().unwrap();
        assert_eq!(token.kind(), TokenKind::DoubleLiteral);
        assert_eq!(token.value(), Some(LiteralValue::Double(3.14)));
    }

    #[test]
    fn double_with_exponent() {
        let mut lexer = Lexer::new("2.5e-3", "t.tc");
        let token = lexer.next().unwrap();
        assert_eq!(token.kind(), TokenKind::DoubleLiteral);
        assert_eq!(token.value(), Some(LiteralValue::Double(2.5e-3)));
    }

    #[test]
    fn dot_with_no_following_digit_still_starts_the_fractional_part() {
        // `1.` has no fractional digits, but a `.` right after digits always
        // starts the fractional part: the literal is `1.0`, and whatever
        // follows the dot is its own token.
        let mut lexer = Lexer::new("1.x", "t.tc");
        let token = lexer.next().unwrap();
        assert_eq!(token.kind(), TokenKind::DoubleLiteral);
        assert_eq!(token.value(), Some(LiteralValue::Double(1.0)));
        let next = lexer.next().unwrap();
        assert_eq!(next.kind(), TokenKind::Identifier);
    }

    #[test]
    fn exponent_without_digits_is_a_lexer_error() {
        let err = Lexer::new("1e", "t.tc").next().unwrap_err();
        assert!(err.message.contains("exponent"));
    }

    #[test]
    fn integer_literal_location_is_at_its_start() {
        let mut lexer = Lexer::new("  123", "t.tc");
        let token = lexer.next().unwrap();
        assert_eq!(token.location().column(), 3);
    }

    proptest::proptest! {
        /// Any non-negative decimal integer lexes as an `IntegerLiteral`
        /// whose decoded value round-trips exactly, per the literal-kind/
        /// value-consistency invariant.
        #[test]
        fn integer_literal_decodes_to_its_own_value(n in 0i64..=i64::MAX) {
            let text = n.to_string();
            let mut lexer = Lexer::new(&text, "t.tc");
            let token = lexer.next().unwrap();
            proptest::prop_assert_eq!(token.kind(), TokenKind::IntegerLiteral);
            proptest::prop_assert_eq!(token.value(), Some(LiteralValue::Integer(n)));
        }
    }
}
