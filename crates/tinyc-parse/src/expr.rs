//! Expression parsing: the ten-level precedence cascade plus unary,
//! postfix, and primary forms.
//!
//! Each level is its own named method rather than a binding-power table —
//! the grammar names these levels `E1`..`E9` plus the outer assignment
//! level, so the parser's call graph mirrors that table directly instead
//! of going through a generic Pratt loop.
//!
//! | Method | Level | Operators | Associativity |
//! |---|---|---|---|
//! | `parse_expr` | expr | `=` | right |
//! | `parse_comma` | E9 | `,` | left, flattened n-ary |
//! | `parse_logical_or` | E8 | `\|\|` | left |
//! | `parse_logical_and` | E7 | `&&` | left |
//! | `parse_bit_or` | E6 | `\|` | left |
//! | `parse_bit_and` | E5 | `&` | left |
//! | `parse_equality` | E4 | `==` `!=` | left |
//! | `parse_relational` | E3 | `<` `<=` `>` `>=` | left |
//! | `parse_shift` | E2 | `<<` `>>` | left |
//! | `parse_additive` | E1 | `+` `-` | left |
//! | `parse_multiplicative` | — | `*` `/` `%` | left |
//! | `parse_unary` | unary-pre | `+` `-` `!` `~` `++` `--` `*` `&` | right |
//! | `parse_postfix` | postfix | call, index, member, `++` `--` | left |
//! | `parse_primary` | primary | literal, identifier, `(expr)`, `cast` |
//!
//! The multiplicative level has no named row in the precedence table but
//! the token alphabet and `BinaryOperator` both carry `*`, `/`, `%` — it
//! is inserted here between `E1` and unary, tighter than additive and
//! looser than unary, matching ordinary C precedence.
//!
//! Call arguments and the operands `parse_comma` flattens are both parsed
//! one level below `,` (at `parse_logical_or`), not through `parse_expr`
//! — `,` separates arguments and comma-expression items; it is never
//! itself one of them, and assignment never appears unparenthesized in
//! either position.

use crate::core::Parser;
use tinyc_ast::{
    BinaryExpression, BinaryOperator, CallExpression, CastExpression, CommaExpression, Expr,
    Identifier, IndexExpression, Literal, LiteralKind, MemberExpression, MemberKind,
    UnaryExpression, UnaryOperator,
};
use tinyc_lex::TokenKind;
use tinyc_util::ParserResult;

impl Parser {
    pub(crate) fn parse_expr(&mut self) -> ParserResult<Expr> {
        let lhs = self.parse_comma()?;
        if self.check(TokenKind::Assign) {
            let location = lhs.location();
            self.advance();
            let rhs = self.parse_expr()?;
            return Ok(Expr::Binary(BinaryExpression {
                operator: BinaryOperator::Assign,
                left: Box::new(lhs),
                right: Box::new(rhs),
                location,
            }));
        }
        Ok(lhs)
    }

    fn parse_comma(&mut self) -> ParserResult<Expr> {
        let first = self.parse_logical_or()?;
        if !self.check(TokenKind::Comma) {
            return Ok(first);
        }
        let location = first.location();
        let mut expressions = vec![first];
        while self.match_kind(TokenKind::Comma) {
            expressions.push(self.parse_logical_or()?);
        }
        Ok(Expr::Comma(CommaExpression {
            expressions,
            location,
        }))
    }

    fn parse_logical_or(&mut self) -> ParserResult<Expr> {
        self.parse_left_assoc_binary(Self::parse_logical_and, &[(TokenKind::PipePipe, BinaryOperator::LogicalOr)])
    }

    fn parse_logical_and(&mut self) -> ParserResult<Expr> {
        self.parse_left_assoc_binary(Self::parse_bit_or, &[(TokenKind::AmpAmp, BinaryOperator::LogicalAnd)])
    }

    fn parse_bit_or(&mut self) -> ParserResult<Expr> {
        self.parse_left_assoc_binary(Self::parse_bit_and, &[(TokenKind::Pipe, BinaryOperator::BitOr)])
    }

    fn parse_bit_and(&mut self) -> ParserResult<Expr> {
        self.parse_left_assoc_binary(Self::parse_equality, &[(TokenKind::Amp, BinaryOperator::BitAnd)])
    }

    fn parse_equality(&mut self) -> ParserResult<Expr> {
        self.parse_left_assoc_binary(
            Self::parse_relational,
            &[
                (TokenKind::EqEq, BinaryOperator::Eq),
                (TokenKind::NotEq, BinaryOperator::NotEq),
            ],
        )
    }

    fn parse_relational(&mut self) -> ParserResult<Expr> {
        self.parse_left_assoc_binary(
            Self::parse_shift,
            &[
                (TokenKind::Lt, BinaryOperator::Lt),
                (TokenKind::LtEq, BinaryOperator::LtEq),
                (TokenKind::Gt, BinaryOperator::Gt),
                (TokenKind::GtEq, BinaryOperator::GtEq),
            ],
        )
    }

    fn parse_shift(&mut self) -> ParserResult<Expr> {
        self.parse_left_assoc_binary(
            Self::parse_additive,
            &[
                (TokenKind::ShiftLeft, BinaryOperator::ShiftLeft),
                (TokenKind::ShiftRight, BinaryOperator::ShiftRight),
            ],
        )
    }

    fn parse_additive(&mut self) -> ParserResult<Expr> {
        self.parse_left_assoc_binary(
            Self::parse_multiplicative,
            &[
                (TokenKind::Plus, BinaryOperator::Add),
                (TokenKind::Minus, BinaryOperator::Sub),
            ],
        )
    }

    fn parse_multiplicative(&mut self) -> ParserResult<Expr> {
        self.parse_left_assoc_binary(
            Self::parse_unary,
            &[
                (TokenKind::Star, BinaryOperator::Mul),
                (TokenKind::Slash, BinaryOperator::Div),
                (TokenKind::Percent, BinaryOperator::Mod),
            ],
        )
    }

    /// Shared left-associative chain: parse one `operand`, then while the
    /// current token matches one of `ops`, consume it and fold in another
    /// operand as a new left-hand side.
    fn parse_left_assoc_binary(
        &mut self,
        operand: fn(&mut Self) -> ParserResult<Expr>,
        ops: &[(TokenKind, BinaryOperator)],
    ) -> ParserResult<Expr> {
        let mut lhs = operand(self)?;
        loop {
            let matched = ops.iter().find(|(kind, _)| self.check(*kind)).copied();
            let Some((_, operator)) = matched else {
                break;
            };
            let location = lhs.location();
            self.advance();
            let rhs = operand(self)?;
            lhs = Expr::Binary(BinaryExpression {
                operator,
                left: Box::new(lhs),
                right: Box::new(rhs),
                location,
            });
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> ParserResult<Expr> {
        let operator = match self.current_kind() {
            TokenKind::Plus => UnaryOperator::Plus,
            TokenKind::Minus => UnaryOperator::Minus,
            TokenKind::Bang => UnaryOperator::LogicalNot,
            TokenKind::Tilde => UnaryOperator::BitNot,
            TokenKind::PlusPlus => UnaryOperator::Increment,
            TokenKind::MinusMinus => UnaryOperator::Decrement,
            TokenKind::Star => UnaryOperator::Deref,
            TokenKind::Amp => UnaryOperator::AddressOf,
            _ => return self.parse_postfix(),
        };
        let location = self.current_location();
        self.advance();
        let operand = self.parse_unary()?;
        Ok(Expr::Unary(UnaryExpression {
            operator,
            operand: Box::new(operand),
            prefix: true,
            location,
        }))
    }

    fn parse_postfix(&mut self) -> ParserResult<Expr> {
        let mut expr = self.parse_primary()?;
        loop {
            expr = match self.current_kind() {
                TokenKind::LParen => self.parse_call(expr)?,
                TokenKind::LBracket => self.parse_index(expr)?,
                TokenKind::Dot => self.parse_member(expr, MemberKind::Dot)?,
                TokenKind::Arrow => self.parse_member(expr, MemberKind::Arrow)?,
                TokenKind::PlusPlus => self.parse_postfix_step(expr, UnaryOperator::Increment)?,
                TokenKind::MinusMinus => self.parse_postfix_step(expr, UnaryOperator::Decrement)?,
                _ => return Ok(expr),
            };
        }
    }

    fn parse_call(&mut self, callee: Expr) -> ParserResult<Expr> {
        let location = callee.location();
        self.expect(TokenKind::LParen, "'('")?;
        let mut arguments = Vec::new();
        if !self.check(TokenKind::RParen) {
            arguments.push(self.parse_logical_or()?);
            while self.match_kind(TokenKind::Comma) {
                arguments.push(self.parse_logical_or()?);
            }
        }
        self.expect(TokenKind::RParen, "')'")?;
        Ok(Expr::Call(CallExpression {
            callee: Box::new(callee),
            arguments,
            location,
        }))
    }

    fn parse_index(&mut self, array: Expr) -> ParserResult<Expr> {
        let location = array.location();
        self.expect(TokenKind::LBracket, "'['")?;
        let index = self.parse_expr()?;
        self.expect(TokenKind::RBracket, "']'")?;
        Ok(Expr::Index(IndexExpression {
            array: Box::new(array),
            index: Box::new(index),
            location,
        }))
    }

    fn parse_member(&mut self, object: Expr, kind: MemberKind) -> ParserResult<Expr> {
        let location = object.location();
        self.advance();
        let member_tok = self.expect(TokenKind::Identifier, "a member name")?;
        Ok(Expr::Member(MemberExpression {
            object: Box::new(object),
            member: member_tok.lexeme(),
            kind,
            location,
        }))
    }

    fn parse_postfix_step(&mut self, operand: Expr, operator: UnaryOperator) -> ParserResult<Expr> {
        let location = operand.location();
        self.advance();
        Ok(Expr::Unary(UnaryExpression {
            operator,
            operand: Box::new(operand),
            prefix: false,
            location,
        }))
    }

    fn parse_primary(&mut self) -> ParserResult<Expr> {
        let location = self.current_location();
        match self.current_kind() {
            TokenKind::IntegerLiteral => {
                let tok = self.advance();
                Ok(Expr::Literal(Literal {
                    kind: LiteralKind::Integer,
                    text: tok.lexeme().as_str().to_string(),
                    location,
                }))
            }
            TokenKind::DoubleLiteral => {
                let tok = self.advance();
                Ok(Expr::Literal(Literal {
                    kind: LiteralKind::Double,
                    text: tok.lexeme().as_str().to_string(),
                    location,
                }))
            }
            TokenKind::CharLiteral => {
                let tok = self.advance();
                Ok(Expr::Literal(Literal {
                    kind: LiteralKind::Char,
                    text: tok.lexeme().as_str().to_string(),
                    location,
                }))
            }
            TokenKind::StringLiteral => {
                let tok = self.advance();
                Ok(Expr::Literal(Literal {
                    kind: LiteralKind::String,
                    text: tok.lexeme().as_str().to_string(),
                    location,
                }))
            }
            TokenKind::Identifier => {
                let tok = self.advance();
                Ok(Expr::Identifier(Identifier {
                    name: tok.lexeme(),
                    location,
                }))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            TokenKind::Cast => self.parse_cast(),
            _ => Err(self.error(format!(
                "expected an expression, found {:?}",
                self.current_kind()
            ))),
        }
    }

    /// `cast < Type > ( Expression )`. The `<`/`>` are ordinary
    /// relational-operator tokens the parser contextually expects right
    /// after `cast` — there is no separate angle-bracket token kind.
    fn parse_cast(&mut self) -> ParserResult<Expr> {
        let location = self.current_location();
        self.advance();
        self.expect(TokenKind::Lt, "'<'")?;
        let target_type = self.parse_object_type()?;
        self.expect(TokenKind::Gt, "'>'")?;
        self.expect(TokenKind::LParen, "'('")?;
        let expression = self.parse_expr()?;
        self.expect(TokenKind::RParen, "')'")?;
        Ok(Expr::Cast(CastExpression {
            target_type,
            expression: Box::new(expression),
            location,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyc_lex::Lexer;
    use tinyc_util::Symbol;

    fn parse_expr_str(source: &str) -> Expr {
        let tokens = Lexer::new(source, "t.tc").tokenize().unwrap();
        let mut parser = Parser::new(tokens, Symbol::intern("t.tc"));
        parser.parse_expr().unwrap()
    }

    #[test]
    fn multiplicative_binds_tighter_than_additive() {
        let expr = parse_expr_str("a + b * c");
        match expr {
            Expr::Binary(BinaryExpression { operator, right, .. }) => {
                assert_eq!(operator, BinaryOperator::Add);
                assert!(matches!(
                    *right,
                    Expr::Binary(BinaryExpression { operator: BinaryOperator::Mul, .. })
                ));
            }
            _ => panic!("expected a top-level addition"),
        }
    }

    #[test]
    fn additive_is_left_associative() {
        let expr = parse_expr_str("a - b - c");
        match expr {
            Expr::Binary(BinaryExpression { operator, left, .. }) => {
                assert_eq!(operator, BinaryOperator::Sub);
                assert!(matches!(
                    *left,
                    Expr::Binary(BinaryExpression { operator: BinaryOperator::Sub, .. })
                ));
            }
            _ => panic!("expected a left-nested subtraction"),
        }
    }

    #[test]
    fn assignment_is_right_associative() {
        let expr = parse_expr_str("a = b = c");
        match expr {
            Expr::Binary(BinaryExpression { operator, right, .. }) => {
                assert_eq!(operator, BinaryOperator::Assign);
                assert!(matches!(
                    *right,
                    Expr::Binary(BinaryExpression { operator: BinaryOperator::Assign, .. })
                ));
            }
            _ => panic!("expected a right-nested assignment"),
        }
    }

    #[test]
    fn comma_flattens_into_n_ary_expression() {
        let expr = parse_expr_str("a, b, c");
        match expr {
            Expr::Comma(CommaExpression { expressions, .. }) => assert_eq!(expressions.len(), 3),
            _ => panic!("expected a comma expression"),
        }
    }

    #[test]
    fn prefix_and_postfix_increment_set_opposite_flags() {
        let prefix = parse_expr_str("++a");
        match prefix {
            Expr::Unary(UnaryExpression { prefix, .. }) => assert!(prefix),
            _ => panic!("expected a unary expression"),
        }
        let postfix = parse_expr_str("a++");
        match postfix {
            Expr::Unary(UnaryExpression { prefix, .. }) => assert!(!prefix),
            _ => panic!("expected a unary expression"),
        }
    }

    #[test]
    fn call_expression_collects_arguments_in_order() {
        let expr = parse_expr_str("add(a, b)");
        match expr {
            Expr::Call(CallExpression { arguments, .. }) => assert_eq!(arguments.len(), 2),
            _ => panic!("expected a call expression"),
        }
    }

    #[test]
    fn cast_expression_parses_type_and_inner_expression() {
        let expr = parse_expr_str("cast<int>(x)");
        match expr {
            Expr::Cast(CastExpression { expression, .. }) => {
                assert!(matches!(*expression, Expr::Identifier(_)))
            }
            _ => panic!("expected a cast expression"),
        }
    }

    #[test]
    fn member_access_distinguishes_dot_and_arrow() {
        let dot = parse_expr_str("a.b");
        match dot {
            Expr::Member(MemberExpression { kind, .. }) => assert_eq!(kind, MemberKind::Dot),
            _ => panic!("expected a member expression"),
        }
        let arrow = parse_expr_str("a->b");
        match arrow {
            Expr::Member(MemberExpression { kind, .. }) => assert_eq!(kind, MemberKind::Arrow),
            _ => panic!("expected a member expression"),
        }
    }
}
