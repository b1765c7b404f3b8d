//! Statement parsing: the dispatcher, block bodies, and every leaf/compound
//! statement kind except declarations, which live in [`crate::declarations`].

use crate::core::Parser;
use tinyc_ast::{
    Block, Break, Case, Continue, DoWhile, ExpressionStatement, For, ForInit, If, Return, Stmt,
    Switch, While,
};
use tinyc_lex::{LiteralValue, TokenKind};
use tinyc_util::ParserResult;

impl Parser {
    /// Parses a `{ ... }` block. Statement parsing inside stops at `}`,
    /// `case`, or `default` — the same stop set a switch body's case list
    /// relies on to know where one case's statements end.
    pub(crate) fn parse_block(&mut self) -> ParserResult<Block> {
        let location = self.current_location();
        self.expect(TokenKind::LBrace, "'{'")?;
        let mut statements = Vec::new();
        while !self.at_statement_stop() {
            statements.push(self.parse_statement()?);
        }
        self.expect(TokenKind::RBrace, "'}'")?;
        Ok(Block {
            statements,
            location,
        })
    }

    fn at_statement_stop(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::RBrace | TokenKind::Case | TokenKind::Default | TokenKind::EndOfFile
        )
    }

    /// Dispatches on the current token to the appropriate statement
    /// production.
    pub(crate) fn parse_statement(&mut self) -> ParserResult<Stmt> {
        match self.current_kind() {
            TokenKind::LBrace => Ok(Stmt::Block(self.parse_block()?)),
            TokenKind::If => self.parse_if(),
            TokenKind::Switch => self.parse_switch(),
            TokenKind::While => self.parse_while(),
            TokenKind::Do => self.parse_do_while(),
            TokenKind::For => self.parse_for(),
            TokenKind::Break => self.parse_break(),
            TokenKind::Continue => self.parse_continue(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Int | TokenKind::Double | TokenKind::Char | TokenKind::Void
            | TokenKind::Struct => self.parse_declaration_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `if ( cond ) then (else else_branch)_opt`. Dangling `else` binds to
    /// the nearest unmatched `if` simply because this function always
    /// greedily consumes an `else` if one follows the `then` branch —
    /// there is no separate tracking of "unmatched" ifs to do.
    fn parse_if(&mut self) -> ParserResult<Stmt> {
        let location = self.current_location();
        self.advance(); // 'if'
        self.expect(TokenKind::LParen, "'('")?;
        let condition = self.parse_expr()?;
        self.expect(TokenKind::RParen, "')'")?;
        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.match_kind(TokenKind::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(Stmt::If(If {
            condition,
            then_branch,
            else_branch,
            location,
        }))
    }

    fn parse_while(&mut self) -> ParserResult<Stmt> {
        let location = self.current_location();
        self.advance(); // 'while'
        self.expect(TokenKind::LParen, "'('")?;
        let condition = self.parse_expr()?;
        self.expect(TokenKind::RParen, "')'")?;
        let body = Box::new(self.parse_statement()?);
        Ok(Stmt::While(While {
            condition,
            body,
            location,
        }))
    }

    fn parse_do_while(&mut self) -> ParserResult<Stmt> {
        let location = self.current_location();
        self.advance(); // 'do'
        let body = Box::new(self.parse_statement()?);
        self.expect(TokenKind::While, "'while'")?;
        self.expect(TokenKind::LParen, "'('")?;
        let condition = self.parse_expr()?;
        self.expect(TokenKind::RParen, "')'")?;
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(Stmt::DoWhile(DoWhile {
            body,
            condition,
            location,
        }))
    }

    /// `for ( init_opt ; cond_opt ; update_opt ) body`. The two
    /// semicolons are mandatory even when the clause they separate is
    /// empty.
    fn parse_for(&mut self) -> ParserResult<Stmt> {
        let location = self.current_location();
        self.advance(); // 'for'
        self.expect(TokenKind::LParen, "'('")?;

        let init = if self.check(TokenKind::Semicolon) {
            ForInit::Empty
        } else if self.starts_type() {
            ForInit::Declaration(self.parse_single_variable_declaration()?)
        } else {
            ForInit::Expression(self.parse_expr()?)
        };
        self.expect(TokenKind::Semicolon, "';'")?;

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(TokenKind::Semicolon, "';'")?;

        let step = if self.check(TokenKind::RParen) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(TokenKind::RParen, "')'")?;

        let body = Box::new(self.parse_statement()?);
        Ok(Stmt::For(For {
            init,
            condition,
            step,
            body,
            location,
        }))
    }

    /// `switch ( expr ) { case_clause* }`. At most one `default` is
    /// permitted across the whole body; a second one is a parser error.
    fn parse_switch(&mut self) -> ParserResult<Stmt> {
        let location = self.current_location();
        self.advance(); // 'switch'
        self.expect(TokenKind::LParen, "'('")?;
        let discriminant = self.parse_expr()?;
        self.expect(TokenKind::RParen, "')'")?;
        self.expect(TokenKind::LBrace, "'{'")?;

        let mut cases = Vec::new();
        let mut seen_default = false;
        while matches!(self.current_kind(), TokenKind::Case | TokenKind::Default) {
            let case = self.parse_case()?;
            if case.is_default {
                if seen_default {
                    return Err(self.error("a switch may have at most one 'default' case"));
                }
                seen_default = true;
            }
            cases.push(case);
        }
        self.expect(TokenKind::RBrace, "'}'")?;

        Ok(Stmt::Switch(Switch {
            discriminant,
            cases,
            location,
        }))
    }

    fn parse_case(&mut self) -> ParserResult<Case> {
        let location = self.current_location();
        let is_default = self.check(TokenKind::Default);
        let value = if is_default {
            self.advance();
            None
        } else {
            self.expect(TokenKind::Case, "'case'")?;
            Some(self.parse_case_value()?)
        };
        self.expect(TokenKind::Colon, "':'")?;

        let mut body = Vec::new();
        while !matches!(
            self.current_kind(),
            TokenKind::Case | TokenKind::Default | TokenKind::RBrace | TokenKind::EndOfFile
        ) {
            body.push(self.parse_statement()?);
        }

        Ok(Case {
            is_default,
            value,
            body,
            location,
        })
    }

    /// A case label is exactly one integer literal — not a general
    /// expression — per the grammar's `case <integer_literal> :` form.
    fn parse_case_value(&mut self) -> ParserResult<i64> {
        let token = self.expect(TokenKind::IntegerLiteral, "an integer literal")?;
        match token.value() {
            Some(LiteralValue::Integer(n)) => Ok(n),
            _ => unreachable!("IntegerLiteral tokens always carry a LiteralValue::Integer"),
        }
    }

    fn parse_break(&mut self) -> ParserResult<Stmt> {
        let location = self.current_location();
        self.advance();
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(Stmt::Break(Break { location }))
    }

    fn parse_continue(&mut self) -> ParserResult<Stmt> {
        let location = self.current_location();
        self.advance();
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(Stmt::Continue(Continue { location }))
    }

    fn parse_return(&mut self) -> ParserResult<Stmt> {
        let location = self.current_location();
        self.advance();
        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(Stmt::Return(Return { value, location }))
    }

    fn parse_expression_statement(&mut self) -> ParserResult<Stmt> {
        let location = self.current_location();
        let expression = self.parse_expr()?;
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(Stmt::Expression(ExpressionStatement {
            expression,
            location,
        }))
    }
}
