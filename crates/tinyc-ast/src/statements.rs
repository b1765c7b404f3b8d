//! Statement nodes, including the local-declaration variants that can
//! appear inside a function body.

use crate::declarations::Declaration;
use crate::expressions::Expr;
use tinyc_util::SourceLocation;

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expr,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub condition: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct While {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhile {
    pub body: Box<Stmt>,
    pub condition: Expr,
    pub location: SourceLocation,
}

/// The initializer clause of a `for (init; cond; step)` loop.
#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    Expression(Expr),
    Declaration(Declaration),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct For {
    pub init: ForInit,
    pub condition: Option<Expr>,
    pub step: Option<Expr>,
    pub body: Box<Stmt>,
    pub location: SourceLocation,
}

/// One arm of a `switch`: either `case <integer literal>: body` or, when
/// `is_default` is `true`, `default: body` (and `value` is `None`). The
/// case label is a decoded integer, not a general expression — the
/// grammar only ever admits an integer literal there.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub is_default: bool,
    pub value: Option<i64>,
    pub body: Vec<Stmt>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Switch {
    pub discriminant: Expr,
    pub cases: Vec<Case>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Break {
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Continue {
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub value: Option<Expr>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(Block),
    Expression(ExpressionStatement),
    Declaration(Declaration),
    If(If),
    While(While),
    DoWhile(DoWhile),
    For(For),
    Switch(Switch),
    Break(Break),
    Continue(Continue),
    Return(Return),
}

impl Stmt {
    pub fn location(&self) -> SourceLocation {
        match self {
            Stmt::Block(n) => n.location,
            Stmt::Expression(n) => n.location,
            Stmt::Declaration(n) => n.location(),
            Stmt::If(n) => n.location,
            Stmt::While(n) => n.location,
            Stmt::DoWhile(n) => n.location,
            Stmt::For(n) => n.location,
            Stmt::Switch(n) => n.location,
            Stmt::Break(n) => n.location,
            Stmt::Continue(n) => n.location,
            Stmt::Return(n) => n.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyc_util::Symbol;

    fn loc() -> SourceLocation {
        SourceLocation::new(Symbol::intern("t.tc"), 1, 1)
    }

    #[test]
    fn if_without_else_has_no_else_branch() {
        let stmt = Stmt::If(If {
            condition: Expr::Identifier(crate::expressions::Identifier {
                name: Symbol::intern("x"),
                location: loc(),
            }),
            then_branch: Box::new(Stmt::Break(Break { location: loc() })),
            else_branch: None,
            location: loc(),
        });
        match stmt {
            Stmt::If(n) => assert!(n.else_branch.is_none()),
            _ => panic!("expected If"),
        }
    }

    #[test]
    fn empty_for_init_is_distinct_from_expression_init() {
        assert_ne!(
            ForInit::Empty,
            ForInit::Expression(Expr::Identifier(crate::expressions::Identifier {
                name: Symbol::intern("x"),
                location: loc(),
            }))
        );
    }

    #[test]
    fn default_case_carries_no_value() {
        let case = Case {
            is_default: true,
            value: None,
            body: Vec::new(),
            location: loc(),
        };
        assert!(case.is_default);
        assert!(case.value.is_none());
    }
}
