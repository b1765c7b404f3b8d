//! Expression nodes.

use crate::types::Type;
use tinyc_util::{SourceLocation, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Integer,
    Double,
    Char,
    String,
}

/// A literal value. `text` is the original lexeme — for character and
/// string literals this includes the surrounding quotes, matching what the
/// JSON emitter writes out verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub kind: LiteralKind,
    pub text: String,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: Symbol,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Assign,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    LogicalAnd,
    LogicalOr,
    BitAnd,
    BitOr,
    ShiftLeft,
    ShiftRight,
}

impl BinaryOperator {
    /// The source-text spelling of this operator, as it would have been
    /// lexed.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Assign => "=",
            BinaryOperator::Eq => "==",
            BinaryOperator::NotEq => "!=",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
            BinaryOperator::LogicalAnd => "&&",
            BinaryOperator::LogicalOr => "||",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
    LogicalNot,
    BitNot,
    Increment,
    Decrement,
    Deref,
    AddressOf,
}

impl UnaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::LogicalNot => "!",
            UnaryOperator::BitNot => "~",
            UnaryOperator::Increment => "++",
            UnaryOperator::Decrement => "--",
            UnaryOperator::Deref => "*",
            UnaryOperator::AddressOf => "&",
        }
    }
}

/// `prefix` is `true` for `++x`/`--x`/`+x`/`-x`/`!x`/`~x`/`*x`/`&x`, and
/// `false` for the postfix forms `x++`/`x--`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Box<Expr>,
    pub prefix: bool,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CastExpression {
    pub target_type: Type,
    pub expression: Box<Expr>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpression {
    pub array: Box<Expr>,
    pub index: Box<Expr>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Dot,
    Arrow,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    pub object: Box<Expr>,
    pub member: Symbol,
    pub kind: MemberKind,
    pub location: SourceLocation,
}

/// The flattened n-ary form of `a, b, c`: three sub-expressions, not a
/// nested binary chain.
#[derive(Debug, Clone, PartialEq)]
pub struct CommaExpression {
    pub expressions: Vec<Expr>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Identifier(Identifier),
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Cast(CastExpression),
    Call(CallExpression),
    Index(IndexExpression),
    Member(MemberExpression),
    Comma(CommaExpression),
}

impl Expr {
    pub fn location(&self) -> SourceLocation {
        match self {
            Expr::Literal(n) => n.location,
            Expr::Identifier(n) => n.location,
            Expr::Binary(n) => n.location,
            Expr::Unary(n) => n.location,
            Expr::Cast(n) => n.location,
            Expr::Call(n) => n.location,
            Expr::Index(n) => n.location,
            Expr::Member(n) => n.location,
            Expr::Comma(n) => n.location,
        }
    }
}
