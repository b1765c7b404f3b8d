//! The TinyC abstract syntax tree: flat, owned node structs and enums
//! shared by the parser, the JSON emitter, and the debug dumper.

mod declarations;
mod expressions;
mod program;
mod statements;
mod types;

pub use declarations::{
    Declaration, Field, FunctionDeclaration, FunctionPointerDeclaration, MultipleDeclaration,
    Parameter, StructDeclaration, Variable,
};
pub use expressions::{
    BinaryExpression, BinaryOperator, CallExpression, CastExpression, CommaExpression, Expr,
    Identifier, IndexExpression, Literal, LiteralKind, MemberExpression, MemberKind,
    UnaryExpression, UnaryOperator,
};
pub use program::Program;
pub use statements::{
    Block, Break, Case, Continue, DoWhile, ExpressionStatement, For, ForInit, If, Return, Stmt,
    Switch, While,
};
pub use types::{PrimitiveKind, Type};
