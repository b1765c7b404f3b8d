//! The TinyC lexical analyzer: turns a source buffer into a lazy stream of
//! typed tokens.

pub mod cursor;
mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{LiteralValue, Token, TokenKind};
