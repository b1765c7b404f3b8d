//! The TinyC parser: an LL(1) recursive-descent implementation of the
//! grammar in the project's frontend specification, consuming a
//! [`tinyc_lex::Lexer`]'s token stream and producing a [`tinyc_ast::Program`].
//!
//! The module split mirrors the grammar's own structure rather than the
//! AST's:
//!
//! - `core` — the `Parser` struct and its token-stream primitives
//!   (`advance`, `check`, `expect`, ...).
//! - `types` — the type grammar (base types, pointer nesting, the
//!   void/non-void/return-type distinction).
//! - `expr` — the ten-level expression precedence cascade.
//! - `declarations` — structs, function-pointer typedefs, functions, and
//!   variable declarations (shared between global and statement scope).
//! - `statements` — the statement dispatcher and every non-declaration
//!   statement kind.
//! - `program` — the `parseProgram` entry point.

mod core;
mod declarations;
mod expr;
mod program;
mod statements;
mod types;

pub use core::Parser;

use tinyc_lex::Lexer;
use tinyc_util::{LexerError, ParserError, Symbol};

/// Either half of the frontend's two fatal error kinds, as returned by
/// [`parse`]. Kept distinct (rather than merged into one type) so callers
/// can still format each with its own "Lexer error:"/"Parser error:"
/// prefix per the frontend's error-handling contract.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error(transparent)]
    Lexer(#[from] LexerError),
    #[error(transparent)]
    Parser(#[from] ParserError),
}

/// Runs the whole pipeline — lex to a materialized token stream, then
/// parse — over `source`, attributing every token and node to `filename`.
///
/// This is the one entry point most callers need; `Lexer` and `Parser`
/// remain independently constructible for callers (e.g. a `--lex`-only
/// CLI mode) that only need one half of the pipeline.
pub fn parse(source: &str, filename: &str) -> Result<tinyc_ast::Program, FrontendError> {
    let tokens = Lexer::new(source, filename).tokenize()?;
    let mut parser = Parser::new(tokens, Symbol::intern(filename));
    Ok(parser.parse_program()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reports_lexer_errors_distinctly_from_parser_errors() {
        let lex_err = parse("/* unterminated", "t.tc").unwrap_err();
        assert!(matches!(lex_err, FrontendError::Lexer(_)));

        let parse_err = parse("int x", "t.tc").unwrap_err();
        assert!(matches!(parse_err, FrontendError::Parser(_)));
    }

    #[test]
    fn parse_succeeds_on_a_well_formed_program() {
        let program = parse("int add(int a, int b) { return a + b; }", "t.tc").unwrap();
        assert_eq!(program.declarations.len(), 1);
    }
}
