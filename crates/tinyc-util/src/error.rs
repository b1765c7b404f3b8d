//! Frontend error types.
//!
//! Three distinct, fatal error kinds: one per failure surface. None of them
//! collect — the first fault wins and the caller is handed exactly one
//! error, matching the frontend's "no recovery" contract.

use crate::location::SourceLocation;
use thiserror::Error;

/// A malformed comment, literal, escape, or character encountered while
/// lexing.
///
/// Displays as `file:line:column: message`, the format the calling layer
/// reports on stderr.
#[derive(Debug, Error)]
#[error("{location}: {message}")]
pub struct LexerError {
    pub message: String,
    pub location: SourceLocation,
}

impl LexerError {
    pub fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

/// An unexpected token for the current production, a missing terminator, or
/// a disallowed construct.
///
/// Displays as `file:line:column: message`, the format the calling layer
/// reports on stderr.
#[derive(Debug, Error)]
#[error("{location}: {message}")]
pub struct ParserError {
    pub message: String,
    pub location: SourceLocation,
}

impl ParserError {
    pub fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

/// An internal programmer error: a token or node was constructed with data
/// inconsistent with its own tag (e.g. an integer-literal token whose
/// decoded value is not an integer). Distinct from [`LexerError`] and
/// [`ParserError`] per the frontend's error-handling design.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token tagged {tag} constructed with a value of the wrong kind")]
    MismatchedValue { tag: &'static str },
}

pub type LexerResult<T> = std::result::Result<T, LexerError>;
pub type ParserResult<T> = std::result::Result<T, ParserError>;
pub type TokenResult<T> = std::result::Result<T, TokenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;

    #[test]
    fn lexer_error_formats_as_file_line_column_message() {
        let loc = SourceLocation::new(Symbol::intern("a.tc"), 2, 5);
        let err = LexerError::new("unterminated comment", loc);
        assert_eq!(format!("{err}"), "a.tc:2:5: unterminated comment");
    }

    #[test]
    fn parser_error_formats_as_file_line_column_message() {
        let loc = SourceLocation::new(Symbol::intern("b.tc"), 1, 1);
        let err = ParserError::new("expected ';'", loc);
        assert_eq!(format!("{err}"), "b.tc:1:1: expected ';'");
    }

    #[test]
    fn token_error_names_the_offending_tag() {
        let err = TokenError::MismatchedValue { tag: "IntegerLiteral" };
        assert!(format!("{err}").contains("IntegerLiteral"));
    }
}
