//! The driver's own error type, wrapping I/O failures and frontend errors
//! under one roof so `main` has a single place to format a message.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Lexer(#[from] tinyc_util::LexerError),

    #[error("{0}")]
    Parser(#[from] tinyc_util::ParserError),
}

impl From<tinyc_parse::FrontendError> for DriverError {
    fn from(err: tinyc_parse::FrontendError) -> Self {
        match err {
            tinyc_parse::FrontendError::Lexer(e) => DriverError::Lexer(e),
            tinyc_parse::FrontendError::Parser(e) => DriverError::Parser(e),
        }
    }
}

impl DriverError {
    /// The `Lexer error:`/`Parser error:`/`Error:` prefix this error should
    /// be reported under, per the CLI's stderr contract.
    pub fn prefix(&self) -> &'static str {
        match self {
            DriverError::Lexer(_) => "Lexer error:",
            DriverError::Parser(_) => "Parser error:",
            DriverError::Io(_) => "Error:",
        }
    }
}

pub type Result<T> = std::result::Result<T, DriverError>;
