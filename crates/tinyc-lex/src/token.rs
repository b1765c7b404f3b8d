//! The token alphabet and the `Token` value itself.

use tinyc_util::{SourceLocation, Symbol, TokenError, TokenResult};

/// The closed set of token tags the lexer ever produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    EndOfFile,

    // Keywords
    If,
    Else,
    While,
    Do,
    For,
    Switch,
    Case,
    Default,
    Break,
    Continue,
    Return,
    Int,
    Double,
    Char,
    Void,
    Struct,
    Typedef,
    Cast,

    Identifier,
    IntegerLiteral,
    DoubleLiteral,
    CharLiteral,
    StringLiteral,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Assign,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Amp,
    Pipe,
    AmpAmp,
    PipePipe,
    Bang,
    Tilde,
    PlusPlus,
    MinusMinus,
    ShiftLeft,
    ShiftRight,
    Arrow,
    Dot,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Colon,
    Comma,

    /// Unused in valid runs; a malformed input fails with a `LexerError`
    /// instead of ever producing this tag.
    Error,
}

/// The decoded value of a numeric or character literal token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    Integer(i64),
    Double(f64),
    Char(char),
}

/// A single lexical token: its tag, the exact source text it was lexed
/// from, its starting location, and — for numeric/character literals —
/// its decoded value.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    lexeme: Symbol,
    location: SourceLocation,
    value: Option<LiteralValue>,
}

impl Token {
    /// Builds a non-literal token (no decoded value).
    pub fn new(kind: TokenKind, lexeme: Symbol, location: SourceLocation) -> Self {
        Self {
            kind,
            lexeme,
            location,
            value: None,
        }
    }

    /// Builds a literal token, validating that `kind` and `value` agree —
    /// constructing e.g. an `IntegerLiteral` tag with a `Double` value is a
    /// programmer error reported via [`TokenError`], not a lexer error.
    pub fn new_literal(
        kind: TokenKind,
        lexeme: Symbol,
        location: SourceLocation,
        value: LiteralValue,
    ) -> TokenResult<Self> {
        let consistent = matches!(
            (kind, value),
            (TokenKind::IntegerLiteral, LiteralValue::Integer(_))
                | (TokenKind::DoubleLiteral, LiteralValue::Double(_))
                | (TokenKind::CharLiteral, LiteralValue::Char(_))
        );
        if !consistent {
            return Err(TokenError::MismatchedValue {
                tag: kind.tag_name(),
            });
        }
        Ok(Self {
            kind,
            lexeme,
            location,
            value: Some(value),
        })
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> Symbol {
        self.lexeme
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn value(&self) -> Option<LiteralValue> {
        self.value
    }
}

impl TokenKind {
    /// Returns the keyword lexeme for this kind if it is a keyword.
    pub fn keyword_text(&self) -> Option<&'static str> {
        Some(match self {
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::For => "for",
            TokenKind::Switch => "switch",
            TokenKind::Case => "case",
            TokenKind::Default => "default",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Return => "return",
            TokenKind::Int => "int",
            TokenKind::Double => "double",
            TokenKind::Char => "char",
            TokenKind::Void => "void",
            TokenKind::Struct => "struct",
            TokenKind::Typedef => "typedef",
            TokenKind::Cast => "cast",
            _ => return None,
        })
    }

    /// Looks up the keyword kind for `text`, if any.
    pub fn keyword_from_text(text: &str) -> Option<TokenKind> {
        Some(match text {
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "do" => TokenKind::Do,
            "for" => TokenKind::For,
            "switch" => TokenKind::Switch,
            "case" => TokenKind::Case,
            "default" => TokenKind::Default,
            "break" => TokenKind::Break,
            "continue" => TokenKind::Continue,
            "return" => TokenKind::Return,
            "int" => TokenKind::Int,
            "double" => TokenKind::Double,
            "char" => TokenKind::Char,
            "void" => TokenKind::Void,
            "struct" => TokenKind::Struct,
            "typedef" => TokenKind::Typedef,
            "cast" => TokenKind::Cast,
            _ => return None,
        })
    }

    fn tag_name(&self) -> &'static str {
        match self {
            TokenKind::EndOfFile => "EndOfFile",
            TokenKind::Identifier => "Identifier",
            TokenKind::IntegerLiteral => "IntegerLiteral",
            TokenKind::DoubleLiteral => "DoubleLiteral",
            TokenKind::CharLiteral => "CharLiteral",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::Error => "Error",
            _ => "Token",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc() -> SourceLocation {
        SourceLocation::new(Symbol::intern("t.tc"), 1, 1)
    }

    #[test]
    fn non_literal_token_has_no_value() {
        let t = Token::new(TokenKind::Plus, Symbol::intern("+"), loc());
        assert_eq!(t.value(), None);
    }

    #[test]
    fn matching_literal_construction_succeeds() {
        let t = Token::new_literal(
            TokenKind::IntegerLiteral,
            Symbol::intern("42"),
            loc(),
            LiteralValue::Integer(42),
        )
        .unwrap();
        assert_eq!(t.value(), Some(LiteralValue::Integer(42)));
    }

    #[test]
    fn mismatched_literal_construction_fails() {
        let result = Token::new_literal(
            TokenKind::IntegerLiteral,
            Symbol::intern("42"),
            loc(),
            LiteralValue::Double(42.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn keyword_lookup_round_trips() {
        for kw in ["if", "else", "cast", "typedef"] {
            let kind = TokenKind::keyword_from_text(kw).unwrap();
            assert_eq!(kind.keyword_text(), Some(kw));
        }
    }
}
