use super::core::{Lexer, TokenStart};
use tinyc_util::LexerResult;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments before the start of the next token.
    /// Comments come in two forms: `//` to end of line, and `/* ... */`
    /// as a single balanced block. An unterminated `/*` is a lexer error
    /// reported at the comment's opening location.
    pub(super) fn skip_whitespace_and_comments(&mut self) -> LexerResult<()> {
        loop {
            match self.cursor().current_char() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.cursor_mut().advance();
                }
                '/' if self.cursor().peek_char(1) == '/' => {
                    while !self.cursor().is_at_end() && self.cursor().current_char() != '\n' {
                        self.cursor_mut().advance();
                    }
                }
                '/' if self.cursor().peek_char(1) == '*' => {
                    self.skip_block_comment()?;
                }
                _ => return Ok(()),
            }
        }
    }

    /// A block comment nests: an inner `/*` opens another level, and the
    /// comment only ends once every opened level has seen its own `*/`.
    fn skip_block_comment(&mut self) -> LexerResult<()> {
        let start = TokenStart {
            pos: self.cursor().position(),
            line: self.cursor().line(),
            column: self.cursor().column(),
        };
        self.cursor_mut().advance(); // '/'
        self.cursor_mut().advance(); // '*'
        let mut depth = 1u32;

        loop {
            if self.cursor().is_at_end() {
                return Err(self.error_at("unterminated block comment", start));
            }
            if self.cursor().current_char() == '/' && self.cursor().peek_char(1) == '*' {
                self.cursor_mut().advance();
                self.cursor_mut().advance();
                depth += 1;
                continue;
            }
            if self.cursor().current_char() == '*' && self.cursor().peek_char(1) == '/' {
                self.cursor_mut().advance();
                self.cursor_mut().advance();
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
                continue;
            }
            self.cursor_mut().advance();
        }
    }
}
