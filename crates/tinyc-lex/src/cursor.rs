//! Byte-position cursor over the source buffer, tracking line and column as
//! it advances.

/// A UTF-8-aware cursor over a source string.
///
/// Positions are byte offsets; `line`/`column` are 1-based and updated on
/// every [`advance`](Cursor::advance) call, including across newlines.
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// The character at the cursor, or `'\0'` at end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// The character `offset` characters ahead of the cursor, or `'\0'`
    /// past the end of input.
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let mut chars = self.source[self.position..].chars();
        for _ in 0..offset {
            if chars.next().is_none() {
                return '\0';
            }
        }
        chars.next().unwrap_or('\0')
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Advances past the current character, updating line/column tracking.
    /// A no-op at end of input.
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }
        let c = self.source[self.position..].chars().next().unwrap();
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Consumes and returns `true` if the current character matches
    /// `expected`; otherwise leaves the cursor untouched and returns
    /// `false`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// The substring of source text from byte offset `start` up to (not
    /// including) the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_tracks_line_and_column() {
        let mut c = Cursor::new("ab\ncd");
        assert_eq!((c.line(), c.column()), (1, 1));
        c.advance();
        assert_eq!((c.line(), c.column()), (1, 2));
        c.advance();
        assert_eq!((c.line(), c.column()), (1, 3));
        c.advance(); // consumes '\n'
        assert_eq!((c.line(), c.column()), (2, 1));
    }

    #[test]
    fn current_char_is_nul_at_end() {
        let mut c = Cursor::new("a");
        c.advance();
        assert_eq!(c.current_char(), '\0');
        assert!(c.is_at_end());
    }

    #[test]
    fn peek_char_looks_ahead_without_consuming() {
        let c = Cursor::new("abc");
        assert_eq!(c.peek_char(0), 'a');
        assert_eq!(c.peek_char(1), 'b');
        assert_eq!(c.peek_char(2), 'c');
        assert_eq!(c.peek_char(3), '\0');
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn match_char_consumes_only_on_match() {
        let mut c = Cursor::new("=>");
        assert!(c.match_char('='));
        assert!(!c.match_char('='));
        assert_eq!(c.current_char(), '>');
    }

    #[test]
    fn slice_from_returns_consumed_text() {
        let mut c = Cursor::new("hello world");
        let start = c.position();
        for _ in 0..5 {
            c.advance();
        }
        assert_eq!(c.slice_from(start), "hello");
    }

    #[test]
    fn advance_handles_multibyte_characters() {
        let mut c = Cursor::new("héllo");
        c.advance(); // h
        assert_eq!(c.current_char(), 'é');
        c.advance(); // é, 2 bytes
        assert_eq!(c.current_char(), 'l');
    }
}
