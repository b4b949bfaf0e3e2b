/// Byte-level cursor over a MetaMark source buffer.
///
/// The scanner borrows the input for the duration of one parse and never
/// indexes out of bounds: every lookahead past the end yields `None`, which
/// plays the role of the end-of-input sentinel.
#[derive(Clone)]
pub struct Scanner<'a> {
    /// The text being parsed.
    src: &'a str,
    /// Current byte offset into `src`.
    pos: usize,
}

/// ASCII whitespace in the C sense: space, tab, LF, VT, FF, CR.
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Whitespace that does not end a line.
pub fn is_inline_space(b: u8) -> bool {
    b != b'\n' && is_space(b)
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// The whole input, independent of the cursor.
    pub fn source(&self) -> &'a str {
        self.src
    }

    /// Current byte offset.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.src.len()
    }

    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }

    /// Returns true if the cursor has reached the end of input.
    pub fn eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        self.src.get(self.pos..).unwrap_or("")
    }

    /// Byte at the cursor without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Byte `offset` positions ahead of the cursor, `None` past the end.
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.src.as_bytes().get(self.pos.checked_add(offset)?).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.src
            .as_bytes()
            .get(self.pos..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// True when the cursor sits at offset 0 or directly after a newline.
    pub fn at_line_start(&self) -> bool {
        self.pos == 0 || self.src.as_bytes().get(self.pos - 1) == Some(&b'\n')
    }

    /// Consumes and returns the byte at the cursor. At end of input returns
    /// `None` and leaves the cursor where it is.
    pub fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Advances by `n` bytes, stopping at the end of input.
    pub fn bump_n(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.src.len());
    }

    /// Moves the cursor to an absolute offset, clamped to the input length.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.src.len());
    }

    /// Consumes `b` if it is the next byte.
    pub fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes `pat` if the remaining input starts with it.
    pub fn eat_str(&mut self, pat: &str) -> bool {
        if self.starts_with(pat.as_bytes()) {
            self.pos += pat.len();
            true
        } else {
            false
        }
    }

    /// Consumes one line ending, `\n` or `\r\n`, if the cursor is on one.
    pub fn eat_line_end(&mut self) -> bool {
        self.eat_str("\r\n") || self.eat(b'\n')
    }

    /// Skips all whitespace, newlines included.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.pos += 1;
        }
    }

    /// Skips whitespace on the current line, stopping at a newline.
    pub fn skip_inline_whitespace(&mut self) {
        while self.peek().is_some_and(is_inline_space) {
            self.pos += 1;
        }
    }

    /// Advances until `pred` holds for the byte at the cursor or input ends.
    pub fn skip_until(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(|b| !pred(b)) {
            self.pos += 1;
        }
    }

    /// Absolute offset of the next occurrence of `pat` at or after the cursor.
    pub fn find(&self, pat: &str) -> Option<usize> {
        self.rest().find(pat).map(|k| self.pos + k)
    }

    /// Substring `[start, end)`. Empty and back-to-front ranges are not
    /// substrings and yield `None`, as does any range reaching past the end.
    pub fn extract(&self, start: usize, end: usize) -> Option<&'a str> {
        if start >= end || end > self.src.len() {
            return None;
        }
        self.src.get(start..end)
    }
}
