//! Character cursor over a single path template.

/// Cursor over the characters of one template string
///
/// A fresh scanner is created per template. Positions are byte offsets into
/// the input; `None` from [`next`](Scanner::next) marks end of input.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    /// Byte width of the last character returned by `next`, 0 at end of input
    width: usize,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            width: 0,
        }
    }

    /// Consume and return the next character
    pub fn next(&mut self) -> Option<char> {
        match self.input[self.pos..].chars().next() {
            Some(c) => {
                self.width = c.len_utf8();
                self.pos += self.width;
                Some(c)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    /// Undo the last call to [`next`](Scanner::next)
    ///
    /// Only one step of backup is supported; calling it twice in a row is a
    /// no-op the second time.
    pub fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    /// Look at the next character without consuming it
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Consume characters while `accept` holds and return the consumed run
    pub fn accept_run<F>(&mut self, accept: F) -> &'a str
    where
        F: Fn(char) -> bool,
    {
        let input = self.input;
        let start = self.pos;
        while let Some(c) = self.next() {
            if !accept(c) {
                self.backup();
                break;
            }
        }
        &input[start..self.pos]
    }

    /// Current byte offset
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }
}
