/// A forward-only scanning position over a byte buffer.
///
/// This is the only primitive the compiler and matcher need: the matching
/// algorithm is a single forward pass, so there is deliberately no API for
/// rewinding.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor { buf, pos: 0 }
    }

    /// Returns the current byte offset into the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes left to scan.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns `true` if any input remains at the cursor.
    pub fn can_continue(&self) -> bool {
        self.pos < self.buf.len()
    }

    /// Returns the byte at the cursor without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Advances the cursor by `n` bytes, clamped to the end of the buffer.
    pub fn advance(&mut self, n: usize) {
        self.pos = usize::min(self.pos + n, self.buf.len());
    }

    /// Advances to the next occurrence of `c`, or to the end of the buffer
    /// if `c` does not occur again.
    pub fn seek(&mut self, c: u8) {
        while let Some(b) = self.peek() {
            if b == c {
                break;
            }
            self.pos += 1;
        }
    }

    /// Skips over a run of consecutive `c` bytes. Returns `true` if input
    /// remains after the run.
    pub fn skip_run(&mut self, c: u8) -> bool {
        while self.peek() == Some(c) {
            self.pos += 1;
        }
        self.can_continue()
    }

    /// Consumes `text` if the remaining input starts with it byte-for-byte.
    pub fn consume(&mut self, text: &[u8]) -> bool {
        if self.buf[self.pos..].starts_with(text) {
            self.pos += text.len();
            true
        } else {
            false
        }
    }

    /// Returns the unscanned remainder of the buffer.
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }
}
