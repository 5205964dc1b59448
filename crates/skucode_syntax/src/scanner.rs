//! Byte cursor over the main part of a normalized SKU.
//!
//! The main product code is plain ASCII in practice, but input is arbitrary user text. The cursor only ever
//! consumes ASCII bytes, so every slice it hands out lies on `char` boundaries and slicing cannot panic.

/// Cursor over a source string.
///
/// ## Notes
/// - Each `take_*` primitive either consumes a non-empty run and returns it, or consumes nothing and returns
///   `None`. A failed match never moves the cursor.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Byte offset of the cursor in the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Unconsumed remainder of the source.
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Text consumed since byte offset `start` (a value previously returned by [`Cursor::pos`]).
    pub fn since(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Consume exactly `n` ASCII bytes if every one satisfies `pred`.
    pub fn take_exact(&mut self, n: usize, pred: impl Fn(u8) -> bool) -> Option<&'a str> {
        let bytes = self.rest().as_bytes();
        if n == 0 || bytes.len() < n || !bytes[..n].iter().all(|&b| b.is_ascii() && pred(b)) {
            return None;
        }
        Some(self.advance(n))
    }

    /// Consume the longest non-empty run of ASCII bytes satisfying `pred`.
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> Option<&'a str> {
        let len = self
            .rest()
            .bytes()
            .take_while(|&b| b.is_ascii() && pred(b))
            .count();
        if len == 0 {
            return None;
        }
        Some(self.advance(len))
    }

    fn advance(&mut self, len: usize) -> &'a str {
        let start = self.pos;
        self.pos += len;
        &self.source[start..self.pos]
    }
}
