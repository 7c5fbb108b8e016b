//! Read cursor over post text.
//!
//! A `Cursor` is a borrowed `&str` plus a byte offset. The offset only moves
//! forward and always rests on a `char` boundary, so slices handed out by
//! [`Cursor::consume_until`] are plain `&str` borrows of the input.

// =============================================================================
// Cursor
// =============================================================================

/// Forward-only scanner over an immutable text buffer.
///
/// Owned exclusively by a single render call; it is never shared.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Unread part of the input.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.text[self.offset..]
    }

    /// True iff the whole input has been consumed.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.offset == self.text.len()
    }

    /// Character at the current offset, `None` once done.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Check whether the unread input starts with `literal`, without consuming.
    #[inline]
    pub fn starts_with(&self, literal: &str) -> bool {
        self.remaining().starts_with(literal)
    }

    /// Move the offset forward by `amount` bytes.
    ///
    /// Callers only advance over input they have already matched. The offset
    /// is clamped to the input length.
    #[inline]
    pub fn advance(&mut self, amount: usize) {
        self.offset = (self.offset + amount).min(self.text.len());
        debug_assert!(self.text.is_char_boundary(self.offset));
    }

    /// Advance past the current character (one code point).
    #[inline]
    pub fn advance_char(&mut self) {
        if let Some(c) = self.current_char() {
            self.advance(c.len_utf8());
        }
    }

    /// If the unread input starts with `literal`, skip over it and return true.
    /// Otherwise leave the cursor untouched and return false.
    pub fn try_consume(&mut self, literal: &str) -> bool {
        if !self.starts_with(literal) {
            return false;
        }
        self.advance(literal.len());
        true
    }

    /// Skip one newline (`"\r\n"`, `"\n"` or `"\r"`) if the cursor is on one.
    pub fn try_consume_newline(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        if self.try_consume("\r\n") {
            return true;
        }
        match self.current_char() {
            Some('\n' | '\r') => {
                self.advance(1);
                true
            }
            _ => false,
        }
    }

    /// Search forward for `closing`.
    ///
    /// If found, advance up to (not past) it and return the skipped slice,
    /// which may be empty. If not found, return `None` and leave the cursor
    /// where it was.
    pub fn consume_until(&mut self, closing: &str) -> Option<&'a str> {
        let rest = self.remaining();
        let len = rest.find(closing)?;
        self.advance(len);
        Some(&rest[..len])
    }
}

// =============================================================================
// Tests
// =============================================================================
