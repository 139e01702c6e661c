//! Rope-backed text buffer.
//!
//! This is deliberately a thin wrapper: the panels only ever *read*
//! the buffer, and the demo editor only needs whole-buffer mutation
//! plus insert/remove for paste. Undo history, file IO, and
//! indentation settings belong to a real editing engine, which is an
//! external collaborator here.

use ropey::Rope;
use std::borrow::Cow;
use std::ops::Range;

use crate::{CoreError, CoreResult};

/// A small rope-backed text buffer.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    /// Creates a new empty buffer.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Returns the entire text content.
    ///
    /// For small buffers this borrows; for buffers spanning multiple
    /// rope chunks it allocates (`Cow` hides the difference).
    #[inline]
    pub fn text(&self) -> Cow<'_, str> {
        self.rope.slice(..).into()
    }

    /// Returns a specific line (0-indexed), including its trailing
    /// newline if present.
    pub fn line(&self, line_idx: usize) -> CoreResult<Cow<'_, str>> {
        if line_idx >= self.len_lines() {
            return Err(CoreError::LineOutOfBounds(line_idx));
        }
        Ok(self.rope.line(line_idx).into())
    }

    /// Returns a slice of text by character range.
    pub fn slice(&self, range: Range<usize>) -> CoreResult<Cow<'_, str>> {
        if range.end > self.len_chars() || range.start > range.end {
            return Err(CoreError::InvalidCharIndex(range.end));
        }
        Ok(self.rope.slice(range).into())
    }

    /// Returns true if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Returns the number of characters in the buffer.
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns the number of lines in the buffer.
    ///
    /// An empty buffer has 1 line; a buffer ending with `\n` counts
    /// the empty line after it.
    #[inline]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Inserts text at a character index.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> CoreResult<()> {
        if char_idx > self.len_chars() {
            return Err(CoreError::InvalidCharIndex(char_idx));
        }
        self.rope.insert(char_idx, text);
        Ok(())
    }

    /// Deletes text in a character range, returning the removed text.
    pub fn remove(&mut self, range: Range<usize>) -> CoreResult<String> {
        if range.end > self.len_chars() || range.start > range.end {
            return Err(CoreError::InvalidCharIndex(range.end));
        }
        let removed: String = self.rope.slice(range.clone()).into();
        self.rope.remove(range);
        Ok(removed)
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.rope = Rope::new();
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }
}

impl From<String> for TextBuffer {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer() {
        let buffer = TextBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.text(), "");
        assert_eq!(buffer.len_lines(), 1);
    }

    #[test]
    fn test_line_access() {
        let buffer = TextBuffer::from("one\ntwo\nthree");
        assert_eq!(buffer.len_lines(), 3);
        assert_eq!(buffer.line(0).unwrap(), "one\n");
        assert_eq!(buffer.line(2).unwrap(), "three");
        assert!(buffer.line(3).is_err());
    }

    #[test]
    fn test_insert_remove() {
        let mut buffer = TextBuffer::from("hello world");
        buffer.insert(5, ",").unwrap();
        assert_eq!(buffer.text(), "hello, world");

        let removed = buffer.remove(0..6).unwrap();
        assert_eq!(removed, "hello,");
        assert_eq!(buffer.text(), " world");
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let mut buffer = TextBuffer::from("hi");
        assert!(buffer.insert(3, "x").is_err());
    }

    #[test]
    fn test_clear() {
        let mut buffer = TextBuffer::from("some text");
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.text(), "");
    }
}
