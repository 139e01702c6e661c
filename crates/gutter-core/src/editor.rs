//! In-process editor model implementing [`TextViewport`].
//!
//! This is the concrete viewport the demo hosts and the tests paint
//! against. It models exactly what the panels observe: a buffer, a
//! scroll window, a caret/selection pair, and a clipboard. Editing
//! beyond the four commands (per-keystroke input, undo, lexing) is a
//! non-goal and lives in whatever real engine sits behind the trait.

use std::borrow::Cow;
use std::ops::Range;

use crate::buffer::TextBuffer;
use crate::clipboard::Clipboard;
use crate::viewport::{FontMetrics, TextViewport};

/// A scrollable view over a [`TextBuffer`].
pub struct Editor {
    buffer: TextBuffer,
    metrics: FontMetrics,
    first_visible_line: usize,
    rows_on_screen: usize,
    caret: usize,
    selection: Option<Range<usize>>,
    clipboard: Box<dyn Clipboard>,
}

impl Editor {
    /// Creates an empty editor.
    pub fn new(metrics: FontMetrics, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            buffer: TextBuffer::new(),
            metrics,
            first_visible_line: 0,
            rows_on_screen: 0,
            caret: 0,
            selection: None,
            clipboard,
        }
    }

    /// Creates an editor holding `text`.
    pub fn with_text(
        text: &str,
        metrics: FontMetrics,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let mut editor = Self::new(metrics, clipboard);
        editor.set_text(text);
        editor
    }

    /// Replaces the document, resetting scroll, caret, and selection.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = TextBuffer::from(text);
        self.first_visible_line = 0;
        self.caret = 0;
        self.selection = None;
    }

    /// Sets how many text rows fit on screen. Called by the host on
    /// resize.
    pub fn set_rows_on_screen(&mut self, rows: usize) {
        self.rows_on_screen = rows;
        self.clamp_scroll();
    }

    /// Scrolls by a signed number of lines, clamped to the document.
    pub fn scroll_by(&mut self, delta: i64) {
        let first = self.first_visible_line as i64 + delta;
        self.first_visible_line = first.max(0) as usize;
        self.clamp_scroll();
    }

    /// Current selection as a character range, if any.
    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// The clipboard backing this editor. Exposed so hosts and tests
    /// can preload or inspect it.
    pub fn clipboard_mut(&mut self) -> &mut dyn Clipboard {
        self.clipboard.as_mut()
    }

    fn clamp_scroll(&mut self) {
        let last = self.buffer.len_lines().saturating_sub(1);
        if self.first_visible_line > last {
            self.first_visible_line = last;
        }
    }
}

impl TextViewport for Editor {
    fn first_visible_line(&self) -> usize {
        self.first_visible_line
    }

    fn visible_line_count(&self) -> usize {
        let remaining = self
            .buffer
            .len_lines()
            .saturating_sub(self.first_visible_line);
        self.rows_on_screen.min(remaining)
    }

    fn text(&self) -> Cow<'_, str> {
        self.buffer.text()
    }

    fn font_metrics(&self) -> FontMetrics {
        self.metrics
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.first_visible_line = 0;
        self.caret = 0;
        self.selection = None;
    }

    fn select_all(&mut self) {
        self.selection = Some(0..self.buffer.len_chars());
        self.caret = self.buffer.len_chars();
    }

    fn copy(&mut self) {
        let Some(range) = self.selection.clone() else {
            return;
        };
        let selected = match self.buffer.slice(range) {
            Ok(text) => text.into_owned(),
            Err(err) => {
                tracing::warn!(error = %err, "copy skipped: stale selection");
                return;
            }
        };
        if let Err(err) = self.clipboard.set_text(&selected) {
            tracing::warn!(error = %err, "copy failed");
        }
    }

    fn paste(&mut self) {
        let incoming = match self.clipboard.get_text() {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "paste failed");
                return;
            }
        };
        if incoming.is_empty() {
            return;
        }
        if let Some(range) = self.selection.take() {
            self.caret = range.start;
            if let Err(err) = self.buffer.remove(range) {
                tracing::warn!(error = %err, "paste skipped: stale selection");
                return;
            }
        }
        let caret = self.caret.min(self.buffer.len_chars());
        if let Err(err) = self.buffer.insert(caret, &incoming) {
            tracing::warn!(error = %err, "paste failed to insert");
            return;
        }
        self.caret = caret + incoming.chars().count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    fn editor(text: &str, rows: usize) -> Editor {
        let mut editor = Editor::with_text(
            text,
            FontMetrics::new(21.0, 16.0),
            Box::new(MemoryClipboard::new()),
        );
        editor.set_rows_on_screen(rows);
        editor
    }

    #[test]
    fn test_visible_window_tracks_scroll() {
        let mut editor = editor("a\nb\nc\nd\ne", 3);
        assert_eq!(editor.visible_line_range(), (0, 3));

        editor.scroll_by(2);
        assert_eq!(editor.visible_line_range(), (2, 3));

        editor.scroll_by(100);
        assert_eq!(editor.first_visible_line(), 4);
        assert_eq!(editor.visible_line_count(), 1);

        editor.scroll_by(-100);
        assert_eq!(editor.first_visible_line(), 0);
    }

    #[test]
    fn test_visible_count_caps_at_document_length() {
        let editor = editor("only\ntwo lines", 40);
        assert_eq!(editor.visible_line_count(), 2);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut editor = editor("a\nb\nc", 2);
        editor.scroll_by(2);
        editor.select_all();
        editor.clear();

        assert_eq!(editor.text(), "");
        assert_eq!(editor.first_visible_line(), 0);
        assert!(editor.selection().is_none());
    }

    #[test]
    fn test_copy_without_selection_is_a_no_op() {
        let mut editor = editor("hello", 1);
        editor.copy();
        assert_eq!(editor.clipboard_mut().get_text().unwrap(), "");
    }

    #[test]
    fn test_paste_replaces_selection() {
        let mut editor = editor("old", 1);
        editor.clipboard_mut().set_text("new").unwrap();
        editor.select_all();
        editor.paste();
        assert_eq!(editor.text(), "new");
        assert!(editor.selection().is_none());
    }

    #[test]
    fn test_select_all_copy_paste_duplicates_document() {
        let mut editor = editor("abc", 1);
        editor.select_all();
        editor.copy();
        editor.paste();
        editor.paste();
        assert_eq!(editor.text(), "abcabc");
    }
}
