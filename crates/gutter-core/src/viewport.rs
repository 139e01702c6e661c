//! The narrow interface panels consume from a text-editing engine.

use std::borrow::Cow;

/// Font measurements a panel needs to place rows and baselines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Height of one rendered text row, in pixels.
    pub line_height: f32,
    /// Distance from the top of a row to the text baseline, in pixels.
    pub ascent: f32,
}

impl FontMetrics {
    pub fn new(line_height: f32, ascent: f32) -> Self {
        Self {
            line_height,
            ascent,
        }
    }
}

/// Read-only queries plus fire-and-forget commands exposed by the
/// host text-editing engine.
///
/// Panels pull from this interface on every repaint and must never
/// cache a visible-line window across repaints: `first_visible_line()
/// + i` for `i` in `0..visible_line_count()` is always resolved
/// against the state at paint time.
///
/// The command half mutates the buffer, selection, or clipboard.
/// Commands report nothing back; failures (e.g. an unavailable system
/// clipboard) are the implementation's problem to log and swallow.
pub trait TextViewport {
    /// Index of the first document line currently on screen.
    fn first_visible_line(&self) -> usize;

    /// Number of document lines currently on screen.
    fn visible_line_count(&self) -> usize;

    /// Full buffer content, with line breaks.
    fn text(&self) -> Cow<'_, str>;

    /// Metrics of the font the engine renders text with.
    fn font_metrics(&self) -> FontMetrics;

    /// Empties the buffer.
    fn clear(&mut self);

    /// Selects all text.
    fn select_all(&mut self);

    /// Places the current selection on the clipboard.
    fn copy(&mut self);

    /// Inserts clipboard content at the caret, replacing any
    /// selection.
    fn paste(&mut self);

    /// The visible-line window as `(first_line, count)`.
    fn visible_line_range(&self) -> (usize, usize) {
        (self.first_visible_line(), self.visible_line_count())
    }
}
