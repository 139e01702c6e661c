//! Editor commands the toolbar binds to.
//!
//! ## Learning: The Command Pattern
//!
//! A control is bound to a `Command` value at construction time, not
//! to a method on a concrete editor. Activation dispatches through
//! [`TextViewport`], so the toolbar can be exercised in tests against
//! the in-process editor model.

use crate::viewport::TextViewport;

/// The fixed set of editor actions the toolbar exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Empty the buffer.
    Clear,
    /// Select all text.
    SelectAll,
    /// Place the selection on the clipboard.
    Copy,
    /// Insert clipboard content at the caret.
    Paste,
}

impl Command {
    /// Returns the command's display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Command::Clear => "Clear",
            Command::SelectAll => "Select All",
            Command::Copy => "Copy",
            Command::Paste => "Paste",
        }
    }

    /// Invokes the command synchronously against the viewport.
    pub fn apply(&self, target: &mut dyn TextViewport) {
        tracing::debug!(command = self.display_name(), "applying command");
        match self {
            Command::Clear => target.clear(),
            Command::SelectAll => target.select_all(),
            Command::Copy => target.copy(),
            Command::Paste => target.paste(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::editor::Editor;
    use crate::viewport::FontMetrics;

    fn editor(text: &str) -> Editor {
        Editor::with_text(
            text,
            FontMetrics::new(21.0, 16.0),
            Box::new(MemoryClipboard::new()),
        )
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Command::Clear.display_name(), "Clear");
        assert_eq!(Command::SelectAll.display_name(), "Select All");
    }

    #[test]
    fn test_clear_empties_buffer() {
        let mut editor = editor("some text");
        Command::Clear.apply(&mut editor);
        assert_eq!(editor.text(), "");
    }

    #[test]
    fn test_select_all_then_copy_places_buffer_on_clipboard() {
        let mut editor = editor("the whole document");
        Command::SelectAll.apply(&mut editor);
        Command::Copy.apply(&mut editor);
        assert_eq!(
            editor.clipboard_mut().get_text().unwrap(),
            "the whole document"
        );
    }
}
