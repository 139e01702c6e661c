//! Clipboard abstraction.
//!
//! ## Learning: Trait Objects
//!
//! The editor stores a `Box<dyn Clipboard>`, so the same model runs
//! against the system clipboard in the GUI and against
//! [`MemoryClipboard`] in tests and headless environments. The vtable
//! behind `dyn Clipboard` is what lets both live in the same field.

use crate::CoreResult;

/// Something that can hold a piece of text outside the buffer.
pub trait Clipboard {
    /// Returns the current clipboard text (empty string if nothing
    /// was ever placed on it).
    fn get_text(&mut self) -> CoreResult<String>;

    /// Replaces the clipboard content.
    fn set_text(&mut self, text: &str) -> CoreResult<()>;
}

/// In-process clipboard for tests and clipboard-less hosts.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    content: String,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> CoreResult<String> {
        Ok(self.content.clone())
    }

    fn set_text(&mut self, text: &str) -> CoreResult<()> {
        self.content = text.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_round_trip() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.get_text().unwrap(), "");

        clipboard.set_text("copied").unwrap();
        assert_eq!(clipboard.get_text().unwrap(), "copied");

        clipboard.set_text("replaced").unwrap();
        assert_eq!(clipboard.get_text().unwrap(), "replaced");
    }
}
