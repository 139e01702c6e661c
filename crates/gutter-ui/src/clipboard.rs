//! System clipboard backed by arboard.

use gutter_core::{Clipboard, CoreError, CoreResult};

/// The real clipboard. If construction fails (no display server),
/// the app falls back to an in-memory clipboard instead.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> CoreResult<Self> {
        arboard::Clipboard::new()
            .map(|inner| Self { inner })
            .map_err(|e| CoreError::Clipboard(e.to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> CoreResult<String> {
        match self.inner.get_text() {
            Ok(text) => Ok(text),
            // An empty clipboard is not an error for paste purposes.
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(CoreError::Clipboard(e.to_string())),
        }
    }

    fn set_text(&mut self, text: &str) -> CoreResult<()> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| CoreError::Clipboard(e.to_string()))
    }
}
