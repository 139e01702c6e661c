//! # Gutter Core
//!
//! The viewport seam between a text-editing engine and the decorative
//! side panels that dock around it.
//!
//! Panels never talk to a concrete editor type. They consume the
//! [`TextViewport`] trait, which exposes exactly what a panel needs:
//! the visible-line window, the document text, font metrics, and the
//! four fire-and-forget commands (clear, select-all, copy, paste).
//!
//! ## Learning: Traits at the Seams
//!
//! A narrow trait here buys two things:
//! - panels are unit-testable against the in-process [`Editor`] model
//!   (no GUI toolkit in the test harness), and
//! - any host editor can join by implementing five queries and four
//!   commands.

pub mod buffer;
pub mod clipboard;
pub mod command;
pub mod editor;
pub mod viewport;

pub use buffer::TextBuffer;
pub use clipboard::{Clipboard, MemoryClipboard};
pub use command::Command;
pub use editor::Editor;
pub use viewport::{FontMetrics, TextViewport};

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid character index: {0}")]
    InvalidCharIndex(usize),

    #[error("Line {0} is out of bounds")]
    LineOutOfBounds(usize),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
