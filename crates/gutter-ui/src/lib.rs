//! # Gutter UI
//!
//! Demo application hosting the panels with the iced framework.
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: [`App`], the editor model plus the panel dock
//! - **Message**: toolbar activations, scrolling, window resizes
//! - **Update**: pure function `(state, message) -> new state`
//! - **View**: canvas layers for the gutters, buttons for the toolbar
//!
//! Everything runs on the single UI thread: a panel repaint always
//! observes the viewport state as of the moment the view function
//! runs, so there is no staleness window to reason about.

pub mod app;
pub mod clipboard;
pub mod layers;
pub mod theme;

pub use app::{run, App, Flags};
pub use theme::Theme;
