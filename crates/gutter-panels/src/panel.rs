//! The abstract side-panel contract.

use gutter_core::TextViewport;

use crate::surface::{Rect, Surface};

/// A fixed-width strip docked to one edge of a text viewport.
///
/// Contract:
/// - `width()` is decided at construction and never changes over the
///   panel's lifetime (the dock relies on it for layout).
/// - `paint()` repaints the panel's entire visible region from the
///   viewport state *as passed in*, reading nothing cached. It draws
///   to its own surface only and must not mutate viewport state.
pub trait Panel {
    /// The panel's fixed width in pixels.
    fn width(&self) -> f32;

    /// Repaints the region `clip` (panel-local coordinates).
    fn paint(&self, viewport: &dyn TextViewport, surface: &mut dyn Surface, clip: Rect);
}
