//! Line-number gutter.

use gutter_core::TextViewport;

use crate::panel::Panel;
use crate::surface::{Rect, Rgba, Surface};

const DEFAULT_WIDTH: f32 = 40.0;
const DEFAULT_MARGIN: f32 = 5.0;

/// Renders the 1-based line number of every currently visible line.
///
/// One screen row is assumed to equal one buffer line; soft wrap and
/// folding are out of scope.
#[derive(Debug, Clone)]
pub struct LineNumberPanel {
    width: f32,
    margin: f32,
    font_size: f32,
    background: Rgba,
    text_color: Rgba,
}

impl LineNumberPanel {
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            margin: DEFAULT_MARGIN,
            font_size: 13.0,
            background: Rgba::rgb(0.83, 0.83, 0.83),
            text_color: Rgba::rgb(0.0, 0.0, 0.0),
        }
    }

    /// Overrides the fixed width. Must be called before the panel is
    /// attached to a dock.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

impl Default for LineNumberPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for LineNumberPanel {
    fn width(&self) -> f32 {
        self.width
    }

    fn paint(&self, viewport: &dyn TextViewport, surface: &mut dyn Surface, clip: Rect) {
        surface.fill_rect(clip, self.background);

        let metrics = viewport.font_metrics();
        let (first, count) = viewport.visible_line_range();

        for i in 0..count {
            let label = (first + i + 1).to_string();
            let y = i as f32 * metrics.line_height + metrics.ascent;
            surface.draw_text(self.margin, y, &label, self.font_size, self.text_color);
        }
    }
}
