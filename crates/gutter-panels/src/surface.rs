//! Drawing abstraction panels paint through.
//!
//! ## Learning: Recording for Testability
//!
//! A [`Surface`] is just "something that accepts rectangles and text".
//! The GUI adapts it onto a real canvas frame; tests use
//! [`DisplayList`], which records every operation as data. Two paints
//! of the same state must record equal lists, which is how the
//! idempotence guarantee is checked without a pixel buffer.

/// An axis-aligned rectangle in panel-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A straight-alpha color with `f32` channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// A drawable target for panel painting.
pub trait Surface {
    /// Fills a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Draws a single run of text with its baseline at `(x, y)`.
    fn draw_text(&mut self, x: f32, y: f32, content: &str, size: f32, color: Rgba);
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    Text {
        x: f32,
        y: f32,
        content: String,
        size: f32,
        color: Rgba,
    },
}

/// A [`Surface`] that records operations instead of rasterizing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded operations, in paint order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Forgets everything recorded so far.
    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl Surface for DisplayList {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn draw_text(&mut self, x: f32, y: f32, content: &str, size: f32, color: Rgba) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            content: content.to_string(),
            size,
            color,
        });
    }
}
