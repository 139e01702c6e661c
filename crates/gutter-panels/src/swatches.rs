//! Color-swatch gutter.

use gutter_core::TextViewport;

use crate::color::{parse_color_literal, Rgb};
use crate::panel::Panel;
use crate::surface::{Rect, Rgba, Surface};

const DEFAULT_WIDTH: f32 = 20.0;
const INSET_X: f32 = 2.0;
const INSET_Y: f32 = 2.0;

/// Paints a filled swatch next to every visible line that contains a
/// recognizable color literal.
///
/// The document is split on line breaks and the scan restricted to
/// the current visible window, so row 0 of the panel is always the
/// first *visible* line, not document line 0. Lines without a
/// parseable literal are simply left unpainted.
#[derive(Debug, Clone)]
pub struct ColorSwatchPanel {
    width: f32,
    background: Rgba,
}

impl ColorSwatchPanel {
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            background: Rgba::rgb(1.0, 1.0, 1.0),
        }
    }
}

impl Default for ColorSwatchPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn to_rgba(color: Rgb) -> Rgba {
    Rgba::rgb(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
    )
}

impl Panel for ColorSwatchPanel {
    fn width(&self) -> f32 {
        self.width
    }

    fn paint(&self, viewport: &dyn TextViewport, surface: &mut dyn Surface, clip: Rect) {
        surface.fill_rect(clip, self.background);

        let line_height = viewport.font_metrics().line_height;
        let (first, count) = viewport.visible_line_range();
        let text = viewport.text();

        for (row, line) in text.lines().skip(first).take(count).enumerate() {
            let Some(color) = parse_color_literal(line) else {
                continue;
            };
            let swatch = Rect::new(
                INSET_X,
                row as f32 * line_height,
                self.width - 2.0 * INSET_X,
                line_height - INSET_Y,
            );
            surface.fill_rect(swatch, to_rgba(color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DisplayList, DrawOp};
    use gutter_core::{Editor, FontMetrics, MemoryClipboard};

    fn viewport(text: &str, rows: usize, scroll: i64) -> Editor {
        let mut editor = Editor::with_text(
            text,
            FontMetrics::new(20.0, 15.0),
            Box::new(MemoryClipboard::new()),
        );
        editor.set_rows_on_screen(rows);
        editor.scroll_by(scroll);
        editor
    }

    /// Swatch fills recorded after the background, as (row, color).
    fn swatches(list: &DisplayList, line_height: f32) -> Vec<(usize, Rgba)> {
        list.ops()
            .iter()
            .skip(1)
            .filter_map(|op| match op {
                DrawOp::FillRect { rect, color } => {
                    Some(((rect.y / line_height) as usize, *color))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_scenario_three_lines() {
        let viewport = viewport("x = #FF0000\ny = 5\nz = blue", 3, 0);
        let panel = ColorSwatchPanel::new();
        let mut list = DisplayList::new();
        panel.paint(&viewport, &mut list, Rect::new(0.0, 0.0, 20.0, 60.0));

        assert_eq!(
            swatches(&list, 20.0),
            vec![
                (0, Rgba::rgb(1.0, 0.0, 0.0)),
                (2, Rgba::rgb(0.0, 0.0, 1.0)),
            ]
        );
    }

    #[test]
    fn test_rows_are_relative_to_the_visible_window() {
        let viewport = viewport("plain\nplain\nc = #00FF00\nplain", 2, 2);
        let panel = ColorSwatchPanel::new();
        let mut list = DisplayList::new();
        panel.paint(&viewport, &mut list, Rect::new(0.0, 0.0, 20.0, 40.0));

        // Document line 2 is the first visible row.
        assert_eq!(swatches(&list, 20.0), vec![(0, Rgba::rgb(0.0, 1.0, 0.0))]);
    }

    #[test]
    fn test_malformed_line_is_skipped_silently() {
        let viewport = viewport("ok = #007ACC\nbroken = QColor(1,2\nok = red", 3, 0);
        let panel = ColorSwatchPanel::new();
        let mut list = DisplayList::new();
        panel.paint(&viewport, &mut list, Rect::new(0.0, 0.0, 20.0, 60.0));

        let rows: Vec<usize> = swatches(&list, 20.0).iter().map(|(row, _)| *row).collect();
        assert_eq!(rows, vec![0, 2]);
    }

    #[test]
    fn test_swatch_geometry_is_inset() {
        let viewport = viewport("c = black", 1, 0);
        let panel = ColorSwatchPanel::new();
        let mut list = DisplayList::new();
        panel.paint(&viewport, &mut list, Rect::new(0.0, 0.0, 20.0, 20.0));

        let DrawOp::FillRect { rect, .. } = &list.ops()[1] else {
            panic!("expected a swatch fill");
        };
        assert_eq!(*rect, Rect::new(2.0, 0.0, 16.0, 18.0));
    }

    #[test]
    fn test_repaint_is_idempotent() {
        let viewport = viewport("a = red\nb\nc = #112233", 3, 0);
        let panel = ColorSwatchPanel::new();
        let clip = Rect::new(0.0, 0.0, 20.0, 60.0);

        let mut first = DisplayList::new();
        panel.paint(&viewport, &mut first, clip);
        let mut second = DisplayList::new();
        panel.paint(&viewport, &mut second, clip);

        assert_eq!(first, second);
    }
}
