//! Canvas programs that host panel painting.
//!
//! [`FrameSurface`] adapts an iced canvas frame to the panels'
//! [`Surface`] trait; each panel becomes one [`PanelLayer`] canvas in
//! the row. The text itself is drawn by [`EditorLayer`], which also
//! turns wheel events into scroll messages.

use iced::alignment;
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Program};
use iced::{Font, Point, Rectangle, Renderer, Size, Theme};

use gutter_core::{Editor, TextViewport};
use gutter_panels::{Panel, Rect, Rgba, Surface};

use crate::app::Message;

pub fn to_iced(color: Rgba) -> iced::Color {
    iced::Color::from_rgba(color.r, color.g, color.b, color.a)
}

/// A [`Surface`] writing into a canvas frame.
pub struct FrameSurface<'a> {
    frame: &'a mut Frame,
}

impl<'a> FrameSurface<'a> {
    pub fn new(frame: &'a mut Frame) -> Self {
        Self { frame }
    }
}

impl Surface for FrameSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.frame.fill_rectangle(
            Point::new(rect.x, rect.y),
            Size::new(rect.width, rect.height),
            to_iced(color),
        );
    }

    fn draw_text(&mut self, x: f32, y: f32, content: &str, size: f32, color: Rgba) {
        self.frame.fill_text(canvas::Text {
            content: content.to_string(),
            // Panels position text by baseline; bottom-anchoring the
            // run at the baseline is the closest the canvas gets.
            position: Point::new(x, y),
            color: to_iced(color),
            size: size.into(),
            font: Font::MONOSPACE,
            horizontal_alignment: alignment::Horizontal::Left,
            vertical_alignment: alignment::Vertical::Bottom,
            ..canvas::Text::default()
        });
    }
}

/// One docked panel rendered as a canvas widget.
pub struct PanelLayer<'a> {
    pub panel: &'a dyn Panel,
    pub editor: &'a Editor,
}

impl Program<Message> for PanelLayer<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let clip = Rect::new(0.0, 0.0, bounds.width, bounds.height);
        self.panel
            .paint(self.editor, &mut FrameSurface::new(&mut frame), clip);
        vec![frame.into_geometry()]
    }
}

/// The text area: visible buffer lines plus wheel scrolling.
pub struct EditorLayer<'a> {
    pub editor: &'a Editor,
    pub background: iced::Color,
    pub text_color: iced::Color,
    pub font_size: f32,
}

impl Program<Message> for EditorLayer<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        if let canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) = event {
            if cursor.is_over(bounds) {
                let lines = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => y,
                    mouse::ScrollDelta::Pixels { y, .. } => {
                        y / self.editor.font_metrics().line_height
                    }
                };
                let step = (-lines).round() as i64;
                if step != 0 {
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::Scrolled(step)),
                    );
                }
            }
        }
        (canvas::event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.background);

        let metrics = self.editor.font_metrics();
        let (first, count) = self.editor.visible_line_range();
        let text = self.editor.text();

        for (row, line) in text.lines().skip(first).take(count).enumerate() {
            if line.is_empty() {
                continue;
            }
            frame.fill_text(canvas::Text {
                content: line.to_string(),
                position: Point::new(
                    8.0,
                    row as f32 * metrics.line_height + metrics.ascent,
                ),
                color: self.text_color,
                size: self.font_size.into(),
                font: Font::MONOSPACE,
                horizontal_alignment: alignment::Horizontal::Left,
                vertical_alignment: alignment::Vertical::Bottom,
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
