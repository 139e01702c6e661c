//! The demo application: an editor viewport with three docked panels.

use iced::widget::{button, canvas, container, text, vertical_space, Column, Row};
use iced::{Background, Border, Element, Length, Padding, Size, Subscription, Task};

use gutter_core::{Clipboard, Command, Editor, FontMetrics, MemoryClipboard, TextViewport};
use gutter_panels::{
    ActionBinding, ColorSwatchPanel, Edge, LineNumberPanel, PanelDock, PanelId, Rect,
    ToolbarPanel,
};

use crate::clipboard::SystemClipboard;
use crate::layers::{EditorLayer, PanelLayer};
use crate::theme::Theme;

const WINDOW_SIZE: Size = Size {
    width: 1000.0,
    height: 600.0,
};
const FONT_SIZE: f32 = 14.0;
const METRICS: FontMetrics = FontMetrics {
    line_height: 21.0,
    ascent: 16.0,
};

/// Document shown when no file is given on the command line. Full of
/// color literals so every panel has something to do.
const SAMPLE_DOCUMENT: &str = r##"// Gutter demo document.
// Scroll with the mouse wheel; the gutters follow.

let background = rgb(240, 240, 240);
let text_color = black;
let selection = blue;
let error = rgb(255, 0, 0);

primary = "#007ACC"
secondary = "#5C2D91"
success = "#008000"
warning = "#FFA500"

fn example_function() -> i32 {
    let x = 10;
    let y = 20;
    x + y
}

struct Example {
    value: u32,
}

impl Example {
    fn calculate(&self) -> u32 {
        self.value * 2
    }
}

// Named colors work anywhere in a line: magenta, for instance.
// Truncated literals are skipped silently: rgb(1,2
// Invalid hex too: #ZZZZZZ
"##;

/// Launch options handed over from the CLI.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// File to display instead of the builtin sample.
    pub file: Option<String>,
    /// JSON theme file for the window chrome.
    pub theme: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    CommandInvoked(Command),
    Scrolled(i64),
    WindowResized(Size),
}

pub struct App {
    editor: Editor,
    dock: PanelDock,
    toolbar_id: PanelId,
    toolbar_bindings: Vec<ActionBinding>,
    theme: Theme,
    document_name: String,
    content_area: Rect,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let theme = match &flags.theme {
            Some(path) => Theme::load(std::path::Path::new(path)).unwrap_or_else(|err| {
                tracing::warn!(path = %path, error = %err, "failed to load theme, using default");
                Theme::dark()
            }),
            None => Theme::dark(),
        };

        let clipboard: Box<dyn Clipboard> = match SystemClipboard::new() {
            Ok(clipboard) => Box::new(clipboard),
            Err(err) => {
                tracing::warn!(error = %err, "system clipboard unavailable, using in-memory");
                Box::new(MemoryClipboard::new())
            }
        };

        let (document_name, document) = match &flags.file {
            Some(path) => match std::fs::read_to_string(path) {
                Ok(content) => (path.clone(), content),
                Err(err) => {
                    tracing::warn!(path = %path, error = %err, "failed to read file, showing sample");
                    ("example".to_string(), SAMPLE_DOCUMENT.to_string())
                }
            },
            None => ("example".to_string(), SAMPLE_DOCUMENT.to_string()),
        };

        let mut editor = Editor::with_text(&document, METRICS, clipboard);

        let mut dock = PanelDock::new();
        dock.attach(Box::new(LineNumberPanel::new()), Edge::Left);
        dock.attach(Box::new(ColorSwatchPanel::new()), Edge::Left);
        let toolbar = ToolbarPanel::new();
        let toolbar_bindings = toolbar.bindings().to_vec();
        let toolbar_id = dock.attach(Box::new(toolbar), Edge::Right);

        let content_area = dock
            .layout(Rect::new(0.0, 0.0, WINDOW_SIZE.width, WINDOW_SIZE.height))
            .content();
        editor.set_rows_on_screen((content_area.height / METRICS.line_height) as usize);

        let app = Self {
            editor,
            dock,
            toolbar_id,
            toolbar_bindings,
            theme,
            document_name,
            content_area,
        };
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        format!("{} - Gutter", self.document_name)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CommandInvoked(command) => {
                command.apply(&mut self.editor);
            }
            Message::Scrolled(lines) => {
                self.editor.scroll_by(lines);
            }
            Message::WindowResized(size) => {
                let layout = self
                    .dock
                    .layout(Rect::new(0.0, 0.0, size.width, size.height));
                self.content_area = layout.content();
                let rows = (self.content_area.height / METRICS.line_height) as usize;
                self.editor.set_rows_on_screen(rows);
                tracing::trace!(
                    content_width = self.content_area.width,
                    rows,
                    "viewport resized"
                );
            }
        }
        Task::none()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Window(iced::window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        })
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut items: Vec<Element<'_, Message>> = Vec::new();

        for (_, panel) in self.dock.iter(Edge::Left) {
            items.push(
                canvas(PanelLayer {
                    panel,
                    editor: &self.editor,
                })
                .width(Length::Fixed(panel.width()))
                .height(Length::Fill)
                .into(),
            );
        }

        items.push(
            canvas(EditorLayer {
                editor: &self.editor,
                background: self.theme.editor_background.to_iced(),
                text_color: self.theme.editor_text.to_iced(),
                font_size: FONT_SIZE,
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        );

        for (id, panel) in self.dock.iter(Edge::Right) {
            if id == self.toolbar_id {
                items.push(self.view_toolbar(panel.width()));
            } else {
                items.push(
                    canvas(PanelLayer {
                        panel,
                        editor: &self.editor,
                    })
                    .width(Length::Fixed(panel.width()))
                    .height(Length::Fill)
                    .into(),
                );
            }
        }

        Row::with_children(items)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// The toolbar panel rendered as real buttons, stacked vertically
    /// with trailing flexible space.
    fn view_toolbar(&self, width: f32) -> Element<'_, Message> {
        let button_bg = self.theme.button.to_iced();
        let hover_bg = self.theme.button_hover.to_iced();
        let label_color = self.theme.button_label.to_iced();

        let mut items: Vec<Element<'_, Message>> = Vec::new();
        for binding in &self.toolbar_bindings {
            items.push(
                button(text(binding.label).size(13).color(label_color))
                    .width(Length::Fill)
                    .padding(Padding::from([6, 10]))
                    .style(move |_: &iced::Theme, status: button::Status| {
                        let bg = match status {
                            button::Status::Hovered => hover_bg,
                            _ => button_bg,
                        };
                        button::Style {
                            background: Some(Background::Color(bg)),
                            text_color: label_color,
                            border: Border {
                                radius: 4.0.into(),
                                ..Default::default()
                            },
                            ..Default::default()
                        }
                    })
                    .on_press(Message::CommandInvoked(binding.command))
                    .into(),
            );
        }
        items.push(vertical_space().into());

        let toolbar_bg = self.theme.toolbar_background.to_iced();
        let border_color = self.theme.border.to_iced();
        container(Column::with_children(items).spacing(4).padding(2))
            .width(Length::Fixed(width))
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(toolbar_bg)),
                border: Border {
                    color: border_color,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }
}

pub fn run(flags: Flags) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(WINDOW_SIZE)
        .theme(|_| iced::Theme::Dark)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
