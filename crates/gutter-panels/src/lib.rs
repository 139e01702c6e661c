//! # Gutter Panels
//!
//! Decorative side panels for a text-editing viewport: a line-number
//! gutter, a color-swatch gutter, and a command toolbar, plus the
//! dock that stacks them against the viewport's edges.
//!
//! Panels are pull-based: on every repaint they read the current
//! visible-line window from a [`TextViewport`] and emit drawing
//! operations to a [`Surface`]. Nothing is cached between repaints,
//! so a panel always reflects the viewport state at the moment the
//! paint callback runs.
//!
//! Painting is infallible: the only modeled negative outcome ("this
//! line holds no color literal") is an `Option::None`, never an
//! error, and one unparseable line cannot disturb the remaining
//! visible lines.
//!
//! [`TextViewport`]: gutter_core::TextViewport

pub mod color;
pub mod dock;
pub mod line_numbers;
pub mod panel;
pub mod surface;
pub mod swatches;
pub mod toolbar;

pub use color::{parse_color_literal, Rgb};
pub use dock::{DockLayout, Edge, PanelDock, PanelId, PanelSlot};
pub use line_numbers::LineNumberPanel;
pub use panel::Panel;
pub use surface::{DisplayList, DrawOp, Rect, Rgba, Surface};
pub use swatches::ColorSwatchPanel;
pub use toolbar::{ActionBinding, ToolbarPanel};
