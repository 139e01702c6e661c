//! Command toolbar panel.

use gutter_core::{Command, TextViewport};

use crate::panel::Panel;
use crate::surface::{Rect, Rgba, Surface};

const DEFAULT_WIDTH: f32 = 180.0;
const BUTTON_HEIGHT: f32 = 26.0;
const PADDING: f32 = 2.0;
const SPACING: f32 = 4.0;

/// One control: a label bound to an editor command at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionBinding {
    pub label: &'static str,
    pub command: Command,
}

/// A fixed menu of editor actions, stacked top-down with trailing
/// flexible space.
///
/// Activating a control invokes its command immediately and
/// synchronously against the shared viewport; there is no
/// confirmation and no undo grouping beyond what the viewport's own
/// command implementations provide.
#[derive(Debug, Clone)]
pub struct ToolbarPanel {
    width: f32,
    bindings: Vec<ActionBinding>,
    background: Rgba,
    button_color: Rgba,
    label_color: Rgba,
}

impl ToolbarPanel {
    /// The standard Clear / Select All / Copy / Paste toolbar.
    pub fn new() -> Self {
        Self::with_bindings(vec![
            ActionBinding {
                label: "Clear",
                command: Command::Clear,
            },
            ActionBinding {
                label: "Select All",
                command: Command::SelectAll,
            },
            ActionBinding {
                label: "Copy",
                command: Command::Copy,
            },
            ActionBinding {
                label: "Paste",
                command: Command::Paste,
            },
        ])
    }

    pub fn with_bindings(bindings: Vec<ActionBinding>) -> Self {
        Self {
            width: DEFAULT_WIDTH,
            bindings,
            background: Rgba::rgb(0.13, 0.13, 0.13),
            button_color: Rgba::rgb(0.24, 0.24, 0.26),
            label_color: Rgba::rgb(0.92, 0.92, 0.92),
        }
    }

    /// The controls, in stacking order.
    pub fn bindings(&self) -> &[ActionBinding] {
        &self.bindings
    }

    /// Maps a panel-local y coordinate to the control under it.
    pub fn hit_test(&self, y: f32) -> Option<usize> {
        if y < PADDING {
            return None;
        }
        let slot = ((y - PADDING) / (BUTTON_HEIGHT + SPACING)) as usize;
        let offset = (y - PADDING) % (BUTTON_HEIGHT + SPACING);
        (slot < self.bindings.len() && offset <= BUTTON_HEIGHT).then_some(slot)
    }

    /// Activates the control at `index` against the viewport.
    ///
    /// Out-of-range indices are ignored; a toolbar never errors.
    pub fn activate(&self, index: usize, viewport: &mut dyn TextViewport) {
        let Some(binding) = self.bindings.get(index) else {
            tracing::debug!(index, "toolbar activation out of range");
            return;
        };
        binding.command.apply(viewport);
    }

    fn button_rect(&self, index: usize) -> Rect {
        Rect::new(
            PADDING,
            PADDING + index as f32 * (BUTTON_HEIGHT + SPACING),
            self.width - 2.0 * PADDING,
            BUTTON_HEIGHT,
        )
    }
}

impl Default for ToolbarPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for ToolbarPanel {
    fn width(&self) -> f32 {
        self.width
    }

    fn paint(&self, _viewport: &dyn TextViewport, surface: &mut dyn Surface, clip: Rect) {
        surface.fill_rect(clip, self.background);

        for (i, binding) in self.bindings.iter().enumerate() {
            let rect = self.button_rect(i);
            surface.fill_rect(rect, self.button_color);
            surface.draw_text(
                rect.x + 8.0,
                rect.y + BUTTON_HEIGHT - 8.0,
                binding.label,
                13.0,
                self.label_color,
            );
        }
    }
}
