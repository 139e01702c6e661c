//! Panel dock: ordered edge lists and flush layout.

use crate::panel::Panel;
use crate::surface::Rect;

/// Which side of the viewport a panel is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
}

/// Stable handle to an attached panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(usize);

struct DockEntry {
    id: PanelId,
    edge: Edge,
    panel: Box<dyn Panel>,
}

/// A placed panel: its frame in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSlot {
    pub id: PanelId,
    pub edge: Edge,
    pub frame: Rect,
}

/// The result of a re-layout: one slot per panel plus the viewport's
/// remaining usable content rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct DockLayout {
    slots: Vec<PanelSlot>,
    content: Rect,
}

impl DockLayout {
    pub fn slots(&self) -> &[PanelSlot] {
        &self.slots
    }

    pub fn slot(&self, id: PanelId) -> Option<&PanelSlot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    /// The viewport area not consumed by panels.
    pub fn content(&self) -> Rect {
        self.content
    }
}

/// Owns the ordered collections of panels for both edges.
///
/// Panels stack outward-in in insertion order: each panel's origin is
/// offset by the cumulative width of the panels attached to the same
/// edge before it. Attach always succeeds; there is no duplicate
/// detection, capacity limit, or removal.
#[derive(Default)]
pub struct PanelDock {
    entries: Vec<DockEntry>,
    next_id: usize,
}

impl PanelDock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a panel to an edge's ordered list.
    pub fn attach(&mut self, panel: Box<dyn Panel>, edge: Edge) -> PanelId {
        let id = PanelId(self.next_id);
        self.next_id += 1;
        tracing::debug!(?edge, width = panel.width(), "panel attached");
        self.entries.push(DockEntry { id, edge, panel });
        id
    }

    /// Panels on one edge, in insertion order.
    pub fn iter(&self, edge: Edge) -> impl Iterator<Item = (PanelId, &dyn Panel)> {
        self.entries
            .iter()
            .filter(move |entry| entry.edge == edge)
            .map(|entry| (entry.id, entry.panel.as_ref()))
    }

    /// Places every panel flush against its edge of `viewport` and
    /// computes the remaining content rectangle.
    pub fn layout(&self, viewport: Rect) -> DockLayout {
        let mut slots = Vec::with_capacity(self.entries.len());
        let mut left_used = 0.0f32;
        let mut right_used = 0.0f32;

        for entry in &self.entries {
            let width = entry.panel.width();
            let x = match entry.edge {
                Edge::Left => {
                    let x = viewport.x + left_used;
                    left_used += width;
                    x
                }
                Edge::Right => {
                    right_used += width;
                    viewport.right() - right_used
                }
            };
            slots.push(PanelSlot {
                id: entry.id,
                edge: entry.edge,
                frame: Rect::new(x, viewport.y, width, viewport.height),
            });
        }

        let content = Rect::new(
            viewport.x + left_used,
            viewport.y,
            (viewport.width - left_used - right_used).max(0.0),
            viewport.height,
        );

        DockLayout { slots, content }
    }
}
