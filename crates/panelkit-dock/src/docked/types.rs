//! Core types for the docking tree.

use serde::{Deserialize, Serialize};

use panelkit_common::{DragTracker, Vec2};

use crate::ids::{FloatId, GroupId, PanelId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// One of the four directional drop indicators of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropZone {
    Left,
    Right,
    Up,
    Down,
}

impl DropZone {
    pub const ALL: [DropZone; 4] = [DropZone::Up, DropZone::Left, DropZone::Right, DropZone::Down];

    /// Left and up put the dropped panel before the existing content.
    pub fn insert_first(self) -> bool {
        matches!(self, DropZone::Left | DropZone::Up)
    }

    pub fn orientation(self) -> Orientation {
        match self {
            DropZone::Left | DropZone::Right => Orientation::Horizontal,
            DropZone::Up | DropZone::Down => Orientation::Vertical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum DockChild {
    Group(GroupId),
    Panel(PanelId),
}

/// Where a docked panel currently hangs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelParent {
    /// The root of the main docking area.
    Root,
    Panel(PanelId),
    Floating(FloatId),
    /// Not attached anywhere; either about to be rehoused or destroyed.
    Detached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropOverlay {
    pub visible: bool,
    pub hovered: Option<DropZone>,
}

/// Either a leaf wrapping one tab group, or a split of two or more panels.
#[derive(Debug)]
pub struct DockedPanel {
    pub(crate) id: PanelId,
    pub(crate) children: Vec<DockChild>,
    pub(crate) orientation: Orientation,
    pub(crate) parent: PanelParent,
    pub(crate) overlay: DropOverlay,
    pub(crate) drag_origin: Option<Vec2>,
    pub(crate) tracker: Option<DragTracker>,
}

impl DockedPanel {
    pub(crate) fn new(id: PanelId) -> Self {
        Self {
            id,
            children: Vec::new(),
            orientation: Orientation::default(),
            parent: PanelParent::Detached,
            overlay: DropOverlay::default(),
            drag_origin: None,
            tracker: Some(DragTracker::new("docked panel header: detach")),
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn children(&self) -> &[DockChild] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn contains(&self, child: DockChild) -> bool {
        self.children.contains(&child)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn parent(&self) -> PanelParent {
        self.parent
    }

    pub fn overlay(&self) -> DropOverlay {
        self.overlay
    }

    pub fn is_leaf(&self) -> bool {
        self.children.len() == 1 && matches!(self.children[0], DockChild::Group(_))
    }

    /// Hidden exactly when the panel only wraps a single tab group.
    pub fn header_visible(&self) -> bool {
        !self.is_leaf()
    }
}
