//! A single content unit with a header.

use panelkit_common::{DragTracker, Vec2};

use crate::ids::{GroupId, TabId};

#[derive(Debug)]
pub struct Tab {
    pub(crate) id: TabId,
    name: String,
    content: String,
    pub(crate) group: Option<GroupId>,
    pub(crate) active: bool,
    /// Visual displacement of the header from its slot in the strip while
    /// it is being dragged. Only `x` is ever non-zero.
    pub(crate) drag_offset: Vec2,
    /// Set while a tab dragged in from a floating panel is being placed.
    pub(crate) docking_in: bool,
    pub(crate) opacity: f64,
    /// Present exactly while the tab belongs to a group.
    pub(crate) tracker: Option<DragTracker>,
}

impl Tab {
    pub(crate) fn new(id: TabId, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            content: content.into(),
            group: None,
            active: false,
            drag_offset: Vec2::ZERO,
            docking_in: false,
            opacity: 1.0,
            tracker: None,
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque payload rendered in the group's content area when active.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn drag_offset(&self) -> Vec2 {
        self.drag_offset
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.as_ref().is_some_and(|t| !t.is_off())
    }
}
