//! Core types for tab groups.

use crate::ids::{GroupId, PanelId, TabId};

/// Ordered tabs sharing one content area. Exactly one tab is active
/// whenever the group is non-empty.
#[derive(Debug, Clone)]
pub struct TabGroup {
    pub(crate) id: GroupId,
    pub(crate) tabs: Vec<TabId>,
    pub(crate) active: Option<TabId>,
    pub(crate) parent: Option<PanelId>,
}

impl TabGroup {
    pub(crate) fn new(id: GroupId) -> Self {
        Self {
            id,
            tabs: Vec::new(),
            active: None,
            parent: None,
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn contains(&self, tab: TabId) -> bool {
        self.tabs.contains(&tab)
    }

    pub fn tab_ids(&self) -> &[TabId] {
        &self.tabs
    }

    pub fn index_of(&self, tab: TabId) -> Option<usize> {
        self.tabs.iter().position(|&t| t == tab)
    }

    pub fn active(&self) -> Option<TabId> {
        self.active
    }

    pub fn parent(&self) -> Option<PanelId> {
        self.parent
    }

    /// The header strip is only shown when there is something to choose between.
    pub fn header_visible(&self) -> bool {
        self.tabs.len() >= 2
    }
}
