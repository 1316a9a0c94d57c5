//! Mutating operations on tab groups: add, detach, activate, reorder.

use tracing::debug;

use panelkit_common::{ensure, DockError, DragTracker, Rect};

use crate::ids::{GroupId, TabId};
use crate::layout::Element;
use crate::signal::{Signal, WorkspaceEvent};
use crate::tab::Tab;
use crate::workspace::Workspace;

use super::TabGroup;

impl Workspace {
    /// Create a tab that does not belong to any group yet.
    pub fn create_tab(&mut self, name: impl Into<String>, content: impl Into<String>) -> TabId {
        let id = TabId(self.alloc_id());
        let tab = Tab::new(id, name, content);
        debug!(%id, name = tab.name(), "created tab");
        self.tabs.insert(id, tab);
        id
    }

    /// Create an empty tab group.
    pub fn create_group(&mut self) -> GroupId {
        let id = GroupId(self.alloc_id());
        self.groups.insert(id, TabGroup::new(id));
        id
    }

    /// Create a group holding fresh tabs built from `(name, content)` pairs.
    pub fn create_group_with(&mut self, tabs: &[(&str, &str)]) -> Result<GroupId, DockError> {
        let group = self.create_group();
        for (name, content) in tabs {
            let tab = self.create_tab(*name, *content);
            self.add_tab(group, tab)?;
        }
        Ok(group)
    }

    /// Append `tab` to the end of `group` and start tracking drags on its header.
    pub fn add_tab(&mut self, group: GroupId, tab: TabId) -> Result<(), DockError> {
        ensure(
            !self.group_ref(group)?.contains(tab),
            "Trying to attach already present tab",
        )?;
        let entry = self.tab_mut(tab)?;
        ensure(entry.group.is_none(), "Trying to attach a tab owned by another group")?;
        entry.group = Some(group);
        entry.active = false;
        entry.tracker = Some(DragTracker::new("tab header: reorder, detach"));
        debug!(%group, %tab, "TabGroup::add_tab");

        self.group_mut(group)?.tabs.push(tab);
        self.after_tab_count_update(group)
    }

    /// Remove `tab` from `group`, handing activation to a neighbour. The tab
    /// itself survives and may be added elsewhere.
    pub fn detach_tab(&mut self, group: GroupId, tab: TabId) -> Result<(), DockError> {
        let entry = self.group_ref(group)?;
        let index = entry
            .index_of(tab)
            .ok_or_else(|| DockError::invariant("Trying to detach tab not present in tab group!"))?;
        debug!(%group, %tab, "TabGroup::detach_tab");

        if entry.active == Some(tab) {
            let right = entry.tabs.get(index + 1).copied();
            let left = index.checked_sub(1).map(|i| entry.tabs[i]);
            match right.or(left) {
                Some(next) => self.activate(group, next)?,
                None => self.group_mut(group)?.active = None,
            }
        }

        self.group_mut(group)?.tabs.remove(index);
        let entry = self.tab_mut(tab)?;
        entry.group = None;
        entry.active = false;
        entry.tracker = None;
        self.after_tab_count_update(group)
    }

    /// Click on a tab header.
    pub fn activate_tab(&mut self, tab: TabId) -> Result<(), DockError> {
        self.emit(Signal::TabActivate { tab })
    }

    /// Close affordance of a tab: the tab leaves its group and is destroyed.
    pub fn close_tab(&mut self, tab: TabId) -> Result<(), DockError> {
        self.emit(Signal::TabClose { tab })
    }

    /// Name of a group is the name of its active tab.
    pub fn group_name(&self, group: GroupId) -> Option<&str> {
        let active = self.group(group)?.active?;
        self.tab(active).map(Tab::name)
    }

    pub(crate) fn activate(&mut self, group: GroupId, tab: TabId) -> Result<(), DockError> {
        let members = self.group_ref(group)?.tabs.clone();
        ensure(
            members.contains(&tab),
            "Trying to activate tab not present in this tab group!",
        )?;
        for member in members {
            self.tab_mut(member)?.active = member == tab;
        }
        self.group_mut(group)?.active = Some(tab);
        self.push_event(WorkspaceEvent::ActiveTabChanged { group, tab });
        self.emit(Signal::TabGroupActiveChanged { group })
    }

    fn after_tab_count_update(&mut self, group: GroupId) -> Result<(), DockError> {
        let entry = self.group_ref(group)?;
        match entry.tabs.len() {
            0 => self.emit(Signal::TabGroupClose { group }),
            1 => {
                let only = entry.tabs[0];
                self.activate(group, only)
            }
            _ => Ok(()),
        }
    }

    /// Move a dragged tab to the slot matching its pointer `x`, comparing
    /// against the midpoints of the other headers. The tab's drag offset is
    /// corrected so it stays under the pointer. Returns whether it moved.
    pub fn reorder_tab(&mut self, tab: TabId, x: f64) -> Result<bool, DockError> {
        let not_present = || DockError::invariant("Trying to reorder tab not present in this tab group!");
        let group = self.tab(tab).and_then(|t| t.group).ok_or_else(not_present)?;
        let tabs = self.group_ref(group)?.tabs.clone();
        let index = tabs.iter().position(|&t| t == tab).ok_or_else(not_present)?;

        let snapshot = self.layout();
        let displayed = |id: TabId| -> Result<Rect, DockError> {
            let offset = self.tab(id).map(|t| t.drag_offset).unwrap_or_default();
            Ok(snapshot.rect(Element::TabHeader(id))?.translate(offset))
        };

        let mut insert_before = None;
        for (i, &other) in tabs.iter().enumerate().take(index) {
            if x < displayed(other)?.center().x {
                insert_before = Some(i);
                break;
            }
        }
        for j in (index + 1..tabs.len()).rev() {
            if x > displayed(tabs[j])?.center().x {
                if insert_before.is_some() {
                    return Err(DockError::invariant_with(
                        "Trying to insert before and after at the same time",
                        (index, insert_before, j),
                    ));
                }
                insert_before = Some(j + 1);
                break;
            }
        }
        let Some(before) = insert_before else {
            return Ok(false);
        };

        let own = snapshot.rect(Element::TabHeader(tab))?;
        let new_left = if before < index {
            snapshot.rect(Element::TabHeader(tabs[before]))?.x
        } else {
            snapshot.rect(Element::TabHeader(tabs[before - 1]))?.right() - own.width
        };
        let destination = if before > index { before - 1 } else { before };
        debug!(%tab, from = index, to = destination, "reordering tab");

        let entry = self.group_mut(group)?;
        entry.tabs.remove(index);
        entry.tabs.insert(destination, tab);
        self.tab_mut(tab)?.drag_offset.x += own.x - new_left;
        Ok(true)
    }

    pub(crate) fn destroy_tab(&mut self, tab: TabId) {
        if self.tabs.remove(&tab).is_some() {
            debug!(%tab, "destroyed tab");
        }
    }
}
