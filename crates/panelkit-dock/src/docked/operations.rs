//! Mutating operations on the docking tree: add, remove, simplify, detach.

use tracing::{debug, info};

use panelkit_common::{ensure, DockError};

use crate::ids::{FloatId, GroupId, PanelId};
use crate::signal::{Signal, WorkspaceEvent};
use crate::workspace::Workspace;

use super::{DockChild, DockedPanel, DropZone, Orientation, PanelParent};

/// The top-level surface a panel is ultimately shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Root,
    Floating(FloatId),
}

impl Workspace {
    /// Create a panel, optionally around a first child.
    pub fn create_panel(&mut self, initial: Option<DockChild>) -> Result<PanelId, DockError> {
        let id = PanelId(self.alloc_id());
        self.panels.insert(id, DockedPanel::new(id));
        if let Some(child) = initial {
            self.add_item(id, child, true)?;
        }
        Ok(id)
    }

    /// Make a detached panel the root of the main docking area.
    pub fn set_root(&mut self, panel: PanelId) -> Result<(), DockError> {
        ensure(self.root.is_none(), "Workspace already has a root panel")?;
        let entry = self.panel_mut(panel)?;
        ensure(
            entry.parent == PanelParent::Detached,
            "Only a detached panel can become the root",
        )?;
        entry.parent = PanelParent::Root;
        self.root = Some(panel);
        self.push_event(WorkspaceEvent::RootChanged { panel: Some(panel) });
        Ok(())
    }

    /// Dock `item` into `panel`. Once a panel holds more than one child,
    /// every child is a docked panel: bare tab groups get wrapped.
    pub fn add_item(
        &mut self,
        panel: PanelId,
        item: DockChild,
        insert_first: bool,
    ) -> Result<(), DockError> {
        ensure(
            !self.panel_ref(panel)?.contains(item),
            "Trying to add item already present",
        )?;
        ensure(item != DockChild::Panel(panel), "Trying to dock a panel into itself")?;
        if let DockChild::Panel(child) = item {
            ensure(
                !self.is_ancestor(child, panel),
                "Trying to dock a panel into one of its own descendants",
            )?;
        }
        self.ensure_unparented(item)?;
        debug!(%panel, ?item, insert_first, "DockedPanel::add_item");

        let existing = self.panel_ref(panel)?.children.clone();
        if existing.is_empty() {
            self.set_child_parent(item, panel)?;
            self.panel_mut(panel)?.children.push(item);
        } else {
            let mut children = Vec::with_capacity(existing.len() + 1);
            for child in existing {
                self.clear_child_parent(child)?;
                children.push(self.wrap_group(child, panel)?);
            }
            let incoming = self.wrap_group(item, panel)?;
            if insert_first {
                children.insert(0, incoming);
            } else {
                children.push(incoming);
            }
            self.panel_mut(panel)?.children = children;
        }
        self.emit(Signal::DockedPanelChildrenChanged { panel })
    }

    /// Remove `item` from `panel`. A panel left with a single docked panel
    /// child absorbs that child's children and orientation; a panel left
    /// with nothing detaches itself and is destroyed.
    pub fn remove_item(&mut self, panel: PanelId, item: DockChild) -> Result<(), DockError> {
        let index = self
            .panel_ref(panel)?
            .children
            .iter()
            .position(|&c| c == item)
            .ok_or_else(|| {
                DockError::invariant_with(
                    "Trying to remove child not present in docked panel",
                    (panel, item),
                )
            })?;
        debug!(%panel, ?item, "DockedPanel::remove_item");
        self.panel_mut(panel)?.children.remove(index);
        self.clear_child_parent(item)?;

        let remaining = self.panel_ref(panel)?.children.clone();
        match remaining.as_slice() {
            [] => {
                debug!(%panel, "docked panel emptied, removing it");
                self.detach_panel(panel)?;
                self.panels.remove(&panel);
                return Ok(());
            }
            [DockChild::Panel(only)] => self.absorb_only_child(panel, *only)?,
            _ => {}
        }
        self.emit(Signal::DockedPanelChildrenChanged { panel })
    }

    pub fn set_orientation(&mut self, panel: PanelId, orientation: Orientation) -> Result<(), DockError> {
        self.panel_mut(panel)?.orientation = orientation;
        Ok(())
    }

    /// Take `panel` out of whatever holds it.
    pub fn detach_panel(&mut self, panel: PanelId) -> Result<(), DockError> {
        self.emit(Signal::DockedPanelDetach { panel })
    }

    /// Close button of a docked panel: detach it and drop everything inside.
    pub fn close_docked_panel(&mut self, panel: PanelId) -> Result<(), DockError> {
        info!(%panel, name = ?self.panel_name(panel), "closing docked panel");
        self.detach_panel(panel)?;
        self.destroy_subtree(DockChild::Panel(panel));
        Ok(())
    }

    /// Dock a detached panel next to the content of `target`, as a drop on
    /// one of its indicators would.
    pub fn dock_panel(&mut self, panel: PanelId, target: PanelId, zone: DropZone) -> Result<(), DockError> {
        self.emit(Signal::FloatingPanelBodyDockDrop {
            panel,
            target,
            zone,
        })
    }

    /// A panel is named after its first child.
    pub fn panel_name(&self, panel: PanelId) -> Option<&str> {
        match *self.panel(panel)?.children.first()? {
            DockChild::Group(group) => self.group_name(group),
            DockChild::Panel(child) => self.panel_name(child),
        }
    }

    /// Where `panel` is ultimately shown, or `None` while detached.
    pub fn container_of(&self, panel: PanelId) -> Option<Container> {
        let mut current = panel;
        loop {
            match self.panel(current)?.parent {
                PanelParent::Root => return Some(Container::Root),
                PanelParent::Floating(floating) => return Some(Container::Floating(floating)),
                PanelParent::Panel(parent) => current = parent,
                PanelParent::Detached => return None,
            }
        }
    }

    /// Whether `ancestor` appears on `panel`'s parent chain.
    fn is_ancestor(&self, ancestor: PanelId, panel: PanelId) -> bool {
        let mut current = panel;
        while let Some(PanelParent::Panel(parent)) = self.panel(current).map(|p| p.parent) {
            if parent == ancestor {
                return true;
            }
            current = parent;
        }
        false
    }

    pub fn container_of_group(&self, group: GroupId) -> Option<Container> {
        self.container_of(self.group(group)?.parent?)
    }

    pub(crate) fn handle_panel_detach(&mut self, panel: PanelId) -> Result<(), DockError> {
        let parent = self.panel_ref(panel)?.parent;
        match parent {
            PanelParent::Root => {
                self.panel_mut(panel)?.parent = PanelParent::Detached;
                self.root = None;
                self.push_event(WorkspaceEvent::RootChanged { panel: None });
                Ok(())
            }
            PanelParent::Panel(parent) => self.remove_item(parent, DockChild::Panel(panel)),
            PanelParent::Floating(floating) => {
                self.panel_mut(panel)?.parent = PanelParent::Detached;
                self.destroy_floating(floating);
                Ok(())
            }
            PanelParent::Detached => {
                debug!(%panel, "detach of a panel that has no parent");
                Ok(())
            }
        }
    }

    pub(crate) fn handle_drop(
        &mut self,
        panel: PanelId,
        target: PanelId,
        zone: DropZone,
    ) -> Result<(), DockError> {
        ensure(
            self.panel_ref(target)?.len() == 1,
            "Drop target must hold exactly one child",
        )?;
        info!(%panel, %target, ?zone, "dropping panel");
        self.add_item(target, DockChild::Panel(panel), zone.insert_first())?;
        self.set_orientation(target, zone.orientation())
    }

    /// Remove a detached subtree and every tab inside it.
    pub(crate) fn destroy_subtree(&mut self, child: DockChild) {
        match child {
            DockChild::Group(group) => {
                if let Some(entry) = self.groups.remove(&group) {
                    for tab in entry.tabs {
                        self.destroy_tab(tab);
                    }
                }
            }
            DockChild::Panel(panel) => {
                if let Some(entry) = self.panels.remove(&panel) {
                    for child in entry.children {
                        self.destroy_subtree(child);
                    }
                }
            }
        }
    }

    fn absorb_only_child(&mut self, panel: PanelId, only: PanelId) -> Result<(), DockError> {
        debug!(%panel, %only, "simplifying hierarchy");
        let child = self
            .panels
            .remove(&only)
            .ok_or_else(|| DockError::not_found("docked panel", only))?;
        for &grandchild in &child.children {
            self.set_child_parent(grandchild, panel)?;
        }
        let entry = self.panel_mut(panel)?;
        entry.orientation = child.orientation;
        entry.children = child.children;
        Ok(())
    }

    /// Bare groups docked next to siblings get their own leaf panel.
    fn wrap_group(&mut self, child: DockChild, parent: PanelId) -> Result<DockChild, DockError> {
        let wrapped = match child {
            DockChild::Group(_) => DockChild::Panel(self.create_panel(Some(child))?),
            DockChild::Panel(_) => child,
        };
        self.set_child_parent(wrapped, parent)?;
        Ok(wrapped)
    }

    fn ensure_unparented(&self, item: DockChild) -> Result<(), DockError> {
        match item {
            DockChild::Group(group) => ensure(
                self.group_ref(group)?.parent.is_none(),
                "Trying to dock a tab group that already has a parent",
            ),
            DockChild::Panel(panel) => ensure(
                self.panel_ref(panel)?.parent == PanelParent::Detached,
                "Trying to dock a panel that already has a parent",
            ),
        }
    }

    fn set_child_parent(&mut self, child: DockChild, parent: PanelId) -> Result<(), DockError> {
        match child {
            DockChild::Group(group) => self.group_mut(group)?.parent = Some(parent),
            DockChild::Panel(panel) => self.panel_mut(panel)?.parent = PanelParent::Panel(parent),
        }
        Ok(())
    }

    fn clear_child_parent(&mut self, child: DockChild) -> Result<(), DockError> {
        match child {
            DockChild::Group(group) => self.group_mut(group)?.parent = None,
            DockChild::Panel(panel) => self.panel_mut(panel)?.parent = PanelParent::Detached,
        }
        Ok(())
    }
}
