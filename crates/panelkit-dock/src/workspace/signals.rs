//! Signal delivery. Every signal is recorded in the outbox, then handed to
//! the container responsible for it.

use tracing::trace;

use panelkit_common::DockError;

use crate::docked::{Container, DockChild};
use crate::signal::{Signal, WorkspaceEvent};

use super::Workspace;

impl Workspace {
    pub(crate) fn emit(&mut self, signal: Signal) -> Result<(), DockError> {
        trace!(?signal, "signal");
        self.push_event(WorkspaceEvent::Signal(signal.clone()));
        match signal {
            Signal::TabClose { tab } => {
                if let Some(group) = self.tab_mut(tab)?.group {
                    self.detach_tab(group, tab)?;
                }
                self.destroy_tab(tab);
                Ok(())
            }
            Signal::TabActivate { tab } => {
                let group = self
                    .tab_mut(tab)?
                    .group
                    .ok_or_else(|| DockError::invariant("Activating a tab outside any tab group"))?;
                self.activate(group, tab)
            }
            Signal::TabGroupClose { group } => {
                if let Some(parent) = self.group_ref(group)?.parent {
                    self.remove_item(parent, DockChild::Group(group))?;
                }
                self.groups.remove(&group);
                Ok(())
            }
            Signal::TabGroupActiveChanged { group } => match self.container_of_group(group) {
                Some(Container::Floating(f)) => self.refresh_title(f),
                _ => Ok(()),
            },
            Signal::DockedPanelDetach { panel } => self.handle_panel_detach(panel),
            Signal::DockedPanelChildrenChanged { panel } => match self.container_of(panel) {
                Some(Container::Floating(f)) => self.refresh_title(f),
                _ => Ok(()),
            },
            Signal::FloatingPanelTabDock { tab, target, pos } => self.dock_tab_into(tab, target, pos),
            Signal::FloatingPanelBodyDockMouse { source, pos } => self.update_drop_overlays(source, pos),
            Signal::FloatingPanelBodyDockDrop {
                panel,
                target,
                zone,
            } => self.handle_drop(panel, target, zone),
        }
    }
}
