//! Structural changes requested from inside a drag callback. They run after
//! the pointer event that triggered them, once the requesting gesture has
//! ended, and usually hand the gesture on to a freshly created element.

use tracing::{debug, info, warn};

use panelkit_common::{DockError, DragStatus, PointerEvent, Vec2};

use crate::docked::DockChild;
use crate::ids::{GroupId, PanelId, TabId};
use crate::layout::Element;
use crate::signal::Signal;

use super::{Deferred, DragSource, Workspace};

impl Workspace {
    pub(crate) fn defer(&mut self, op: Deferred) {
        debug!(?op, "deferred");
        self.pending.push_back(op);
    }

    pub(crate) fn run_deferred(&mut self) -> Result<(), DockError> {
        while let Some(op) = self.pending.pop_front() {
            match op {
                Deferred::DetachTabToFloat { tab, pos } => self.detach_tab_to_float(tab, pos)?,
                Deferred::DetachPanelToFloat { panel, pos, pivot } => {
                    self.detach_panel_to_float(panel, pos, pivot)?
                }
                Deferred::DockTabInto { tab, group, pos } => {
                    self.emit(Signal::FloatingPanelTabDock {
                        tab,
                        target: group,
                        pos,
                    })?
                }
            }
        }
        Ok(())
    }

    fn detach_tab_to_float(&mut self, tab: TabId, pos: Vec2) -> Result<(), DockError> {
        let Some(group) = self.tab(tab).and_then(|t| t.group()) else {
            warn!(%tab, "tab left its group before it could be torn out");
            return Ok(());
        };
        info!(%tab, %group, "detaching floating panel from tab group");
        self.detach_tab(group, tab)?;
        let new_group = self.create_group();
        self.add_tab(new_group, tab)?;
        let panel = self.create_panel(Some(DockChild::Group(new_group)))?;
        let floating = self.create_floating(panel)?;

        let snapshot = self.layout();
        let frame = snapshot.rect(Element::FloatingFrame(floating))?;
        let header = snapshot.rect(Element::FloatingHeader(floating))?;
        let pivot = Vec2::new(frame.width / 2.0, header.height / 2.0);
        self.move_floating(floating, frame.centered_at(pos, pivot))?;
        self.hand_over(DragSource::FloatingHeader(floating), pos)
    }

    fn detach_panel_to_float(&mut self, panel: PanelId, pos: Vec2, pivot: Vec2) -> Result<(), DockError> {
        if !self.panels.contains_key(&panel) {
            warn!(%panel, "panel vanished before it could be torn out");
            return Ok(());
        }
        self.detach_panel(panel)?;
        let floating = self.create_floating(panel)?;
        let frame = self.floating_mut(floating)?.rect;
        // Keep the grab point on the panel even when it came from a wide split.
        let pivot = Vec2::new(pivot.x.min(frame.width - 10.0), pivot.y);
        self.move_floating(floating, frame.centered_at(pos, pivot))?;
        self.hand_over(DragSource::FloatingHeader(floating), pos)
    }

    /// Handler of a tab dock request: insert the tab where the pointer is
    /// and let it continue as a reorder drag.
    pub(crate) fn dock_tab_into(&mut self, tab: TabId, group: GroupId, pos: Vec2) -> Result<(), DockError> {
        info!(%tab, %group, name = ?self.group_name(group), "attaching tab to group");
        self.add_tab(group, tab)?;
        self.tab_mut(tab)?.docking_in = true;
        self.center_tab_header_at(tab, pos)?;
        self.reorder_tab(tab, pos.x)?;
        self.center_tab_header_at(tab, pos)?;

        self.hand_over(DragSource::TabHeader(tab), pos)?;
        self.click_candidate = None;
        let status = self.drive(DragSource::TabHeader(tab), &PointerEvent::drag(pos))?;
        if status == DragStatus::Finished {
            self.gesture = None;
        }
        Ok(())
    }

    fn center_tab_header_at(&mut self, tab: TabId, pos: Vec2) -> Result<(), DockError> {
        let native = self.layout().rect(Element::TabHeader(tab))?;
        self.tab_mut(tab)?.drag_offset = Vec2::new(pos.x - native.center().x, 0.0);
        Ok(())
    }

    /// Continue the current gesture on `source`, as if it had been pressed at `pos`.
    fn hand_over(&mut self, source: DragSource, pos: Vec2) -> Result<(), DockError> {
        let mut tracker = self
            .take_tracker(source)
            .ok_or_else(|| DockError::invariant_with("No tracker to hand the drag to", source))?;
        let resumed = tracker.resume(pos);
        self.restore_tracker(source, tracker);
        resumed?;
        self.gesture = Some(source);
        Ok(())
    }
}
