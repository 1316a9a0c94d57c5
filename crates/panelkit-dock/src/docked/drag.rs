//! Dragging the header of a split panel tears it out into a floating panel.

use tracing::info;

use panelkit_common::{DockError, DragHandler, PointerEvent, Vec2};

use crate::ids::PanelId;
use crate::layout::Element;
use crate::workspace::{Deferred, Workspace};

pub(crate) struct PanelHeaderDrag<'a> {
    pub(crate) ws: &'a mut Workspace,
    pub(crate) panel: PanelId,
}

impl DragHandler for PanelHeaderDrag<'_> {
    fn on_start(&mut self, event: &PointerEvent) -> Result<bool, DockError> {
        self.ws.panel_mut(self.panel)?.drag_origin = Some(event.pos);
        Ok(true)
    }

    fn on_move(&mut self, event: &PointerEvent, _delta: Vec2) -> Result<bool, DockError> {
        let origin = self
            .ws
            .panel_ref(self.panel)?
            .drag_origin
            .ok_or_else(|| DockError::invariant("Docked panel drag moved before it started"))?;
        if event.pos.max_axis_distance(origin) <= self.ws.settings.detach_threshold {
            return Ok(true);
        }

        let frame = self.ws.layout().rect(Element::PanelFrame(self.panel))?;
        info!(panel = %self.panel, "detaching docked panel into a floating panel");
        self.ws.defer(Deferred::DetachPanelToFloat {
            panel: self.panel,
            pos: event.pos,
            pivot: origin - frame.origin(),
        });
        Ok(false)
    }

    fn on_end(&mut self, _event: &PointerEvent) -> Result<(), DockError> {
        if let Some(panel) = self.ws.panels.get_mut(&self.panel) {
            panel.drag_origin = None;
        }
        Ok(())
    }
}
