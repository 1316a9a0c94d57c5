//! Dragging a tab header: reorder within the strip, tear out past its edge.

use tracing::debug;

use panelkit_common::{DockError, DragHandler, PointerEvent, Vec2};

use crate::ids::TabId;
use crate::layout::Element;
use crate::signal::WorkspaceEvent;
use crate::workspace::{Deferred, Workspace};

pub(crate) struct TabHeaderDrag<'a> {
    pub(crate) ws: &'a mut Workspace,
    pub(crate) tab: TabId,
}

impl TabHeaderDrag<'_> {
    fn set_opacity(&mut self, opacity: f64) -> Result<(), DockError> {
        self.ws.tab_mut(self.tab)?.opacity = opacity;
        self.ws.push_event(WorkspaceEvent::TabOpacity {
            tab: self.tab,
            opacity,
        });
        Ok(())
    }
}

impl DragHandler for TabHeaderDrag<'_> {
    fn on_start(&mut self, _event: &PointerEvent) -> Result<bool, DockError> {
        let Some(group) = self.ws.tab_mut(self.tab)?.group else {
            return Ok(false);
        };
        if self.ws.group_ref(group)?.len() <= 1 {
            return Ok(false);
        }
        let tab = self.ws.tab_mut(self.tab)?;
        if tab.docking_in {
            debug!(tab = %self.tab, "starting attaching header item drag");
        } else {
            debug!(tab = %self.tab, "starting header item drag");
            tab.drag_offset = Vec2::ZERO;
        }
        let opacity = self.ws.settings.drag_opacity;
        self.set_opacity(opacity)?;
        Ok(true)
    }

    fn on_move(&mut self, event: &PointerEvent, delta: Vec2) -> Result<bool, DockError> {
        self.ws.tab_mut(self.tab)?.drag_offset.x += delta.x;
        self.ws.reorder_tab(self.tab, event.pos.x)?;

        let group = self
            .ws
            .tab(self.tab)
            .and_then(|t| t.group)
            .ok_or_else(|| DockError::not_found("tab group of", self.tab))?;
        let margin = self.ws.settings.tab_strip_margin;
        let inside = self
            .ws
            .layout()
            .get(Element::TabStrip(group))
            .is_some_and(|strip| strip.enlarge(margin).contains(event.pos));
        if inside {
            return Ok(true);
        }
        // Tear out once this gesture has fully ended, so two drags never overlap.
        self.ws.defer(Deferred::DetachTabToFloat {
            tab: self.tab,
            pos: event.pos,
        });
        Ok(false)
    }

    fn on_end(&mut self, _event: &PointerEvent) -> Result<(), DockError> {
        let tab = self.ws.tab_mut(self.tab)?;
        tab.drag_offset = Vec2::ZERO;
        tab.docking_in = false;
        self.set_opacity(1.0)
    }
}
