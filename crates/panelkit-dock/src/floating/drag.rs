//! Gestures on floating panels: moving by the header (which may end in a
//! dock) and resizing from the right and bottom edges.

use tracing::{debug, info};

use panelkit_common::{DockError, DragHandler, PointerEvent, Vec2};

use crate::docked::Container;
use crate::ids::{FloatId, GroupId};
use crate::layout::Element;
use crate::signal::{Signal, WorkspaceEvent};
use crate::workspace::{Deferred, Workspace};

pub(crate) struct FloatingHeaderDrag<'a> {
    pub(crate) ws: &'a mut Workspace,
    pub(crate) id: FloatId,
}

impl FloatingHeaderDrag<'_> {
    fn set_highlight(&mut self, on: bool) {
        if self.ws.tab_target_highlight != on {
            self.ws.tab_target_highlight = on;
            self.ws.push_event(WorkspaceEvent::TabTargetHighlight { on });
        }
    }
}

impl DragHandler for FloatingHeaderDrag<'_> {
    fn on_start(&mut self, _event: &PointerEvent) -> Result<bool, DockError> {
        let opacity = self.ws.settings.drag_opacity;
        self.ws.set_floating_opacity(self.id, opacity)?;
        if self.ws.is_dockable_as_tab(self.id) {
            self.set_highlight(true);
        }
        Ok(true)
    }

    fn on_move(&mut self, event: &PointerEvent, delta: Vec2) -> Result<bool, DockError> {
        let rect = self.ws.floating_mut(self.id)?.rect.translate(delta);
        self.ws.move_floating(self.id, rect)?;

        if let Some((inner, tab)) = self.ws.single_tab_of(self.id) {
            if let Some(target) = self.ws.tab_strip_at(event.pos, self.id) {
                info!(floating = %self.id, %target, "docking floating panel as a tab");
                // Emptying the lone group tears the floating panel down with it.
                self.ws.detach_tab(inner, tab)?;
                self.ws.destroy_floating(self.id);
                self.ws.defer(Deferred::DockTabInto {
                    tab,
                    group: target,
                    pos: event.pos,
                });
                return Ok(false);
            }
        }

        self.ws.emit(Signal::FloatingPanelBodyDockMouse {
            source: Some(self.id),
            pos: Some(event.pos),
        })?;
        Ok(true)
    }

    fn on_end(&mut self, event: &PointerEvent) -> Result<(), DockError> {
        self.set_highlight(false);
        let alive = self.ws.floating.contains_key(&self.id);
        let target = if alive {
            self.ws.drop_target_at(event.pos)
        } else {
            None
        };
        self.ws.emit(Signal::FloatingPanelBodyDockMouse {
            source: Some(self.id),
            pos: None,
        })?;
        if !alive {
            return Ok(());
        }

        match target {
            Some((target, zone)) => {
                let panel = self.ws.floating_mut(self.id)?.content;
                self.ws.destroy_floating(self.id);
                self.ws.emit(Signal::FloatingPanelBodyDockDrop {
                    panel,
                    target,
                    zone,
                })
            }
            None => self.ws.set_floating_opacity(self.id, 1.0),
        }
    }
}

pub(crate) struct FloatingResizeDrag<'a> {
    pub(crate) ws: &'a mut Workspace,
    pub(crate) id: FloatId,
}

impl DragHandler for FloatingResizeDrag<'_> {
    fn on_start(&mut self, _event: &PointerEvent) -> Result<bool, DockError> {
        let entry = self.ws.floating_mut(self.id)?;
        let Some(mode) = entry.resize_hover else {
            debug!(floating = %self.id, "press away from the edges, no resize");
            return Ok(false);
        };
        entry.resizing = Some((mode, entry.rect.size()));
        self.ws.push_event(WorkspaceEvent::CursorLock {
            cursor: Some(mode.cursor()),
        });
        Ok(true)
    }

    fn on_move(&mut self, _event: &PointerEvent, delta: Vec2) -> Result<bool, DockError> {
        let entry = self.ws.floating_mut(self.id)?;
        let Some((mode, mut size)) = entry.resizing else {
            return Ok(false);
        };
        size += delta;
        entry.resizing = Some((mode, size));
        if mode.moves_width() {
            entry.rect.width = size.x.max(0.0);
        }
        if mode.moves_height() {
            entry.rect.height = size.y.max(0.0);
        }
        let rect = entry.rect;
        self.ws.push_event(WorkspaceEvent::FloatingResized { id: self.id, rect });
        Ok(true)
    }

    fn on_end(&mut self, _event: &PointerEvent) -> Result<(), DockError> {
        if let Some(entry) = self.ws.floating.get_mut(&self.id) {
            entry.resizing = None;
        }
        self.ws.push_event(WorkspaceEvent::CursorLock { cursor: None });
        Ok(())
    }
}

impl Workspace {
    /// The visible tab strip under `pos` that lies outside floating panel
    /// `exclude`, topmost surface first.
    pub(crate) fn tab_strip_at(&self, pos: Vec2, exclude: FloatId) -> Option<GroupId> {
        let snapshot = self.layout();
        let mut hits: Vec<(u32, GroupId)> = self
            .groups
            .keys()
            .filter(|&&group| snapshot.contains(Element::TabStrip(group), pos))
            .filter_map(|&group| {
                let panel = self.group(group)?.parent()?;
                match self.container_of(panel)? {
                    Container::Floating(f) if f == exclude => None,
                    _ => Some((self.stacking_rank(panel), group)),
                }
            })
            .collect();
        hits.sort_by(|a, b| b.cmp(a));
        hits.first().map(|&(_, group)| group)
    }
}
