//! Pointer routing: hit testing, press claiming, and driving the one
//! gesture in progress.
//!
//! A press goes to the innermost tracked element under the pointer and stops
//! there. Moves and releases go to whichever tracker claimed the press, no
//! matter where the pointer is.

use tracing::{debug, warn};

use panelkit_common::{
    DockError, DragHandler, DragStatus, DragTracker, MouseButton, PointerEvent, PointerKind, Vec2,
};

use crate::docked::{Container, PanelHeaderDrag};
use crate::floating::{FloatingHeaderDrag, FloatingResizeDrag, ResizeMode};
use crate::ids::FloatId;
use crate::layout::{Element, LayoutSnapshot};
use crate::signal::WorkspaceEvent;
use crate::tab_group::TabHeaderDrag;

use super::{DragSource, Workspace};

impl Workspace {
    /// Route a pointer event of any kind.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Result<bool, DockError> {
        match event.kind {
            PointerKind::Down => self.pointer_down(event),
            PointerKind::Move => self.pointer_move(event).map(|()| true),
            PointerKind::Up => self.pointer_up(event).map(|()| true),
        }
    }

    /// Returns whether the press was claimed by a docking element.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> Result<bool, DockError> {
        let claimed = self.route_down(event);
        self.settle(claimed)
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) -> Result<(), DockError> {
        let result = match self.gesture {
            Some(source) => self.drive(source, event).map(|status| {
                if status == DragStatus::Finished {
                    self.gesture = None;
                }
            }),
            None => self.update_resize_hover(event.pos),
        };
        self.settle(result)
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) -> Result<(), DockError> {
        let result = self.route_up(event);
        self.settle(result)
    }

    fn settle<T>(&mut self, result: Result<T, DockError>) -> Result<T, DockError> {
        match result {
            Ok(value) => {
                self.run_deferred()?;
                Ok(value)
            }
            Err(err) => {
                self.pending.clear();
                Err(err)
            }
        }
    }

    fn route_down(&mut self, event: &PointerEvent) -> Result<bool, DockError> {
        let snapshot = self.layout();
        let (floating, target) = self.hit_test(&snapshot, event.pos);
        if let Some(id) = floating {
            self.raise(id)?;
        }
        let Some(target) = target else {
            return Ok(false);
        };

        match event.button {
            Some(MouseButton::Middle) => match target {
                DragSource::TabHeader(tab) => {
                    debug!(%tab, "middle click closes tab");
                    self.close_tab(tab)?;
                    Ok(true)
                }
                _ => Ok(false),
            },
            Some(MouseButton::Left) => {
                if let Some(stale) = self.gesture {
                    if stale != target {
                        warn!(?stale, "dropping a gesture that never saw its release");
                        self.cancel_gesture(stale);
                    }
                }
                let Some(mut tracker) = self.take_tracker(target) else {
                    return Ok(false);
                };
                let claimed = tracker.press(event);
                self.restore_tracker(target, tracker);
                if !claimed? {
                    return Ok(false);
                }
                self.gesture = Some(target);
                self.click_candidate = match target {
                    DragSource::TabHeader(tab) => self.tab(tab).and_then(|t| t.group()).map(|g| (tab, g)),
                    _ => None,
                };
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn route_up(&mut self, event: &PointerEvent) -> Result<(), DockError> {
        if let Some(source) = self.gesture.take() {
            self.drive(source, event)?;
        }
        let Some((tab, group)) = self.click_candidate.take() else {
            return Ok(());
        };
        if event.button != Some(MouseButton::Left) {
            return Ok(());
        }
        let still_there = self.tab(tab).and_then(|t| t.group()) == Some(group);
        let over_strip = self.layout().contains(Element::TabStrip(group), event.pos);
        if still_there && over_strip {
            self.activate_tab(tab)?;
        }
        Ok(())
    }

    /// Feed a move or release to the tracker of `source`.
    pub(crate) fn drive(&mut self, source: DragSource, event: &PointerEvent) -> Result<DragStatus, DockError> {
        let Some(mut tracker) = self.take_tracker(source) else {
            debug!(?source, "gesture target is gone");
            return Ok(DragStatus::Finished);
        };
        let status = match source {
            DragSource::TabHeader(tab) => step(&mut tracker, event, &mut TabHeaderDrag { ws: self, tab }),
            DragSource::PanelHeader(panel) => {
                step(&mut tracker, event, &mut PanelHeaderDrag { ws: self, panel })
            }
            DragSource::FloatingHeader(id) => {
                step(&mut tracker, event, &mut FloatingHeaderDrag { ws: self, id })
            }
            DragSource::FloatingResize(id) => {
                step(&mut tracker, event, &mut FloatingResizeDrag { ws: self, id })
            }
        };
        if status.is_err() {
            tracker.cancel();
        }
        self.restore_tracker(source, tracker);
        status
    }

    pub(crate) fn take_tracker(&mut self, source: DragSource) -> Option<DragTracker> {
        match source {
            DragSource::TabHeader(tab) => self.tabs.get_mut(&tab)?.tracker.take(),
            DragSource::PanelHeader(panel) => self.panels.get_mut(&panel)?.tracker.take(),
            DragSource::FloatingHeader(id) => self.floating.get_mut(&id)?.header_tracker.take(),
            DragSource::FloatingResize(id) => self.floating.get_mut(&id)?.resize_tracker.take(),
        }
    }

    /// Put a tracker back, unless its element went away or was rebuilt
    /// while the callbacks ran.
    pub(crate) fn restore_tracker(&mut self, source: DragSource, tracker: DragTracker) {
        let slot = match source {
            DragSource::TabHeader(tab) => self
                .tabs
                .get_mut(&tab)
                .filter(|t| t.group.is_some())
                .map(|t| &mut t.tracker),
            DragSource::PanelHeader(panel) => self.panels.get_mut(&panel).map(|p| &mut p.tracker),
            DragSource::FloatingHeader(id) => self.floating.get_mut(&id).map(|f| &mut f.header_tracker),
            DragSource::FloatingResize(id) => self.floating.get_mut(&id).map(|f| &mut f.resize_tracker),
        };
        match slot {
            Some(slot) if slot.is_none() => *slot = Some(tracker),
            _ => debug!(?source, name = tracker.name(), "discarding tracker of a rebuilt element"),
        }
    }

    fn cancel_gesture(&mut self, source: DragSource) {
        if let Some(mut tracker) = self.take_tracker(source) {
            tracker.cancel();
            self.restore_tracker(source, tracker);
        }
        self.gesture = None;
    }

    /// Topmost floating panel under `pos`, and the innermost tracked element.
    fn hit_test(&self, snapshot: &LayoutSnapshot, pos: Vec2) -> (Option<FloatId>, Option<DragSource>) {
        let top = self
            .floating_by_z()
            .into_iter()
            .rev()
            .find(|&id| snapshot.contains(Element::FloatingFrame(id), pos));
        match top {
            Some(id) => {
                let target = self
                    .header_at(snapshot, Container::Floating(id), pos)
                    .or_else(|| {
                        snapshot
                            .contains(Element::FloatingHeader(id), pos)
                            .then_some(DragSource::FloatingHeader(id))
                    })
                    .unwrap_or(DragSource::FloatingResize(id));
                (Some(id), Some(target))
            }
            None => (None, self.header_at(snapshot, Container::Root, pos)),
        }
    }

    /// Tab header, then docked panel header, inside `container`.
    fn header_at(&self, snapshot: &LayoutSnapshot, container: Container, pos: Vec2) -> Option<DragSource> {
        let tab = self.tabs.values().find(|tab| {
            let inside = tab
                .group
                .and_then(|g| self.container_of_group(g))
                .is_some_and(|c| c == container);
            inside
                && snapshot
                    .get(Element::TabHeader(tab.id))
                    .is_some_and(|r| r.translate(tab.drag_offset).contains(pos))
        });
        if let Some(tab) = tab {
            return Some(DragSource::TabHeader(tab.id));
        }
        self.panels
            .values()
            .find(|panel| {
                self.container_of(panel.id) == Some(container)
                    && snapshot.contains(Element::PanelHeader(panel.id), pos)
            })
            .map(|panel| DragSource::PanelHeader(panel.id))
    }

    /// Track which floating panel edge the pointer hovers, for the resize cursor.
    fn update_resize_hover(&mut self, pos: Vec2) -> Result<(), DockError> {
        let snapshot = self.layout();
        let top = self
            .floating_by_z()
            .into_iter()
            .rev()
            .find(|&id| snapshot.contains(Element::FloatingFrame(id), pos));
        let tolerance = self.settings.resize_tolerance;
        for id in self.floating_by_z() {
            let entry = self.floating_mut(id)?;
            let hover = if top == Some(id) {
                ResizeMode::at(entry.rect, pos, tolerance)
            } else {
                None
            };
            if entry.resize_hover != hover {
                entry.resize_hover = hover;
                self.push_event(WorkspaceEvent::Cursor {
                    id,
                    cursor: hover.map(ResizeMode::cursor),
                });
            }
        }
        Ok(())
    }
}

fn step<H: DragHandler>(
    tracker: &mut DragTracker,
    event: &PointerEvent,
    handler: &mut H,
) -> Result<DragStatus, DockError> {
    match event.kind {
        PointerKind::Move => tracker.motion(event, handler),
        PointerKind::Up => {
            if tracker.is_off() {
                return Ok(DragStatus::Finished);
            }
            tracker.release(event, handler).map(|()| DragStatus::Finished)
        }
        PointerKind::Down => Err(DockError::invariant("Pointer press delivered to a running drag")),
    }
}
