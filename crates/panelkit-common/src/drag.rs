//! Drag tracking: turns raw pointer down/move/up into start/move/end
//! callbacks with a cancelable contract.
//!
//! ```text
//! Off --press--> BeforeFirstMove --first move, on_start true--> Active
//!  ^                   |                                           |
//!  +-- on_start false -+                 on_move false / up -------+
//! ```
//!
//! A tracker belongs to exactly one element. The owner routes pointer events
//! to it and supplies a [`DragHandler`] for each call, so the handler may
//! borrow whatever state it needs at that moment.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace};

use crate::errors::{ensure, DockError};
use crate::input::{MouseButton, PointerEvent};
use crate::types::Vec2;

static TRACKER_COUNT: AtomicU64 = AtomicU64::new(0);

/// Number of trackers created in this process. Only used to tag log lines.
pub fn trackers_created() -> u64 {
    TRACKER_COUNT.load(Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Off,
    BeforeFirstMove,
    Active,
}

/// Whether the gesture is still running after a motion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStatus {
    Live,
    Finished,
}

/// Callbacks for one tracked element. Every method is optional.
pub trait DragHandler {
    /// Called on the first move after a press. Returning `false` aborts the
    /// drag without calling `on_end`.
    fn on_start(&mut self, _event: &PointerEvent) -> Result<bool, DockError> {
        Ok(true)
    }

    /// Called on every move with the delta since the previous move.
    /// Returning `false` ends the drag.
    fn on_move(&mut self, _event: &PointerEvent, _delta: Vec2) -> Result<bool, DockError> {
        Ok(true)
    }

    /// Called once when an accepted drag ends.
    fn on_end(&mut self, _event: &PointerEvent) -> Result<(), DockError> {
        Ok(())
    }
}

/// Closure-backed handler for callers that do not need a dedicated type.
#[derive(Default)]
pub struct DragCallbacks<'a> {
    pub on_start: Option<Box<dyn FnMut(&PointerEvent) -> bool + 'a>>,
    pub on_move: Option<Box<dyn FnMut(&PointerEvent, Vec2) -> bool + 'a>>,
    pub on_end: Option<Box<dyn FnMut(&PointerEvent) + 'a>>,
}

impl DragHandler for DragCallbacks<'_> {
    fn on_start(&mut self, event: &PointerEvent) -> Result<bool, DockError> {
        Ok(self.on_start.as_mut().map_or(true, |f| f(event)))
    }

    fn on_move(&mut self, event: &PointerEvent, delta: Vec2) -> Result<bool, DockError> {
        Ok(self.on_move.as_mut().map_or(true, |f| f(event, delta)))
    }

    fn on_end(&mut self, event: &PointerEvent) -> Result<(), DockError> {
        if let Some(f) = self.on_end.as_mut() {
            f(event);
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct DragTracker {
    name: &'static str,
    debug_index: u64,
    phase: DragPhase,
    last: Vec2,
}

impl DragTracker {
    pub fn new(name: &'static str) -> Self {
        let debug_index = TRACKER_COUNT.fetch_add(1, Ordering::Relaxed);
        trace!(debug_index, name, "drag tracking installed");
        Self {
            name,
            debug_index,
            phase: DragPhase::Off,
            last: Vec2::ZERO,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn debug_index(&self) -> u64 {
        self.debug_index
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_off(&self) -> bool {
        self.phase == DragPhase::Off
    }

    pub fn is_active(&self) -> bool {
        self.phase == DragPhase::Active
    }

    /// Handle a pointer press inside the tracked element. Returns `true` when
    /// the press was claimed, in which case it must not propagate to
    /// enclosing trackers.
    pub fn press(&mut self, event: &PointerEvent) -> Result<bool, DockError> {
        if event.button != Some(MouseButton::Left) {
            return Ok(false);
        }
        ensure(
            self.phase == DragPhase::Off,
            "Attempting new drag while previous is still active",
        )?;
        debug!(debug_index = self.debug_index, name = self.name, "starting drag");
        self.phase = DragPhase::BeforeFirstMove;
        self.last = event.pos;
        Ok(true)
    }

    /// Take over a gesture that began on another element, as if the pointer
    /// had just been pressed here at `pos`.
    pub fn resume(&mut self, pos: Vec2) -> Result<(), DockError> {
        ensure(
            self.phase == DragPhase::Off,
            "Cannot hand a drag to a tracker that is already dragging",
        )?;
        debug!(debug_index = self.debug_index, name = self.name, %pos, "drag handed over");
        self.phase = DragPhase::BeforeFirstMove;
        self.last = pos;
        Ok(())
    }

    pub fn motion<H: DragHandler + ?Sized>(
        &mut self,
        event: &PointerEvent,
        handler: &mut H,
    ) -> Result<DragStatus, DockError> {
        match self.phase {
            DragPhase::Off => return Ok(DragStatus::Finished),
            DragPhase::BeforeFirstMove => {
                if !event.is_primary_held() {
                    debug!(name = self.name, "button released before first move");
                    self.phase = DragPhase::Off;
                    return Ok(DragStatus::Finished);
                }
                if !handler.on_start(event)? {
                    debug!(name = self.name, "ending drag - start declined");
                    self.phase = DragPhase::Off;
                    return Ok(DragStatus::Finished);
                }
                self.phase = DragPhase::Active;
            }
            DragPhase::Active => {}
        }

        let delta = event.pos - self.last;
        self.last = event.pos;
        if !handler.on_move(event, delta)? {
            debug!(name = self.name, "ending drag - move declined");
            self.finish(event, handler)?;
            return Ok(DragStatus::Finished);
        }
        // The native up event is occasionally lost when the pointer is jerked.
        if !event.is_primary_held() {
            debug!(name = self.name, "ending drag - button released during move");
            self.finish(event, handler)?;
            return Ok(DragStatus::Finished);
        }
        Ok(DragStatus::Live)
    }

    pub fn release<H: DragHandler + ?Sized>(
        &mut self,
        event: &PointerEvent,
        handler: &mut H,
    ) -> Result<(), DockError> {
        ensure(self.phase != DragPhase::Off, "Pointer release without a drag")?;
        self.finish(event, handler)
    }

    /// Drop the current gesture without any callbacks.
    pub fn cancel(&mut self) {
        if self.phase != DragPhase::Off {
            debug!(name = self.name, "drag cancelled");
        }
        self.phase = DragPhase::Off;
    }

    fn finish<H: DragHandler + ?Sized>(
        &mut self,
        event: &PointerEvent,
        handler: &mut H,
    ) -> Result<(), DockError> {
        let was_active = self.phase == DragPhase::Active;
        self.phase = DragPhase::Off;
        if was_active {
            handler.on_end(event)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        log: Vec<String>,
        accept_start: bool,
        stop_after_moves: Option<usize>,
        moves: usize,
    }

    impl Recorder {
        fn accepting() -> Self {
            Self {
                accept_start: true,
                ..Default::default()
            }
        }
    }

    impl DragHandler for Recorder {
        fn on_start(&mut self, _event: &PointerEvent) -> Result<bool, DockError> {
            self.log.push("start".into());
            Ok(self.accept_start)
        }

        fn on_move(&mut self, _event: &PointerEvent, delta: Vec2) -> Result<bool, DockError> {
            self.moves += 1;
            self.log.push(format!("move {} {}", delta.x, delta.y));
            Ok(self.stop_after_moves != Some(self.moves))
        }

        fn on_end(&mut self, _event: &PointerEvent) -> Result<(), DockError> {
            self.log.push("end".into());
            Ok(())
        }
    }

    fn press(tracker: &mut DragTracker, x: f64, y: f64) -> bool {
        tracker
            .press(&PointerEvent::down(Vec2::new(x, y), MouseButton::Left))
            .unwrap()
    }

    #[test]
    fn full_gesture_fires_in_order() {
        let mut tracker = DragTracker::new("test");
        let mut rec = Recorder::accepting();
        assert!(press(&mut tracker, 10.0, 10.0));
        assert_eq!(tracker.phase(), DragPhase::BeforeFirstMove);

        let status = tracker
            .motion(&PointerEvent::drag(Vec2::new(15.0, 12.0)), &mut rec)
            .unwrap();
        assert_eq!(status, DragStatus::Live);
        assert!(tracker.is_active());
        tracker
            .motion(&PointerEvent::drag(Vec2::new(16.0, 10.0)), &mut rec)
            .unwrap();
        tracker
            .release(&PointerEvent::up(Vec2::new(16.0, 10.0), MouseButton::Left), &mut rec)
            .unwrap();

        assert_eq!(rec.log, vec!["start", "move 5 2", "move 1 -2", "end"]);
        assert!(tracker.is_off());
    }

    #[test]
    fn declined_start_aborts_without_end() {
        let mut tracker = DragTracker::new("test");
        let mut rec = Recorder::default();
        press(&mut tracker, 0.0, 0.0);
        let status = tracker
            .motion(&PointerEvent::drag(Vec2::new(1.0, 1.0)), &mut rec)
            .unwrap();
        assert_eq!(status, DragStatus::Finished);
        assert_eq!(rec.log, vec!["start"]);
        assert!(tracker.is_off());
    }

    #[test]
    fn declined_move_ends_once() {
        let mut tracker = DragTracker::new("test");
        let mut rec = Recorder {
            accept_start: true,
            stop_after_moves: Some(2),
            ..Default::default()
        };
        press(&mut tracker, 0.0, 0.0);
        tracker
            .motion(&PointerEvent::drag(Vec2::new(1.0, 0.0)), &mut rec)
            .unwrap();
        let status = tracker
            .motion(&PointerEvent::hover(Vec2::new(2.0, 0.0)), &mut rec)
            .unwrap();
        assert_eq!(status, DragStatus::Finished);
        // Further moves are ignored once the gesture ended.
        tracker
            .motion(&PointerEvent::drag(Vec2::new(3.0, 0.0)), &mut rec)
            .unwrap();
        assert_eq!(rec.log, vec!["start", "move 1 0", "move 1 0", "end"]);
    }

    #[test]
    fn missed_release_ends_drag() {
        let mut tracker = DragTracker::new("test");
        let mut rec = Recorder::accepting();
        press(&mut tracker, 0.0, 0.0);
        tracker
            .motion(&PointerEvent::drag(Vec2::new(4.0, 0.0)), &mut rec)
            .unwrap();
        let status = tracker
            .motion(&PointerEvent::hover(Vec2::new(6.0, 0.0)), &mut rec)
            .unwrap();
        assert_eq!(status, DragStatus::Finished);
        assert_eq!(rec.log.last().map(String::as_str), Some("end"));
        assert_eq!(rec.log.iter().filter(|l| *l == "end").count(), 1);
    }

    #[test]
    fn release_before_first_move_skips_end() {
        let mut tracker = DragTracker::new("test");
        let mut rec = Recorder::accepting();
        press(&mut tracker, 0.0, 0.0);
        tracker
            .release(&PointerEvent::up(Vec2::ZERO, MouseButton::Left), &mut rec)
            .unwrap();
        assert!(rec.log.is_empty());
        assert!(tracker.is_off());
    }

    #[test]
    fn second_press_while_dragging_is_an_invariant_error() {
        let mut tracker = DragTracker::new("test");
        press(&mut tracker, 0.0, 0.0);
        let err = tracker
            .press(&PointerEvent::down(Vec2::ZERO, MouseButton::Left))
            .unwrap_err();
        assert!(err.is_invariant());
    }

    #[test]
    fn non_primary_press_is_not_claimed() {
        let mut tracker = DragTracker::new("test");
        let claimed = tracker
            .press(&PointerEvent::down(Vec2::ZERO, MouseButton::Middle))
            .unwrap();
        assert!(!claimed);
        assert!(tracker.is_off());
    }

    #[test]
    fn release_while_off_is_an_invariant_error() {
        let mut tracker = DragTracker::new("test");
        let mut rec = Recorder::accepting();
        let err = tracker
            .release(&PointerEvent::up(Vec2::ZERO, MouseButton::Left), &mut rec)
            .unwrap_err();
        assert!(err.is_invariant());
    }

    #[test]
    fn resume_continues_gesture_on_new_tracker() {
        let mut old = DragTracker::new("old");
        let mut new = DragTracker::new("new");
        assert!(new.debug_index() > old.debug_index());
        press(&mut old, 0.0, 0.0);
        old.cancel();
        new.resume(Vec2::new(50.0, 50.0)).unwrap();

        let mut rec = Recorder::accepting();
        new.motion(&PointerEvent::drag(Vec2::new(55.0, 50.0)), &mut rec)
            .unwrap();
        assert_eq!(rec.log, vec!["start", "move 5 0"]);
        assert!(new.resume(Vec2::ZERO).unwrap_err().is_invariant());
    }

    #[test]
    fn closure_callbacks_are_optional() {
        let events = RefCell::new(Vec::new());
        let mut callbacks = DragCallbacks {
            on_move: Some(Box::new(|_, d| {
                events.borrow_mut().push(d.x);
                true
            })),
            ..Default::default()
        };
        let mut tracker = DragTracker::new("closures");
        press(&mut tracker, 0.0, 0.0);
        tracker
            .motion(&PointerEvent::drag(Vec2::new(3.0, 0.0)), &mut callbacks)
            .unwrap();
        tracker
            .release(&PointerEvent::up(Vec2::new(3.0, 0.0), MouseButton::Left), &mut callbacks)
            .unwrap();
        drop(callbacks);
        assert_eq!(events.into_inner(), vec![3.0]);
    }
}
