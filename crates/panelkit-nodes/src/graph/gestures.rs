//! Pointer input for the editor: pressing a handle drags out a connection,
//! pressing anywhere else on a node raises and moves it.

use tracing::debug;

use panelkit_common::{DockError, DragHandler, DragStatus, MouseButton, PointerEvent, PointerKind, Vec2};

use crate::ids::{NodeId, SlotId};

use super::types::PendingConnection;
use super::NodeGraph;

struct NodeDrag<'a> {
    graph: &'a mut NodeGraph,
    node: NodeId,
}

impl DragHandler for NodeDrag<'_> {
    fn on_move(&mut self, _event: &PointerEvent, delta: Vec2) -> Result<bool, DockError> {
        let position = self.graph.node_ref(self.node)?.position + delta;
        self.graph.move_node(self.node, position)?;
        Ok(true)
    }
}

impl NodeGraph {
    /// Returns whether the press landed on the editor.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> Result<bool, DockError> {
        if event.button != Some(MouseButton::Left) {
            return Ok(false);
        }
        let Some(node) = self.node_at(event.pos) else {
            return Ok(false);
        };
        if let Some(slot) = self.handle_on(node, event.pos) {
            self.begin_connection(slot, event.pos)?;
            return Ok(true);
        }

        self.raise_node(node)?;
        let Some(mut tracker) = self.node_mut(node)?.tracker.take() else {
            return Ok(false);
        };
        let claimed = tracker.press(event);
        self.node_mut(node)?.tracker = Some(tracker);
        if claimed? {
            self.dragged_node = Some(node);
        }
        Ok(true)
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) -> Result<(), DockError> {
        if let Some(pending) = self.pending {
            let far = self.slot_ref(pending.from)?.kind.opposite();
            return self.set_connection_end(pending.connection, far, event.pos);
        }
        if let Some(node) = self.dragged_node {
            if !self.drive_node(node, event)? {
                self.dragged_node = None;
            }
        }
        Ok(())
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) -> Result<(), DockError> {
        if let Some(node) = self.dragged_node.take() {
            self.drive_node(node, event)?;
        }
        let Some(pending) = self.pending.take() else {
            return Ok(());
        };
        let target = self.handle_at(event.pos);
        self.finish_connection(pending, target)
    }

    /// Start dragging a new connection out of `slot`, its loose end at `pos`.
    pub fn begin_connection(&mut self, slot: SlotId, pos: Vec2) -> Result<(), DockError> {
        if let Some(stale) = self.pending.take() {
            debug!(connection = %stale.connection, "discarding unfinished connection");
            self.finish_connection(stale, None)?;
        }
        let connection = self.create_connection();
        self.attach(slot, connection)?;
        let far = self.slot_ref(slot)?.kind.opposite();
        self.set_connection_end(connection, far, pos)?;
        self.pending = Some(PendingConnection { connection, from: slot });
        Ok(())
    }

    /// Offer the loose end to `target`, and drop the connection if nothing took it.
    fn finish_connection(&mut self, pending: PendingConnection, target: Option<SlotId>) -> Result<(), DockError> {
        let far = self.slot_ref(pending.from)?.kind.opposite();
        if let Some(target) = target {
            self.request_connect(target, pending.connection, far)?;
        }
        // The start slot may have lost it to an eviction in the meantime.
        let Some(connection) = self.connections.get(&pending.connection) else {
            return Ok(());
        };
        if connection.slot(far).is_none() && connection.slot(far.opposite()) == Some(pending.from) {
            debug!(connection = %pending.connection, "connection dropped on nothing");
            self.detach(pending.from, pending.connection)?;
        }
        Ok(())
    }

    /// Returns whether the node drag is still live.
    fn drive_node(&mut self, node: NodeId, event: &PointerEvent) -> Result<bool, DockError> {
        let Some(mut tracker) = self.nodes.get_mut(&node).and_then(|n| n.tracker.take()) else {
            return Ok(false);
        };
        let result = match event.kind {
            PointerKind::Move => tracker
                .motion(event, &mut NodeDrag { graph: self, node })
                .map(|status| status == DragStatus::Live),
            PointerKind::Up if !tracker.is_off() => tracker
                .release(event, &mut NodeDrag { graph: self, node })
                .map(|()| false),
            _ => Ok(false),
        };
        if result.is_err() {
            tracker.cancel();
        }
        if let Some(entry) = self.nodes.get_mut(&node) {
            entry.tracker = Some(tracker);
        }
        result
    }
}
