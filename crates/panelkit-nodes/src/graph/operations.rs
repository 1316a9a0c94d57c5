//! Structural operations: nodes, slots, and attaching connections to slots.

use tracing::{debug, info};

use panelkit_common::{ensure, DockError, DragTracker, Vec2};

use crate::events::GraphEvent;
use crate::ids::{ConnectionId, NodeId, SlotId};

use super::{Connection, Node, NodeGraph, Slot, SlotKind};

impl NodeGraph {
    pub fn add_node(&mut self, name: impl Into<String>, position: Vec2) -> NodeId {
        let id = NodeId(self.alloc_id());
        let node = Node {
            id,
            name: name.into(),
            position,
            z: None,
            inputs: Vec::new(),
            outputs: Vec::new(),
            tracker: Some(DragTracker::new("node: move")),
        };
        info!(%id, name = node.name(), %position, "added node");
        self.nodes.insert(id, node);
        self.order.push(id);
        self.push_event(GraphEvent::NodeAdded { node: id });
        id
    }

    pub fn add_slot(&mut self, node: NodeId, name: impl Into<String>, kind: SlotKind) -> Result<SlotId, DockError> {
        let id = SlotId(self.alloc_id());
        let entry = self.node_mut(node)?;
        match kind {
            SlotKind::Input => entry.inputs.push(id),
            SlotKind::Output => entry.outputs.push(id),
        }
        self.slots.insert(
            id,
            Slot {
                id,
                name: name.into(),
                kind,
                node,
                connections: Vec::new(),
            },
        );
        Ok(id)
    }

    pub fn input(&self, node: NodeId, index: usize) -> Result<SlotId, DockError> {
        let inputs = &self.node_ref(node)?.inputs;
        inputs.get(index).copied().ok_or_else(|| {
            DockError::invariant(format!(
                "Input index out of bounds: accessing {index} out of {}",
                inputs.len()
            ))
        })
    }

    pub fn output(&self, node: NodeId, index: usize) -> Result<SlotId, DockError> {
        let outputs = &self.node_ref(node)?.outputs;
        outputs.get(index).copied().ok_or_else(|| {
            DockError::invariant(format!(
                "Output index out of bounds: accessing {index} out of {}",
                outputs.len()
            ))
        })
    }

    /// Connect two slots directly. Returns the new connection, or `None` when
    /// the pair is rejected (same node, or same kind).
    /// A rejected pair leaves both slots untouched.
    pub fn connect(&mut self, from: SlotId, to: SlotId) -> Result<Option<ConnectionId>, DockError> {
        let (near, far) = (self.slot_ref(from)?, self.slot_ref(to)?);
        if near.kind == far.kind || near.node == far.node {
            debug!(%from, %to, "connection declined");
            return Ok(None);
        }
        let far_kind = far.kind;
        let connection = self.create_connection();
        self.attach(from, connection)?;
        if !self.request_connect(to, connection, far_kind)? {
            self.detach(from, connection)?;
            return Ok(None);
        }
        Ok(Some(connection))
    }

    /// A dragged connection was dropped on `slot`'s handle, offering its
    /// loose `kind` end. Returns whether the slot took it.
    pub fn request_connect(
        &mut self,
        slot: SlotId,
        connection: ConnectionId,
        kind: SlotKind,
    ) -> Result<bool, DockError> {
        let target = self.slot_ref(slot)?;
        let other_node = self
            .connection_ref(connection)?
            .slot(kind.opposite())
            .and_then(|s| self.slot(s))
            .map(Slot::node);
        if kind != target.kind || other_node == Some(target.node) {
            debug!(%slot, %connection, ?kind, "connection request declined");
            return Ok(false);
        }
        self.attach(slot, connection)?;
        Ok(true)
    }

    /// Remove a connection from both of its slots; it disappears with them.
    pub fn delete_connection(&mut self, connection: ConnectionId) -> Result<(), DockError> {
        let entry = self.connection_ref(connection)?;
        let (input, output) = (entry.input, entry.output);
        if let Some(slot) = input {
            self.detach(slot, connection)?;
        }
        if let Some(slot) = output {
            self.detach(slot, connection)?;
        }
        Ok(())
    }

    pub fn set_connection_hovered(&mut self, connection: ConnectionId, hovered: bool) -> Result<(), DockError> {
        let entry = self.connection_mut(connection)?;
        if entry.hovered != hovered {
            entry.hovered = hovered;
            let color = entry.stroke();
            self.push_event(GraphEvent::ConnectionStroke { connection, color });
        }
        Ok(())
    }

    pub fn move_node(&mut self, node: NodeId, position: Vec2) -> Result<(), DockError> {
        self.node_mut(node)?.position = position;
        self.push_event(GraphEvent::NodeMoved { node, position });
        self.refresh_node_connections(node)
    }

    pub fn raise_node(&mut self, node: NodeId) -> Result<(), DockError> {
        let z = self.alloc_z();
        self.node_mut(node)?.z = Some(z);
        self.push_event(GraphEvent::NodeRaised { node, z });
        Ok(())
    }

    pub(crate) fn create_connection(&mut self) -> ConnectionId {
        let id = ConnectionId(self.alloc_id());
        self.connections.insert(id, Connection::new(id));
        self.push_event(GraphEvent::ConnectionCreated { connection: id });
        id
    }

    /// Attach `connection` to `slot`. An input that already has a
    /// connection drops it first, from both ends.
    pub(crate) fn attach(&mut self, slot: SlotId, connection: ConnectionId) -> Result<(), DockError> {
        let entry = self.slot_ref(slot)?;
        ensure(
            !entry.connections.contains(&connection),
            "trying to add the same connection twice",
        )?;
        let kind = entry.kind;
        let evicted = match kind {
            SlotKind::Input => {
                ensure(entry.connections.len() <= 1, "input slot holds several connections")?;
                entry.connections.first().copied()
            }
            SlotKind::Output => None,
        };
        self.connection_mut(connection)?.set_slot(kind, Some(slot));

        if let Some(old) = evicted {
            debug!(%slot, %old, "evicting connection from input");
            if let Some(far) = self.connection_ref(old)?.slot(kind.opposite()) {
                self.detach(far, old)?;
            }
            self.detach(slot, old)?;
        }

        let entry = self.slot_mut(slot)?;
        entry.connections.push(connection);
        if entry.connections.len() == 1 {
            self.push_event(GraphEvent::SlotConnected { slot, connected: true });
        }
        self.refresh_slot_connections(slot)
    }

    /// Detach `connection` from `slot`. A connection with no slot left is
    /// destroyed.
    pub(crate) fn detach(&mut self, slot: SlotId, connection: ConnectionId) -> Result<(), DockError> {
        let entry = self.slot_mut(slot)?;
        let index = entry
            .connections
            .iter()
            .position(|&c| c == connection)
            .ok_or_else(|| DockError::invariant("trying to remove non-existent connection"))?;
        entry.connections.remove(index);
        let kind = entry.kind;
        if entry.connections.is_empty() {
            self.push_event(GraphEvent::SlotConnected { slot, connected: false });
        }

        let conn = self.connection_mut(connection)?;
        conn.set_slot(kind, None);
        if conn.input.is_none() && conn.output.is_none() {
            self.connections.remove(&connection);
            debug!(%connection, "connection removed");
            self.push_event(GraphEvent::ConnectionRemoved { connection });
        }
        Ok(())
    }

    pub(crate) fn refresh_node_connections(&mut self, node: NodeId) -> Result<(), DockError> {
        let entry = self.node_ref(node)?;
        let slots: Vec<SlotId> = entry.inputs.iter().chain(&entry.outputs).copied().collect();
        for slot in slots {
            self.refresh_slot_connections(slot)?;
        }
        Ok(())
    }

    /// Move the `slot` end of each of its connections onto its handle.
    pub(crate) fn refresh_slot_connections(&mut self, slot: SlotId) -> Result<(), DockError> {
        let center = self.handle_center(slot)?;
        let entry = self.slot_ref(slot)?;
        let kind = entry.kind;
        for connection in entry.connections.clone() {
            self.set_connection_end(connection, kind, center)?;
        }
        Ok(())
    }

    pub(crate) fn set_connection_end(
        &mut self,
        connection: ConnectionId,
        kind: SlotKind,
        pos: Vec2,
    ) -> Result<(), DockError> {
        let entry = self.connection_mut(connection)?;
        entry.set_coords(kind, pos);
        let path = entry.path_data();
        self.push_event(GraphEvent::ConnectionPath { connection, path });
        Ok(())
    }

    pub(crate) fn node_ref(&self, id: NodeId) -> Result<&Node, DockError> {
        self.nodes.get(&id).ok_or_else(|| DockError::not_found("node", id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DockError> {
        self.nodes.get_mut(&id).ok_or_else(|| DockError::not_found("node", id))
    }

    pub(crate) fn slot_ref(&self, id: SlotId) -> Result<&Slot, DockError> {
        self.slots.get(&id).ok_or_else(|| DockError::not_found("slot", id))
    }

    fn slot_mut(&mut self, id: SlotId) -> Result<&mut Slot, DockError> {
        self.slots.get_mut(&id).ok_or_else(|| DockError::not_found("slot", id))
    }

    pub(crate) fn connection_ref(&self, id: ConnectionId) -> Result<&Connection, DockError> {
        self.connections
            .get(&id)
            .ok_or_else(|| DockError::not_found("connection", id))
    }

    fn connection_mut(&mut self, id: ConnectionId) -> Result<&mut Connection, DockError> {
        self.connections
            .get_mut(&id)
            .ok_or_else(|| DockError::not_found("connection", id))
    }
}
