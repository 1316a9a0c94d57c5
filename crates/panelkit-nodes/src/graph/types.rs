//! Core types for the node graph arena.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use panelkit_common::{DragTracker, EventQueue, Vec2};
use panelkit_config::NodesConfig;

use crate::events::GraphEvent;
use crate::ids::{ConnectionId, NodeId, SlotId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Input,
    Output,
}

impl SlotKind {
    pub fn opposite(self) -> SlotKind {
        match self {
            SlotKind::Input => SlotKind::Output,
            SlotKind::Output => SlotKind::Input,
        }
    }
}

#[derive(Debug)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    /// Top-left corner in editor coordinates.
    pub(crate) position: Vec2,
    pub(crate) z: Option<u32>,
    pub(crate) inputs: Vec<SlotId>,
    pub(crate) outputs: Vec<SlotId>,
    pub(crate) tracker: Option<DragTracker>,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Stacking order, once the node has been pressed at least once.
    pub fn z(&self) -> Option<u32> {
        self.z
    }

    pub fn inputs_count(&self) -> usize {
        self.inputs.len()
    }

    pub fn outputs_count(&self) -> usize {
        self.outputs.len()
    }
}

/// A typed connection point. Inputs hold at most one connection.
#[derive(Debug, Clone)]
pub struct Slot {
    pub(crate) id: SlotId,
    pub(crate) name: String,
    pub(crate) kind: SlotKind,
    /// Back-reference to the owning node.
    pub(crate) node: NodeId,
    pub(crate) connections: Vec<ConnectionId>,
}

impl Slot {
    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn connections(&self) -> &[ConnectionId] {
        &self.connections
    }

    pub fn is_connected(&self) -> bool {
        !self.connections.is_empty()
    }
}

/// A curve between an output and an input. Either end may be loose while
/// the connection is being dragged out.
#[derive(Debug, Clone)]
pub struct Connection {
    pub(crate) id: ConnectionId,
    pub(crate) input: Option<SlotId>,
    pub(crate) output: Option<SlotId>,
    pub(crate) input_pos: Vec2,
    pub(crate) output_pos: Vec2,
    pub(crate) hovered: bool,
}

impl Connection {
    pub(crate) fn new(id: ConnectionId) -> Self {
        Self {
            id,
            input: None,
            output: None,
            input_pos: Vec2::ZERO,
            output_pos: Vec2::ZERO,
            hovered: false,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn slot(&self, kind: SlotKind) -> Option<SlotId> {
        match kind {
            SlotKind::Input => self.input,
            SlotKind::Output => self.output,
        }
    }

    pub fn coords(&self, kind: SlotKind) -> Vec2 {
        match kind {
            SlotKind::Input => self.input_pos,
            SlotKind::Output => self.output_pos,
        }
    }

    pub(crate) fn set_slot(&mut self, kind: SlotKind, slot: Option<SlotId>) {
        match kind {
            SlotKind::Input => self.input = slot,
            SlotKind::Output => self.output = slot,
        }
    }

    pub(crate) fn set_coords(&mut self, kind: SlotKind, pos: Vec2) {
        match kind {
            SlotKind::Input => self.input_pos = pos,
            SlotKind::Output => self.output_pos = pos,
        }
    }

    /// SVG path data of the cubic curve from the input end to the output end.
    pub fn path_data(&self) -> String {
        let a = self.input_pos;
        let b = self.output_pos;
        let handle = (b.x - a.x) / 2.0;
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            a.x,
            a.y,
            a.x + handle,
            a.y,
            b.x - handle,
            b.y,
            b.x,
            b.y
        )
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn stroke(&self) -> &'static str {
        if self.hovered {
            "red"
        } else {
            "black"
        }
    }
}

/// A connection being dragged out of a slot handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PendingConnection {
    pub(crate) connection: ConnectionId,
    pub(crate) from: SlotId,
}

/// Arena of nodes, slots and connections making up one editor.
pub struct NodeGraph {
    pub(crate) metrics: NodesConfig,
    pub(crate) nodes: HashMap<NodeId, Node>,
    /// Insertion order, used to break z ties when hit-testing.
    pub(crate) order: Vec<NodeId>,
    pub(crate) slots: HashMap<SlotId, Slot>,
    pub(crate) connections: HashMap<ConnectionId, Connection>,
    pub(super) next_id: u32,
    pub(super) next_z: u32,
    pub(crate) pending: Option<PendingConnection>,
    pub(crate) dragged_node: Option<NodeId>,
    pub(super) events: EventQueue<GraphEvent>,
}

impl NodeGraph {
    pub fn new(metrics: NodesConfig) -> Self {
        let next_z = metrics.z_index_base;
        Self {
            metrics,
            nodes: HashMap::new(),
            order: Vec::new(),
            slots: HashMap::new(),
            connections: HashMap::new(),
            next_id: 1,
            next_z,
            pending: None,
            dragged_node: None,
            events: EventQueue::new(),
        }
    }

    pub(crate) fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn alloc_z(&mut self) -> u32 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    pub(crate) fn push_event(&mut self, event: GraphEvent) {
        self.events.push(event);
    }

    pub fn metrics(&self) -> &NodesConfig {
        &self.metrics
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.get(&id)
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Every connection, oldest first.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        let mut all: Vec<&Connection> = self.connections.values().collect();
        all.sort_by_key(|c| c.id);
        all.into_iter()
    }

    /// Connection currently being dragged out of a handle, if any.
    pub fn pending_connection(&self) -> Option<ConnectionId> {
        self.pending.map(|p| p.connection)
    }

    pub fn drain_events(&mut self) -> Vec<GraphEvent> {
        self.events.drain()
    }
}

impl Default for NodeGraph {
    fn default() -> Self {
        Self::new(NodesConfig::default())
    }
}

impl fmt::Debug for NodeGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeGraph")
            .field("nodes", &self.nodes.len())
            .field("slots", &self.slots.len())
            .field("connections", &self.connections.len())
            .field("pending", &self.pending)
            .finish()
    }
}
