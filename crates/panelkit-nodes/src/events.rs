//! Repaint notifications raised by the node graph.

use serde::Serialize;

use panelkit_common::Vec2;

use crate::ids::{ConnectionId, NodeId, SlotId};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum GraphEvent {
    NodeAdded { node: NodeId },
    NodeMoved { node: NodeId, position: Vec2 },
    NodeRaised { node: NodeId, z: u32 },
    ConnectionCreated { connection: ConnectionId },
    /// New SVG path data for a connection.
    ConnectionPath { connection: ConnectionId, path: String },
    ConnectionStroke { connection: ConnectionId, color: &'static str },
    ConnectionRemoved { connection: ConnectionId },
    /// A slot's handle gained its first or lost its last connection.
    SlotConnected { slot: SlotId, connected: bool },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_serialize_with_camel_case_tag() {
        let event = GraphEvent::SlotConnected {
            slot: SlotId(4),
            connected: true,
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"event": "slotConnected", "slot": 4, "connected": true})
        );

        let event = GraphEvent::ConnectionStroke {
            connection: ConnectionId(9),
            color: "red",
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"event": "connectionStroke", "connection": 9, "color": "red"})
        );
    }
}
