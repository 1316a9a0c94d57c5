//! Node-graph editor: nodes with typed input and output slots, and curved
//! connections dragged between slot handles.

pub mod events;
pub mod graph;
pub mod ids;

pub use events::GraphEvent;
pub use graph::{Connection, Node, NodeGraph, Slot, SlotKind};
pub use ids::{ConnectionId, NodeId, SlotId};
