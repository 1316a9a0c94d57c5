//! Where nodes and slot handles sit. Slots are stacked under the node
//! header, inputs first; input handles hug the left edge and output handles
//! the right edge.

use panelkit_common::{DockError, Rect, Vec2};

use crate::ids::{NodeId, SlotId};

use super::{NodeGraph, SlotKind};

impl NodeGraph {
    pub fn node_rect(&self, node: NodeId) -> Result<Rect, DockError> {
        let entry = self.node_ref(node)?;
        let rows = (entry.inputs.len() + entry.outputs.len()) as f64;
        Ok(Rect::from_origin_size(
            entry.position,
            Vec2::new(
                self.metrics.node_width,
                self.metrics.header_height + rows * self.metrics.slot_height,
            ),
        ))
    }

    pub fn handle_center(&self, slot: SlotId) -> Result<Vec2, DockError> {
        let entry = self.slot_ref(slot)?;
        let node = self.node_ref(entry.node)?;
        let (row, x) = match entry.kind {
            SlotKind::Input => {
                let index = node.inputs.iter().position(|&s| s == slot);
                (index, node.position.x + self.metrics.handle_size / 2.0)
            }
            SlotKind::Output => {
                let index = node.outputs.iter().position(|&s| s == slot);
                (
                    index.map(|i| node.inputs.len() + i),
                    node.position.x + self.metrics.node_width - self.metrics.handle_size / 2.0,
                )
            }
        };
        let row = row.ok_or_else(|| DockError::invariant_with("slot missing from its node", slot))?;
        let y = node.position.y + self.metrics.header_height + (row as f64 + 0.5) * self.metrics.slot_height;
        Ok(Vec2::new(x, y))
    }

    pub fn handle_rect(&self, slot: SlotId) -> Result<Rect, DockError> {
        let center = self.handle_center(slot)?;
        let size = self.metrics.handle_size;
        Ok(Rect::new(center.x - size / 2.0, center.y - size / 2.0, size, size))
    }

    /// Nodes from the top of the stack down. Raised nodes come first; among
    /// equals, later nodes cover earlier ones.
    pub fn nodes_top_down(&self) -> Vec<NodeId> {
        let mut ranked: Vec<(u32, usize, NodeId)> = self
            .order
            .iter()
            .enumerate()
            .filter_map(|(i, id)| self.nodes.get(id).map(|n| (n.z.unwrap_or(0), i, *id)))
            .collect();
        ranked.sort_by(|a, b| b.cmp(a));
        ranked.into_iter().map(|(_, _, id)| id).collect()
    }

    pub fn node_at(&self, pos: Vec2) -> Option<NodeId> {
        self.nodes_top_down()
            .into_iter()
            .find(|&node| self.node_rect(node).is_ok_and(|r| r.contains(pos)))
    }

    /// Any slot handle under `pos`, even one covered by another node.
    pub fn handle_at(&self, pos: Vec2) -> Option<SlotId> {
        self.nodes_top_down().into_iter().find_map(|node| self.handle_on(node, pos))
    }

    pub(crate) fn handle_on(&self, node: NodeId, pos: Vec2) -> Option<SlotId> {
        let entry = self.nodes.get(&node)?;
        entry
            .inputs
            .iter()
            .chain(&entry.outputs)
            .copied()
            .find(|&slot| self.handle_rect(slot).is_ok_and(|r| r.contains(pos)))
    }
}
