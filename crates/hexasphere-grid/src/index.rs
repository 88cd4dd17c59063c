//! Id and coordinate indices over a node list.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use hexasphere_topology::AxialCoord;
use tracing::warn;

use crate::config::CollisionPolicy;
use crate::error::{Error, Result};
use crate::node::{Node, NodeId};

/// Positions of nodes in their backing `Vec`, keyed by id and by cell.
#[derive(Debug, Default, Clone)]
pub(crate) struct NodeIndex {
    by_id: HashMap<NodeId, usize>,
    by_coord: HashMap<AxialCoord, usize>,
}

impl NodeIndex {
    /// Index every node of `nodes`.
    pub fn of(nodes: &[Node], policy: CollisionPolicy) -> Result<Self> {
        let mut index = Self::default();
        for (position, node) in nodes.iter().enumerate() {
            index.insert(nodes, position, node, policy)?;
        }
        Ok(index)
    }

    /// Record `node`, stored (or about to be stored) at `position`.
    ///
    /// The first node on a cell keeps it; under [`CollisionPolicy::Shadow`]
    /// later ones are reachable by id only.
    pub fn insert(
        &mut self,
        nodes: &[Node],
        position: usize,
        node: &Node,
        policy: CollisionPolicy,
    ) -> Result<()> {
        if self.by_id.contains_key(node.id()) {
            return Err(Error::DuplicateId(node.id().clone()));
        }

        match self.by_coord.entry(node.coord()) {
            Entry::Vacant(slot) => {
                slot.insert(position);
            }
            Entry::Occupied(slot) => {
                let existing = nodes[*slot.get()].id().clone();
                match policy {
                    CollisionPolicy::Reject => {
                        return Err(Error::CoordinateCollision {
                            coord: node.coord(),
                            existing,
                            incoming: node.id().clone(),
                        });
                    }
                    CollisionPolicy::Shadow => {
                        warn!(
                            coord = %node.coord(),
                            "node {} shadowed by {} on the same cell",
                            node.id(),
                            existing
                        );
                    }
                }
            }
        }

        self.by_id.insert(node.id().clone(), position);
        Ok(())
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn position_at(&self, coord: AxialCoord) -> Option<usize> {
        self.by_coord.get(&coord).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }
}
