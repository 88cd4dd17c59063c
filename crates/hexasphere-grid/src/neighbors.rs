//! Neighbor resolution.
//!
//! Geometric neighbors come from looking up the six surrounding cells.
//! Builder links are the other adjacency the grid knows about; which one
//! feeds the unlock engine is chosen by [`GridConfig::adjacency`].
//!
//! [`GridConfig::adjacency`]: crate::GridConfig::adjacency

use hexasphere_topology::present_neighbors;

use crate::config::Adjacency;
use crate::grid::HexGrid;
use crate::node::{Node, NodeId};

impl HexGrid {
    /// Ids of nodes on the cells around `node`, in canonical direction
    /// order. Empty cells are skipped.
    pub fn neighbors_of(&self, node: &Node) -> Vec<NodeId> {
        self.geometric_neighbors(node).into_iter().cloned().collect()
    }

    /// [`HexGrid::neighbors_of`] by id; unknown ids have no neighbors.
    pub fn neighbors_of_id(&self, id: &str) -> Vec<NodeId> {
        self.node(id)
            .map(|node| self.neighbors_of(node))
            .unwrap_or_default()
    }

    /// Nodes reachable in one step under the configured adjacency.
    pub(crate) fn adjacent<'a>(&'a self, node: &'a Node) -> Vec<&'a NodeId> {
        match self.config().adjacency {
            Adjacency::Geometric => self.geometric_neighbors(node),
            Adjacency::Links => node.linked_ids().iter().collect(),
        }
    }

    fn geometric_neighbors(&self, node: &Node) -> Vec<&NodeId> {
        present_neighbors(node.coord(), |cell| self.node_at(cell).map(Node::id))
    }
}
