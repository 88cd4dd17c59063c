//! Unlock state machine.
//!
//! Per node the state only moves forward:
//!
//! ```text
//! Locked -> Unlockable -> Unlocked
//! ```
//!
//! Only `Unlocked` is stored (the node's unlock flag). `Unlockable` is
//! derived on every query: a locked node adjacent to at least one unlocked
//! node, under the adjacency configured on the grid. Nothing is cached;
//! a query costs O(unlocked nodes × 6).

use std::collections::HashSet;

use tracing::{debug, info};

use crate::config::Adjacency;
use crate::grid::HexGrid;
use crate::node::{Node, NodeId};

/// Interaction state of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HexagonState {
    Locked,
    Unlockable,
    Unlocked,
}

/// Outcome of [`HexGrid::unlock`]. Only [`Unlock::Unlocked`] changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unlock {
    /// The node was unlockable and is now unlocked.
    Unlocked,
    /// No-op: the node was already unlocked.
    AlreadyUnlocked,
    /// No-op: no unlocked node is adjacent.
    NotUnlockable,
    /// No-op: no node has this id.
    UnknownNode,
}

impl Unlock {
    pub fn is_success(self) -> bool {
        self == Self::Unlocked
    }
}

impl HexGrid {
    /// Current state of `id`. Unknown ids report [`HexagonState::Locked`].
    pub fn state_of(&self, id: &str) -> HexagonState {
        match self.node(id) {
            None => HexagonState::Locked,
            Some(node) if node.is_unlocked() => HexagonState::Unlocked,
            Some(node) => {
                if self.unlockable_ids().contains(node.id()) {
                    HexagonState::Unlockable
                } else {
                    HexagonState::Locked
                }
            }
        }
    }

    /// Locked nodes adjacent to any unlocked node: the unlock front.
    pub fn unlockable_ids(&self) -> HashSet<&NodeId> {
        let mut front: HashSet<&NodeId> = HashSet::new();
        for node in self.unlocked() {
            front.extend(self.adjacent(node));
        }
        front.retain(|id| !self.node(id.as_str()).is_some_and(Node::is_unlocked));
        front
    }

    /// Unlock `id` if it is currently unlockable; otherwise do nothing.
    pub fn unlock(&mut self, id: &str) -> Unlock {
        let outcome = match self.state_of(id) {
            HexagonState::Unlocked => Unlock::AlreadyUnlocked,
            HexagonState::Locked if !self.contains(id) => Unlock::UnknownNode,
            HexagonState::Locked => Unlock::NotUnlockable,
            HexagonState::Unlockable => {
                self.mark_unlocked(id);
                info!(node = id, version = self.version(), "unlocked");
                return Unlock::Unlocked;
            }
        };
        debug!(node = id, ?outcome, "unlock ignored");
        outcome
    }

    /// Pairs of adjacent unlocked nodes, for drawing unlock paths.
    ///
    /// Under geometric adjacency each touching pair appears once, ordered by
    /// build position. Under link adjacency each parent → child link whose
    /// ends are both unlocked appears once.
    pub fn unlock_paths(&self) -> Vec<(NodeId, NodeId)> {
        let symmetric = self.config().adjacency == Adjacency::Geometric;
        let mut paths = Vec::new();
        for (position, node) in self.nodes().iter().enumerate() {
            if !node.is_unlocked() {
                continue;
            }
            for other in self.adjacent(node) {
                let Some(target) = self.node(other.as_str()) else {
                    continue;
                };
                if !target.is_unlocked() {
                    continue;
                }
                if symmetric && self.position_of(other.as_str()) <= Some(position) {
                    continue;
                }
                paths.push((node.id().clone(), other.clone()));
            }
        }
        paths
    }
}
