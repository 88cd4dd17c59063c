//! Grid state management.

use hexasphere_topology::AxialCoord;

use crate::builder::GraphBuilder;
use crate::config::GridConfig;
use crate::data::NodeData;
use crate::error::{Error, Result};
use crate::index::NodeIndex;
use crate::node::Node;

/// The node collection and its indices.
///
/// Built once, then only unlock flags change. Every successful unlock bumps
/// [`HexGrid::version`], so a renderer holding a [`GridSnapshot`] can tell
/// whether it is stale.
#[derive(Debug, Clone)]
pub struct HexGrid {
    nodes: Vec<Node>,
    index: NodeIndex,
    config: GridConfig,
    version: u64,
}

/// Owned, read-only copy of the grid at one version.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSnapshot {
    pub version: u64,
    pub nodes: Vec<Node>,
}

impl HexGrid {
    /// Build a grid from an input tree.
    pub fn from_tree(root: &NodeData, config: GridConfig) -> Result<Self> {
        let graph = GraphBuilder::new(config.clone()).build(root)?;
        Self::from_nodes(graph.nodes, config)
    }

    /// Decode a JSON input tree and build a grid from it.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str, config: GridConfig) -> Result<Self> {
        Self::from_tree(&NodeData::from_json(json)?, config)
    }

    /// Wrap an existing node list. The first node is the root.
    ///
    /// Ids must be unique and every link must resolve; cell collisions are
    /// handled per [`GridConfig::collisions`].
    pub fn from_nodes(nodes: Vec<Node>, config: GridConfig) -> Result<Self> {
        let index = NodeIndex::of(&nodes, config.collisions)?;

        for node in &nodes {
            if let Some(missing) = node.linked_ids().iter().find(|id| !index.contains(id.as_str())) {
                return Err(Error::DanglingLink {
                    from: node.id().clone(),
                    to: missing.clone(),
                });
            }
        }

        Ok(Self {
            nodes,
            index,
            config,
            version: 0,
        })
    }

    /// All nodes in build order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.position(id).map(|i| &self.nodes[i])
    }

    /// The node owning `coord`, if any.
    pub fn node_at(&self, coord: AxialCoord) -> Option<&Node> {
        self.index.position_at(coord).map(|i| &self.nodes[i])
    }

    /// The unlock-traversal origin.
    pub fn root(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of successful unlocks since construction.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Copy the current nodes out for a renderer.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            version: self.version,
            nodes: self.nodes.clone(),
        }
    }

    /// Unlocked nodes in build order.
    pub fn unlocked(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_unlocked())
    }

    pub(crate) fn position_of(&self, id: &str) -> Option<usize> {
        self.index.position(id)
    }

    pub(crate) fn mark_unlocked(&mut self, id: &str) -> bool {
        match self.index.position(id) {
            Some(i) => {
                self.nodes[i].mark_unlocked();
                self.version += 1;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use hexasphere_topology::Orientation;

    use super::*;

    fn two_node_grid() -> HexGrid {
        let tree = NodeData::new("A")
            .with_id("A")
            .child(NodeData::new("B").with_id("B").oriented(Orientation::Right));
        HexGrid::from_tree(&tree, GridConfig::default()).unwrap()
    }

    #[test]
    fn lookup_by_id_and_coordinate() {
        let grid = two_node_grid();
        assert_eq!(grid.len(), 2);
        assert!(!grid.is_empty());
        assert_eq!(grid.node("B").map(Node::coord), Some(AxialCoord::new(1, -1)));
        assert_eq!(grid.node_at(AxialCoord::new(1, -1)).map(|n| n.name()), Some("B"));
        assert!(grid.node("C").is_none());
        assert!(grid.node_at(AxialCoord::new(3, 3)).is_none());
        assert_eq!(grid.root().map(|n| n.id().as_str()), Some("A"));
    }

    #[test]
    fn from_nodes_rejects_dangling_links() {
        let nodes = vec![Node::new("A", AxialCoord::ORIGIN, "a").with_link("ghost")];
        match HexGrid::from_nodes(nodes, GridConfig::default()) {
            Err(Error::DanglingLink { from, to }) => {
                assert_eq!(from, "A");
                assert_eq!(to, "ghost");
            }
            other => panic!("expected dangling link, got {other:?}"),
        }
    }

    #[test]
    fn from_nodes_accepts_valid_links() {
        let nodes = vec![
            Node::new("A", AxialCoord::ORIGIN, "a").with_unlocked(true).with_link("B"),
            Node::new("B", AxialCoord::new(1, 0), "b"),
        ];
        let grid = HexGrid::from_nodes(nodes, GridConfig::default()).unwrap();
        assert_eq!(grid.unlocked().count(), 1);
        assert_eq!(grid.version(), 0);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut grid = two_node_grid();
        let before = grid.snapshot();
        assert!(grid.mark_unlocked("B"));
        let after = grid.snapshot();

        assert_eq!(before.version, 0);
        assert_eq!(after.version, 1);
        assert!(!before.nodes[1].is_unlocked());
        assert!(after.nodes[1].is_unlocked());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn from_json_builds_grid() {
        let grid = HexGrid::from_json(
            r#"{"id":"A","name":"A","children":[{"id":"B","name":"B","orientation":"right"}]}"#,
            GridConfig::default(),
        )
        .unwrap();
        assert_eq!(grid.node("B").map(Node::coord), Some(AxialCoord::new(1, -1)));
    }
}
