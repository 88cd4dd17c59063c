//! Input tree → flat node list.
//!
//! The root lands on the origin. Each child is placed one step from its
//! parent in the direction named by its orientation (or slot), and the
//! parent records the child's id in its links. Traversal is depth-first,
//! parent before children, children in listed order, so identical input
//! always yields the identical list.

use hexasphere_topology::AxialCoord;
use tracing::{debug, info};

use crate::config::GridConfig;
use crate::data::NodeData;
use crate::error::{Error, Result};
use crate::index::NodeIndex;
use crate::node::{Node, NodeId};

/// Path segment of the root when synthesizing ids.
const ROOT_PATH: &str = "0";

/// Result of a build.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    /// Nodes in traversal order; the root is first.
    pub nodes: Vec<Node>,
    /// First node marked as current, if any.
    pub current: Option<NodeId>,
}

impl Graph {
    /// The root node.
    pub fn root(&self) -> Option<&Node> {
        self.nodes.first()
    }
}

/// Converts an input tree into positioned, linked nodes.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: GridConfig,
}

/// A child waiting to be placed.
struct Pending<'a> {
    data: &'a NodeData,
    coord: AxialCoord,
    path: String,
    parent: Option<usize>,
}

struct Walk {
    nodes: Vec<Node>,
    index: NodeIndex,
    current: Option<NodeId>,
    dropped: usize,
}

impl GraphBuilder {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Build the node list for `root`.
    ///
    /// Fails if the root lacks a name or carries an empty id, if two nodes
    /// share an id, or if two nodes share a cell under
    /// [`CollisionPolicy::Reject`](crate::CollisionPolicy::Reject). Children
    /// without an orientation are dropped, not reported.
    pub fn build(&self, root: &NodeData) -> Result<Graph> {
        if root.name.trim().is_empty() {
            return Err(Error::MalformedInput("root node has no name".into()));
        }
        if root.id.as_deref() == Some("") {
            return Err(Error::MalformedInput("root node has an empty id".into()));
        }

        let mut walk = Walk {
            nodes: Vec::new(),
            index: NodeIndex::default(),
            current: None,
            dropped: 0,
        };
        self.walk(root, &mut walk)?;

        if self.config.unlock_root {
            walk.nodes[0].mark_unlocked();
        }

        info!(
            nodes = walk.nodes.len(),
            dropped = walk.dropped,
            "built grid rooted at {}",
            walk.nodes[0].id()
        );

        Ok(Graph {
            nodes: walk.nodes,
            current: walk.current,
        })
    }

    /// Depth-first placement on an explicit stack, so tree depth is bounded
    /// by memory rather than the call stack. Children are pushed in reverse
    /// so they pop in listed order; each one links itself into its parent
    /// when placed.
    fn walk(&self, root: &NodeData, walk: &mut Walk) -> Result<()> {
        let mut pending = vec![Pending {
            data: root,
            coord: AxialCoord::ORIGIN,
            path: ROOT_PATH.to_string(),
            parent: None,
        }];

        while let Some(Pending { data, coord, path, parent }) = pending.pop() {
            let id = match data.id.as_deref() {
                Some(explicit) if !explicit.is_empty() => NodeId::new(explicit),
                _ => NodeId::derived(&path),
            };

            let node = Node::new(id.clone(), coord, data.name.clone())
                .with_unlocked(data.unlocked.unwrap_or(false))
                .with_progress(data.progress)
                .with_metadata(data.metadata.clone());

            let position = walk.nodes.len();
            walk.nodes.push(node);
            walk.index
                .insert(&walk.nodes, position, &walk.nodes[position], self.config.collisions)?;

            if let Some(parent) = parent {
                walk.nodes[parent].push_link(id.clone());
            }
            if data.is_current_node == Some(true) && walk.current.is_none() {
                walk.current = Some(id.clone());
            }

            let first = pending.len();
            for (i, (side, child)) in data.children.iter().enumerate() {
                let Some(side) = side else {
                    debug!(parent = %id, "dropping child {:?} without orientation", child.name);
                    walk.dropped += 1;
                    continue;
                };
                pending.push(Pending {
                    data: child,
                    coord: coord + side.offset(),
                    path: format!("{path}/{i}"),
                    parent: Some(position),
                });
            }
            pending[first..].reverse();
        }

        Ok(())
    }
}

/// Build with the default configuration.
pub fn build(root: &NodeData) -> Result<Graph> {
    GraphBuilder::default().build(root)
}

#[cfg(test)]
mod tests {
    use hexasphere_topology::Orientation;

    use super::*;
    use crate::config::CollisionPolicy;

    fn coords(graph: &Graph) -> Vec<(String, AxialCoord)> {
        graph
            .nodes
            .iter()
            .map(|n| (n.name().to_string(), n.coord()))
            .collect()
    }

    #[test]
    fn single_child_to_the_right() {
        let tree = NodeData::new("A")
            .with_id("A")
            .child(NodeData::new("B").with_id("B").oriented(Orientation::Right));

        let graph = build(&tree).unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[0].coord(), AxialCoord::ORIGIN);
        assert_eq!(graph.nodes[1].coord(), AxialCoord::new(1, -1));
        assert_eq!(graph.nodes[0].linked_ids(), &[NodeId::from("B")]);
        assert!(graph.nodes[1].linked_ids().is_empty());
    }

    #[test]
    fn root_unlocked_by_default() {
        let graph = build(&NodeData::new("A")).unwrap();
        assert!(graph.nodes[0].is_unlocked());

        let graph = GraphBuilder::new(GridConfig::default().with_input_unlocks())
            .build(&NodeData::new("A"))
            .unwrap();
        assert!(!graph.nodes[0].is_unlocked());
    }

    #[test]
    fn input_unlock_flags_are_kept() {
        let tree = NodeData::new("A")
            .child(NodeData::new("B").oriented(Orientation::Left).unlocked(true))
            .child(NodeData::new("C").oriented(Orientation::Right));

        let graph = build(&tree).unwrap();
        let flags: Vec<_> = graph.nodes.iter().map(Node::is_unlocked).collect();
        assert_eq!(flags, vec![true, true, false]);
    }

    #[test]
    fn child_without_orientation_is_dropped() {
        let tree = NodeData::new("A")
            .child(NodeData::new("B").oriented(Orientation::BottomLeft))
            .child(NodeData::new("lost").child(NodeData::new("lost child").oriented(Orientation::Left)));

        let graph = build(&tree).unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[0].linked_ids().len(), 1);
        assert_eq!(graph.nodes[1].name(), "B");
    }

    #[test]
    fn depth_first_order_and_offsets() {
        let tree = NodeData::new("root")
            .child(
                NodeData::new("r")
                    .oriented(Orientation::Right)
                    .child(NodeData::new("rr").oriented(Orientation::Right)),
            )
            .child(NodeData::new("tl").oriented(Orientation::TopLeft));

        let graph = build(&tree).unwrap();
        assert_eq!(
            coords(&graph),
            vec![
                ("root".to_string(), AxialCoord::new(0, 0)),
                ("r".to_string(), AxialCoord::new(1, -1)),
                ("rr".to_string(), AxialCoord::new(2, -2)),
                ("tl".to_string(), AxialCoord::new(-1, 0)),
            ]
        );
        assert_eq!(graph.nodes[0].linked_ids().len(), 2);
        assert_eq!(graph.nodes[0].linked_ids()[0], *graph.nodes[1].id());
        assert_eq!(graph.nodes[0].linked_ids()[1], *graph.nodes[3].id());
        assert_eq!(graph.nodes[1].linked_ids(), &[graph.nodes[2].id().clone()]);
    }

    #[test]
    fn slotted_input_uses_slot_offsets() {
        let tree = NodeData::new("root")
            .slot(Orientation::Left, NodeData::new("w"))
            .slot(Orientation::TopRight, NodeData::new("ne"));

        let graph = build(&tree).unwrap();
        // Slot order, not insertion order
        assert_eq!(
            coords(&graph),
            vec![
                ("root".to_string(), AxialCoord::new(0, 0)),
                ("ne".to_string(), AxialCoord::new(0, -1)),
                ("w".to_string(), AxialCoord::new(-1, 1)),
            ]
        );
    }

    #[test]
    fn synthesized_ids_are_deterministic() {
        let tree = NodeData::new("root")
            .child(NodeData::new("a").oriented(Orientation::Right))
            .child(NodeData::new("b").oriented(Orientation::Left));

        let first = build(&tree).unwrap();
        let second = build(&tree).unwrap();
        assert_eq!(first, second);

        let ids: std::collections::HashSet<_> = first.nodes.iter().map(|n| n.id().clone()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn unnamed_root_is_malformed() {
        let err = build(&NodeData::new("   ")).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));

        let err = build(&NodeData::new("A").with_id("")).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn empty_child_id_is_synthesized() {
        let tree = NodeData::new("A").child(NodeData::new("B").with_id("").oriented(Orientation::Right));
        let graph = build(&tree).unwrap();
        assert!(!graph.nodes[1].id().as_str().is_empty());
    }

    #[test]
    fn duplicate_ids_fail() {
        let tree = NodeData::new("A")
            .with_id("same")
            .child(NodeData::new("B").with_id("same").oriented(Orientation::Right));
        assert!(matches!(build(&tree), Err(Error::DuplicateId(id)) if id == "same"));
    }

    /// Right then left returns to the origin.
    fn colliding_tree() -> NodeData {
        NodeData::new("A").with_id("A").child(
            NodeData::new("B")
                .with_id("B")
                .oriented(Orientation::Right)
                .child(NodeData::new("C").with_id("C").oriented(Orientation::Left)),
        )
    }

    #[test]
    fn coordinate_collision_rejected_by_default() {
        match build(&colliding_tree()) {
            Err(Error::CoordinateCollision { coord, existing, incoming }) => {
                assert_eq!(coord, AxialCoord::new(0, 0));
                assert_eq!(existing, "A");
                assert_eq!(incoming, "C");
            }
            other => panic!("expected collision, got {other:?}"),
        }
    }

    #[test]
    fn coordinate_collision_shadowed_when_permitted() {
        let config = GridConfig {
            collisions: CollisionPolicy::Shadow,
            ..Default::default()
        };
        let graph = GraphBuilder::new(config).build(&colliding_tree()).unwrap();
        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.nodes[2].coord(), AxialCoord::ORIGIN);
    }

    #[test]
    fn current_node_is_first_marked_in_traversal() {
        let tree = NodeData::new("A")
            .child(NodeData::new("B").with_id("B").oriented(Orientation::Right).current())
            .child(NodeData::new("C").with_id("C").oriented(Orientation::Left).current());

        let graph = build(&tree).unwrap();
        assert_eq!(graph.current, Some(NodeId::from("B")));
        assert_eq!(graph.root().map(|n| n.name()), Some("A"));
    }

    #[test]
    fn dropped_subtree_cannot_be_current() {
        let tree = NodeData::new("A").child(NodeData::new("lost").current());
        assert_eq!(build(&tree).unwrap().current, None);
    }

    #[test]
    fn deep_chain_builds_without_recursion() {
        const DEPTH: usize = 5_000;
        let mut tree = NodeData::new("leaf").oriented(Orientation::Right);
        for depth in (1..DEPTH).rev() {
            tree = NodeData::new(depth.to_string()).oriented(Orientation::Right).child(tree);
        }
        tree.orientation = None;

        let graph = build(&tree).unwrap();
        assert_eq!(graph.nodes.len(), DEPTH);
        assert_eq!(graph.nodes[DEPTH - 1].coord(), AxialCoord::new(DEPTH as i64 - 1, 1 - DEPTH as i64));
        assert_eq!(graph.nodes[0].linked_ids(), &[graph.nodes[1].id().clone()]);

        // Dropping a deep tree recurses as well; let it go on a roomy thread
        std::thread::Builder::new()
            .stack_size(64 * 1024 * 1024)
            .spawn(move || drop(tree))
            .unwrap()
            .join()
            .unwrap();
    }

    #[test]
    fn metadata_and_progress_carried_over() {
        let tree = NodeData::new("A").with_metadata("level", 4).with_progress(0.25);
        let graph = build(&tree).unwrap();
        assert_eq!(graph.nodes[0].metadata_int("level"), Some(4));
        assert_eq!(graph.nodes[0].progress(), Some(0.25));
        assert_eq!(graph.nodes[0].weight(), 1.0);
    }
}
