//! Property tests over generated trees and unlock sequences.

use hexasphere_topology::are_neighbors;
use proptest::prelude::*;

use crate::{
    Adjacency, Children, CollisionPolicy, GraphBuilder, GridConfig, HexGrid, HexagonState, NodeData,
    NodeId, Orientation, Unlock,
};

fn orientation() -> impl Strategy<Value = Orientation> {
    (0usize..6).prop_map(|i| Orientation::ALL[i])
}

/// Random trees mixing both child shapes; about one listed child in ten
/// lacks an orientation.
fn tree() -> impl Strategy<Value = NodeData> {
    let leaf = ("[a-z]{1,6}", prop::option::weighted(0.9, orientation())).prop_map(|(name, orientation)| {
        NodeData {
            name,
            orientation,
            ..Default::default()
        }
    });
    leaf.prop_recursive(4, 48, 4, |inner| {
        let children = prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Children::Oriented),
            prop::array::uniform6(prop::option::weighted(0.4, inner))
                .prop_map(|slots| Children::Slotted(Box::new(slots))),
        ];
        ("[a-z]{1,6}", prop::option::weighted(0.9, orientation()), children).prop_map(
            |(name, orientation, children)| NodeData {
                name,
                orientation,
                children,
                ..Default::default()
            },
        )
    })
}

/// Generated trees often fold back onto themselves, so collisions are
/// shadowed rather than rejected.
fn config() -> impl Strategy<Value = GridConfig> {
    prop_oneof![Just(Adjacency::Geometric), Just(Adjacency::Links)].prop_map(|adjacency| GridConfig {
        adjacency,
        collisions: CollisionPolicy::Shadow,
        unlock_root: true,
    })
}

proptest! {
    #[test]
    fn build_is_deterministic(root in tree(), config in config()) {
        let builder = GraphBuilder::new(config);
        let first = builder.build(&root).unwrap();
        let second = builder.build(&root).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn links_resolve_and_point_one_step_away(root in tree(), config in config()) {
        let grid = HexGrid::from_tree(&root, config).unwrap();
        for node in grid.nodes() {
            for child in node.linked_ids() {
                let child = grid.node(child.as_str()).unwrap();
                prop_assert!(are_neighbors(node.coord(), child.coord()));
            }
        }
    }

    #[test]
    fn unlock_sequences_respect_the_state_machine(
        root in tree(),
        config in config(),
        attempts in prop::collection::vec(any::<prop::sample::Index>(), 0..64),
    ) {
        let mut grid = HexGrid::from_tree(&root, config).unwrap();
        let ids: Vec<NodeId> = grid.nodes().iter().map(|n| n.id().clone()).collect();
        let mut order: Vec<NodeId> = grid.unlocked().map(|n| n.id().clone()).collect();
        prop_assert_eq!(order.len(), 1);

        for pick in attempts {
            let id = pick.get(&ids).as_str();
            let was = grid.state_of(id);
            let before = grid.snapshot();
            let outcome = grid.unlock(id);

            // Only unlockable nodes change, and nothing else does
            if was == HexagonState::Unlockable {
                prop_assert_eq!(outcome, Unlock::Unlocked);
                prop_assert_eq!(grid.state_of(id), HexagonState::Unlocked);

                // Connected to something unlocked earlier
                let reached = order.iter().any(|earlier| {
                    let earlier = grid.node(earlier.as_str()).unwrap();
                    grid.adjacent(earlier).iter().any(|adj| adj.as_str() == id)
                });
                prop_assert!(reached, "{} unlocked without an unlocked neighbor", id);
                order.push(NodeId::from(id));

                // Idempotent
                let once = grid.snapshot();
                prop_assert!(!grid.unlock(id).is_success());
                prop_assert_eq!(grid.snapshot(), once);
            } else {
                prop_assert!(!outcome.is_success());
                prop_assert_eq!(grid.snapshot(), before.clone());
            }

            // Monotonic
            for node in &before.nodes {
                if node.is_unlocked() {
                    prop_assert!(grid.node(node.id().as_str()).unwrap().is_unlocked());
                }
            }
        }
    }

    #[test]
    fn unlockable_means_adjacent_to_unlocked(root in tree(), config in config()) {
        let grid = HexGrid::from_tree(&root, config).unwrap();
        for node in grid.nodes() {
            let expected = if node.is_unlocked() {
                HexagonState::Unlocked
            } else if grid
                .unlocked()
                .any(|u| grid.adjacent(u).contains(&node.id()))
            {
                HexagonState::Unlockable
            } else {
                HexagonState::Locked
            };
            prop_assert_eq!(grid.state_of(node.id().as_str()), expected);
        }
    }
}
