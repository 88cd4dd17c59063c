//! Grid configuration.

/// Which adjacency the unlock engine propagates along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Adjacency {
    /// Six-direction coordinate lookup. Symmetric: unlocking spreads to
    /// every occupied neighboring cell, including siblings and parents.
    #[default]
    Geometric,
    /// Builder-recorded parent → child links only. Unlocking spreads
    /// strictly down the input tree.
    Links,
}

/// What the builder does when two nodes land on the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CollisionPolicy {
    /// Fail the build with [`Error::CoordinateCollision`](crate::Error::CoordinateCollision).
    #[default]
    Reject,
    /// Keep both nodes; the first occupant owns the cell for coordinate
    /// lookups and later ones are only reachable by id.
    Shadow,
}

/// Configuration for building and querying a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Adjacency model used by neighbor queries feeding the unlock engine.
    pub adjacency: Adjacency,

    /// Handling of coordinate collisions at build time.
    pub collisions: CollisionPolicy,

    /// Mark the root unlocked at build time to seed the unlock front.
    pub unlock_root: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            adjacency: Adjacency::Geometric,
            collisions: CollisionPolicy::Reject,
            unlock_root: true,
        }
    }
}

impl GridConfig {
    /// Propagate unlocks along builder links instead of geometry.
    #[must_use]
    pub fn links() -> Self {
        Self {
            adjacency: Adjacency::Links,
            ..Default::default()
        }
    }

    /// Tolerate coordinate collisions from hand-written trees.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            collisions: CollisionPolicy::Shadow,
            ..Default::default()
        }
    }

    /// Leave the root's unlock flag exactly as the input states it.
    #[must_use]
    pub fn with_input_unlocks(mut self) -> Self {
        self.unlock_root = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GridConfig::default();
        assert_eq!(config.adjacency, Adjacency::Geometric);
        assert_eq!(config.collisions, CollisionPolicy::Reject);
        assert!(config.unlock_root);
    }

    #[test]
    fn named_constructors_change_one_field() {
        assert_eq!(GridConfig::links().collisions, CollisionPolicy::Reject);
        assert_eq!(GridConfig::links().adjacency, Adjacency::Links);
        assert_eq!(GridConfig::permissive().collisions, CollisionPolicy::Shadow);
        assert!(!GridConfig::default().with_input_unlocks().unlock_root);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_config_fills_defaults() {
        let config: GridConfig = serde_json::from_str(r#"{"adjacency":"links"}"#).unwrap();
        assert_eq!(config, GridConfig::links());
    }
}
