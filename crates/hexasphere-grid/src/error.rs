//! Error types for hexasphere-grid.

use hexasphere_topology::AxialCoord;
use thiserror::Error;

use crate::NodeId;

/// Result type for hexasphere-grid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a grid.
///
/// Queries and unlocks never fail; only construction does.
#[derive(Debug, Error)]
pub enum Error {
    /// The root of the input tree is missing required fields.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Two nodes resolved to the same identifier.
    #[error("duplicate node id {0}")]
    DuplicateId(NodeId),

    /// Two nodes resolved to the same grid cell.
    #[error("nodes {existing} and {incoming} both occupy {coord}")]
    CoordinateCollision {
        coord: AxialCoord,
        existing: NodeId,
        incoming: NodeId,
    },

    /// A link points at an id that is not in the collection.
    #[error("node {from} links to unknown node {to}")]
    DanglingLink { from: NodeId, to: NodeId },

    /// The input tree could not be decoded.
    #[cfg(feature = "serde")]
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
