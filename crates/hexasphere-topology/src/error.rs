//! Error types for hexasphere-topology.

use thiserror::Error;

/// Errors from parsing topology values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// An orientation tag outside the six known sides.
    #[error("unknown orientation tag: {0:?}")]
    UnknownOrientation(String),
}
