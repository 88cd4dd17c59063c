//! Grid node types.

use std::borrow::Borrow;
use std::collections::BTreeMap;

use hexasphere_topology::AxialCoord;

/// Length of a synthesized id, in hex characters.
const DERIVED_ID_LEN: usize = 16;

/// Unique node identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(String);

impl NodeId {
    /// Wrap an explicit identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Stable identifier derived from a traversal path (Blake3, hex prefix).
    pub fn derived(path: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"node:");
        hasher.update(path.as_bytes());
        let hex = hex::encode(hasher.finalize().as_bytes());
        Self(hex[..DERIVED_ID_LEN].to_string())
    }

    /// Borrow as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A metadata value: integer or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum MetadataValue {
    /// Integer value
    Int(i64),
    /// String value
    Str(String),
}

impl MetadataValue {
    /// The integer, if this is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Str(_) => None,
        }
    }

    /// The string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Int(_) => None,
        }
    }
}

impl From<i64> for MetadataValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for MetadataValue {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// Metadata map attached to a node.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// A cell of the sphere grid.
///
/// Identity and position are fixed at construction. The only field that
/// changes afterwards is the unlock flag, and only through
/// [`HexGrid::unlock`](crate::HexGrid::unlock).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node {
    id: NodeId,
    coord: AxialCoord,
    name: String,
    weight: f64,
    linked_ids: Vec<NodeId>,
    unlocked: bool,
    progress: Option<f64>,
    metadata: Option<Metadata>,
}

impl Node {
    /// Create a locked node with unit weight and no links.
    pub fn new(id: impl Into<NodeId>, coord: AxialCoord, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            coord,
            name: name.into(),
            weight: 1.0,
            linked_ids: Vec::new(),
            unlocked: false,
            progress: None,
            metadata: None,
        }
    }

    /// Set the display weight. Negative values clamp to zero.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight.max(0.0);
        self
    }

    /// Set the initial unlock flag.
    #[must_use]
    pub fn with_unlocked(mut self, unlocked: bool) -> Self {
        self.unlocked = unlocked;
        self
    }

    /// Set progress, clamped to [0, 1]. Non-finite values count as no
    /// progress.
    #[must_use]
    pub fn with_progress(mut self, progress: Option<f64>) -> Self {
        self.progress = progress.filter(|p| p.is_finite()).map(|p| p.clamp(0.0, 1.0));
        self
    }

    /// Attach metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Option<Metadata>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Append a child link.
    #[must_use]
    pub fn with_link(mut self, child: impl Into<NodeId>) -> Self {
        self.linked_ids.push(child.into());
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn coord(&self) -> AxialCoord {
        self.coord
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Children recorded at build time, in construction order.
    pub fn linked_ids(&self) -> &[NodeId] {
        &self.linked_ids
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn progress(&self) -> Option<f64> {
        self.progress
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Integer metadata under `key`; `None` if absent or a string.
    pub fn metadata_int(&self, key: &str) -> Option<i64> {
        self.metadata.as_ref()?.get(key)?.as_int()
    }

    /// String metadata under `key`; `None` if absent or an integer.
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.as_ref()?.get(key)?.as_str()
    }

    pub(crate) fn push_link(&mut self, child: NodeId) {
        self.linked_ids.push(child);
    }

    pub(crate) fn mark_unlocked(&mut self) {
        self.unlocked = true;
    }
}
