//! Input tree consumed by the graph builder.
//!
//! Two child shapes are accepted:
//!
//! - **oriented**: an ordered list of children, each tagged with the side of
//!   the parent it occupies;
//! - **slotted**: six fixed slots, one per side, in [`Orientation::ALL`]
//!   order (`children_1` .. `children_6` in JSON).

use hexasphere_topology::Orientation;

use crate::node::{Metadata, MetadataValue};

/// Children of an input node.
#[derive(Debug, Clone, PartialEq)]
pub enum Children {
    /// Listed children carrying their own orientation tag.
    Oriented(Vec<NodeData>),
    /// One optional child per side, indexed by slot.
    Slotted(Box<[Option<NodeData>; 6]>),
}

impl Default for Children {
    fn default() -> Self {
        Self::Oriented(Vec::new())
    }
}

impl Children {
    /// Iterate `(resolved side, child)` in build order. Oriented children
    /// without a tag yield `None` as their side.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (Option<Orientation>, &NodeData)> + '_> {
        match self {
            Self::Oriented(list) => Box::new(list.iter().map(|c| (c.orientation, c))),
            Self::Slotted(slots) => Box::new(
                slots
                    .iter()
                    .enumerate()
                    .filter_map(|(i, c)| c.as_ref().map(|c| (Orientation::from_slot(i), c))),
            ),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Oriented(list) => list.is_empty(),
            Self::Slotted(slots) => slots.iter().all(Option::is_none),
        }
    }
}

/// One node of the input tree.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "raw::RawNodeData"))]
pub struct NodeData {
    /// Explicit id; synthesized from the traversal path when absent.
    pub id: Option<String>,
    pub name: String,
    /// Side of the parent this node sits on. Ignored on the root.
    pub orientation: Option<Orientation>,
    pub unlocked: Option<bool>,
    pub is_current_node: Option<bool>,
    pub metadata: Option<Metadata>,
    pub progress: Option<f64>,
    pub children: Children,
}

impl NodeData {
    /// A leaf with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn oriented(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    #[must_use]
    pub fn unlocked(mut self, unlocked: bool) -> Self {
        self.unlocked = Some(unlocked);
        self
    }

    /// Mark this node as the user's current position.
    #[must_use]
    pub fn current(mut self) -> Self {
        self.is_current_node = Some(true);
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = Some(progress);
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
        self
    }

    /// Append an oriented child. On a slotted node the child goes into the
    /// slot named by its orientation; an untagged child is then dropped.
    #[must_use]
    pub fn child(mut self, child: NodeData) -> Self {
        match &mut self.children {
            Children::Oriented(list) => list.push(child),
            Children::Slotted(slots) => {
                if let Some(o) = child.orientation {
                    slots[o.slot()] = Some(child);
                }
            }
        }
        self
    }

    /// Place a child in the fixed slot for `side`. A node with no children
    /// yet switches to the slotted shape; one with oriented children keeps
    /// that shape and receives the child tagged with `side`.
    #[must_use]
    pub fn slot(mut self, side: Orientation, child: NodeData) -> Self {
        if self.children.is_empty() && matches!(self.children, Children::Oriented(_)) {
            self.children = Children::Slotted(Box::default());
        }
        match &mut self.children {
            Children::Slotted(slots) => slots[side.slot()] = Some(child),
            Children::Oriented(list) => list.push(child.oriented(side)),
        }
        self
    }

    /// First node in depth-first order marked as current. Children without
    /// an orientation are skipped along with their subtrees, as the builder
    /// drops them.
    pub fn find_current_node(&self) -> Option<&NodeData> {
        let mut pending = vec![self];
        while let Some(data) = pending.pop() {
            if data.is_current_node == Some(true) {
                return Some(data);
            }
            let first = pending.len();
            pending.extend(
                data.children
                    .iter()
                    .filter_map(|(side, child)| side.map(|_| child)),
            );
            pending[first..].reverse();
        }
        None
    }

    /// Decode a tree from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(feature = "serde")]
mod raw {
    use serde::Deserialize;
    use tracing::debug;

    use super::*;

    /// Wire shape accepting both child layouts. Unknown orientation tags
    /// decode to `None` so the builder can drop the child instead of the
    /// whole document failing.
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct RawNodeData {
        id: Option<String>,
        name: String,
        orientation: Option<String>,
        unlocked: Option<bool>,
        is_current_node: Option<bool>,
        metadata: Option<Metadata>,
        progress: Option<f64>,
        children: Option<Vec<RawNodeData>>,
        #[serde(rename = "children_1")]
        children_1: Option<Box<RawNodeData>>,
        #[serde(rename = "children_2")]
        children_2: Option<Box<RawNodeData>>,
        #[serde(rename = "children_3")]
        children_3: Option<Box<RawNodeData>>,
        #[serde(rename = "children_4")]
        children_4: Option<Box<RawNodeData>>,
        #[serde(rename = "children_5")]
        children_5: Option<Box<RawNodeData>>,
        #[serde(rename = "children_6")]
        children_6: Option<Box<RawNodeData>>,
    }

    impl From<RawNodeData> for NodeData {
        fn from(raw: RawNodeData) -> Self {
            let slots = [
                raw.children_1,
                raw.children_2,
                raw.children_3,
                raw.children_4,
                raw.children_5,
                raw.children_6,
            ];

            // Slot keys take precedence over a `children` list.
            let children = if slots.iter().any(Option::is_some) {
                Children::Slotted(Box::new(slots.map(|s| s.map(|c| NodeData::from(*c)))))
            } else {
                Children::Oriented(
                    raw.children
                        .unwrap_or_default()
                        .into_iter()
                        .map(NodeData::from)
                        .collect(),
                )
            };

            let orientation = raw.orientation.and_then(|tag| match tag.parse() {
                Ok(o) => Some(o),
                Err(e) => {
                    debug!(node = %raw.name, "ignoring orientation: {}", e);
                    None
                }
            });

            NodeData {
                id: raw.id,
                name: raw.name,
                orientation,
                unlocked: raw.unlocked,
                is_current_node: raw.is_current_node,
                metadata: raw.metadata,
                progress: raw.progress,
                children,
            }
        }
    }
}
