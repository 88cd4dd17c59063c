//! Per-node overlay payloads.

use std::collections::HashMap;

use crate::node::NodeId;

/// Display payloads keyed by node id.
///
/// Every [`OverlayRegistry::set_all`] replaces the whole registry; ids
/// missing from the new batch are gone afterwards.
#[derive(Debug, Clone)]
pub struct OverlayRegistry<P> {
    entries: HashMap<NodeId, P>,
}

impl<P> Default for OverlayRegistry<P> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<P> OverlayRegistry<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all entries. Within one batch the last payload for an id wins.
    pub fn set_all<I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<NodeId>,
    {
        self.entries = entries.into_iter().map(|(id, p)| (id.into(), p)).collect();
    }

    pub fn get(&self, id: &str) -> Option<&P> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &P)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
