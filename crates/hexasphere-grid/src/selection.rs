//! Selected and highlighted nodes.

use crate::node::NodeId;

/// The selected node (the user's position marker) and the highlighted node
/// (the one with an open popover). Each is independent and holds at most
/// one id. Ids are not checked against the grid; an unknown id simply
/// never matches a rendered node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<NodeId>,
    highlighted: Option<NodeId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, id: impl Into<NodeId>) {
        self.selected = Some(id.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn highlight(&mut self, id: impl Into<NodeId>) {
        self.highlighted = Some(id.into());
    }

    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    /// Tap behavior: tapping the highlighted node closes it, tapping any
    /// other node moves the highlight there. Returns the new highlight.
    pub fn toggle_highlight(&mut self, id: impl Into<NodeId>) -> Option<&NodeId> {
        let id = id.into();
        if self.highlighted.as_ref() == Some(&id) {
            self.highlighted = None;
        } else {
            self.highlighted = Some(id);
        }
        self.highlighted.as_ref()
    }

    /// Background tap: drop both.
    pub fn clear_all(&mut self) {
        self.selected = None;
        self.highlighted = None;
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    pub fn highlighted(&self) -> Option<&NodeId> {
        self.highlighted.as_ref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_ref().is_some_and(|s| s == id)
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlighted.as_ref().is_some_and(|h| h == id)
    }
}
