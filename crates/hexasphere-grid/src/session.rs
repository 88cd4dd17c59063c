//! One interactive grid session.
//!
//! Bundles the grid with the state a renderer mutates around it: overlays,
//! selection and the style cache. Everything here is single-threaded; the
//! session is owned by the view that drives it.

use crate::builder::GraphBuilder;
use crate::config::GridConfig;
use crate::data::NodeData;
use crate::error::Result;
use crate::grid::{GridSnapshot, HexGrid};
use crate::node::{Node, NodeId};
use crate::overlay::OverlayRegistry;
use crate::selection::Selection;
use crate::style::{NeutralStyle, NodeStyle, StyleCache};
use crate::unlock::{HexagonState, Unlock};

/// Grid plus overlays, selection and styling.
pub struct GridSession<P, S: NodeStyle = NeutralStyle> {
    grid: HexGrid,
    overlays: OverlayRegistry<P>,
    selection: Selection,
    styles: StyleCache<S>,
}

impl<P, S: NodeStyle> GridSession<P, S> {
    /// Build the grid from `root`. The tree's current node, if any, starts
    /// out selected.
    pub fn from_tree(root: &NodeData, config: GridConfig, style: S) -> Result<Self> {
        let graph = GraphBuilder::new(config.clone()).build(root)?;
        let current = graph.current;
        let grid = HexGrid::from_nodes(graph.nodes, config)?;

        let mut selection = Selection::new();
        if let Some(id) = current {
            selection.select(id);
        }

        Ok(Self::with_parts(grid, selection, style))
    }

    /// Wrap an already built grid with nothing selected.
    pub fn new(grid: HexGrid, style: S) -> Self {
        Self::with_parts(grid, Selection::new(), style)
    }

    fn with_parts(grid: HexGrid, selection: Selection, style: S) -> Self {
        Self {
            grid,
            overlays: OverlayRegistry::new(),
            selection,
            styles: StyleCache::new(style),
        }
    }

    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    /// Nodes in build order.
    pub fn list_nodes(&self) -> &[Node] {
        self.grid.nodes()
    }

    pub fn snapshot(&self) -> GridSnapshot {
        self.grid.snapshot()
    }

    pub fn state_of(&self, id: &str) -> HexagonState {
        self.grid.state_of(id)
    }

    pub fn unlock(&mut self, id: &str) -> Unlock {
        self.grid.unlock(id)
    }

    pub fn neighbors_of(&self, node: &Node) -> Vec<NodeId> {
        self.grid.neighbors_of(node)
    }

    pub fn color_for(&self, node: &Node) -> S::Color {
        self.styles.color_for(node)
    }

    pub fn image_for(&mut self, node: &Node) -> Option<S::Image> {
        self.styles.image_for(node)
    }

    /// Invalidate cached images when the style inputs change.
    pub fn set_style_version(&mut self, version: u64) {
        self.styles.set_style_version(version);
    }

    /// Replace every overlay.
    pub fn display_overlays<I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<NodeId>,
    {
        self.overlays.set_all(entries);
    }

    pub fn overlay(&self, id: &str) -> Option<&P> {
        self.overlays.get(id)
    }

    pub fn overlays(&self) -> &OverlayRegistry<P> {
        &self.overlays
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// The selected node, if its id is in the grid.
    pub fn selected_node(&self) -> Option<&Node> {
        self.grid.node(self.selection.selected()?.as_str())
    }

    /// The highlighted node, if its id is in the grid.
    pub fn highlighted_node(&self) -> Option<&Node> {
        self.grid.node(self.selection.highlighted()?.as_str())
    }
}
