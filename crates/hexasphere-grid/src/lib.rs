//! HexaSphere Grid
//!
//! Topology and unlock-state engine for an interactive grid of hexagonal
//! "sphere nodes".
//!
//! # Building
//!
//! A hierarchical [`NodeData`] tree is flattened by [`GraphBuilder`] into
//! positioned nodes: the root sits on the origin and every child one step
//! from its parent, in the direction its orientation (or slot) names.
//!
//! # Unlocking
//!
//! Each node is `Locked`, `Unlockable` or `Unlocked` ([`HexagonState`]).
//! Only the unlocked flag is stored; a node is unlockable while it is
//! adjacent to an unlocked node. Adjacency is geometric by default (the six
//! surrounding cells) and can be switched to builder links with
//! [`GridConfig::links`]. Unlocks never go backwards.
//!
//! # Around the grid
//!
//! [`GridSession`] adds what a renderer needs on top: an
//! [`OverlayRegistry`], a [`Selection`] and a cached [`NodeStyle`].

mod builder;
mod config;
mod data;
mod error;
mod grid;
mod index;
mod neighbors;
mod node;
mod overlay;
mod selection;
mod session;
mod style;
mod unlock;

#[cfg(test)]
mod properties;

pub use builder::{build, Graph, GraphBuilder};
pub use config::{Adjacency, CollisionPolicy, GridConfig};
pub use data::{Children, NodeData};
pub use error::{Error, Result};
pub use grid::{GridSnapshot, HexGrid};
pub use node::{Metadata, MetadataValue, Node, NodeId};
pub use overlay::OverlayRegistry;
pub use selection::Selection;
pub use session::GridSession;
pub use style::{NeutralStyle, NodeStyle, Rgba, StyleCache};
pub use unlock::{HexagonState, Unlock};

pub use hexasphere_topology::{AxialCoord, Orientation};
