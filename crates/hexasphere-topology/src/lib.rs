//! HexaSphere Grid Topology
//!
//! Axial hexagonal coordinates and the six-direction adjacency that the
//! sphere grid is built on.
//!
//! # Coordinates
//!
//! Cells are addressed with axial coordinates (q, r); the origin (0, 0) is
//! the grid center. Each cell has exactly six neighbors, one per unit
//! offset, listed in a fixed canonical order:
//!
//! `(+1,0), (+1,-1), (0,-1), (-1,0), (-1,+1), (0,+1)`
//!
//! # Orientations
//!
//! Input trees name the side of the parent a child sits on
//! ([`Orientation`]). Every orientation maps to one of the six unit offsets.

mod error;
mod hex;
pub mod layout;
mod neighbors;
mod orientation;

pub use error::TopologyError;
pub use hex::AxialCoord;
pub use layout::{hex_to_pixel, Bounds, Point};
pub use neighbors::{are_neighbors, count_present_neighbors, present_neighbors};
pub use orientation::Orientation;

/// Number of neighbor directions per cell.
pub const DIRECTION_COUNT: usize = 6;

const _: () = assert!(AxialCoord::DIRECTIONS.len() == DIRECTION_COUNT);
