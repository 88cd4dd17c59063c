//! Six-direction neighbor queries.
//!
//! Adjacency on the grid is purely geometric: two cells are neighbors when
//! their difference is one of the six unit offsets. The relation is
//! symmetric and translation-invariant.

use crate::{AxialCoord, DIRECTION_COUNT};

/// Check if two coordinates are adjacent.
pub fn are_neighbors(a: AxialCoord, b: AxialCoord) -> bool {
    b.checked_sub(a).is_some_and(|d| d.is_unit())
}

/// Count how many of a cell's six neighbors satisfy `is_present`.
/// Directions past the edge of the coordinate range never count.
pub fn count_present_neighbors<F>(coord: AxialCoord, is_present: F) -> usize
where
    F: Fn(AxialCoord) -> bool,
{
    coord
        .checked_neighbors()
        .into_iter()
        .flatten()
        .filter(|&n| is_present(n))
        .count()
}

/// Resolve each neighbor direction through `lookup`, keeping canonical order
/// and skipping directions with no occupant or outside the coordinate range.
pub fn present_neighbors<T, F>(coord: AxialCoord, mut lookup: F) -> Vec<T>
where
    F: FnMut(AxialCoord) -> Option<T>,
{
    let mut found = Vec::with_capacity(DIRECTION_COUNT);
    for n in coord.checked_neighbors().into_iter().flatten() {
        if let Some(hit) = lookup(n) {
            found.push(hit);
        }
    }
    found
}
