//! Hexagonal coordinate system using axial coordinates.
//!
//! Axial coordinates use two axes (q, r) at 60 degrees, with an implicit
//! third axis s = -q - r. Two stored values are enough to keep the full
//! hexagonal symmetry.

use std::ops::{Add, Neg, Sub};

/// A cell position on the hexagonal grid.
///
/// The implicit third axis is s = -q - r.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxialCoord {
    /// First axial coordinate
    pub q: i64,
    /// Second axial coordinate
    pub r: i64,
}

impl AxialCoord {
    /// Grid center.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// The six unit neighbor offsets, in canonical order.
    pub const DIRECTIONS: [Self; 6] = [
        Self { q: 1, r: 0 },
        Self { q: 1, r: -1 },
        Self { q: 0, r: -1 },
        Self { q: -1, r: 0 },
        Self { q: -1, r: 1 },
        Self { q: 0, r: 1 },
    ];

    /// Create a new coordinate.
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    /// Compute the implicit third axis: s = -q - r.
    pub const fn s(&self) -> i64 {
        -self.q - self.r
    }

    /// Hexagonal distance between two coordinates.
    ///
    /// max(|dq|, |dr|, |ds|) where ds = -dq - dr. Saturates at `u64::MAX`.
    pub fn distance(&self, other: &Self) -> u64 {
        let dq = i128::from(self.q) - i128::from(other.q);
        let dr = i128::from(self.r) - i128::from(other.r);
        let steps = dq.unsigned_abs().max(dr.unsigned_abs()).max((dq + dr).unsigned_abs());
        u64::try_from(steps).unwrap_or(u64::MAX)
    }

    /// Ring number around the origin (0 = origin, 1 = first ring, etc.)
    pub fn ring(&self) -> u64 {
        self.distance(&Self::ORIGIN)
    }

    /// The six adjacent coordinates, in canonical direction order.
    ///
    /// Panics on overflow at the edge of the `i64` range; see
    /// [`AxialCoord::checked_neighbors`].
    pub fn neighbors(&self) -> [Self; 6] {
        Self::DIRECTIONS.map(|d| *self + d)
    }

    /// Like [`AxialCoord::neighbors`], with `None` for any direction that
    /// leaves the representable range.
    pub fn checked_neighbors(&self) -> [Option<Self>; 6] {
        Self::DIRECTIONS.map(|d| self.checked_add(d))
    }

    /// Component-wise addition, `None` on overflow.
    pub const fn checked_add(&self, other: Self) -> Option<Self> {
        match (self.q.checked_add(other.q), self.r.checked_add(other.r)) {
            (Some(q), Some(r)) => Some(Self { q, r }),
            _ => None,
        }
    }

    /// Component-wise subtraction, `None` on overflow.
    pub const fn checked_sub(&self, other: Self) -> Option<Self> {
        match (self.q.checked_sub(other.q), self.r.checked_sub(other.r)) {
            (Some(q), Some(r)) => Some(Self { q, r }),
            _ => None,
        }
    }

    /// True if `self` is one of the six unit offsets.
    pub fn is_unit(&self) -> bool {
        Self::DIRECTIONS.contains(self)
    }
}

impl Add for AxialCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            q: self.q + other.q,
            r: self.r + other.r,
        }
    }
}

impl Sub for AxialCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            q: self.q - other.q,
            r: self.r - other.r,
        }
    }
}

impl Neg for AxialCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            q: -self.q,
            r: -self.r,
        }
    }
}

impl From<(i64, i64)> for AxialCoord {
    fn from((q, r): (i64, i64)) -> Self {
        Self { q, r }
    }
}

impl std::fmt::Display for AxialCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
