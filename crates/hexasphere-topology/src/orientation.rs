//! Named child orientations.
//!
//! Input trees place each child on one side of its parent hexagon. The six
//! sides double as the fixed slot order of the slotted input shape
//! (`children_1` .. `children_6`), clockwise from the top-left side.

use std::str::FromStr;

use crate::{AxialCoord, TopologyError};

/// Side of the parent hexagon a child occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Orientation {
    /// Slot 1
    TopLeft,
    /// Slot 2
    TopRight,
    /// Slot 3
    Right,
    /// Slot 4
    BottomRight,
    /// Slot 5
    BottomLeft,
    /// Slot 6
    Left,
}

impl Orientation {
    /// All orientations in slot order.
    pub const ALL: [Self; 6] = [
        Self::TopLeft,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::BottomLeft,
        Self::Left,
    ];

    /// Axial offset from the parent cell.
    pub const fn offset(self) -> AxialCoord {
        match self {
            Self::TopLeft => AxialCoord::new(-1, 0),
            Self::TopRight => AxialCoord::new(0, -1),
            Self::Right => AxialCoord::new(1, -1),
            Self::BottomRight => AxialCoord::new(1, 0),
            Self::BottomLeft => AxialCoord::new(0, 1),
            Self::Left => AxialCoord::new(-1, 1),
        }
    }

    /// Orientation for a zero-based slot index.
    pub fn from_slot(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based slot index.
    pub fn slot(self) -> usize {
        self as usize
    }

    /// Inverse of [`Orientation::offset`].
    pub fn of(offset: AxialCoord) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.offset() == offset)
    }

    /// The side facing back toward the parent.
    pub fn opposite(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::Right => Self::Left,
            Self::BottomRight => Self::TopLeft,
            Self::BottomLeft => Self::TopRight,
            Self::Left => Self::Right,
        }
    }

    /// Tag used by the input format.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "topLeft",
            Self::TopRight => "topRight",
            Self::Right => "right",
            Self::BottomRight => "bottomRight",
            Self::BottomLeft => "bottomLeft",
            Self::Left => "left",
        }
    }
}

impl FromStr for Orientation {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| TopologyError::UnknownOrientation(s.to_string()))
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
