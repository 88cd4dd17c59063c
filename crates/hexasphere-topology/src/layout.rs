//! Pixel projection for renderers.
//!
//! Pointy-top layout: columns lean by half a cell per row.

use crate::AxialCoord;

/// A point in render space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal position
    pub x: f64,
    /// Vertical position (grows downward)
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Project an axial coordinate to the center of its hexagon.
///
/// `size` is the hexagon radius; `spacing` is added to the center-to-center
/// distance on both axes (negative values pull cells together).
pub fn hex_to_pixel(coord: AxialCoord, size: f64, spacing: f64) -> Point {
    let width = size * 3f64.sqrt() + spacing;
    let height = size * 1.5 + spacing;
    Point {
        x: width * (coord.q as f64 + coord.r as f64 / 2.0),
        y: height * coord.r as f64,
    }
}

/// Axis-aligned bounding box of a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest corner
    pub min: Point,
    /// Largest corner
    pub max: Point,
}

impl Bounds {
    /// Bounding box of `points`, or `None` when there are none.
    pub fn of<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self { min: first, max: first };
        for p in iter {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }
        Some(bounds)
    }

    /// Grow the box by `padding` on every side.
    #[must_use]
    pub fn padded(self, padding: f64) -> Self {
        Self {
            min: Point::new(self.min.x - padding, self.min.y - padding),
            max: Point::new(self.max.x + padding, self.max.y + padding),
        }
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Map `p` into the unit square. A zero-extent axis maps to 0.5.
    pub fn normalize(&self, p: Point) -> Point {
        fn axis(v: f64, lo: f64, extent: f64) -> f64 {
            if extent > 0.0 {
                (v - lo) / extent
            } else {
                0.5
            }
        }
        Point {
            x: axis(p.x, self.min.x, self.width()),
            y: axis(p.y, self.min.y, self.height()),
        }
    }
}
