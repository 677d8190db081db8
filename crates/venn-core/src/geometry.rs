//! Geometric primitives for the diagram canvas.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! The canvas uses the same coordinate system as SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Y grows downward, which is why the stage axis is inverted: the earliest
//! stage sits at the bottom of the canvas, at the largest Y.

use serde::{Deserialize, Serialize};

/// A 2D point representing a position in canvas space.
///
/// # Examples
///
/// ```
/// # use venn_core::geometry::{Point, Size};
/// let center = Point::new(450.0, 450.0);
/// let bounds = center.to_bounds(Size::new(300.0, 160.0));
///
/// assert_eq!(bounds.min_x(), 300.0);
/// assert_eq!(bounds.max_point(), Point::new(600.0, 530.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns true if both coordinates are finite numbers
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Bounds of an element of `size` centered on this point.
    pub fn to_bounds(self, size: Size) -> Bounds {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Bounds {
            min_x: self.x - half_width,
            min_y: self.y - half_height,
            max_x: self.x + half_width,
            max_y: self.y + half_height,
        }
    }
}

/// Width and height of the canvas or of an element on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }
}

/// Axis-aligned rectangle given by its minimum and maximum coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Bottom-right corner, where the resize handle sits.
    pub fn max_point(self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(0.0, -3.0).is_finite());
        assert!(!Point::new(f32::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_bounds_from_center() {
        let bounds = Point::new(400.0, 300.0).to_bounds(Size::new(200.0, 160.0));

        assert_approx_eq!(f32, bounds.min_x(), 300.0);
        assert_approx_eq!(f32, bounds.min_y(), 220.0);
        assert_approx_eq!(f32, bounds.max_x(), 500.0);
        assert_approx_eq!(f32, bounds.max_y(), 380.0);
        assert_eq!(bounds.max_point(), Point::new(500.0, 380.0));
        assert_eq!(bounds.to_size(), Size::new(200.0, 160.0));
    }
}
