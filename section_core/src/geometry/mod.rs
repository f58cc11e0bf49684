//! # Section Geometry
//!
//! Value types for polygonal cross-sections and the pure polygon routines the
//! property engines are built from.
//!
//! ## Coordinate Conventions
//!
//! - Coordinates are real-world lengths (inches) in an arbitrary local frame
//! - Polygons are implicitly closed: the last vertex connects to the first
//! - Winding is tracked by the sign of the signed area (positive = CCW)
//!
//! ```text
//!   y
//!   ▲   ┌──────────┐
//!   │   │  outer   │  outer boundary: counter-clockwise
//!   │   │  ┌────┐  │
//!   │   │  │hole│  │  holes: clockwise
//!   │   │  └────┘  │
//!   │   └──────────┘
//!   └──────────────────► x
//! ```
//!
//! ## Modules
//!
//! - [`polygon`] - Shoelace area, centroid, second moments, winding
//! - [`clip`] - Sutherland-Hodgman clipping against an axis-aligned line
//! - [`cross_section`] - Outer boundary plus holes

pub mod clip;
pub mod cross_section;
pub mod polygon;

use serde::{Deserialize, Serialize};

pub use clip::{clip_polygon, ClipSide, CutAxis};
pub use cross_section::{Bounds, CrossSection};
pub use polygon::{Polygon, Winding};

/// Threshold below which areas, edge spans and fiber distances are treated as zero.
pub const GEOMETRY_EPSILON: f64 = 1e-12;

/// A point in the section plane.
///
/// ## JSON Example
///
/// ```json
/// { "x": 10.0, "y": 8.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate (in)
    pub x: f64,
    /// Vertical coordinate (in)
    pub y: f64,
}

impl Point {
    /// Create a new point
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// The origin of the local frame
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Coordinate along the given cut direction.
    ///
    /// A horizontal cut line `y = c` splits by `y`; a vertical line `x = c` splits by `x`.
    #[inline]
    pub fn coordinate(&self, axis: CutAxis) -> f64 {
        match axis {
            CutAxis::Horizontal => self.y,
            CutAxis::Vertical => self.x,
        }
    }

    /// Whether both coordinates are finite numbers
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}
