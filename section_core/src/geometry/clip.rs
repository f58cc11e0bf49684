//! Half-plane clipping of a polygon against an axis-aligned cut line.
//!
//! Single-plane Sutherland-Hodgman: each edge is walked once, vertices on the
//! retained side are kept and an interpolated point is inserted wherever an
//! edge crosses the line. The result can be empty, which callers treat as zero
//! area.

use serde::{Deserialize, Serialize};

use super::{Point, Polygon, GEOMETRY_EPSILON};

/// Orientation of the cut line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutAxis {
    /// The line `y = c`; splits the section by height (x-axis bending)
    Horizontal,
    /// The line `x = c`; splits the section by width (y-axis bending)
    Vertical,
}

/// Which side of the cut line to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClipSide {
    /// Coordinate ≤ c (below a horizontal line, left of a vertical one)
    Below,
    /// Coordinate ≥ c (above a horizontal line, right of a vertical one)
    Above,
}

impl ClipSide {
    #[inline]
    fn retains(&self, coordinate: f64, cut: f64) -> bool {
        match self {
            ClipSide::Below => coordinate <= cut,
            ClipSide::Above => coordinate >= cut,
        }
    }
}

/// Point where edge `p → q` meets the cut line.
///
/// An edge running parallel to the line (span under the epsilon) yields `p`.
fn intersect(p: Point, q: Point, cut: f64, axis: CutAxis) -> Point {
    let (cp, cq) = (p.coordinate(axis), q.coordinate(axis));
    let span = cq - cp;
    if span.abs() < GEOMETRY_EPSILON {
        return p;
    }
    let t = (cut - cp) / span;
    match axis {
        CutAxis::Horizontal => Point::new(p.x + t * (q.x - p.x), cut),
        CutAxis::Vertical => Point::new(cut, p.y + t * (q.y - p.y)),
    }
}

/// Clip a polygon to one side of an axis-aligned line.
///
/// # Arguments
/// * `vertices` - Ordered vertices of a simple polygon (any winding)
/// * `cut` - Position of the line (`y = cut` or `x = cut`)
/// * `axis` - Orientation of the line
/// * `side` - Which side to keep
///
/// # Returns
/// The retained sub-polygon, in the input's winding. Empty when fewer than
/// three vertices are given or nothing lies on the retained side.
///
/// # Example
/// ```rust
/// use section_core::geometry::{clip_polygon, ClipSide, CutAxis, Polygon};
///
/// let square = Polygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
/// let lower = clip_polygon(square.vertices(), 1.0, CutAxis::Horizontal, ClipSide::Below);
/// assert!((lower.area() - 4.0).abs() < 1e-12);
/// ```
pub fn clip_polygon(vertices: &[Point], cut: f64, axis: CutAxis, side: ClipSide) -> Polygon {
    let n = vertices.len();
    if n < 3 {
        return Polygon::default();
    }

    let mut output = Vec::with_capacity(n + 2);
    for i in 0..n {
        let current = vertices[i];
        let next = vertices[(i + 1) % n];
        let current_in = side.retains(current.coordinate(axis), cut);
        let next_in = side.retains(next.coordinate(axis), cut);

        if current_in {
            output.push(current);
            if !next_in {
                // Leaving the retained side
                output.push(intersect(current, next, cut, axis));
            }
        } else if next_in {
            // Entering the retained side
            output.push(intersect(current, next, cut, axis));
        }
    }

    Polygon::new(output)
}
