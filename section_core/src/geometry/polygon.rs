//! # Polygon Algebra
//!
//! Closed-form properties of a single polygon given as an ordered vertex
//! sequence. All integrals come from Green's theorem applied edge by edge with
//! the cross term `c_i = x_i·y_{i+1} − x_{i+1}·y_i` (indices mod n).
//!
//! ## Formulas
//!
//! ```text
//! A   = ½ Σ c_i
//! Cx  = Σ (x_i + x_{i+1})·c_i / 6A
//! Cy  = Σ (y_i + y_{i+1})·c_i / 6A
//! Ix  = Σ (y_i² + y_i·y_{i+1} + y_{i+1}²)·c_i / 12            (∫y² dA)
//! Iy  = Σ (x_i² + x_i·x_{i+1} + x_{i+1}²)·c_i / 12            (∫x² dA)
//! Ixy = Σ (x_i·y_{i+1} + 2x_i·y_i + 2x_{i+1}·y_{i+1} + x_{i+1}·y_i)·c_i / 24
//! ```
//!
//! Second moments are taken about the origin of the frame the vertices are
//! expressed in, not about the centroid. The raw sums change sign with the
//! winding; each moment is multiplied by the sign of the signed area so a
//! clockwise hole reports the same magnitude as the same hole wound
//! counter-clockwise.
//!
//! Fewer than three vertices is degenerate: every quantity is zero.
//!
//! ## Reference
//! - Roark's Formulas for Stress and Strain, Appendix A (polygon properties)

use serde::{Deserialize, Serialize};

use super::{Point, GEOMETRY_EPSILON};

/// Vertex ordering of a polygon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winding {
    /// Counter-clockwise (positive signed area)
    CounterClockwise,
    /// Clockwise (negative signed area)
    Clockwise,
}

impl Winding {
    /// Winding implied by a signed area. Zero area counts as counter-clockwise.
    pub fn from_signed_area(signed_area: f64) -> Self {
        if signed_area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}

/// Iterate over the closing edges `(v_i, v_{i+1})` of a vertex ring.
fn edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

#[inline]
fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - b.x * a.y
}

/// Flip a winding-dependent raw sum so it reads as if the ring were CCW.
#[inline]
fn orient(raw: f64, signed_area: f64) -> f64 {
    if signed_area < 0.0 {
        -raw
    } else {
        raw
    }
}

/// Signed area by the shoelace formula.
///
/// Positive for counter-clockwise winding, negative for clockwise.
///
/// # Example
/// ```rust
/// use section_core::geometry::Point;
/// use section_core::geometry::polygon::signed_area;
///
/// let ccw = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(4.0, 3.0), Point::new(0.0, 3.0)];
/// assert_eq!(signed_area(&ccw), 12.0);
/// ```
pub fn signed_area(vertices: &[Point]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    edges(vertices).map(|(a, b)| cross(a, b)).sum::<f64>() / 2.0
}

/// Unsigned area
#[inline]
pub fn area(vertices: &[Point]) -> f64 {
    signed_area(vertices).abs()
}

/// Area centroid of the polygon.
///
/// Returns the origin when the polygon has (near) zero area.
pub fn centroid(vertices: &[Point]) -> Point {
    let a = signed_area(vertices);
    if a.abs() < GEOMETRY_EPSILON {
        return Point::ORIGIN;
    }

    let (mut sx, mut sy) = (0.0, 0.0);
    for (p, q) in edges(vertices) {
        let c = cross(p, q);
        sx += (p.x + q.x) * c;
        sy += (p.y + q.y) * c;
    }

    Point::new(sx / (6.0 * a), sy / (6.0 * a))
}

/// Second moment of area about the frame's x-axis, ∫y² dA
pub fn second_moment_x(vertices: &[Point]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let raw: f64 = edges(vertices)
        .map(|(p, q)| (p.y * p.y + p.y * q.y + q.y * q.y) * cross(p, q))
        .sum::<f64>()
        / 12.0;
    orient(raw, signed_area(vertices))
}

/// Second moment of area about the frame's y-axis, ∫x² dA
pub fn second_moment_y(vertices: &[Point]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let raw: f64 = edges(vertices)
        .map(|(p, q)| (p.x * p.x + p.x * q.x + q.x * q.x) * cross(p, q))
        .sum::<f64>()
        / 12.0;
    orient(raw, signed_area(vertices))
}

/// Product of inertia about the frame's axes, ∫xy dA
///
/// Unlike the second moments this can legitimately be negative; its sign
/// depends on which quadrants the area sits in.
pub fn product_of_inertia(vertices: &[Point]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let raw: f64 = edges(vertices)
        .map(|(p, q)| {
            (p.x * q.y + 2.0 * p.x * p.y + 2.0 * q.x * q.y + q.x * p.y) * cross(p, q)
        })
        .sum::<f64>()
        / 24.0;
    orient(raw, signed_area(vertices))
}

/// Winding of a vertex ring
#[inline]
pub fn winding(vertices: &[Point]) -> Winding {
    Winding::from_signed_area(signed_area(vertices))
}

/// Return the ring in the requested winding, reversing it if needed.
pub fn ensure_winding(vertices: &[Point], target: Winding) -> Vec<Point> {
    let mut out = vertices.to_vec();
    if vertices.len() >= 3 && winding(vertices) != target {
        out.reverse();
    }
    out
}

/// An implicitly closed polygon.
///
/// Serializes as a bare array of points.
///
/// ## JSON Example
///
/// ```json
/// [{ "x": 0.0, "y": 0.0 }, { "x": 10.0, "y": 0.0 }, { "x": 10.0, "y": 8.0 }]
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from its ordered vertices
    pub fn new(vertices: Vec<Point>) -> Self {
        Polygon { vertices }
    }

    /// Build a polygon from `(x, y)` pairs
    ///
    /// # Example
    /// ```rust
    /// use section_core::geometry::Polygon;
    ///
    /// let square = Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
    /// assert_eq!(square.area(), 4.0);
    /// ```
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Polygon {
            vertices: coords.iter().copied().map(Point::from).collect(),
        }
    }

    /// The ordered vertices
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    pub fn area(&self) -> f64 {
        area(&self.vertices)
    }

    pub fn centroid(&self) -> Point {
        centroid(&self.vertices)
    }

    pub fn second_moment_x(&self) -> f64 {
        second_moment_x(&self.vertices)
    }

    pub fn second_moment_y(&self) -> f64 {
        second_moment_y(&self.vertices)
    }

    pub fn product_of_inertia(&self) -> f64 {
        product_of_inertia(&self.vertices)
    }

    pub fn winding(&self) -> Winding {
        winding(&self.vertices)
    }

    /// Copy of this polygon in the requested winding
    pub fn with_winding(&self, target: Winding) -> Polygon {
        Polygon::new(ensure_winding(&self.vertices, target))
    }

    /// Copy of this polygon moved by `(dx, dy)`
    pub fn translated(&self, dx: f64, dy: f64) -> Polygon {
        self.vertices
            .iter()
            .map(|p| Point::new(p.x + dx, p.y + dy))
            .collect()
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Polygon { vertices }
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Polygon {
            vertices: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
