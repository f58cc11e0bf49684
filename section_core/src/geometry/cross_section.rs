//! Cross-section value: one outer boundary plus zero or more holes.

use serde::{Deserialize, Serialize};

use super::{Point, Polygon};
use crate::errors::{CalcError, CalcResult};

/// A polygonal cross-section with optional polygonal holes.
///
/// Holes are expected to lie inside the outer boundary and no ring may
/// self-intersect; neither is checked. Hole order is preserved as given.
///
/// ## JSON Example
///
/// ```json
/// {
///   "outer": [{"x": 0.0, "y": 0.0}, {"x": 6.0, "y": 0.0}, {"x": 6.0, "y": 6.0}, {"x": 0.0, "y": 6.0}],
///   "holes": [[{"x": 1.0, "y": 1.0}, {"x": 1.0, "y": 5.0}, {"x": 5.0, "y": 5.0}, {"x": 5.0, "y": 1.0}]]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CrossSection {
    outer: Polygon,
    #[serde(default)]
    holes: Vec<Polygon>,
}

/// Axis-aligned extent of a cross-section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl CrossSection {
    /// Create a solid section from its outer boundary
    pub fn new(outer: Polygon) -> Self {
        CrossSection {
            outer,
            holes: Vec::new(),
        }
    }

    /// Create a section from an outer boundary and a list of holes
    pub fn with_holes(outer: Polygon, holes: Vec<Polygon>) -> Self {
        CrossSection { outer, holes }
    }

    /// Add a hole
    ///
    /// # Example
    /// ```rust
    /// use section_core::geometry::{CrossSection, Polygon};
    ///
    /// let section = CrossSection::new(Polygon::from_coords(&[(0.0, 0.0), (6.0, 0.0), (6.0, 6.0), (0.0, 6.0)]))
    ///     .with_hole(Polygon::from_coords(&[(1.0, 1.0), (5.0, 1.0), (5.0, 5.0), (1.0, 5.0)]));
    /// assert_eq!(section.holes().len(), 1);
    /// ```
    pub fn with_hole(mut self, hole: Polygon) -> Self {
        self.holes.push(hole);
        self
    }

    pub fn outer(&self) -> &Polygon {
        &self.outer
    }

    /// Holes in insertion order
    pub fn holes(&self) -> &[Polygon] {
        &self.holes
    }

    /// Every vertex of the outer boundary followed by every hole vertex
    pub fn all_vertices(&self) -> impl Iterator<Item = &Point> + '_ {
        self.outer
            .vertices()
            .iter()
            .chain(self.holes.iter().flat_map(|h| h.vertices().iter()))
    }

    /// Total vertex count over all rings
    pub fn vertex_count(&self) -> usize {
        self.outer.len() + self.holes.iter().map(Polygon::len).sum::<usize>()
    }

    /// Extent over all vertices, or `None` for a section with no vertices
    pub fn bounds(&self) -> Option<Bounds> {
        let mut vertices = self.all_vertices();
        let first = vertices.next()?;
        let init = Bounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(vertices.fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Copy of this section moved by `(dx, dy)`
    pub fn translated(&self, dx: f64, dy: f64) -> CrossSection {
        CrossSection {
            outer: self.outer.translated(dx, dy),
            holes: self.holes.iter().map(|h| h.translated(dx, dy)).collect(),
        }
    }

    /// Check that every ring is usable geometry.
    ///
    /// The property engines never call this; they accept anything and
    /// degrade to zeroed results. Callers that want to reject bad input
    /// up front can use it.
    ///
    /// # Returns
    /// * `Err(CalcError::InvalidGeometry)` - A ring has fewer than 3
    ///   vertices or a non-finite coordinate
    pub fn validate(&self) -> CalcResult<()> {
        validate_ring("outer boundary", &self.outer)?;
        for (i, hole) in self.holes.iter().enumerate() {
            validate_ring(&format!("hole {}", i + 1), hole)?;
        }
        Ok(())
    }
}

fn validate_ring(name: &str, ring: &Polygon) -> CalcResult<()> {
    if ring.len() < 3 {
        return Err(CalcError::invalid_geometry(
            name,
            format!("{} vertices, at least 3 required", ring.len()),
        ));
    }
    if let Some(p) = ring.vertices().iter().find(|p| !p.is_finite()) {
        return Err(CalcError::invalid_geometry(
            name,
            format!("non-finite coordinate ({}, {})", p.x, p.y),
        ));
    }
    Ok(())
}
