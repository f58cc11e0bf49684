//! # Section Property Calculations
//!
//! The engines that turn a [`CrossSection`] into properties. Each follows the
//! crate-wide pattern of a pure function from input to an immutable,
//! JSON-serializable result record:
//!
//! - [`elastic`] - Area, centroid, moments of inertia, principal axes, S, r
//! - [`plastic`] - Plastic neutral axes and plastic section moduli
//! - [`section`] - Facade pairing both results for one section
//! - [`bisection`] - The bounded bisection used to find the PNA
//!
//! ## Winding Normalization
//!
//! Every composite computation starts from [`NormalizedRings`]: the outer
//! boundary wound counter-clockwise and every hole clockwise. Hole
//! contributions are subtracted from the outer boundary's, so the engines do
//! not depend on how the caller wound the input.

pub mod bisection;
pub mod elastic;
pub mod plastic;
pub mod section;

use crate::geometry::polygon::{area, ensure_winding};
use crate::geometry::{CrossSection, CutAxis, Point, Winding};

// Re-export commonly used types
pub use bisection::{bisect, BisectionOutcome};
pub use elastic::{compute_elastic_properties, ElasticProperties};
pub use plastic::{compute_plastic_properties, locate_pna, PlasticProperties};
pub use section::{compute_section_properties, compute_section_properties_with, SectionProperties};

/// Vertex rings of a section with winding fixed: outer CCW, holes CW.
#[derive(Debug, Clone)]
pub(crate) struct NormalizedRings {
    pub outer: Vec<Point>,
    pub holes: Vec<Vec<Point>>,
}

impl NormalizedRings {
    pub fn from_section(section: &CrossSection) -> Self {
        NormalizedRings {
            outer: ensure_winding(section.outer().vertices(), Winding::CounterClockwise),
            holes: section
                .holes()
                .iter()
                .map(|h| ensure_winding(h.vertices(), Winding::Clockwise))
                .collect(),
        }
    }

    /// Outer area minus hole areas
    pub fn net_area(&self) -> f64 {
        area(&self.outer) - self.holes.iter().map(|h| area(h)).sum::<f64>()
    }

    pub fn all_vertices(&self) -> impl Iterator<Item = &Point> + '_ {
        self.outer.iter().chain(self.holes.iter().flatten())
    }

    /// Min and max vertex coordinate along a cut direction
    pub fn extent(&self, axis: CutAxis) -> Option<(f64, f64)> {
        self.all_vertices().map(|p| p.coordinate(axis)).fold(None, |acc, c| match acc {
            None => Some((c, c)),
            Some((lo, hi)) => Some((lo.min(c), hi.max(c))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::polygon::signed_area;
    use crate::geometry::Polygon;

    #[test]
    fn test_normalized_windings() {
        // Outer given CW, hole given CCW
        let section = CrossSection::new(Polygon::from_coords(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)]))
            .with_hole(Polygon::from_coords(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)]));
        let rings = NormalizedRings::from_section(&section);
        assert!(signed_area(&rings.outer) > 0.0);
        assert!(signed_area(&rings.holes[0]) < 0.0);
        assert_eq!(rings.net_area(), 15.0);
    }

    #[test]
    fn test_extent() {
        let section = CrossSection::new(Polygon::from_coords(&[(-1.0, 2.0), (3.0, 2.0), (3.0, 9.0)]));
        let rings = NormalizedRings::from_section(&section);
        assert_eq!(rings.extent(CutAxis::Horizontal), Some((2.0, 9.0)));
        assert_eq!(rings.extent(CutAxis::Vertical), Some((-1.0, 3.0)));

        let empty = NormalizedRings::from_section(&CrossSection::default());
        assert_eq!(empty.extent(CutAxis::Vertical), None);
    }
}
