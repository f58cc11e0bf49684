//! # Plastic Section Properties
//!
//! Locates the plastic neutral axis (PNA) for each bending direction and
//! computes the plastic section modulus about it.
//!
//! ## Algorithm
//!
//! For a horizontal PNA (x-axis bending) the section is cut by lines `y = c`;
//! for a vertical PNA (y-axis bending) by lines `x = c`.
//!
//! 1. Bracket `c` by the section's extent along the cut direction
//! 2. Bisect on `c` until the area below the cut equals A/2. Area below is
//!    the clipped outer boundary minus the clipped holes, which is monotone
//!    in `c`
//! 3. Split the section at the PNA and take the first moment of each side
//!    about it: Z = |Q_above| + |Q_below|
//!
//! ```text
//!   ┌───────────┐
//!   │   A/2     │  Q_above = A_above · (ȳ_above − y_pna)
//!   ├───────────┤ ◄── y_pna
//!   │   A/2     │  Q_below = A_below · (ȳ_below − y_pna)
//!   └───────────┘
//! ```
//!
//! ## References
//! - AISC 360-22 Commentary F2: plastic moment Mp = Fy·Z
//! - Salmon & Johnson, Steel Structures, Section 7.4

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::bisection::{bisect, BisectionOutcome};
use super::NormalizedRings;
use crate::geometry::polygon::{area, centroid};
use crate::geometry::{clip_polygon, ClipSide, CrossSection, CutAxis, Point, GEOMETRY_EPSILON};
use crate::settings::SolverSettings;

/// Plastic neutral axes and plastic section moduli.
///
/// ## JSON Example
///
/// ```json
/// { "pna_x": 4.0, "pna_y": 5.0, "zx": 160.0, "zy": 200.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlasticProperties {
    /// y-coordinate of the horizontal PNA, used for x-axis bending (in)
    pub pna_x: f64,
    /// x-coordinate of the vertical PNA, used for y-axis bending (in)
    pub pna_y: f64,
    /// Plastic section modulus for x-axis bending (in³)
    pub zx: f64,
    /// Plastic section modulus for y-axis bending (in³)
    pub zy: f64,
}

impl PlasticProperties {
    /// Shape factor Z/S for x-axis bending, or zero if S is zero
    pub fn shape_factor_x(&self, sx: f64) -> f64 {
        if sx > 0.0 {
            self.zx / sx
        } else {
            0.0
        }
    }

    /// Shape factor Z/S for y-axis bending, or zero if S is zero
    pub fn shape_factor_y(&self, sy: f64) -> f64 {
        if sy > 0.0 {
            self.zy / sy
        } else {
            0.0
        }
    }
}

/// Net area of the part of the section on one side of the cut
fn area_on_side(rings: &NormalizedRings, cut: f64, axis: CutAxis, side: ClipSide) -> f64 {
    let outer = clip_polygon(&rings.outer, cut, axis, side).area();
    let holes: f64 = rings
        .holes
        .iter()
        .map(|h| clip_polygon(h, cut, axis, side).area())
        .sum();
    outer - holes
}

/// Net first moment about the cut line of the part on one side of it
fn first_moment_on_side(rings: &NormalizedRings, cut: f64, axis: CutAxis, side: ClipSide) -> f64 {
    let moment = |ring: &[Point]| {
        let fragment = clip_polygon(ring, cut, axis, side);
        let a = area(fragment.vertices());
        a * (centroid(fragment.vertices()).coordinate(axis) - cut)
    };
    let holes: f64 = rings.holes.iter().map(|h| moment(h)).sum();
    moment(&rings.outer) - holes
}

/// Bisect for the cut position that leaves half the net area below it.
fn search_pna(rings: &NormalizedRings, axis: CutAxis, net_area: f64, settings: &SolverSettings) -> Option<BisectionOutcome> {
    let (lo, hi) = rings.extent(axis)?;
    let outcome = bisect(
        |cut| area_on_side(rings, cut, axis, ClipSide::Below),
        lo,
        hi,
        0.5 * net_area,
        settings.area_tolerance(net_area),
        settings.max_iterations,
    );

    if outcome.converged {
        debug!(
            "{:?} PNA at {} after {} iterations (residual {:e})",
            axis, outcome.root, outcome.iterations, outcome.residual
        );
    } else {
        warn!(
            "{:?} PNA search hit the {} iteration cap, using {} (residual {:e})",
            axis, settings.max_iterations, outcome.root, outcome.residual
        );
    }
    Some(outcome)
}

/// Locate the plastic neutral axis along one cut direction.
///
/// Exposes the full [`BisectionOutcome`] so callers can see whether the
/// search converged. Returns `None` for a degenerate section.
///
/// # Example
/// ```rust
/// use section_core::calculations::plastic::locate_pna;
/// use section_core::geometry::{CrossSection, CutAxis, Polygon};
/// use section_core::settings::SolverSettings;
///
/// let section = CrossSection::new(Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 8.0), (0.0, 8.0)]));
/// let pna = locate_pna(&section, CutAxis::Horizontal, &SolverSettings::default()).unwrap();
/// assert!(pna.converged);
/// assert!((pna.root - 4.0).abs() < 1e-9);
/// ```
pub fn locate_pna(section: &CrossSection, axis: CutAxis, settings: &SolverSettings) -> Option<BisectionOutcome> {
    let rings = NormalizedRings::from_section(section);
    let net_area = rings.net_area();
    if net_area.is_nan() || net_area < GEOMETRY_EPSILON {
        return None;
    }
    search_pna(&rings, axis, net_area, settings)
}

/// Plastic section modulus about a given neutral axis position.
///
/// Z = |Q_above| + |Q_below|. Only meaningful at the PNA, where both sides
/// hold equal area.
pub fn plastic_modulus_at(section: &CrossSection, pna: f64, axis: CutAxis) -> f64 {
    modulus_at(&NormalizedRings::from_section(section), pna, axis)
}

fn modulus_at(rings: &NormalizedRings, pna: f64, axis: CutAxis) -> f64 {
    let q_above = first_moment_on_side(rings, pna, axis, ClipSide::Above);
    let q_below = first_moment_on_side(rings, pna, axis, ClipSide::Below);
    q_above.abs() + q_below.abs()
}

/// Compute plastic properties of a cross-section.
///
/// # Arguments
/// * `section` - The cross-section
/// * `net_area` - Net area, as already found by the elastic engine
/// * `settings` - Bisection iteration cap and tolerance
///
/// # Returns
/// Zeroed properties when the net area is degenerate. Bisection
/// non-convergence is logged and the final bracket midpoint is used.
pub fn compute_plastic_properties(section: &CrossSection, net_area: f64, settings: &SolverSettings) -> PlasticProperties {
    compute_from_rings(&NormalizedRings::from_section(section), net_area, settings)
}

pub(crate) fn compute_from_rings(rings: &NormalizedRings, net_area: f64, settings: &SolverSettings) -> PlasticProperties {
    if net_area.is_nan() || net_area < GEOMETRY_EPSILON {
        debug!("degenerate section (net area {net_area:e}), plastic properties zeroed");
        return PlasticProperties::default();
    }

    let (Some(pna_x), Some(pna_y)) = (
        search_pna(rings, CutAxis::Horizontal, net_area, settings),
        search_pna(rings, CutAxis::Vertical, net_area, settings),
    ) else {
        return PlasticProperties::default();
    };

    PlasticProperties {
        pna_x: pna_x.root,
        pna_y: pna_y.root,
        zx: modulus_at(rings, pna_x.root, CutAxis::Horizontal),
        zy: modulus_at(rings, pna_y.root, CutAxis::Vertical),
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Polygon;
    use std::f64::consts::PI;
    use test_case::test_case;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < EPSILON
    }

    fn rect(x0: f64, y0: f64, b: f64, h: f64) -> Polygon {
        Polygon::from_coords(&[(x0, y0), (x0 + b, y0), (x0 + b, y0 + h), (x0, y0 + h)])
    }

    fn plastic(section: &CrossSection) -> PlasticProperties {
        let a = NormalizedRings::from_section(section).net_area();
        compute_plastic_properties(section, a, &SolverSettings::default())
    }

    #[test]
    fn test_reference_rectangle() {
        let props = plastic(&CrossSection::new(rect(0.0, 0.0, 10.0, 8.0)));
        assert!(approx_eq(props.pna_x, 4.0), "PNA-X = {}", props.pna_x);
        assert!(approx_eq(props.pna_y, 5.0), "PNA-Y = {}", props.pna_y);
        assert!(approx_eq(props.zx, 160.0), "Zx = {}", props.zx);
        assert!(approx_eq(props.zy, 200.0), "Zy = {}", props.zy);
    }

    #[test_case(0.0, 0.0, 1.5, 9.25; "2x10")]
    #[test_case(-3.0, 12.0, 3.5, 3.5; "4x4 offset")]
    #[test_case(250.0, 250.0, 20.0, 0.5; "plate far away")]
    fn test_rectangle_anywhere(x0: f64, y0: f64, b: f64, h: f64) {
        let props = plastic(&CrossSection::new(rect(x0, y0, b, h)));
        assert!(approx_eq(props.pna_x, y0 + h / 2.0));
        assert!(approx_eq(props.pna_y, x0 + b / 2.0));
        assert!(approx_eq(props.zx, b * h * h / 4.0), "Zx = {}", props.zx);
        assert!(approx_eq(props.zy, h * b * b / 4.0), "Zy = {}", props.zy);
    }

    #[test]
    fn test_hollow_rectangle() {
        // 8 x 12 outer, concentric 6 x 10 hole
        let section = CrossSection::new(rect(0.0, 0.0, 8.0, 12.0)).with_hole(rect(1.0, 1.0, 6.0, 10.0));
        let props = plastic(&section);
        assert!(approx_eq(props.pna_x, 6.0));
        assert!(approx_eq(props.pna_y, 4.0));
        // Z = Z_outer − Z_hole for concentric rectangles
        assert!(approx_eq(props.zx, 8.0 * 144.0 / 4.0 - 6.0 * 100.0 / 4.0), "Zx = {}", props.zx);
        assert!(approx_eq(props.zy, 12.0 * 64.0 / 4.0 - 10.0 * 36.0 / 4.0), "Zy = {}", props.zy);
    }

    #[test]
    fn test_tee_pna_is_not_at_centroid() {
        // Flange 6 x 1 on top of a 1 x 5 stem, total area 11
        let tee = CrossSection::new(Polygon::from_coords(&[
            (2.5, 0.0),
            (3.5, 0.0),
            (3.5, 5.0),
            (6.0, 5.0),
            (6.0, 6.0),
            (0.0, 6.0),
            (0.0, 5.0),
            (2.5, 5.0),
        ]));
        let props = plastic(&tee);
        // Half area 5.5 lies below y = 5 + 0.5/6
        let pna = 5.0 + 0.5 / 6.0;
        assert!(approx_eq(props.pna_x, pna), "PNA-X = {}", props.pna_x);
        // Below: stem 5 @ (2.5 − pna) + flange strip 0.5 @ (−0.5/12); above: 5.5 @ (6 − pna)/2
        let q_below = 5.0 * (pna - 2.5) + 0.5 * (pna - 5.0) / 2.0;
        let q_above = 5.5 * (6.0 - pna) / 2.0;
        assert!(approx_eq(props.zx, q_below + q_above), "Zx = {}", props.zx);
        assert!(approx_eq(props.pna_y, 3.0));
    }

    #[test]
    fn test_circle_plastic_modulus() {
        let n = 720;
        let r = 2.0;
        let circle: Polygon = (0..n)
            .map(|i| {
                let t = 2.0 * PI * i as f64 / n as f64;
                Point::new(r * t.cos(), r * t.sin())
            })
            .collect();
        let props = plastic(&CrossSection::new(circle));
        let exact = 4.0 * r.powi(3) / 3.0;
        assert!(props.pna_x.abs() < 1e-9);
        assert!((props.zx - exact).abs() / exact < 1e-3, "Zx = {} (expected {})", props.zx, exact);
        assert!((props.zy - exact).abs() / exact < 1e-3);
    }

    #[test]
    fn test_area_below_is_monotone() {
        let section = CrossSection::new(rect(0.0, 0.0, 6.0, 6.0)).with_hole(rect(2.0, 1.0, 2.0, 3.0));
        let rings = NormalizedRings::from_section(&section);
        let samples: Vec<f64> = (0..=60)
            .map(|i| area_on_side(&rings, i as f64 * 0.1, CutAxis::Horizontal, ClipSide::Below))
            .collect();
        assert!(samples.windows(2).all(|w| w[1] >= w[0] - 1e-12));
        assert!(approx_eq(samples[60], 30.0));
    }

    #[test]
    fn test_locate_pna_reports_convergence() {
        let section = CrossSection::new(rect(0.0, 0.0, 10.0, 8.0));
        let outcome = locate_pna(&section, CutAxis::Vertical, &SolverSettings::default()).unwrap();
        assert!(outcome.converged);
        assert!(outcome.iterations <= 100);
        assert!(approx_eq(outcome.root, 5.0));

        let starved = SolverSettings {
            max_iterations: 2,
            relative_tolerance: 1e-15,
        };
        // A hole near the bottom keeps the PNA off the bracket midpoints
        let holed = CrossSection::new(rect(0.0, 0.0, 1.0, 3.0)).with_hole(rect(0.25, 0.25, 0.5, 0.5));
        let outcome = locate_pna(&holed, CutAxis::Horizontal, &starved).unwrap();
        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, 2);
    }

    #[test]
    fn test_modulus_is_smallest_at_pna() {
        let section = CrossSection::new(rect(0.0, 0.0, 10.0, 8.0));
        // b·h²/4 about the mid-depth line
        assert!(approx_eq(plastic_modulus_at(&section, 4.0, CutAxis::Horizontal), 160.0));
        assert!(approx_eq(plastic_modulus_at(&section, 5.0, CutAxis::Vertical), 200.0));

        // Off the PNA: 50·2.5 above plus 30·1.5 below
        let off = plastic_modulus_at(&section, 3.0, CutAxis::Horizontal);
        assert!(approx_eq(off, 170.0), "Z(3.0) = {}", off);
    }

    #[test]
    fn test_degenerate_section() {
        let section = CrossSection::new(Polygon::from_coords(&[(0.0, 0.0), (5.0, 5.0)]));
        assert_eq!(plastic(&section), PlasticProperties::default());
        assert!(locate_pna(&section, CutAxis::Horizontal, &SolverSettings::default()).is_none());
    }

    #[test]
    fn test_shape_factor() {
        let props = PlasticProperties {
            pna_x: 4.0,
            pna_y: 5.0,
            zx: 160.0,
            zy: 200.0,
        };
        assert!(approx_eq(props.shape_factor_x(160.0 / 1.5), 1.5));
        assert_eq!(props.shape_factor_y(0.0), 0.0);
    }
}
