//! # Elastic Section Properties
//!
//! Composes the polygon algebra over an outer boundary and its holes to get
//! centroidal and principal properties of the net section.
//!
//! ## Algorithm
//!
//! 1. Normalize winding (outer CCW, holes CW)
//! 2. Net area A = A_outer − Σ A_hole; below the epsilon the result is all zeros
//! 3. Centroid from first moments of each ring
//! 4. Second moments about the frame origin, holes subtracted
//! 5. Parallel axis shift to the centroid: I_c = I_o − A·d²
//! 6. Principal moments by Mohr's circle
//! 7. Section moduli to the extreme fibers, radii of gyration
//!
//! ```text
//!            y_max ─┬─────────┐   S_x,top = I_x / y_max
//!                   │         │
//!   centroid ──────►│    +    │
//!                   │         │
//!            y_min ─┴─────────┘   S_x,bot = I_x / |y_min|
//! ```
//!
//! ## References
//! - AISC Steel Construction Manual, Part 17: Properties of Geometric Sections
//! - Roark's Formulas for Stress and Strain, 8th Edition, Appendix A

use log::debug;
use serde::{Deserialize, Serialize};

use super::NormalizedRings;
use crate::geometry::polygon::{area, centroid, product_of_inertia, second_moment_x, second_moment_y};
use crate::geometry::{CrossSection, Point, GEOMETRY_EPSILON};

/// Elastic properties of a net cross-section.
///
/// All moments are about centroidal axes. A degenerate section (net area
/// below 1e-12) reports every field as zero.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area": 80.0,
///   "centroid_x": 5.0,
///   "centroid_y": 4.0,
///   "ix": 426.667,
///   "iy": 666.667,
///   "ixy": 0.0,
///   "ix_principal": 666.667,
///   "iy_principal": 426.667,
///   "theta_principal": 0.0,
///   "sx_top": 106.667,
///   "sx_bot": 106.667,
///   "sy_left": 133.333,
///   "sy_right": 133.333,
///   "rx": 2.309,
///   "ry": 2.887
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElasticProperties {
    /// Net cross-sectional area (in²)
    pub area: f64,
    /// Centroid x-coordinate in the input frame (in)
    pub centroid_x: f64,
    /// Centroid y-coordinate in the input frame (in)
    pub centroid_y: f64,
    /// Moment of inertia about the horizontal centroidal axis (in⁴)
    pub ix: f64,
    /// Moment of inertia about the vertical centroidal axis (in⁴)
    pub iy: f64,
    /// Product of inertia about the centroidal axes (in⁴)
    pub ixy: f64,
    /// Major principal moment of inertia (in⁴)
    pub ix_principal: f64,
    /// Minor principal moment of inertia (in⁴)
    pub iy_principal: f64,
    /// Angle from the x-axis to the major principal axis (radians)
    pub theta_principal: f64,
    /// Elastic section modulus to the top fiber (in³)
    pub sx_top: f64,
    /// Elastic section modulus to the bottom fiber (in³)
    pub sx_bot: f64,
    /// Elastic section modulus to the left fiber (in³)
    pub sy_left: f64,
    /// Elastic section modulus to the right fiber (in³)
    pub sy_right: f64,
    /// Radius of gyration about the x-axis (in)
    pub rx: f64,
    /// Radius of gyration about the y-axis (in)
    pub ry: f64,
}

impl ElasticProperties {
    pub fn centroid(&self) -> Point {
        Point::new(self.centroid_x, self.centroid_y)
    }

    /// Smaller of the two x-axis section moduli (governs elastic stress)
    pub fn sx_min(&self) -> f64 {
        self.sx_top.min(self.sx_bot)
    }

    /// Smaller of the two y-axis section moduli
    pub fn sy_min(&self) -> f64 {
        self.sy_left.min(self.sy_right)
    }

    /// Whether the section had no usable area
    pub fn is_degenerate(&self) -> bool {
        self.area == 0.0
    }
}

/// Principal moments and the angle to the major axis.
///
/// Returns `(I_major, I_minor, θ)`. The angle is zero when the product of
/// inertia is negligible, since the axes are then already principal.
///
/// # Formula
/// ```text
/// I_avg = (Ix + Iy)/2,  I_diff = (Ix − Iy)/2,  R = √(I_diff² + Ixy²)
/// I_1 = I_avg + R,      I_2 = I_avg − R
/// θ = ½·atan2(−Ixy, I_diff)
/// ```
pub fn principal_moments(ix: f64, iy: f64, ixy: f64) -> (f64, f64, f64) {
    let i_avg = 0.5 * (ix + iy);
    let i_diff = 0.5 * (ix - iy);
    let r = i_diff.hypot(ixy);

    let theta = if ixy.abs() > GEOMETRY_EPSILON {
        0.5 * (-ixy).atan2(i_diff)
    } else {
        0.0
    };

    (i_avg + r, i_avg - r, theta)
}

/// I/c, or zero when the fiber distance is negligible
#[inline]
fn section_modulus(i: f64, c: f64) -> f64 {
    if c.abs() < GEOMETRY_EPSILON {
        0.0
    } else {
        i / c.abs()
    }
}

/// Compute elastic properties of a cross-section.
///
/// Never fails: a degenerate section returns [`ElasticProperties::default`].
///
/// # Example
/// ```rust
/// use section_core::calculations::elastic::compute_elastic_properties;
/// use section_core::geometry::{CrossSection, Polygon};
///
/// let section = CrossSection::new(Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 8.0), (0.0, 8.0)]));
/// let props = compute_elastic_properties(&section);
/// assert!((props.area - 80.0).abs() < 1e-9);
/// assert!((props.ix - 426.667).abs() < 1e-3);
/// ```
pub fn compute_elastic_properties(section: &CrossSection) -> ElasticProperties {
    let rings = NormalizedRings::from_section(section);
    compute_from_rings(&rings)
}

pub(crate) fn compute_from_rings(rings: &NormalizedRings) -> ElasticProperties {
    let net_area = rings.net_area();
    if net_area.is_nan() || net_area < GEOMETRY_EPSILON {
        debug!("degenerate section (net area {net_area:e}), elastic properties zeroed");
        return ElasticProperties::default();
    }

    // First moments: Qx = Σ A·ȳ, Qy = Σ A·x̄
    let first_moments = |ring: &[Point]| {
        let a = area(ring);
        let c = centroid(ring);
        (a * c.y, a * c.x)
    };
    let (mut qx, mut qy) = first_moments(&rings.outer);
    for hole in &rings.holes {
        let (hx, hy) = first_moments(hole);
        qx -= hx;
        qy -= hy;
    }
    let cx = qy / net_area;
    let cy = qx / net_area;

    // Second moments about the frame origin. Ix and Iy are magnitudes; Ixy
    // keeps its sign and is subtracted as is.
    let mut ix_o = second_moment_x(&rings.outer).abs();
    let mut iy_o = second_moment_y(&rings.outer).abs();
    let mut ixy_o = product_of_inertia(&rings.outer);
    for hole in &rings.holes {
        ix_o -= second_moment_x(hole).abs();
        iy_o -= second_moment_y(hole).abs();
        ixy_o -= product_of_inertia(hole);
    }

    let ix = ix_o - net_area * cy * cy;
    let iy = iy_o - net_area * cx * cx;
    let ixy = ixy_o - net_area * cx * cy;

    let (ix_principal, iy_principal, theta_principal) = principal_moments(ix, iy, ixy);

    // Extreme fiber distances from the centroid over every ring
    let (mut y_max, mut y_min) = (f64::NEG_INFINITY, f64::INFINITY);
    let (mut x_max, mut x_min) = (f64::NEG_INFINITY, f64::INFINITY);
    for p in rings.all_vertices() {
        let (dx, dy) = (p.x - cx, p.y - cy);
        y_max = y_max.max(dy);
        y_min = y_min.min(dy);
        x_max = x_max.max(dx);
        x_min = x_min.min(dx);
    }

    ElasticProperties {
        area: net_area,
        centroid_x: cx,
        centroid_y: cy,
        ix,
        iy,
        ixy,
        ix_principal,
        iy_principal,
        theta_principal,
        sx_top: section_modulus(ix, y_max),
        sx_bot: section_modulus(ix, y_min),
        sy_left: section_modulus(iy, x_min),
        sy_right: section_modulus(iy, x_max),
        rx: (ix.max(0.0) / net_area).sqrt(),
        ry: (iy.max(0.0) / net_area).sqrt(),
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
