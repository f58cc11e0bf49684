//! # Shape Templates
//!
//! Builders that turn named dimensions into a [`CrossSection`]. They are plain
//! geometry producers: the property engines treat their output exactly like
//! any other polygon input.
//!
//! Every template puts the lower-left corner of the section's bounding box at
//! the local origin, winds the outer boundary counter-clockwise and holes
//! clockwise.
//!
//! ```text
//!   I-shape          channel        angle         tee
//!   ┌───────┐        ┌──────┐       ┌┐            ┌───────┐
//!   └──┐ ┌──┘        │ ┌────┘       ││            └──┐ ┌──┘
//!      │ │           │ │            ││               │ │
//!   ┌──┘ └──┐        │ └────┐       │└─────┐         │ │
//!   └───────┘        └──────┘       └──────┘         └─┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use section_core::shapes::ShapeTemplate;
//!
//! let w = ShapeTemplate::IShape {
//!     depth: 12.0,
//!     flange_width: 8.0,
//!     flange_thickness: 0.5,
//!     web_thickness: 0.3,
//! };
//! let section = w.to_section().unwrap();
//! assert_eq!(section.outer().len(), 12);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::{CrossSection, Point, Polygon, Winding};

/// A parametric section described by its dimensions (in).
///
/// ## JSON Example
///
/// ```json
/// { "shape": "hollow_rectangle", "width": 6.0, "height": 10.0, "wall": 0.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeTemplate {
    Rectangle {
        width: f64,
        height: f64,
    },
    HollowRectangle {
        width: f64,
        height: f64,
        wall: f64,
    },
    Circle {
        radius: f64,
        segments: usize,
    },
    Pipe {
        radius: f64,
        wall: f64,
        segments: usize,
    },
    IShape {
        depth: f64,
        flange_width: f64,
        flange_thickness: f64,
        web_thickness: f64,
    },
    Channel {
        depth: f64,
        flange_width: f64,
        flange_thickness: f64,
        web_thickness: f64,
    },
    Angle {
        vertical_leg: f64,
        horizontal_leg: f64,
        thickness: f64,
    },
    Tee {
        depth: f64,
        flange_width: f64,
        flange_thickness: f64,
        stem_thickness: f64,
    },
}

impl ShapeTemplate {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeTemplate::Rectangle { .. } => "Rectangle",
            ShapeTemplate::HollowRectangle { .. } => "Hollow Rectangle",
            ShapeTemplate::Circle { .. } => "Circle",
            ShapeTemplate::Pipe { .. } => "Pipe",
            ShapeTemplate::IShape { .. } => "I-Shape",
            ShapeTemplate::Channel { .. } => "Channel",
            ShapeTemplate::Angle { .. } => "Angle",
            ShapeTemplate::Tee { .. } => "Tee",
        }
    }

    /// Build the cross-section, validating the dimensions first.
    pub fn to_section(&self) -> CalcResult<CrossSection> {
        match *self {
            ShapeTemplate::Rectangle { width, height } => rectangle(width, height),
            ShapeTemplate::HollowRectangle { width, height, wall } => hollow_rectangle(width, height, wall),
            ShapeTemplate::Circle { radius, segments } => circle(radius, segments),
            ShapeTemplate::Pipe { radius, wall, segments } => pipe(radius, wall, segments),
            ShapeTemplate::IShape {
                depth,
                flange_width,
                flange_thickness,
                web_thickness,
            } => i_shape(depth, flange_width, flange_thickness, web_thickness),
            ShapeTemplate::Channel {
                depth,
                flange_width,
                flange_thickness,
                web_thickness,
            } => channel(depth, flange_width, flange_thickness, web_thickness),
            ShapeTemplate::Angle {
                vertical_leg,
                horizontal_leg,
                thickness,
            } => angle(vertical_leg, horizontal_leg, thickness),
            ShapeTemplate::Tee {
                depth,
                flange_width,
                flange_thickness,
                stem_thickness,
            } => tee(depth, flange_width, flange_thickness, stem_thickness),
        }
    }
}

// =============================================================================
// PARAMETER VALIDATION
// =============================================================================

fn positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be a positive number"));
    }
    Ok(())
}

fn less_than(field: &str, value: f64, limit: f64, reason: &str) -> CalcResult<()> {
    if value >= limit {
        return Err(CalcError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

fn enough_segments(segments: usize) -> CalcResult<()> {
    if segments < 3 {
        return Err(CalcError::invalid_input(
            "segments",
            segments.to_string(),
            "A polygonal circle needs at least 3 segments",
        ));
    }
    Ok(())
}

fn ring(coords: &[(f64, f64)]) -> Polygon {
    Polygon::from_coords(coords)
}

/// Regular polygon inscribed in a circle, CCW, starting at angle zero
fn circle_ring(cx: f64, cy: f64, radius: f64, segments: usize) -> Polygon {
    (0..segments)
        .map(|i| {
            let t = 2.0 * PI * i as f64 / segments as f64;
            Point::new(cx + radius * t.cos(), cy + radius * t.sin())
        })
        .collect()
}

// =============================================================================
// TEMPLATES
// =============================================================================

/// Solid rectangle `width` × `height`
pub fn rectangle(width: f64, height: f64) -> CalcResult<CrossSection> {
    positive("width", width)?;
    positive("height", height)?;
    Ok(CrossSection::new(ring(&[(0.0, 0.0), (width, 0.0), (width, height), (0.0, height)])))
}

/// Rectangular tube with uniform wall thickness
pub fn hollow_rectangle(width: f64, height: f64, wall: f64) -> CalcResult<CrossSection> {
    positive("width", width)?;
    positive("height", height)?;
    positive("wall", wall)?;
    less_than("wall", wall, 0.5 * width.min(height), "Twice the wall must be less than the smaller outside dimension")?;

    let (x0, y0, x1, y1) = (wall, wall, width - wall, height - wall);
    let hole = ring(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)]).with_winding(Winding::Clockwise);
    Ok(rectangle(width, height)?.with_hole(hole))
}

/// Solid circle approximated by a regular polygon
pub fn circle(radius: f64, segments: usize) -> CalcResult<CrossSection> {
    positive("radius", radius)?;
    enough_segments(segments)?;
    Ok(CrossSection::new(circle_ring(radius, radius, radius, segments)))
}

/// Circular ring with outside radius `radius`
pub fn pipe(radius: f64, wall: f64, segments: usize) -> CalcResult<CrossSection> {
    positive("radius", radius)?;
    positive("wall", wall)?;
    less_than("wall", wall, radius, "Wall must be less than the outside radius")?;
    enough_segments(segments)?;

    let hole = circle_ring(radius, radius, radius - wall, segments).with_winding(Winding::Clockwise);
    Ok(CrossSection::new(circle_ring(radius, radius, radius, segments)).with_hole(hole))
}

fn check_flanged(depth: f64, flange_width: f64, flange_thickness: f64, web_thickness: f64, flanges: f64) -> CalcResult<()> {
    positive("depth", depth)?;
    positive("flange_width", flange_width)?;
    positive("flange_thickness", flange_thickness)?;
    positive("web_thickness", web_thickness)?;
    less_than(
        "flange_thickness",
        flange_thickness,
        depth / flanges,
        "Flanges must be thinner than the overall depth",
    )?;
    less_than("web_thickness", web_thickness, flange_width, "Web must be thinner than the flange width")
}

/// Doubly symmetric wide-flange section with sharp corners
pub fn i_shape(depth: f64, flange_width: f64, flange_thickness: f64, web_thickness: f64) -> CalcResult<CrossSection> {
    check_flanged(depth, flange_width, flange_thickness, web_thickness, 2.0)?;

    let (d, bf, tf) = (depth, flange_width, flange_thickness);
    let (wl, wr) = (0.5 * (bf - web_thickness), 0.5 * (bf + web_thickness));
    Ok(CrossSection::new(ring(&[
        (0.0, 0.0),
        (bf, 0.0),
        (bf, tf),
        (wr, tf),
        (wr, d - tf),
        (bf, d - tf),
        (bf, d),
        (0.0, d),
        (0.0, d - tf),
        (wl, d - tf),
        (wl, tf),
        (0.0, tf),
    ])))
}

/// Channel with the web on the left and flanges pointing right
pub fn channel(depth: f64, flange_width: f64, flange_thickness: f64, web_thickness: f64) -> CalcResult<CrossSection> {
    check_flanged(depth, flange_width, flange_thickness, web_thickness, 2.0)?;

    let (d, bf, tf, tw) = (depth, flange_width, flange_thickness, web_thickness);
    Ok(CrossSection::new(ring(&[
        (0.0, 0.0),
        (bf, 0.0),
        (bf, tf),
        (tw, tf),
        (tw, d - tf),
        (bf, d - tf),
        (bf, d),
        (0.0, d),
    ])))
}

/// Equal or unequal leg angle with its heel at the origin
pub fn angle(vertical_leg: f64, horizontal_leg: f64, thickness: f64) -> CalcResult<CrossSection> {
    positive("vertical_leg", vertical_leg)?;
    positive("horizontal_leg", horizontal_leg)?;
    positive("thickness", thickness)?;
    less_than(
        "thickness",
        thickness,
        vertical_leg.min(horizontal_leg),
        "Thickness must be less than the shorter leg",
    )?;

    let (v, h, t) = (vertical_leg, horizontal_leg, thickness);
    Ok(CrossSection::new(ring(&[(0.0, 0.0), (h, 0.0), (h, t), (t, t), (t, v), (0.0, v)])))
}

/// Tee with the flange on top and a centered stem
pub fn tee(depth: f64, flange_width: f64, flange_thickness: f64, stem_thickness: f64) -> CalcResult<CrossSection> {
    check_flanged(depth, flange_width, flange_thickness, stem_thickness, 1.0)?;

    let (d, bf, tf) = (depth, flange_width, flange_thickness);
    let (sl, sr) = (0.5 * (bf - stem_thickness), 0.5 * (bf + stem_thickness));
    Ok(CrossSection::new(ring(&[
        (sl, 0.0),
        (sr, 0.0),
        (sr, d - tf),
        (bf, d - tf),
        (bf, d),
        (0.0, d),
        (0.0, d - tf),
        (sl, d - tf),
    ])))
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::compute_section_properties;
    use test_case::test_case;

    fn approx_eq(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() < rel || (a - b).abs() / b.abs().max(1.0) < rel
    }

    #[test]
    fn test_rectangle_template() {
        let s = rectangle(10.0, 8.0).unwrap();
        let props = compute_section_properties(&s);
        assert!(approx_eq(props.plastic.zx, 160.0, 1e-6));
        assert!(approx_eq(props.plastic.pna_x, 4.0, 1e-9));
        assert_eq!(s.outer().winding(), Winding::CounterClockwise);
    }

    #[test]
    fn test_hollow_rectangle_template() {
        let s = hollow_rectangle(6.0, 10.0, 0.5).unwrap();
        assert_eq!(s.holes()[0].winding(), Winding::Clockwise);
        let props = compute_section_properties(&s);
        let ix = 6.0 * 1000.0 / 12.0 - 5.0 * 729.0 / 12.0;
        assert!(approx_eq(props.elastic.area, 60.0 - 45.0, 1e-9));
        assert!(approx_eq(props.elastic.ix, ix, 1e-6));
        assert!(approx_eq(props.plastic.pna_x, 5.0, 1e-9));
        assert!(approx_eq(props.plastic.pna_y, 3.0, 1e-9));
    }

    #[test]
    fn test_i_shape_against_closed_form() {
        let (d, bf, tf, tw) = (12.0, 8.0, 0.5, 0.3);
        let props = compute_section_properties(&i_shape(d, bf, tf, tw).unwrap());
        let hw = d - 2.0 * tf;

        let a = 2.0 * bf * tf + hw * tw;
        let ix = bf * d.powi(3) / 12.0 - (bf - tw) * hw.powi(3) / 12.0;
        let iy = 2.0 * tf * bf.powi(3) / 12.0 + hw * tw.powi(3) / 12.0;
        let zx = bf * tf * (d - tf) + tw * hw * hw / 4.0;
        let zy = 2.0 * tf * bf * bf / 4.0 + hw * tw * tw / 4.0;

        assert!(approx_eq(props.elastic.area, a, 1e-9));
        assert!(approx_eq(props.elastic.ix, ix, 1e-6), "Ix = {} (expected {})", props.elastic.ix, ix);
        assert!(approx_eq(props.elastic.iy, iy, 1e-6), "Iy = {} (expected {})", props.elastic.iy, iy);
        assert!(approx_eq(props.plastic.zx, zx, 1e-6), "Zx = {} (expected {})", props.plastic.zx, zx);
        assert!(approx_eq(props.plastic.zy, zy, 1e-6), "Zy = {} (expected {})", props.plastic.zy, zy);
        assert!(approx_eq(props.plastic.pna_x, d / 2.0, 1e-9));
        assert!(props.plastic.zx > props.elastic.sx_top);
    }

    #[test]
    fn test_channel_centroid() {
        let (d, bf, tf, tw) = (10.0, 3.0, 0.5, 0.25);
        let props = compute_section_properties(&channel(d, bf, tf, tw).unwrap());
        // Web strip plus two flange strips beyond the web
        let a_web = tw * d;
        let a_fl = 2.0 * (bf - tw) * tf;
        let x_bar = (a_web * tw / 2.0 + a_fl * (tw + (bf - tw) / 2.0)) / (a_web + a_fl);
        assert!(approx_eq(props.elastic.centroid_x, x_bar, 1e-9));
        assert!(approx_eq(props.elastic.centroid_y, d / 2.0, 1e-9));
        assert!(props.elastic.ixy.abs() < 1e-9);
        assert!(props.elastic.sy_left > props.elastic.sy_right);
    }

    #[test]
    fn test_angle_has_product_of_inertia() {
        let props = compute_section_properties(&angle(6.0, 4.0, 1.0).unwrap());
        assert!(approx_eq(props.elastic.area, 9.0, 1e-9));
        assert!(approx_eq(props.elastic.ixy, -10.0, 1e-9));
        assert!(props.elastic.ix_principal > props.elastic.ix);
    }

    #[test]
    fn test_tee_template() {
        let props = compute_section_properties(&tee(6.0, 6.0, 1.0, 1.0).unwrap());
        assert!(approx_eq(props.elastic.area, 11.0, 1e-9));
        assert!(approx_eq(props.plastic.pna_x, 5.0 + 0.5 / 6.0, 1e-9));
        assert!(approx_eq(props.plastic.pna_y, 3.0, 1e-9));
    }

    #[test_case(360; "360 segments")]
    #[test_case(720; "720 segments")]
    fn test_circle_template(segments: usize) {
        let r = 1.5;
        let props = compute_section_properties(&circle(r, segments).unwrap());
        let exact_i = PI * r.powi(4) / 4.0;
        assert!((props.elastic.area - PI * r * r).abs() / (PI * r * r) < 1e-3);
        assert!((props.elastic.ix - exact_i).abs() / exact_i < 1e-3);
        assert!(approx_eq(props.elastic.centroid_x, r, 1e-9));
        assert!(approx_eq(props.plastic.pna_x, r, 1e-9));
    }

    #[test]
    fn test_pipe_template() {
        let (r, t) = (4.0, 0.25);
        let props = compute_section_properties(&pipe(r, t, 720).unwrap());
        let exact_a = PI * (r * r - (r - t).powi(2));
        let exact_z = 4.0 * (r.powi(3) - (r - t).powi(3)) / 3.0;
        assert!((props.elastic.area - exact_a).abs() / exact_a < 1e-3);
        assert!((props.plastic.zx - exact_z).abs() / exact_z < 1e-3);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(rectangle(0.0, 5.0).is_err());
        assert!(rectangle(f64::NAN, 5.0).is_err());
        assert!(hollow_rectangle(4.0, 6.0, 2.0).is_err());
        assert!(circle(1.0, 2).is_err());
        assert!(pipe(2.0, 2.0, 36).is_err());
        assert!(i_shape(10.0, 6.0, 5.0, 0.3).is_err());
        assert!(channel(10.0, 0.2, 0.5, 0.3).is_err());
        assert!(angle(4.0, 4.0, 4.0).is_err());
        assert!(tee(1.0, 6.0, 1.0, 0.5).is_err());

        let err = i_shape(-1.0, 6.0, 0.5, 0.3).unwrap_err();
        assert_eq!(err, CalcError::invalid_input("depth", "-1", "Must be a positive number"));
    }

    #[test]
    fn test_template_json() {
        let json = r#"{"shape": "angle", "vertical_leg": 6.0, "horizontal_leg": 4.0, "thickness": 1.0}"#;
        let template: ShapeTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(template.display_name(), "Angle");
        assert_eq!(template.to_section().unwrap().outer().len(), 6);
    }
}
