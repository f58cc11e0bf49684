//! Plain-text property report.

use std::fmt;

use section_core::{CrossSection, SectionProperties};

const RULE: &str = "═══════════════════════════════════════";

/// Text report for one section, rendered through `Display`.
pub struct Report<'a> {
    pub title: &'a str,
    pub section: &'a CrossSection,
    pub props: &'a SectionProperties,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(out, self.title, self.section, self.props)
    }
}

fn write_report(out: &mut fmt::Formatter<'_>, title: &str, section: &CrossSection, props: &SectionProperties) -> fmt::Result {
    let e = &props.elastic;
    let p = &props.plastic;

    writeln!(out, "{}", RULE)?;
    writeln!(out, "  SECTION PROPERTIES: {}", title)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;

    writeln!(out, "Geometry:")?;
    writeln!(out, "  Outer boundary: {} vertices", section.outer().len())?;
    writeln!(out, "  Holes:          {}", section.holes().len())?;
    writeln!(out, "  Total vertices: {}", section.vertex_count())?;
    if let Some(b) = section.bounds() {
        writeln!(out, "  Extent:         {:.3} in x {:.3} in", b.width(), b.height())?;
    }
    writeln!(out)?;

    if e.is_degenerate() {
        writeln!(out, "Section has no area; all properties are zero.")?;
        writeln!(out)?;
        writeln!(out, "{}", RULE)?;
        return Ok(());
    }

    writeln!(out, "Elastic:")?;
    writeln!(out, "  A     = {:.4} in²", e.area)?;
    writeln!(out, "  x̄     = {:.4} in", e.centroid_x)?;
    writeln!(out, "  ȳ     = {:.4} in", e.centroid_y)?;
    writeln!(out, "  Ix    = {:.4} in⁴", e.ix)?;
    writeln!(out, "  Iy    = {:.4} in⁴", e.iy)?;
    writeln!(out, "  Ixy   = {:.4} in⁴", e.ixy)?;
    writeln!(out, "  Sx    = {:.4} in³ (top), {:.4} in³ (bottom)", e.sx_top, e.sx_bot)?;
    writeln!(out, "  Sy    = {:.4} in³ (left), {:.4} in³ (right)", e.sy_left, e.sy_right)?;
    writeln!(out, "  rx    = {:.4} in", e.rx)?;
    writeln!(out, "  ry    = {:.4} in", e.ry)?;
    writeln!(out)?;

    writeln!(out, "Principal:")?;
    writeln!(out, "  I1    = {:.4} in⁴", e.ix_principal)?;
    writeln!(out, "  I2    = {:.4} in⁴", e.iy_principal)?;
    writeln!(out, "  θ     = {:.4}°", e.theta_principal.to_degrees())?;
    writeln!(out)?;

    writeln!(out, "Plastic:")?;
    writeln!(out, "  PNA x = {:.4} in (horizontal axis at y)", p.pna_x)?;
    writeln!(out, "  PNA y = {:.4} in (vertical axis at x)", p.pna_y)?;
    writeln!(out, "  Zx    = {:.4} in³  (Zx/Sx = {:.3})", p.zx, p.shape_factor_x(e.sx_min()))?;
    writeln!(out, "  Zy    = {:.4} in³  (Zy/Sy = {:.3})", p.zy, p.shape_factor_y(e.sy_min()))?;
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use section_core::compute_section_properties;
    use section_core::shapes::rectangle;

    #[test]
    fn test_rectangle_report() {
        let section = rectangle(10.0, 8.0).unwrap();
        let props = compute_section_properties(&section);
        let text = Report {
            title: "R-1",
            section: &section,
            props: &props,
        }
        .to_string();

        assert!(text.contains("SECTION PROPERTIES: R-1"));
        assert!(text.contains("Outer boundary: 4 vertices"));
        assert!(text.contains("A     = 80.0000 in²"));
        assert!(text.contains("Zx    = 160.0000 in³"));
        assert!(text.contains("Zx/Sx = 1.500"));
    }

    #[test]
    fn test_degenerate_report() {
        let section = CrossSection::default();
        let props = compute_section_properties(&section);
        let text = Report {
            title: "empty",
            section: &section,
            props: &props,
        }
        .to_string();
        assert!(text.contains("all properties are zero"));
        assert!(!text.contains("Plastic:"));
    }
}
