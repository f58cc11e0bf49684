//! # Section Properties Facade
//!
//! Runs the elastic engine, then the plastic engine, on one cross-section and
//! pairs the results. Stateless: safe to call repeatedly and from many threads
//! on independent sections.
//!
//! ## Example
//!
//! ```rust
//! use section_core::calculations::compute_section_properties;
//! use section_core::geometry::{CrossSection, Polygon};
//!
//! let section = CrossSection::new(Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 8.0), (0.0, 8.0)]));
//! let props = compute_section_properties(&section);
//!
//! assert!((props.elastic.area - 80.0).abs() < 1e-9);
//! assert!((props.plastic.zx - 160.0).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use super::elastic::{self, ElasticProperties};
use super::plastic::{self, PlasticProperties};
use super::NormalizedRings;
use crate::geometry::CrossSection;
use crate::settings::SolverSettings;

/// Elastic and plastic properties of one cross-section snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionProperties {
    pub elastic: ElasticProperties,
    pub plastic: PlasticProperties,
}

/// Compute all section properties with the default solver settings.
pub fn compute_section_properties(section: &CrossSection) -> SectionProperties {
    compute_section_properties_with(section, &SolverSettings::default())
}

/// Compute all section properties with the given solver settings.
///
/// Settings are used as given; call [`SolverSettings::validate`] first if
/// they come from an untrusted source. A zero iteration cap still yields a
/// result: each PNA is then the midpoint of the section's extent.
pub fn compute_section_properties_with(section: &CrossSection, settings: &SolverSettings) -> SectionProperties {
    let rings = NormalizedRings::from_section(section);
    let elastic = elastic::compute_from_rings(&rings);
    let plastic = plastic::compute_from_rings(&rings, elastic.area, settings);
    SectionProperties { elastic, plastic }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
