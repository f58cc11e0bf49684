//! # section_core - Cross-Section Property Engine
//!
//! `section_core` computes geometric and structural properties of arbitrary
//! polygonal cross-sections, with or without holes. All inputs and outputs are
//! JSON-serializable so sections and results can be stored, diffed, or handed
//! to other tools as plain data.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take a section and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Never Panics on Geometry**: Degenerate sections yield all-zero records
//!
//! ## Quick Start
//!
//! ```rust
//! use section_core::{compute_section_properties, CrossSection, Polygon};
//!
//! // 10 wide × 8 tall rectangle with a 2 × 2 hole
//! let section = CrossSection::new(Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 8.0), (0.0, 8.0)]))
//!     .with_hole(Polygon::from_coords(&[(4.0, 3.0), (4.0, 5.0), (6.0, 5.0), (6.0, 3.0)]));
//!
//! let props = compute_section_properties(&section);
//! assert!((props.elastic.area - 76.0).abs() < 1e-9);
//! assert!((props.plastic.pna_x - 4.0).abs() < 1e-6);
//!
//! let json = serde_json::to_string_pretty(&props).unwrap();
//! assert!(json.contains("\"sx_top\""));
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Points, polygons, clipping, and the cross-section container
//! - [`calculations`] - Elastic and plastic property engines
//! - [`shapes`] - Parametric templates (I-shape, channel, pipe, ...)
//! - [`settings`] - Solver settings for the plastic neutral axis search
//! - [`file_io`] - Section files with atomic saves and version checks
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod geometry;
pub mod settings;
pub mod shapes;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute_section_properties, compute_section_properties_with, SectionProperties};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_section_file, save_section_file, SectionFile};
pub use geometry::{CrossSection, Point, Polygon};
pub use settings::SolverSettings;
pub use shapes::ShapeTemplate;
