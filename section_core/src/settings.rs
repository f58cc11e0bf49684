//! # Solver Settings
//!
//! Tunables for the plastic neutral axis search. The defaults give
//! machine-precision convergence for any practical section size and are what
//! [`compute_section_properties`](crate::calculations::compute_section_properties)
//! uses.
//!
//! ## JSON Example
//!
//! ```json
//! { "max_iterations": 100, "relative_tolerance": 1e-10 }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default bisection iteration cap
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Default convergence tolerance, as a fraction of the section's net area
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-10;

/// Settings for the plastic neutral axis bisection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Maximum number of bisection steps per bending direction
    pub max_iterations: usize,

    /// Stop once |area below − A/2| < A × relative_tolerance
    pub relative_tolerance: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
        }
    }
}

impl SolverSettings {
    /// Validate settings before use.
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_iterations == 0 {
            return Err(CalcError::invalid_input(
                "max_iterations",
                "0",
                "At least one bisection step is required",
            ));
        }
        if !self.relative_tolerance.is_finite() || self.relative_tolerance <= 0.0 {
            return Err(CalcError::invalid_input(
                "relative_tolerance",
                self.relative_tolerance.to_string(),
                "Tolerance must be a positive finite number",
            ));
        }
        Ok(())
    }

    /// Absolute area tolerance for a section of the given net area
    pub fn area_tolerance(&self, net_area: f64) -> f64 {
        net_area * self.relative_tolerance
    }
}
