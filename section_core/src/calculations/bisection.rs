//! # Bounded Bisection
//!
//! Solves `f(x) = target` for a monotone non-decreasing `f` on a closed
//! bracket. Used by the plastic engine to find the cut position that splits a
//! section's area in half, but has no knowledge of geometry.
//!
//! ## Algorithm
//!
//! 1. Evaluate `f` at the bracket midpoint
//! 2. Stop if `|f(mid) − target| < tolerance`
//! 3. Otherwise keep the half whose ends straddle the target
//! 4. After `max_iterations` evaluations, return the final bracket midpoint
//!
//! Running out of iterations is reported through
//! [`BisectionOutcome::converged`], never as an error.

use serde::{Deserialize, Serialize};

/// Result of a bisection search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BisectionOutcome {
    /// Best estimate of the crossing point
    pub root: f64,
    /// Number of function evaluations performed
    pub iterations: usize,
    /// Whether the tolerance was met before the iteration cap
    pub converged: bool,
    /// `f(root) − target` at the last evaluated point
    pub residual: f64,
}

/// Find `x` in `[lo, hi]` with `f(x) ≈ target`.
///
/// # Arguments
/// * `f` - Monotone non-decreasing function of the bracket coordinate
/// * `lo`, `hi` - Bracket ends (swapped if given reversed)
/// * `target` - Value to reach
/// * `tolerance` - Absolute tolerance on `f(x) − target`
/// * `max_iterations` - Evaluation cap; zero returns the bracket midpoint unevaluated
///
/// # Example
/// ```rust
/// use section_core::calculations::bisection::bisect;
///
/// let outcome = bisect(|x| 3.0 * x, 0.0, 10.0, 12.0, 1e-9, 100);
/// assert!(outcome.converged);
/// assert!((outcome.root - 4.0).abs() < 1e-9);
/// ```
pub fn bisect<F>(f: F, lo: f64, hi: f64, target: f64, tolerance: f64, max_iterations: usize) -> BisectionOutcome
where
    F: Fn(f64) -> f64,
{
    let (mut lo, mut hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let mut residual = f64::NAN;

    for iteration in 1..=max_iterations {
        let mid = 0.5 * (lo + hi);
        residual = f(mid) - target;

        if residual.abs() < tolerance {
            return BisectionOutcome {
                root: mid,
                iterations: iteration,
                converged: true,
                residual,
            };
        }

        if residual < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    BisectionOutcome {
        root: 0.5 * (lo + hi),
        iterations: max_iterations,
        converged: false,
        residual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, 10.0, 25.0; "inside bracket")]
    #[test_case(10.0, 0.0, 25.0; "reversed bracket")]
    #[test_case(-5.0, 5.0, 0.0; "symmetric bracket")]
    fn test_converges_on_quadratic(lo: f64, hi: f64, target: f64) {
        // x|x| is monotone everywhere
        let outcome = bisect(|x| x * x.abs(), lo, hi, target, 1e-10, 100);
        assert!(outcome.converged, "{:?}", outcome);
        assert!((outcome.root * outcome.root.abs() - target).abs() < 1e-10);
        assert!(outcome.iterations <= 100);
    }

    #[test]
    fn test_iteration_cap_returns_bracket_midpoint() {
        // Step function: the tolerance can never be met
        let outcome = bisect(|x| if x < 1.0 { 0.0 } else { 2.0 }, 0.0, 4.0, 1.0, 1e-12, 3);
        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, 3);
        // Brackets: [0,4] -> mid 2 (hi) -> [0,2] mid 1 (hi) -> [0,1] mid 0.5 (lo) -> [0.5,1]
        assert_eq!(outcome.root, 0.75);
        assert_eq!(outcome.residual, -1.0);
    }

    #[test]
    fn test_step_function_narrows_to_jump() {
        let outcome = bisect(|x| if x < 1.0 { 0.0 } else { 2.0 }, 0.0, 4.0, 1.0, 1e-12, 100);
        assert!(!outcome.converged);
        assert!((outcome.root - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_iterations() {
        let outcome = bisect(|x| x, 2.0, 6.0, 5.0, 1e-6, 0);
        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.root, 4.0);
        assert!(outcome.residual.is_nan());
    }

    #[test]
    fn test_collapsed_bracket() {
        let outcome = bisect(|x| x, 3.0, 3.0, 3.0, 1e-9, 100);
        assert!(outcome.converged);
        assert_eq!(outcome.root, 3.0);
        assert_eq!(outcome.iterations, 1);
    }

    #[test]
    fn test_target_out_of_range_pins_to_end() {
        let outcome = bisect(|x| x, 0.0, 1.0, 5.0, 1e-9, 60);
        assert!(!outcome.converged);
        assert!((outcome.root - 1.0).abs() < 1e-9);
    }
}
