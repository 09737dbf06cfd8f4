// src/root_finder/config.rs

use serde::{Deserialize, Serialize};

/// Default residual tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default iteration cap. Far above what a converging bisection or Newton
/// solve on f64 ever needs.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Convergence settings shared by every solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Absolute bound on the residual |f(x)|.
    pub tolerance: f64,

    /// Iteration cap. `None` iterates until convergence, however long that takes.
    pub max_iterations: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: Some(DEFAULT_MAX_ITERATIONS),
        }
    }
}

impl SolverConfig {
    pub fn new(tolerance: f64, max_iterations: Option<usize>) -> Self {
        SolverConfig { tolerance, max_iterations }
    }

    /// Same tolerance, no iteration cap.
    pub fn unbounded(tolerance: f64) -> Self {
        SolverConfig { tolerance, max_iterations: None }
    }

    pub(crate) fn is_converged(&self, residual: f64) -> bool {
        // NaN residuals never count as converged
        residual.abs() <= self.tolerance
    }

    pub(crate) fn is_exhausted(&self, iterations: usize) -> bool {
        matches!(self.max_iterations, Some(cap) if iterations >= cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.max_iterations, Some(10_000));
    }

    #[test]
    fn test_unbounded_never_exhausts() {
        let config = SolverConfig::unbounded(1e-6);
        assert!(!config.is_exhausted(usize::MAX));
    }

    #[test]
    fn test_nan_residual_is_not_converged() {
        let config = SolverConfig::default();
        assert!(!config.is_converged(f64::NAN));
        assert!(config.is_converged(-1e-7));
        assert!(!config.is_converged(1e-5));
    }
}
