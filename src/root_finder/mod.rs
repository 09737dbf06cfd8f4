// src/root_finder/mod.rs
//
// Root finders for a single real-valued function.
//
// Solver        Needs              Convergence
// ─────────────────────────────────────────────────
// Bisection     sign-change [a,b]  linear, always inside [a,b]
// Newton        f and f'           quadratic near a simple root
//
// Both judge convergence on the absolute residual |f(x)| <= tolerance and
// share a SolverConfig carrying that tolerance and an optional iteration cap.

pub mod bisection;
pub mod config;
pub mod newton;
pub mod root;

pub use bisection::bisection;
pub use config::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
pub use newton::newton_iteration;
pub use root::Root;

use crate::error::RootFindError;

/// A solver bound to one [`SolverConfig`].
///
/// ```
/// use mathkit::root_finder::RootFinder;
///
/// let finder = RootFinder::default();
/// let root = finder.bisection(|x| x * x - 2.0, 0.0, 2.0).unwrap();
/// assert!((root.x - 1.414214).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RootFinder {
    config: SolverConfig,
}

impl RootFinder {
    pub fn new(config: SolverConfig) -> Self {
        RootFinder { config }
    }

    /// Finder with the given tolerance and the default iteration cap.
    pub fn with_tolerance(tolerance: f64) -> Self {
        RootFinder {
            config: SolverConfig { tolerance, ..SolverConfig::default() },
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn bisection<F>(&self, f: F, lo: f64, hi: f64) -> Result<Root, RootFindError>
    where
        F: Fn(f64) -> f64,
    {
        bisection::bisection(f, lo, hi, &self.config)
    }

    pub fn newton_iteration<F, D>(&self, f: F, df: D, x0: f64) -> Result<Root, RootFindError>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        newton::newton_iteration(f, df, x0, &self.config)
    }
}
