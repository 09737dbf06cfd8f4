// src/root_finder/newton.rs
//
// Newton's method: x_{n+1} = x_n - f(x_n) / f'(x_n).
// Quadratic convergence near a simple root, no interval required.

use log::{debug, trace};
use crate::error::RootFindError;
use crate::root_finder::config::SolverConfig;
use crate::root_finder::root::Root;

/// Finds a root of `f` starting from `x0`, given its derivative `df`.
///
/// Stops when `|f(x)| <= config.tolerance`. A zero derivative at any iterate
/// returns [`RootFindError::DerivativeVanished`]. Divergence and oscillation
/// are not detected; only `config.max_iterations` bounds them.
///
/// # Examples
/// ```
/// use mathkit::root_finder::{newton_iteration, SolverConfig};
///
/// let root = newton_iteration(|x| x * x - 1.0, |x| 2.0 * x, 10.0, &SolverConfig::default()).unwrap();
/// assert!((root.x - 1.0).abs() < 1e-6);
/// ```
pub fn newton_iteration<F, D>(f: F, df: D, x0: f64, config: &SolverConfig) -> Result<Root, RootFindError>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut x = x0;
    let mut fx = f(x);
    let mut iterations = 0;

    while !config.is_converged(fx) {
        if config.is_exhausted(iterations) {
            return Err(RootFindError::DidNotConverge { iterations, x, residual: fx });
        }

        let slope = df(x);
        if slope == 0.0 {
            return Err(RootFindError::DerivativeVanished { x, iterations });
        }

        x -= fx / slope;
        fx = f(x);
        iterations += 1;
        trace!("Newton step {}: x = {}, f(x) = {}", iterations, x, fx);
    }

    debug!("Newton converged to {} after {} iterations (residual {})", x, iterations, fx);
    Ok(Root::new(x, fx, iterations))
}
