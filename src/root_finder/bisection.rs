// src/root_finder/bisection.rs
//
// Bisection: halve a sign-change interval until the midpoint residual is
// within tolerance. Linear convergence, one function evaluation per step.

use log::{debug, trace};
use crate::error::RootFindError;
use crate::root_finder::config::SolverConfig;
use crate::root_finder::root::Root;

/// Finds a root of `f` inside `[lo, hi]` by repeated bisection.
///
/// `f(lo)` and `f(hi)` must have opposite signs, or one of them must be zero.
/// This is a sufficiency heuristic, not an existence test: an interval holding
/// an even number of roots is reported as [`RootFindError::NoGuaranteedRoot`].
///
/// Convergence is judged on the residual: the returned midpoint `m` satisfies
/// `|f(m)| <= config.tolerance`. An endpoint that already satisfies the
/// tolerance is returned without bisecting.
///
/// # Examples
/// ```
/// use mathkit::root_finder::{bisection, SolverConfig};
///
/// let root = bisection(|x| x * x - 2.0, 0.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((root.x - std::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
pub fn bisection<F>(f: F, lo: f64, hi: f64, config: &SolverConfig) -> Result<Root, RootFindError>
where
    F: Fn(f64) -> f64,
{
    let mut lo = lo;
    let mut hi = hi;
    let mut f_lo = f(lo);
    let f_hi = f(hi);

    if !brackets_root(f_lo, f_hi) {
        return Err(RootFindError::NoGuaranteedRoot { lo, hi, f_lo, f_hi });
    }

    if config.is_converged(f_lo) {
        debug!("Bisection: endpoint {} is already a root", lo);
        return Ok(Root::new(lo, f_lo, 0));
    }
    if config.is_converged(f_hi) {
        debug!("Bisection: endpoint {} is already a root", hi);
        return Ok(Root::new(hi, f_hi, 0));
    }

    let mut iterations = 1;
    let mut mid = (lo + hi) / 2.0;
    let mut f_mid = f(mid);

    while !config.is_converged(f_mid) {
        if config.is_exhausted(iterations) {
            return Err(RootFindError::DidNotConverge { iterations, x: mid, residual: f_mid });
        }

        // keep the half whose endpoints still disagree in sign
        if opposite_signs(f_lo, f_mid) {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }

        mid = (lo + hi) / 2.0;
        f_mid = f(mid);
        iterations += 1;
        trace!("Bisection step {}: [{}, {}] -> m = {}, f(m) = {}", iterations, lo, hi, mid, f_mid);
    }

    debug!("Bisection converged to {} after {} iterations (residual {})", mid, iterations, f_mid);
    Ok(Root::new(mid, f_mid, iterations))
}

/// True unless both values are strictly the same sign. NaN never brackets.
fn brackets_root(f_lo: f64, f_hi: f64) -> bool {
    if f_lo.is_nan() || f_hi.is_nan() {
        return false;
    }
    !((f_lo > 0.0 && f_hi > 0.0) || (f_lo < 0.0 && f_hi < 0.0))
}

fn opposite_signs(a: f64, b: f64) -> bool {
    (a < 0.0) != (b < 0.0)
}
