// src/error.rs

use thiserror::Error;

/// Errors returned by the root finders.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RootFindError {
    /// f(lo) and f(hi) share a sign, so the interval carries no guaranteed root.
    #[error("No guaranteed root in [{lo}, {hi}] (f(lo) = {f_lo}, f(hi) = {f_hi})")]
    NoGuaranteedRoot { lo: f64, hi: f64, f_lo: f64, f_hi: f64 },

    /// Newton step hit a zero derivative.
    #[error("Derivative vanished at x = {x} after {iterations} iterations")]
    DerivativeVanished { x: f64, iterations: usize },

    /// Iteration cap reached before the residual dropped under the tolerance.
    #[error("Failed to converge after {iterations} iterations (x: {x}, residual: {residual})")]
    DidNotConverge { iterations: usize, x: f64, residual: f64 },
}

/// Errors returned by the integer searches.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerSearchError {
    /// 2^p - 1 does not fit in an i64.
    #[error("Mersenne number 2^{exponent} - 1 overflows a 64-bit signed integer")]
    ExponentOverflow { exponent: u32 },
}
