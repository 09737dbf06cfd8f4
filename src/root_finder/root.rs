// src/root_finder/root.rs

use serde::{Deserialize, Serialize};

/// A converged root estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Root {
    /// The estimate itself.
    pub x: f64,

    /// f(x) at the estimate; |residual| <= tolerance.
    pub residual: f64,

    /// Number of bisection or Newton steps taken. Zero when the starting
    /// point already satisfied the tolerance.
    pub iterations: usize,
}

impl Root {
    pub fn new(x: f64, residual: f64, iterations: usize) -> Self {
        Root { x, residual, iterations }
    }
}
