use twine_solvers::equation::bisection;
use uom::si::{electric_current::ampere, f64::ElectricCurrent};

/// Solver configuration for the transient current search.
#[derive(Debug, Clone, Copy)]
pub struct TransientRatingConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Maximum number of times the upper current bound may double.
    pub max_expansions: usize,

    /// Absolute tolerance on the current.
    pub current_tol: ElectricCurrent,
}

impl Default for TransientRatingConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            max_expansions: 64,
            current_tol: ElectricCurrent::new::<ampere>(0.01),
        }
    }
}

impl TransientRatingConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.current_tol.get::<ampere>(),
            x_rel_tol: 0.0,
            residual_tol: 1e-12,
        }
    }
}
