use twine_solvers::equation::bisection;
use uom::si::{f64::TemperatureInterval, temperature_interval::degree_celsius as delta_celsius};

/// Solver configuration for the steady-state temperature search.
#[derive(Debug, Clone, Copy)]
pub struct CalculatedTemperatureConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Maximum number of times the upper temperature bound may double.
    pub max_expansions: usize,

    /// Absolute tolerance on the conductor temperature.
    pub temp_tol: TemperatureInterval,
}

impl Default for CalculatedTemperatureConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            max_expansions: 64,
            temp_tol: TemperatureInterval::new::<delta_celsius>(0.01),
        }
    }
}

impl CalculatedTemperatureConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_celsius>(),
            x_rel_tol: 0.0,
            residual_tol: 1e-12,
        }
    }
}
