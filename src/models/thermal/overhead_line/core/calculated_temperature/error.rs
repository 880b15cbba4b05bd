use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::ThermodynamicTemperature;

use crate::{
    models::thermal::overhead_line::core::NonFiniteBalance, support::units::LinearHeatRate,
};

/// Errors that can occur while solving for the steady-state temperature.
#[derive(Debug, Error)]
pub enum CalculatedTemperatureError {
    /// No temperature within the search domain carries the requested current.
    #[error("no solution up to {upper_bound:?} after {expansions} expansions")]
    NoBracket {
        /// Largest upper bound tried.
        upper_bound: ThermodynamicTemperature,

        /// Number of times the upper bound was doubled.
        expansions: usize,
    },

    /// The heat balance could not be evaluated at ambient temperature.
    #[error(transparent)]
    NonFinite(#[from] NonFiniteBalance),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best heat balance residual achieved, `q_c + q_r - q_s - I²R`.
        residual: LinearHeatRate,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
