use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{ElectricCurrent, TemperatureInterval};

use crate::models::thermal::overhead_line::core::TransientError;

/// Errors that can occur while solving for a transient rating.
#[derive(Debug, Error)]
pub enum TransientRatingError {
    /// No current within the search domain reaches the temperature limit.
    ///
    /// This is expected when the conductor starts below ambient, since such
    /// a run is never integrated.
    #[error("no solution up to {upper_bound:?} after {expansions} expansions")]
    NoBracket {
        /// Largest upper bound tried.
        upper_bound: ElectricCurrent,

        /// Number of times the upper bound was doubled.
        expansions: usize,
    },

    /// A transient integration failed.
    #[error("transient integration failed")]
    Transient(#[from] TransientError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best residual achieved, final rise minus allowed rise.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
