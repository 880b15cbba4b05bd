//! Transient rating: the constant current that takes the conductor to a
//! temperature limit within a given time.
//!
//! Inverts [`conductor_temperature_rise`](super::conductor_temperature_rise)
//! by bisection on current over `[0, 4096 A]`, doubling the upper bound
//! until it reaches the limit.

mod config;
mod error;
mod problem;

pub use config::TransientRatingConfig;
pub use error::TransientRatingError;

use tracing::debug;
use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        electric_current::ampere,
        f64::{ElectricCurrent, TemperatureInterval, ThermodynamicTemperature},
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::degree_celsius,
        time::second,
    },
};

use crate::support::units::TemperatureDifference;

use super::{
    TimeStepping, TransientError,
    bracket::{Expansion, expand_upper},
    conditions::{LineConditions, LineScalars},
};

use problem::{TransientModel, TransientProblem};

/// Initial upper bound of the current bracket, A.
const INITIAL_UPPER_BOUND: f64 = 4096.0;

/// Returns the constant current that raises the conductor from
/// `initial_temperature` to `max_temperature` over `stepping`.
///
/// Weather is held constant for the whole run. A limit below the initial
/// temperature short-circuits to zero, as does a limit the conductor
/// reaches with no current at all.
///
/// # Errors
///
/// Returns [`TransientRatingError`] if no current within the expansion
/// ceiling reaches the limit, the integration diverges at zero current, or
/// the bisection fails to converge.
pub fn transient_rating(
    conditions: &LineConditions,
    initial_temperature: ThermodynamicTemperature,
    max_temperature: ThermodynamicTemperature,
    stepping: &TimeStepping,
    config: &TransientRatingConfig,
) -> Result<ElectricCurrent, TransientRatingError> {
    if max_temperature < initial_temperature {
        return Ok(ElectricCurrent::ZERO);
    }

    let line = LineScalars::new(conditions);
    let initial = initial_temperature.get::<degree_celsius>();
    let allowed_rise = max_temperature
        .minus(initial_temperature)
        .get::<delta_celsius>();

    let model = TransientModel::new(&line, initial, stepping);
    let problem = TransientProblem::new(allowed_rise);

    let residual_at = |current: f64| -> Result<f64, TransientError> {
        let point = model.call(&ElectricCurrent::new::<ampere>(current))?;
        Ok(problem.residual(&point))
    };

    if residual_at(0.0)? >= 0.0 {
        return Ok(ElectricCurrent::ZERO);
    }

    // A run that diverges has overshot the limit.
    let expansion = expand_upper(INITIAL_UPPER_BOUND, config.max_expansions, |current| {
        !matches!(residual_at(current), Ok(residual) if residual < 0.0)
    });
    let upper = match expansion {
        Expansion::Reached { upper, .. } => upper,
        Expansion::Exhausted { upper, expansions } => {
            return Err(TransientRatingError::NoBracket {
                upper_bound: ElectricCurrent::new::<ampere>(upper),
                expansions,
            });
        }
    };

    let solution = bisection::solve(
        &model,
        &problem,
        [0.0, upper],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Divergence means the trial current heats far past the limit.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(TransientRatingError::MaxIters {
            residual: TemperatureInterval::new::<delta_celsius>(solution.residual),
            iters: solution.iters,
        });
    }

    let current = solution.snapshot.output.current;
    debug!(
        current = current.get::<ampere>(),
        allowed_rise,
        duration_s = stepping.duration().get::<second>(),
        iters = solution.iters,
        "transient rating solved"
    );

    Ok(current)
}
