//! Steady-state conductor temperature for a given current.
//!
//! Inverts [`thermal_rating`](super::thermal_rating) by bisection on the
//! conductor temperature. The bracket starts at `[ambient, 256 °C]` and its
//! upper bound doubles until it holds the solution.

mod config;
mod error;
mod problem;

pub use config::CalculatedTemperatureConfig;
pub use error::CalculatedTemperatureError;

use tracing::debug;
use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        electric_current::ampere,
        f64::{ElectricCurrent, ThermodynamicTemperature},
        thermodynamic_temperature::degree_celsius,
    },
};

use crate::support::units::us_customary::watts_per_foot;

use super::{
    NonFiniteBalance,
    bracket::{Expansion, expand_upper},
    conditions::{LineConditions, LineScalars},
};

use problem::{SteadyStateModel, SteadyStateProblem};

/// Initial upper bound of the temperature bracket, °C.
const INITIAL_UPPER_BOUND: f64 = 256.0;

/// Returns the steady-state conductor temperature at which the line carries
/// `current`.
///
/// A negative current short-circuits to 0 °C. A current too small to lift
/// the conductor off ambient returns the ambient temperature.
///
/// # Errors
///
/// Returns [`CalculatedTemperatureError`] if no temperature within the
/// expansion ceiling carries the current, the heat balance can't be evaluated
/// at ambient, or the bisection fails to converge.
pub fn calculated_temperature(
    conditions: &LineConditions,
    current: ElectricCurrent,
    config: &CalculatedTemperatureConfig,
) -> Result<ThermodynamicTemperature, CalculatedTemperatureError> {
    if current < ElectricCurrent::ZERO {
        return Ok(ThermodynamicTemperature::new::<degree_celsius>(0.0));
    }

    let line = LineScalars::new(conditions);
    let model = SteadyStateModel::new(&line);
    let problem = SteadyStateProblem::new(current.get::<ampere>());

    let residual_at = |temperature: f64| -> Result<f64, NonFiniteBalance> {
        let input = ThermodynamicTemperature::new::<degree_celsius>(temperature);
        let point = model.call(&input)?;
        Ok(problem.residual(&point.terms))
    };

    let lower = line.ambient_temperature;
    if residual_at(lower)? >= 0.0 {
        return Ok(conditions.weather.ambient_temperature);
    }

    // A balance that can't be evaluated has overshot the solution.
    let expansion = expand_upper(INITIAL_UPPER_BOUND.max(lower), config.max_expansions, |t| {
        !matches!(residual_at(t), Ok(residual) if residual < 0.0)
    });
    let upper = match expansion {
        Expansion::Reached { upper, .. } => upper,
        Expansion::Exhausted { upper, expansions } => {
            return Err(CalculatedTemperatureError::NoBracket {
                upper_bound: ThermodynamicTemperature::new::<degree_celsius>(upper),
                expansions,
            });
        }
    };

    let solution = bisection::solve(
        &model,
        &problem,
        [lower, upper],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A balance that can't be evaluated only happens far above the
            // solution, so steer the search back down.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(CalculatedTemperatureError::MaxIters {
            residual: watts_per_foot(solution.residual),
            iters: solution.iters,
        });
    }

    let temperature = solution.snapshot.output.conductor_temperature;
    debug!(
        current = current.get::<ampere>(),
        temperature = temperature.get::<degree_celsius>(),
        iters = solution.iters,
        "steady-state temperature solved"
    );

    Ok(temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::f64::TemperatureInterval;
    use uom::si::temperature_interval::degree_celsius as delta_celsius;

    use crate::models::thermal::overhead_line::core::{
        heat_balance,
        test_support::{celsius, degenerate_resistance, drake_june},
        thermal_rating,
    };
    use crate::support::units::us_customary::{PerFoot, watts_per_square_foot};

    fn amps(value: f64) -> ElectricCurrent {
        ElectricCurrent::new::<ampere>(value)
    }

    fn solve(conditions: &LineConditions, current: f64) -> ThermodynamicTemperature {
        let config = CalculatedTemperatureConfig::default();
        calculated_temperature(conditions, amps(current), &config)
            .expect("temperature solve should succeed")
    }

    #[test]
    fn roundtrip() {
        let conditions = drake_june();
        let rating = thermal_rating(&conditions, celsius(100.0)).unwrap();

        let temperature = solve(&conditions, rating.get::<ampere>());
        assert_relative_eq!(temperature.get::<degree_celsius>(), 100.0, epsilon = 0.02);

        let back = thermal_rating(&conditions, temperature).unwrap();
        assert_relative_eq!(back.get::<ampere>(), rating.get::<ampere>(), epsilon = 0.5);
    }

    #[test]
    fn expands_past_initial_bracket() {
        let temperature = solve(&drake_june(), 3000.0);
        assert_relative_eq!(temperature.get::<degree_celsius>(), 472.5, epsilon = 0.05);
    }

    #[test]
    fn negative_current_is_zero_celsius() {
        let temperature = solve(&drake_june(), -10.0);
        assert_eq!(temperature, celsius(0.0));
    }

    #[test]
    fn zero_current_balances_sun_against_losses() {
        let conditions = drake_june();
        let temperature = solve(&conditions, 0.0);

        assert_relative_eq!(temperature.get::<degree_celsius>(), 51.882, epsilon = 0.02);
        let balance = heat_balance(&conditions, temperature);
        assert_relative_eq!(balance.net_cooling().per_foot(), 0.0, epsilon = 0.05);
    }

    #[test]
    fn zero_current_without_sun_stays_at_ambient() {
        let mut conditions = drake_june();
        conditions.weather.solar_irradiance = Some(watts_per_square_foot(0.0));

        assert_eq!(solve(&conditions, 0.0), celsius(40.0));
    }

    #[test]
    fn reports_exhausted_bracket() {
        let config = CalculatedTemperatureConfig {
            max_expansions: 0,
            ..CalculatedTemperatureConfig::default()
        };

        match calculated_temperature(&drake_june(), amps(3000.0), &config) {
            Err(CalculatedTemperatureError::NoBracket {
                upper_bound,
                expansions,
            }) => {
                assert_relative_eq!(upper_bound.get::<degree_celsius>(), 256.0);
                assert_eq!(expansions, 0);
            }
            other => panic!("expected an exhausted bracket, got {other:?}"),
        }
    }

    #[test]
    fn tighter_tolerance_gets_closer() {
        let conditions = drake_june();
        let rating = thermal_rating(&conditions, celsius(150.0)).unwrap();
        let config = CalculatedTemperatureConfig {
            temp_tol: TemperatureInterval::new::<delta_celsius>(1e-6),
            ..CalculatedTemperatureConfig::default()
        };

        let temperature = calculated_temperature(&conditions, rating, &config).unwrap();
        assert_relative_eq!(temperature.get::<degree_celsius>(), 150.0, epsilon = 1e-4);
    }

    #[test]
    fn reports_iteration_limit() {
        let config = CalculatedTemperatureConfig {
            max_iters: 1,
            ..CalculatedTemperatureConfig::default()
        };

        match calculated_temperature(&drake_june(), amps(1500.0), &config) {
            Err(CalculatedTemperatureError::MaxIters { residual, iters }) => {
                assert_eq!(iters, 1);
                assert!(residual.per_foot().abs() > 0.0);
            }
            other => panic!("expected the iteration limit, got {other:?}"),
        }
    }

    #[test]
    fn degenerate_resistance_table_is_not_finite() {
        let mut conditions = drake_june();
        conditions.conductor.resistance = degenerate_resistance();

        match calculated_temperature(&conditions, amps(1000.0), &Default::default()) {
            Err(CalculatedTemperatureError::NonFinite(NonFiniteBalance {
                conductor_temperature,
            })) => {
                assert_relative_eq!(conductor_temperature.get::<degree_celsius>(), 40.0);
            }
            other => panic!("expected a non-finite balance, got {other:?}"),
        }
    }

    #[test]
    fn steers_below_an_overflowing_balance() {
        // The radiated loss overflows well inside the initial bracket, so
        // every evaluation above about 70 °C fails and the search has to be
        // steered back toward ambient.
        let mut conditions = drake_june();
        conditions.conductor.emissivity = 1.5e307;

        let temperature = solve(&conditions, 1000.0);
        assert_relative_eq!(temperature.get::<degree_celsius>(), 40.0, epsilon = 0.01);
    }
}
