//! Transient conductor heating (IEEE 738 section 4.6).
//!
//! Forward Euler integration of `m·Cp · dT/dt = I²R + q_s - q_c - q_r`
//! with current and weather held constant. The step size is the caller's
//! choice; nothing checks it for stability, so a coarse step with a large
//! current can overshoot or oscillate.

use thiserror::Error;
use tracing::trace;
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, TemperatureInterval, ThermodynamicTemperature, Time},
    temperature_interval::degree_celsius as delta_celsius,
    thermodynamic_temperature::degree_celsius,
    time::second,
};

use super::conditions::{LineConditions, LineScalars};

/// Fixed time stepping for a transient run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeStepping {
    pub time_step: Time,
    pub steps: usize,
}

impl TimeStepping {
    /// Total simulated duration.
    #[must_use]
    pub fn duration(&self) -> Time {
        #[allow(clippy::cast_precision_loss)]
        let steps = self.steps as f64;
        self.time_step * steps
    }
}

/// Errors from a transient integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransientError {
    /// The conductor temperature stopped being a finite number.
    #[error("conductor temperature diverged at step {step}")]
    NonFinite {
        /// One-based step at which the temperature diverged.
        step: usize,
    },
}

/// Integrates the conductor temperature in °C, calling `visit` after each
/// step with the new temperature.
///
/// Returns the final temperature.
pub(super) fn integrate(
    line: &LineScalars,
    initial_temperature: f64,
    current: f64,
    stepping: &TimeStepping,
    mut visit: impl FnMut(f64),
) -> Result<f64, TransientError> {
    let time_step = stepping.time_step.get::<second>();
    let mut temperature = initial_temperature;

    for step in 1..=stepping.steps {
        let terms = line.balance_at(temperature);
        temperature += terms.net_heating(current) * time_step / line.heat_capacity;

        if !temperature.is_finite() {
            return Err(TransientError::NonFinite { step });
        }

        trace!(step, temperature, "transient step");
        visit(temperature);
    }

    Ok(temperature)
}

/// Returns the conductor temperature after every step, starting with the
/// initial temperature.
///
/// A conductor starting below ambient isn't integrated; the history is just
/// the initial temperature.
///
/// # Errors
///
/// Returns [`TransientError::NonFinite`] if the integration diverges.
pub fn temperature_history(
    conditions: &LineConditions,
    initial_temperature: ThermodynamicTemperature,
    current: ElectricCurrent,
    stepping: &TimeStepping,
) -> Result<Vec<ThermodynamicTemperature>, TransientError> {
    let line = LineScalars::new(conditions);
    let initial = initial_temperature.get::<degree_celsius>();

    let mut history = vec![initial_temperature];
    if initial < line.ambient_temperature {
        return Ok(history);
    }

    history.reserve(stepping.steps);
    integrate(
        &line,
        initial,
        current.get::<ampere>(),
        stepping,
        |temperature| history.push(ThermodynamicTemperature::new::<degree_celsius>(temperature)),
    )?;

    Ok(history)
}

/// Returns the net temperature rise after integrating for `stepping.steps`
/// steps at a constant `current`.
///
/// A conductor starting below ambient has zero rise.
///
/// # Errors
///
/// Returns [`TransientError::NonFinite`] if the integration diverges.
pub fn conductor_temperature_rise(
    conditions: &LineConditions,
    initial_temperature: ThermodynamicTemperature,
    current: ElectricCurrent,
    stepping: &TimeStepping,
) -> Result<TemperatureInterval, TransientError> {
    let line = LineScalars::new(conditions);
    rise(
        &line,
        initial_temperature.get::<degree_celsius>(),
        current.get::<ampere>(),
        stepping,
    )
    .map(TemperatureInterval::new::<delta_celsius>)
}

/// Temperature rise in °C, zero when starting below ambient.
pub(super) fn rise(
    line: &LineScalars,
    initial_temperature: f64,
    current: f64,
    stepping: &TimeStepping,
) -> Result<f64, TransientError> {
    if initial_temperature < line.ambient_temperature {
        return Ok(0.0);
    }
    let last = integrate(line, initial_temperature, current, stepping, |_| {})?;
    Ok(last - initial_temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::{ConstZero, si::time::minute};

    use crate::models::thermal::overhead_line::core::test_support::{celsius, drake_june, stepping};

    fn amps(value: f64) -> ElectricCurrent {
        ElectricCurrent::new::<ampere>(value)
    }

    fn rise_c(current: f64, steps: usize) -> f64 {
        let run = stepping(60.0, steps);
        let rise = conductor_temperature_rise(&drake_june(), celsius(100.0), amps(current), &run);
        rise.unwrap().get::<delta_celsius>()
    }

    #[test]
    fn single_step_at_high_current() {
        assert_relative_eq!(rise_c(2000.0, 1), 16.4333, epsilon = 1e-3);
    }

    #[test]
    fn conductor_cools_without_current() {
        assert_relative_eq!(rise_c(0.0, 1), -5.9049, epsilon = 1e-3);
    }

    #[test]
    fn steady_state_current_holds_temperature() {
        assert!(rise_c(1028.283, 10).abs() < 1e-2);
    }

    #[test]
    fn zero_steps_is_zero_rise() {
        assert_eq!(rise_c(2000.0, 0), 0.0);
    }

    #[test]
    fn rise_grows_with_current() {
        let rises: Vec<f64> = [0.0, 500.0, 1000.0, 1500.0, 2000.0, 3000.0]
            .into_iter()
            .map(|current| rise_c(current, 31))
            .collect();

        assert!(rises.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn below_ambient_start_does_not_move() {
        let conditions = drake_june();
        let start = celsius(20.0);

        let run = stepping(60.0, 5);

        let rise = conductor_temperature_rise(&conditions, start, amps(2000.0), &run).unwrap();
        assert_eq!(rise, TemperatureInterval::ZERO);

        let history = temperature_history(&conditions, start, amps(2000.0), &run).unwrap();
        assert_eq!(history, vec![start]);
    }

    #[test]
    fn history_ends_at_the_rise() {
        let conditions = drake_june();
        let start = celsius(100.0);
        let run = stepping(60.0, 31);

        let history = temperature_history(&conditions, start, amps(1500.0), &run).unwrap();
        let rise = conductor_temperature_rise(&conditions, start, amps(1500.0), &run).unwrap();

        assert_eq!(history.len(), 32);
        assert_eq!(history[0], start);
        assert_relative_eq!(
            history[31].get::<degree_celsius>() - 100.0,
            rise.get::<delta_celsius>(),
            epsilon = 1e-9
        );
        assert!(history.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn divergence_is_reported() {
        let result = conductor_temperature_rise(
            &drake_june(),
            celsius(100.0),
            amps(1e160),
            &stepping(60.0, 3),
        );
        assert_eq!(result, Err(TransientError::NonFinite { step: 1 }));
    }

    #[test]
    fn duration() {
        assert_relative_eq!(stepping(60.0, 31).duration().get::<minute>(), 31.0);
    }
}
