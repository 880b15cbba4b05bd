//! Steady-state heat balance (IEEE 738 eq. 1b).
//!
//! In steady state the Joule heating `I²R` plus solar gain equals the
//! convective and radiated losses, so the current that holds the conductor
//! at a temperature is `I = sqrt((q_c + q_r - q_s) / R)`.

use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        electric_current::ampere,
        f64::{ElectricCurrent, ThermodynamicTemperature},
        thermodynamic_temperature::degree_celsius,
    },
};

use crate::support::units::{
    LinearHeatRate, LinearResistance,
    us_customary::{ohms_per_foot, watts_per_foot},
};

use super::{
    NonFiniteBalance,
    conditions::{BalanceTerms, LineConditions, LineScalars},
};

/// Heat balance terms for a conductor at a given temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatBalance {
    /// Convective heat loss, `q_c`.
    pub convection: LinearHeatRate,
    /// Radiated heat loss, `q_r`.
    pub radiation: LinearHeatRate,
    /// Solar heat gain, `q_s`.
    pub solar: LinearHeatRate,
    /// Conductor resistance at this temperature, `R`.
    pub resistance: LinearResistance,
}

impl HeatBalance {
    /// Heat shed with no current flowing, `q_c + q_r - q_s`.
    #[must_use]
    pub fn net_cooling(&self) -> LinearHeatRate {
        self.convection + self.radiation - self.solar
    }

    /// Joule heating `I²R` for the given current.
    #[must_use]
    pub fn joule_heating(&self, current: ElectricCurrent) -> LinearHeatRate {
        self.resistance * current * current
    }
}

impl From<BalanceTerms> for HeatBalance {
    fn from(terms: BalanceTerms) -> Self {
        Self {
            convection: watts_per_foot(terms.convection),
            radiation: watts_per_foot(terms.radiation),
            solar: watts_per_foot(terms.solar),
            resistance: ohms_per_foot(terms.resistance),
        }
    }
}

/// Errors from a steady-state rating.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RatingError {
    /// Solar gain exceeds the combined convective and radiated losses.
    ///
    /// The conductor runs hotter than `conductor_temperature` even with no
    /// current, so no real current holds it there.
    #[error("no steady state at {conductor_temperature:?}: net cooling {net_cooling:?}")]
    NoSteadyState {
        conductor_temperature: ThermodynamicTemperature,
        /// `q_c + q_r - q_s`, negative.
        net_cooling: LinearHeatRate,
    },

    /// The heat balance could not be evaluated at this temperature.
    #[error(transparent)]
    NonFinite(#[from] NonFiniteBalance),
}

/// Evaluates the heat balance terms at a conductor temperature.
#[must_use]
pub fn heat_balance(
    conditions: &LineConditions,
    conductor_temperature: ThermodynamicTemperature,
) -> HeatBalance {
    LineScalars::new(conditions)
        .balance_at(conductor_temperature.get::<degree_celsius>())
        .into()
}

/// Returns the steady-state current that holds the conductor at
/// `conductor_temperature`.
///
/// A conductor temperature below ambient needs no current, so the rating is
/// zero.
///
/// # Errors
///
/// Returns [`RatingError::NoSteadyState`] when solar gain exceeds the
/// combined losses at this temperature, or [`RatingError::NonFinite`] when a
/// heat balance term isn't a finite number.
pub fn thermal_rating(
    conditions: &LineConditions,
    conductor_temperature: ThermodynamicTemperature,
) -> Result<ElectricCurrent, RatingError> {
    let line = LineScalars::new(conditions);
    let temperature = conductor_temperature.get::<degree_celsius>();

    if temperature < line.ambient_temperature {
        return Ok(ElectricCurrent::ZERO);
    }

    let terms = line.finite_balance_at(temperature)?;
    let net_cooling = terms.net_cooling();

    if net_cooling < 0.0 {
        return Err(RatingError::NoSteadyState {
            conductor_temperature,
            net_cooling: watts_per_foot(net_cooling),
        });
    }

    let rating = (net_cooling / terms.resistance).sqrt();
    Ok(ElectricCurrent::new::<ampere>(rating))
}
