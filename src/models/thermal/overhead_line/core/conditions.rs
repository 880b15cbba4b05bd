//! Parameter bundles describing a rating scenario.

use thiserror::Error;
use uom::si::{
    angle::degree,
    f64::{Angle, HeatFluxDensity, Length, ThermodynamicTemperature, Velocity},
    length::foot,
    thermodynamic_temperature::degree_celsius,
    velocity::foot_per_second,
};

use crate::support::units::{
    LinearHeatCapacity,
    us_customary::{PerFoot, PerSquareFoot},
};

use super::{
    convection::convective_heat_loss,
    radiation::radiated_heat_loss,
    resistance::ResistanceTable,
    solar::{Atmosphere, SolarGeometry, solar_heat_gain},
};

/// Weather around the conductor, held constant for a calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weather {
    pub ambient_temperature: ThermodynamicTemperature,
    pub wind_speed: Velocity,
    /// Angle between wind and conductor axis; any value, folded to 0–90°.
    pub wind_angle: Angle,
    /// Conductor elevation above sea level.
    pub elevation: Length,
    pub atmosphere: Atmosphere,
    /// Measured solar irradiance.
    ///
    /// When `None`, the irradiance is derived from the sun position.
    pub solar_irradiance: Option<HeatFluxDensity>,
}

/// Physical and electrical properties of a bare conductor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conductor {
    /// Outer diameter.
    pub diameter: Length,
    /// Solar absorptivity `α`, nominally 0 to 1.
    pub absorptivity: f64,
    /// Emissivity `ε`, nominally 0 to 1.
    pub emissivity: f64,
    pub resistance: ResistanceTable,
    /// Total heat capacity per unit length, `m·Cp`.
    ///
    /// Only used by transient calculations.
    pub heat_capacity: LinearHeatCapacity,
}

/// Everything needed to evaluate the heat balance of a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineConditions {
    pub weather: Weather,
    pub solar: SolarGeometry,
    pub conductor: Conductor,
}

/// The heat balance could not be evaluated to a finite value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("heat balance is not finite at {conductor_temperature:?}")]
pub struct NonFiniteBalance {
    pub conductor_temperature: ThermodynamicTemperature,
}

/// Heat balance terms at one conductor temperature, in W/ft and Ω/ft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct BalanceTerms {
    pub(super) convection: f64,
    pub(super) radiation: f64,
    pub(super) solar: f64,
    pub(super) resistance: f64,
}

impl BalanceTerms {
    /// Heat the conductor sheds with no current flowing, `q_c + q_r - q_s`.
    pub(super) fn net_cooling(&self) -> f64 {
        self.convection + self.radiation - self.solar
    }

    /// Net heating rate, `I²R + q_s - q_c - q_r`, W/ft.
    pub(super) fn net_heating(&self, current: f64) -> f64 {
        self.resistance * current.powi(2) - self.net_cooling()
    }
}

/// [`LineConditions`] resolved once into the US-customary scalars used by
/// the IEEE 738 correlations.
#[derive(Debug, Clone, Copy)]
pub(super) struct LineScalars {
    /// °C
    pub(super) ambient_temperature: f64,
    /// ft/s
    wind_speed: f64,
    /// degrees
    wind_angle: f64,
    /// ft
    elevation: f64,
    emissivity: f64,
    /// ft
    diameter: f64,
    /// W/ft, independent of conductor temperature.
    solar: f64,
    /// J/(ft·°C)
    pub(super) heat_capacity: f64,
    resistance: ResistanceTable,
}

impl LineScalars {
    pub(super) fn new(conditions: &LineConditions) -> Self {
        let LineConditions {
            weather,
            solar,
            conductor,
        } = conditions;

        let elevation = weather.elevation.get::<foot>();
        let diameter = conductor.diameter.get::<foot>();

        Self {
            ambient_temperature: weather.ambient_temperature.get::<degree_celsius>(),
            wind_speed: weather.wind_speed.get::<foot_per_second>(),
            wind_angle: weather.wind_angle.get::<degree>(),
            elevation,
            emissivity: conductor.emissivity,
            diameter,
            solar: solar_heat_gain(
                weather.solar_irradiance.map(PerSquareFoot::per_square_foot),
                solar,
                elevation,
                weather.atmosphere,
                conductor.absorptivity,
                diameter,
            ),
            heat_capacity: conductor.heat_capacity.per_foot(),
            resistance: conductor.resistance,
        }
    }

    /// Evaluates the heat balance, rejecting terms that aren't finite.
    pub(super) fn finite_balance_at(
        &self,
        conductor_temperature: f64,
    ) -> Result<BalanceTerms, NonFiniteBalance> {
        let terms = self.balance_at(conductor_temperature);

        if !terms.net_cooling().is_finite() || !terms.resistance.is_finite() {
            return Err(NonFiniteBalance {
                conductor_temperature: ThermodynamicTemperature::new::<degree_celsius>(
                    conductor_temperature,
                ),
            });
        }

        Ok(terms)
    }

    /// Evaluates every heat balance term at a conductor temperature in °C.
    pub(super) fn balance_at(&self, conductor_temperature: f64) -> BalanceTerms {
        BalanceTerms {
            convection: convective_heat_loss(
                self.ambient_temperature,
                self.wind_speed,
                self.wind_angle,
                self.elevation,
                conductor_temperature,
                self.diameter,
            ),
            radiation: radiated_heat_loss(
                self.ambient_temperature,
                conductor_temperature,
                self.emissivity,
                self.diameter,
            ),
            solar: self.solar,
            resistance: self.resistance.at_celsius(conductor_temperature),
        }
    }
}
