//! Overhead conductor thermal rating models (IEEE 738).
//!
//! This module provides [`twine_core::Model`] adapters over the IEEE 738
//! heat balance. Each adapter owns the line conditions and, where needed,
//! a solver configuration; the varying quantity is the model input.
//! The computational core is in the internal [`core`] module.
//!
//! ```
//! use twine_ampacity::models::thermal::overhead_line::{
//!     Atmosphere, Conductor, LineConditions, ResistancePoint, ResistanceTable,
//!     SolarGeometry, SteadyStateRating, Weather,
//! };
//! use twine_ampacity::support::units::us_customary::joules_per_foot_celsius;
//! use twine_core::Model;
//! use uom::si::{
//!     angle::degree, electric_current::ampere, f64::*, length::foot,
//!     thermodynamic_temperature::degree_celsius, velocity::foot_per_second,
//! };
//!
//! let conditions = LineConditions {
//!     weather: Weather {
//!         ambient_temperature: ThermodynamicTemperature::new::<degree_celsius>(40.0),
//!         wind_speed: Velocity::new::<foot_per_second>(2.0),
//!         wind_angle: Angle::new::<degree>(90.0),
//!         elevation: Length::new::<foot>(0.0),
//!         atmosphere: Atmosphere::Clear,
//!         solar_irradiance: None,
//!     },
//!     solar: SolarGeometry {
//!         month: 6,
//!         day_of_month: 10,
//!         hour_of_day: 11.0,
//!         latitude: Angle::new::<degree>(30.0),
//!         line_azimuth: Angle::new::<degree>(90.0),
//!     },
//!     conductor: Conductor {
//!         diameter: Length::new::<foot>(0.092_333_333),
//!         absorptivity: 0.8,
//!         emissivity: 0.8,
//!         resistance: ResistanceTable {
//!             low: ResistancePoint::new(25.0, 2.208_33e-5),
//!             high: ResistancePoint::new(75.0, 2.632_58e-5),
//!         },
//!         heat_capacity: joules_per_foot_celsius(305.6328),
//!     },
//! };
//!
//! let rating = SteadyStateRating::new(conditions);
//! let current = rating
//!     .call(&ThermodynamicTemperature::new::<degree_celsius>(100.0))
//!     .unwrap();
//! assert!((current.get::<ampere>() - 1028.28).abs() < 0.5);
//! ```

pub(crate) mod core;

pub use self::core::{
    Atmosphere, CalculatedTemperatureConfig, CalculatedTemperatureError, Conductor,
    ConvectionTerms, HeatBalance, LineConditions, Material, MaterialLayer, NonFiniteBalance,
    RatingError, ResistancePoint, ResistanceTable, SolarGeometry, SolarPosition, TimeStepping,
    TransientError, TransientRatingConfig, TransientRatingError, Weather, adjust_r, air_density,
    air_thermal_conductivity, air_viscosity, calculated_temperature, conductor_temperature_rise,
    convective_heat_loss, film_temperature, fold_wind_angle, heat_balance,
    heat_capacity_from_layers, radiated_heat_loss, solar_heat_gain, solar_position,
    temperature_history, thermal_rating, transient_rating, wind_direction_factor,
};

use twine_core::Model;
use uom::si::f64::{ElectricCurrent, TemperatureInterval, ThermodynamicTemperature};

/// Steady-state current that holds the conductor at the input temperature.
#[derive(Debug, Clone)]
pub struct SteadyStateRating {
    conditions: LineConditions,
}

impl SteadyStateRating {
    /// Creates a rating model for fixed line conditions.
    #[must_use]
    pub fn new(conditions: LineConditions) -> Self {
        Self { conditions }
    }
}

impl Model for SteadyStateRating {
    type Input = ThermodynamicTemperature;
    type Output = ElectricCurrent;
    type Error = RatingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        thermal_rating(&self.conditions, *input)
    }
}

/// Steady-state conductor temperature for the input current.
#[derive(Debug, Clone)]
pub struct SteadyStateTemperature {
    conditions: LineConditions,
    config: CalculatedTemperatureConfig,
}

impl SteadyStateTemperature {
    /// Creates a temperature model with the default solver configuration.
    #[must_use]
    pub fn new(conditions: LineConditions) -> Self {
        Self::with_config(conditions, CalculatedTemperatureConfig::default())
    }

    #[must_use]
    pub fn with_config(conditions: LineConditions, config: CalculatedTemperatureConfig) -> Self {
        Self { conditions, config }
    }
}

impl Model for SteadyStateTemperature {
    type Input = ElectricCurrent;
    type Output = ThermodynamicTemperature;
    type Error = CalculatedTemperatureError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        calculated_temperature(&self.conditions, *input, &self.config)
    }
}

/// Input to [`TransientRise`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransientInput {
    pub initial_temperature: ThermodynamicTemperature,
    pub current: ElectricCurrent,
    pub stepping: TimeStepping,
}

/// Conductor temperature change under a constant current.
#[derive(Debug, Clone)]
pub struct TransientRise {
    conditions: LineConditions,
}

impl TransientRise {
    #[must_use]
    pub fn new(conditions: LineConditions) -> Self {
        Self { conditions }
    }
}

impl Model for TransientRise {
    type Input = TransientInput;
    type Output = TemperatureInterval;
    type Error = TransientError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        conductor_temperature_rise(
            &self.conditions,
            input.initial_temperature,
            input.current,
            &input.stepping,
        )
    }
}

/// Input to [`TransientRating`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransientLimit {
    pub initial_temperature: ThermodynamicTemperature,
    pub max_temperature: ThermodynamicTemperature,
    pub stepping: TimeStepping,
}

/// Constant current that reaches a temperature limit within a fixed time.
#[derive(Debug, Clone)]
pub struct TransientRating {
    conditions: LineConditions,
    config: TransientRatingConfig,
}

impl TransientRating {
    /// Creates a transient rating model with the default solver configuration.
    #[must_use]
    pub fn new(conditions: LineConditions) -> Self {
        Self::with_config(conditions, TransientRatingConfig::default())
    }

    #[must_use]
    pub fn with_config(conditions: LineConditions, config: TransientRatingConfig) -> Self {
        Self { conditions, config }
    }
}

impl Model for TransientRating {
    type Input = TransientLimit;
    type Output = ElectricCurrent;
    type Error = TransientRatingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        transient_rating(
            &self.conditions,
            input.initial_temperature,
            input.max_temperature,
            &input.stepping,
            &self.config,
        )
    }
}
