//! IEEE 738 heat balance for bare overhead conductors.
//!
//! All physics works in US customary units internally (feet, W/ft, °C,
//! ft/s). Parameter bundles carry `uom` quantities and are converted to
//! scalars once per evaluation in [`LineScalars`](conditions::LineScalars).
//!
//! The four entry points are:
//!
//! - [`thermal_rating`]: steady-state current for a conductor temperature
//! - [`calculated_temperature`]: steady-state temperature for a current
//! - [`conductor_temperature_rise`]: transient temperature change under a
//!   constant current
//! - [`transient_rating`]: constant current that reaches a temperature limit
//!   within a given time

mod bracket;
mod calculated_temperature;
mod conditions;
mod convection;
mod heat_capacity;
mod radiation;
mod resistance;
mod solar;
mod steady_state;
mod transient;
mod transient_rating;

#[cfg(test)]
pub(crate) mod test_support;

pub use calculated_temperature::{
    CalculatedTemperatureConfig, CalculatedTemperatureError, calculated_temperature,
};
pub use conditions::{Conductor, LineConditions, NonFiniteBalance, Weather};
pub use convection::{
    ConvectionTerms, air_density, air_thermal_conductivity, air_viscosity, convective_heat_loss,
    film_temperature, fold_wind_angle, wind_direction_factor,
};
pub use heat_capacity::{Material, MaterialLayer, heat_capacity_from_layers};
pub use radiation::radiated_heat_loss;
pub use resistance::{ResistancePoint, ResistanceTable, adjust_r};
pub use solar::{Atmosphere, SolarGeometry, SolarPosition, solar_heat_gain, solar_position};
pub use steady_state::{HeatBalance, RatingError, heat_balance, thermal_rating};
pub use transient::{TimeStepping, TransientError, conductor_temperature_rise, temperature_history};
pub use transient_rating::{TransientRatingConfig, TransientRatingError, transient_rating};
