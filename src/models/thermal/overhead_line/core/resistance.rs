//! Temperature-dependent conductor resistance (IEEE 738 eq. 10).

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

use crate::support::units::{
    LinearResistance,
    us_customary::{PerFoot, ohms_per_foot},
};

/// Returns the conductor resistance at `conductor_temperature`, Ω/ft.
///
/// Linear interpolation between `(t_low, r_low)` and `(t_high, r_high)`,
/// extended as-is outside that range since conductors routinely run above
/// `t_high`. The endpoints are reproduced exactly.
///
/// Requires `t_high != t_low`; equal temperatures produce a non-finite result.
///
/// # Arguments
///
/// * `conductor_temperature` - °C
/// * `t_low`, `t_high` - reference temperatures, °C
/// * `r_low`, `r_high` - resistance at the reference temperatures, Ω/ft
#[must_use]
pub fn adjust_r(
    conductor_temperature: f64,
    t_low: f64,
    t_high: f64,
    r_low: f64,
    r_high: f64,
) -> f64 {
    let fraction = (conductor_temperature - t_low) / (t_high - t_low);
    r_low * (1.0 - fraction) + r_high * fraction
}

/// A tabulated resistance at a reference temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistancePoint {
    pub temperature: ThermodynamicTemperature,
    pub resistance: LinearResistance,
}

impl ResistancePoint {
    /// Creates a point from a temperature in °C and a resistance in Ω/ft.
    #[must_use]
    pub fn new(temperature_c: f64, resistance_ohm_per_ft: f64) -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(temperature_c),
            resistance: ohms_per_foot(resistance_ohm_per_ft),
        }
    }
}

/// The two reference resistances published for a conductor.
///
/// The `high` temperature must differ from the `low` one (and is expected to
/// be above it). This isn't checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceTable {
    pub low: ResistancePoint,
    pub high: ResistancePoint,
}

impl ResistanceTable {
    /// Resistance at the given conductor temperature.
    #[must_use]
    pub fn at(&self, conductor_temperature: ThermodynamicTemperature) -> LinearResistance {
        let temperature = conductor_temperature.get::<degree_celsius>();
        ohms_per_foot(self.at_celsius(temperature))
    }

    /// Resistance in Ω/ft at a conductor temperature in °C.
    pub(super) fn at_celsius(&self, conductor_temperature: f64) -> f64 {
        adjust_r(
            conductor_temperature,
            self.low.temperature.get::<degree_celsius>(),
            self.high.temperature.get::<degree_celsius>(),
            self.low.resistance.per_foot(),
            self.high.resistance.per_foot(),
        )
    }
}
