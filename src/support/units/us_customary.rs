//! US-customary per-foot units used by IEEE 738.
//!
//! The standard's empirical correlations are fit in °C, ft, ft/s, W/ft and
//! W/ft². These helpers build the per-length quantities from per-foot scalars
//! and read them back, so conversions happen once at each boundary.

use uom::si::{
    area::square_foot,
    electrical_resistance::ohm,
    f64::{Area, ElectricalResistance, HeatCapacity, HeatFluxDensity, Length, Power},
    heat_capacity::joule_per_kelvin,
    length::foot,
    power::watt,
};

use super::{LinearHeatCapacity, LinearHeatRate, LinearResistance};

fn one_foot() -> Length {
    Length::new::<foot>(1.0)
}

fn one_square_foot() -> Area {
    Area::new::<square_foot>(1.0)
}

/// Creates a [`LinearHeatRate`] from a value in W/ft.
#[must_use]
pub fn watts_per_foot(value: f64) -> LinearHeatRate {
    Power::new::<watt>(value) / one_foot()
}

/// Creates a [`LinearResistance`] from a value in Ω/ft.
#[must_use]
pub fn ohms_per_foot(value: f64) -> LinearResistance {
    ElectricalResistance::new::<ohm>(value) / one_foot()
}

/// Creates a [`LinearHeatCapacity`] from a value in J/(ft·°C).
#[must_use]
pub fn joules_per_foot_celsius(value: f64) -> LinearHeatCapacity {
    HeatCapacity::new::<joule_per_kelvin>(value) / one_foot()
}

/// Creates a [`HeatFluxDensity`] from a value in W/ft².
#[must_use]
pub fn watts_per_square_foot(value: f64) -> HeatFluxDensity {
    Power::new::<watt>(value) / one_square_foot()
}

/// Reads a per-length quantity back in its per-foot unit.
///
/// - [`LinearHeatRate`] in W/ft
/// - [`LinearResistance`] in Ω/ft
/// - [`LinearHeatCapacity`] in J/(ft·°C)
pub trait PerFoot {
    /// Returns the value per foot of conductor.
    fn per_foot(self) -> f64;
}

impl PerFoot for LinearHeatRate {
    fn per_foot(self) -> f64 {
        let power: Power = self * one_foot();
        power.get::<watt>()
    }
}

impl PerFoot for LinearResistance {
    fn per_foot(self) -> f64 {
        let resistance: ElectricalResistance = self * one_foot();
        resistance.get::<ohm>()
    }
}

impl PerFoot for LinearHeatCapacity {
    fn per_foot(self) -> f64 {
        let capacity: HeatCapacity = self * one_foot();
        capacity.get::<joule_per_kelvin>()
    }
}

/// Reads an irradiance in W/ft².
pub trait PerSquareFoot {
    /// Returns the value per square foot.
    fn per_square_foot(self) -> f64;
}

impl PerSquareFoot for HeatFluxDensity {
    fn per_square_foot(self) -> f64 {
        let power: Power = self * one_square_foot();
        power.get::<watt>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{heat_flux_density::watt_per_square_meter, length::meter};

    #[test]
    fn per_foot_values_survive_conversion() {
        assert_relative_eq!(watts_per_foot(24.988).per_foot(), 24.988, epsilon = 1e-12);
        assert_relative_eq!(
            ohms_per_foot(2.844_705e-5).per_foot(),
            2.844_705e-5,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            joules_per_foot_celsius(305.6328).per_foot(),
            305.6328,
            epsilon = 1e-9
        );
    }

    #[test]
    fn per_foot_is_scaled_from_si() {
        // 1 W/ft spread over 0.3048 m of conductor.
        let q = watts_per_foot(1.0) * Length::new::<meter>(0.3048);
        assert_relative_eq!(q.get::<watt>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn irradiance_in_square_feet() {
        let q = watts_per_square_foot(94.6);

        assert_relative_eq!(q.per_square_foot(), 94.6, epsilon = 1e-9);
        assert_relative_eq!(
            q.get::<watt_per_square_meter>(),
            94.6 / 0.092_903_04,
            max_relative = 1e-12
        );
    }
}
