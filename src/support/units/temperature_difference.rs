use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::degree_celsius as delta_celsius,
    thermodynamic_temperature::degree_celsius,
};

/// Extension trait for taking the interval between absolute temperatures.
///
/// [`uom`] deliberately keeps [`ThermodynamicTemperature`] and
/// [`TemperatureInterval`] apart, so `t1 - t2` doesn't yield an interval.
/// See [#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_celsius>(
            self.get::<degree_celsius>() - other.get::<degree_celsius>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::kelvin;

    #[test]
    fn conductor_above_ambient() {
        let ambient = ThermodynamicTemperature::new::<degree_celsius>(40.0);
        let conductor = ThermodynamicTemperature::new::<degree_celsius>(100.0);

        assert_relative_eq!(conductor.minus(ambient).get::<delta_celsius>(), 60.0);
        assert_relative_eq!(ambient.minus(conductor).get::<delta_celsius>(), -60.0);
    }

    #[test]
    fn same_interval_in_any_unit() {
        let low = ThermodynamicTemperature::new::<kelvin>(300.0);
        let high = ThermodynamicTemperature::new::<degree_celsius>(39.35);

        assert_relative_eq!(high.minus(low).get::<delta_celsius>(), 12.5, epsilon = 1e-9);
    }
}
