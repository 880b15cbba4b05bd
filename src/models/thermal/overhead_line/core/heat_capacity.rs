//! Conductor heat capacity from its material makeup (IEEE 738 eq. 24).

use uom::{
    ConstZero,
    si::{
        f64::{LinearMassDensity, SpecificHeatCapacity},
        specific_heat_capacity::joule_per_kilogram_kelvin,
    },
};

use crate::support::units::LinearHeatCapacity;

/// Conductor strand material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    Steel,
    Aluminum,
}

impl Material {
    /// Specific heat at 25 °C.
    #[must_use]
    pub fn specific_heat(self) -> SpecificHeatCapacity {
        let value = match self {
            Self::Steel => 481.0,
            Self::Aluminum => 897.0,
        };
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(value)
    }
}

/// One material layer of a conductor and its mass per unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialLayer {
    pub material: Material,
    pub mass_per_length: LinearMassDensity,
}

/// Total heat capacity per unit length, `Σ m_i·Cp_i`.
///
/// An empty slice yields zero heat capacity.
#[must_use]
pub fn heat_capacity_from_layers(layers: &[MaterialLayer]) -> LinearHeatCapacity {
    layers
        .iter()
        .map(|layer| layer.mass_per_length * layer.material.specific_heat())
        .fold(LinearHeatCapacity::ZERO, |total, layer| total + layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{HeatCapacity, Length},
        heat_capacity::joule_per_kelvin,
        length::meter,
        linear_mass_density::kilogram_per_meter,
    };

    use crate::support::units::us_customary::PerFoot;

    fn per_meter(capacity: LinearHeatCapacity) -> f64 {
        let total: HeatCapacity = capacity * Length::new::<meter>(1.0);
        total.get::<joule_per_kelvin>()
    }

    #[test]
    fn drake_steel_core_and_aluminum_strands() {
        let layers = [
            MaterialLayer {
                material: Material::Steel,
                mass_per_length: LinearMassDensity::new::<kilogram_per_meter>(0.5119),
            },
            MaterialLayer {
                material: Material::Aluminum,
                mass_per_length: LinearMassDensity::new::<kilogram_per_meter>(1.116),
            },
        ];

        let capacity = heat_capacity_from_layers(&layers);

        let expected = 0.5119 * 481.0 + 1.116 * 897.0;
        assert_relative_eq!(per_meter(capacity), expected, max_relative = 1e-12);
        assert_relative_eq!(capacity.per_foot(), expected * 0.3048, max_relative = 1e-12);
    }

    #[test]
    fn no_layers_no_capacity() {
        assert_relative_eq!(per_meter(heat_capacity_from_layers(&[])), 0.0);
    }
}
