use uom::si::{
    angle::degree,
    f64::{Angle, Length, ThermodynamicTemperature, Time, Velocity},
    length::foot,
    thermodynamic_temperature::degree_celsius,
    time::second,
    velocity::foot_per_second,
};

use crate::support::units::us_customary::joules_per_foot_celsius;

use super::{
    Atmosphere, Conductor, LineConditions, ResistancePoint, ResistanceTable, SolarGeometry,
    TimeStepping, Weather,
};

pub(crate) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

pub(crate) fn stepping(seconds: f64, steps: usize) -> TimeStepping {
    TimeStepping {
        time_step: Time::new::<second>(seconds),
        steps,
    }
}

/// Drake 795 kcmil ACSR on an east-west line at 30°N, 11:00 on June 10.
pub(crate) fn drake_june() -> LineConditions {
    LineConditions {
        weather: Weather {
            ambient_temperature: celsius(40.0),
            wind_speed: Velocity::new::<foot_per_second>(2.0),
            wind_angle: Angle::new::<degree>(90.0),
            elevation: Length::new::<foot>(0.0),
            atmosphere: Atmosphere::Clear,
            solar_irradiance: None,
        },
        solar: SolarGeometry {
            month: 6,
            day_of_month: 10,
            hour_of_day: 11.0,
            latitude: Angle::new::<degree>(30.0),
            line_azimuth: Angle::new::<degree>(90.0),
        },
        conductor: Conductor {
            diameter: Length::new::<foot>(0.092_333_333),
            absorptivity: 0.8,
            emissivity: 0.8,
            resistance: ResistanceTable {
                low: ResistancePoint::new(25.0, 2.208_33e-5),
                high: ResistancePoint::new(75.0, 2.632_58e-5),
            },
            heat_capacity: joules_per_foot_celsius(305.6328),
        },
    }
}

/// A resistance table with both points at 25 °C, which makes every
/// resistance evaluation non-finite.
pub(crate) fn degenerate_resistance() -> ResistanceTable {
    ResistanceTable {
        low: ResistancePoint::new(25.0, 2.208_33e-5),
        high: ResistancePoint::new(25.0, 2.632_58e-5),
    }
}
