//! Solar heat gain (IEEE 738 section 4.4.5 and annex A).
//!
//! The sun's position is derived from the date, the hour of day and the
//! latitude. The clear or industrial sky irradiance follows from the solar
//! altitude, and the gain depends on how squarely the rays hit the line.

use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

use crate::support::calendar::day_of_year;

/// Atmosphere condition used to select the sky irradiance correlation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Atmosphere {
    #[default]
    Clear,
    Industrial,
}

impl Atmosphere {
    /// Polynomial coefficients `A..G` of eq. 18 (Table 3), W/ft².
    fn coefficients(self) -> [f64; 7] {
        match self {
            Self::Clear => [
                -3.9241,
                5.9276,
                -1.7856e-1,
                3.223e-3,
                -3.3549e-5,
                1.8053e-7,
                -3.7868e-10,
            ],
            Self::Industrial => [
                4.9408,
                1.3208,
                6.1444e-2,
                -2.9411e-3,
                5.07752e-5,
                -4.03627e-7,
                1.22967e-9,
            ],
        }
    }

    /// Total solar and sky irradiance at sea level, W/ft².
    ///
    /// Floored at zero: with the sun below the horizon the polynomial goes
    /// negative.
    #[must_use]
    pub fn irradiance(self, solar_altitude_deg: f64) -> f64 {
        let q = self
            .coefficients()
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * solar_altitude_deg + c);
        q.max(0.0)
    }
}

/// Date, time and line orientation used to place the sun.
///
/// `day_of_month` is not validated against `month`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarGeometry {
    /// Month, 1 (January) to 12 (December).
    pub month: u32,
    /// Day of the month, 1 to 31.
    pub day_of_month: u32,
    /// Local solar hour, 0 to 24 (11:00 AM is 11.0).
    pub hour_of_day: f64,
    pub latitude: Angle,
    /// Azimuth of the line; a line running east-west is at 90°.
    pub line_azimuth: Angle,
}

/// Sun position derived from a [`SolarGeometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub declination: Angle,
    /// Displacement from solar noon, 15° per hour.
    pub hour_angle: Angle,
    /// Elevation of the sun above the horizon.
    pub altitude: Angle,
    pub azimuth: Angle,
}

impl SolarPosition {
    /// Effective angle of incidence of the sun's rays on a line with the
    /// given azimuth (eq. 9).
    #[must_use]
    pub fn incidence(&self, line_azimuth: Angle) -> Angle {
        let altitude = self.altitude.get::<radian>();
        let relative_azimuth = self.azimuth.get::<radian>() - line_azimuth.get::<radian>();
        Angle::new::<radian>((altitude.cos() * relative_azimuth.cos()).acos())
    }
}

/// Solar declination for an ordinal day, radians (eq. 16b).
fn declination(day_of_year: u32) -> f64 {
    let p = ((284.0 + f64::from(day_of_year)) / 365.0 * 360.0).to_radians();
    (23.4583 * p.sin()).to_radians()
}

/// Azimuth constant `C` in degrees (Table 2).
///
/// Resolves the quadrant of `arctan(χ)` from the side of solar noon and the
/// sign of the azimuth variable.
fn azimuth_constant(hour_angle_deg: f64, chi: f64) -> f64 {
    if (-180.0..0.0).contains(&hour_angle_deg) {
        if chi >= 0.0 { 0.0 } else { 180.0 }
    } else if chi < 0.0 {
        180.0
    } else {
        360.0
    }
}

/// Places the sun for the given date, time and latitude.
#[must_use]
pub fn solar_position(geometry: &SolarGeometry) -> SolarPosition {
    let latitude = geometry.latitude.get::<radian>();
    let delta = declination(day_of_year(geometry.month, geometry.day_of_month));

    let hour_angle_deg = (geometry.hour_of_day - 12.0) * 15.0;
    let omega = hour_angle_deg.to_radians();

    // Eq. 16a, clamped against rounding with the sun overhead.
    let sin_altitude = latitude.cos() * delta.cos() * omega.cos() + latitude.sin() * delta.sin();
    let altitude = sin_altitude.clamp(-1.0, 1.0).asin();

    // Eq. 17b. With the sun straight overhead at noon this is 0/0; any
    // azimuth is then as good as another.
    let chi = omega.sin() / (latitude.sin() * omega.cos() - latitude.cos() * delta.tan());
    let chi = if chi.is_nan() { 0.0 } else { chi };
    let azimuth = azimuth_constant(hour_angle_deg, chi).to_radians() + chi.atan();

    SolarPosition {
        declination: Angle::new::<radian>(delta),
        hour_angle: Angle::new::<degree>(hour_angle_deg),
        altitude: Angle::new::<radian>(altitude),
        azimuth: Angle::new::<radian>(azimuth),
    }
}

/// Irradiance multiplier for the conductor elevation, ft.
///
/// The Table H.5 step factor combined with the eq. 20 polynomial.
fn elevation_factor(elevation: f64) -> f64 {
    let step = if elevation > 15_000.0 {
        1.3
    } else if elevation > 10_000.0 {
        1.25
    } else if elevation > 5_000.0 {
        1.15
    } else {
        1.0
    };
    step * (1.0 + 3.5e-5 * elevation - 1.0e-9 * elevation.powi(2))
}

/// Returns the solar heat gain `q_s`, W/ft.
///
/// When `irradiance` is `Some`, it is the measured irradiance in W/ft² and
/// is used directly: no sun position is computed. Otherwise the irradiance
/// is derived from `geometry`, the atmosphere and the elevation.
///
/// # Arguments
///
/// * `irradiance` - optional measured irradiance, W/ft²
/// * `geometry` - date, time, latitude and line azimuth
/// * `elevation` - `H_e`, conductor elevation above sea level, ft
/// * `atmosphere` - clear or industrial
/// * `absorptivity` - `α`, conductor absorptivity (nominally 0 to 1)
/// * `diameter` - `D_0`, conductor outer diameter, ft
#[must_use]
pub fn solar_heat_gain(
    irradiance: Option<f64>,
    geometry: &SolarGeometry,
    elevation: f64,
    atmosphere: Atmosphere,
    absorptivity: f64,
    diameter: f64,
) -> f64 {
    if let Some(irradiance) = irradiance {
        return absorptivity * irradiance * diameter;
    }

    let position = solar_position(geometry);
    let corrected =
        atmosphere.irradiance(position.altitude.get::<degree>()) * elevation_factor(elevation);
    let theta = position.incidence(geometry.line_azimuth).get::<radian>();

    absorptivity * corrected * theta.sin() * diameter
}
