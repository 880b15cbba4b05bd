//! Convective heat loss (IEEE 738 section 4.4.3).
//!
//! All inputs and outputs use the standard's US-customary units:
//! temperatures in °C, lengths in ft, wind speed in ft/s, heat rates in W/ft.

/// Folds any wind angle (degrees) onto the 0–90° angle between the wind
/// and the conductor axis.
///
/// Angles are reduced modulo 180° first, so `θ`, `180 - θ`, `θ + 360` and
/// `-θ` all fold to the same value.
#[must_use]
pub fn fold_wind_angle(wind_angle_deg: f64) -> f64 {
    90.0 - (wind_angle_deg.rem_euclid(180.0) - 90.0).abs()
}

/// Mean of conductor surface and ambient air temperature, °C (eq. 6).
#[must_use]
pub fn film_temperature(ambient_temperature: f64, conductor_temperature: f64) -> f64 {
    (conductor_temperature + ambient_temperature) / 2.0
}

/// Dynamic viscosity of air, lb/(ft·h) (eq. 13b).
#[must_use]
pub fn air_viscosity(film_temperature: f64) -> f64 {
    0.00353 * (film_temperature + 273.15).powf(1.5) / (film_temperature + 383.4)
}

/// Density of air, lb/ft³ (eq. 14b).
#[must_use]
pub fn air_density(film_temperature: f64, elevation: f64) -> f64 {
    (0.080_695 - 2.901e-6 * elevation + 3.7e-11 * elevation.powi(2))
        / (1.0 + 0.00367 * film_temperature)
}

/// Thermal conductivity of air, W/(ft·°C) (eq. 15b).
#[must_use]
pub fn air_thermal_conductivity(film_temperature: f64) -> f64 {
    7.388e-3 + 2.279e-5 * film_temperature - 1.343e-9 * film_temperature.powi(2)
}

/// Wind direction factor `K_angle` for a folded angle in radians (eq. 4a).
#[must_use]
pub fn wind_direction_factor(wind_angle_rad: f64) -> f64 {
    1.194 - wind_angle_rad.cos()
        + 0.194 * (2.0 * wind_angle_rad).cos()
        + 0.368 * (2.0 * wind_angle_rad).sin()
}

/// The individual convection estimates behind [`convective_heat_loss`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvectionTerms {
    /// Natural convection, valid at zero wind (eq. 5b), W/ft.
    pub natural: f64,
    /// Forced convection fit for low wind speeds (eq. 3a), W/ft.
    pub forced_low: f64,
    /// Forced convection fit for high wind speeds (eq. 3b), W/ft.
    pub forced_high: f64,
    /// Wind direction factor.
    pub kangle: f64,
    /// Reynolds number of the flow around the conductor.
    pub reynolds: f64,
}

impl ConvectionTerms {
    /// Evaluates every convection estimate.
    ///
    /// See [`convective_heat_loss`] for the argument units.
    #[must_use]
    pub fn new(
        ambient_temperature: f64,
        wind_speed: f64,
        wind_angle_deg: f64,
        elevation: f64,
        conductor_temperature: f64,
        diameter: f64,
    ) -> Self {
        let wind_angle_rad = fold_wind_angle(wind_angle_deg).to_radians();
        let tfilm = film_temperature(ambient_temperature, conductor_temperature);
        let delta_t = conductor_temperature - ambient_temperature;

        let viscosity = air_viscosity(tfilm);
        let density = air_density(tfilm, elevation);
        let conductivity = air_thermal_conductivity(tfilm);
        let kangle = wind_direction_factor(wind_angle_rad);

        // Viscosity is per hour, so the wind speed has to be in ft/h (eq. 2c).
        let reynolds = diameter * density * (wind_speed * 3600.0) / viscosity;

        Self {
            natural: 1.825 * density.sqrt() * diameter.powf(0.75) * delta_t.powf(1.25),
            forced_low: kangle * (1.01 + 1.35 * reynolds.powf(0.52)) * conductivity * delta_t,
            forced_high: kangle * 0.754 * reynolds.powf(0.6) * conductivity * delta_t,
            kangle,
            reynolds,
        }
    }

    /// The governing loss: whichever mechanism removes the most heat.
    #[must_use]
    pub fn heat_loss(&self) -> f64 {
        self.natural.max(self.forced_low).max(self.forced_high)
    }
}

/// Returns the convective heat loss `q_c`, W/ft.
///
/// # Arguments
///
/// * `ambient_temperature` - `T_a`, °C
/// * `wind_speed` - `V_w`, ft/s
/// * `wind_angle_deg` - angle between wind and conductor axis, degrees (any value)
/// * `elevation` - `H_e`, conductor elevation above sea level, ft
/// * `conductor_temperature` - `T_s`, conductor surface temperature, °C
/// * `diameter` - `D_0`, conductor outer diameter, ft
///
/// The result is non-negative whenever the conductor is at or above ambient.
/// Below ambient it carries no physical meaning.
#[must_use]
pub fn convective_heat_loss(
    ambient_temperature: f64,
    wind_speed: f64,
    wind_angle_deg: f64,
    elevation: f64,
    conductor_temperature: f64,
    diameter: f64,
) -> f64 {
    ConvectionTerms::new(
        ambient_temperature,
        wind_speed,
        wind_angle_deg,
        elevation,
        conductor_temperature,
        diameter,
    )
    .heat_loss()
}
