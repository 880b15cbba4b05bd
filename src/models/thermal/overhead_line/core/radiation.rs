//! Radiated heat loss (IEEE 738 section 4.4.4).

/// Returns the radiated heat loss `q_r`, W/ft (eq. 7b).
///
/// # Arguments
///
/// * `ambient_temperature` - `T_a`, °C
/// * `conductor_temperature` - `T_s`, conductor surface temperature, °C
/// * `emissivity` - `ε`, conductor emissivity (nominally 0 to 1)
/// * `diameter` - `D_0`, conductor outer diameter, ft
#[must_use]
pub fn radiated_heat_loss(
    ambient_temperature: f64,
    conductor_temperature: f64,
    emissivity: f64,
    diameter: f64,
) -> f64 {
    1.656
        * diameter
        * emissivity
        * (((conductor_temperature + 273.0) / 100.0).powi(4)
            - ((ambient_temperature + 273.0) / 100.0).powi(4))
}
