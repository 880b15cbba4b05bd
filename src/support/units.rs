//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units at its public boundaries.
//! Overhead line ratings are naturally expressed per unit length of
//! conductor, and IEEE 738 publishes its empirical correlations in
//! US-customary units, so this module adds:
//!
//! - Per-length quantities that [`uom`] doesn't provide:
//!   [`LinearHeatRate`], [`LinearResistance`], [`LinearHeatCapacity`].
//! - Constructors and accessors in the per-foot units used by the standard
//!   (see [`us_customary`]).
//! - The [`TemperatureDifference`] extension for absolute temperatures.
//!
//! ```
//! use twine_ampacity::support::units::us_customary::{
//!     PerFoot, watts_per_foot,
//! };
//!
//! let q = watts_per_foot(24.988);
//! assert!((q.per_foot() - 24.988).abs() < 1e-12);
//! ```

mod quantities;
mod temperature_difference;
pub mod us_customary;

pub use quantities::{LinearHeatCapacity, LinearHeatRate, LinearResistance};
pub use temperature_difference::TemperatureDifference;
