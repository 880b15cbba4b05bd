//! # Twine Ampacity
//!
//! IEEE 738 thermal rating models for bare overhead conductors, built for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The heat balance covers convective and radiated cooling, solar heating
//! and temperature-dependent AC resistance. On top of it the crate solves
//! for:
//!
//! - the steady-state current that holds a conductor at a temperature,
//! - the steady-state temperature reached under a current,
//! - the transient temperature rise under a constant current,
//! - the constant current that reaches a temperature limit in a fixed time.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations and the functions
//!   behind them.
//! - [`support`]: Unit helpers and calendar utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! ## Logging
//!
//! Solvers emit [`tracing`] events (`debug` for solve summaries and bracket
//! expansion, `trace` for each transient step). No subscriber is installed
//! by this crate.

pub mod models;
pub mod support;
