//! Thermal models.
//!
//! This module contains thermal rating models for overhead power line
//! conductors.

pub mod overhead_line;
