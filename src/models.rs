//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation lives. The `core` module is an implementation
//! detail; the items callers need are re-exported by the model module.
//!
//! The [`twine_core::Model`] implementations are thin adapters that delegate
//! to the core API. A single `core` is exposed through several adapters, one
//! per quantity being solved for.

pub mod thermal;
