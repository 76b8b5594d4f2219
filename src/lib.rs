//! # Peltier Box
//!
//! Time-stepped thermal and energy simulation of a battery-powered
//! thermoelectric cooler box, built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once more than one model needs it. Only utilities in
//! [`support`] are part of the public API; model-specific code stays private
//! behind the model's re-exports.

pub mod models;
pub mod support;
