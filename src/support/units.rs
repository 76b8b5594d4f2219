//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (temperature, energy,
//! power, volume). This module provides extensions that are useful for
//! modeling but aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use peltier_box::support::units::TemperatureDifference;
//!
//! let exterior = ThermodynamicTemperature::new::<degree_celsius>(30.0);
//! let interior = ThermodynamicTemperature::new::<degree_celsius>(12.0);
//! let delta_t = exterior.minus(interior);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! ## Time steps
//!
//! The cooler is integrated on a fixed one-minute step; [`minute_step`]
//! returns that step as a [`Time`](uom::si::f64::Time).

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;

use uom::si::{f64::Time, time::minute};

/// Returns the fixed integration step of the cooler simulation.
#[must_use]
pub fn minute_step() -> Time {
    Time::new::<minute>(1.0)
}
