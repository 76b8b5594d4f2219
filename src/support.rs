//! Supporting utilities used by the cooler models.
//!
//! - [`constraint`]: Type-level numeric constraints applied to validated inputs.
//! - [`fluid`]: Property constants for the water and air bodies.
//! - [`thermal_mass`]: Strictly positive heat capacity of a lumped body.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod fluid;
pub mod thermal_mass;
pub mod units;
