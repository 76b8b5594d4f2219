//! Cooler box models.
//!
//! The [`thermal`] module holds the cooler box itself: its configuration,
//! the minute-stepped simulation, and the sizing of the Peltier drive current.
//!
//! # Model structure
//!
//! The cooler model keeps its physics in an internal `core` submodule that is
//! not part of the public API. [`thermal::cooler::CoolerBox`] implements
//! [`twine_core::Model`] as a thin adapter over that core, and the cooler
//! module re-exports the types a caller needs to build a [`Configuration`]
//! and read the [`Results`].
//!
//! [`Configuration`]: thermal::cooler::Configuration
//! [`Results`]: thermal::cooler::Results

pub mod thermal;
