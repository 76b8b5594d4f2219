//! Thermal systems models.
//!
//! This module contains models for thermal systems such as thermoelectric
//! coolers and the reservoirs they move heat between.

pub mod cooler;
