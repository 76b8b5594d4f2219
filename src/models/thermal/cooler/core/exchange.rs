//! Distribution of the Peltier cold flux between the box air and water.
//!
//! Both topologies share one rule with the roles swapped. The Peltier cools
//! a *primary* body first, only as far as the target temperature. Whatever
//! remains flows into the *secondary* body through the convective coupling
//! between the two, and anything beyond that is reported as unabsorbed.
//!
//! Every joule of cold flux ends up in exactly one of the three buckets, so
//! `to_air + to_water + unabsorbed == cold` holds each step.

mod air_first;
mod water_first;

pub use air_first::AirFirst;
pub use water_first::WaterFirst;

use serde::{Deserialize, Serialize};
use uom::{
    ConstZero,
    si::f64::{Energy, TemperatureInterval, ThermalConductance, ThermodynamicTemperature, Time},
};

use crate::support::{thermal_mass::ThermalMass, units::TemperatureDifference};

use super::Variant;

/// Cold-side behavior that differs between the two topologies.
///
/// The simulation loop is generic over this trait, so the topology is fixed
/// for a whole run.
pub trait ColdSideExchange {
    /// Topology this exchange implements.
    fn variant(&self) -> Variant;

    /// Temperature the thermostat and the sizing solver watch.
    fn monitored(
        &self,
        air: ThermodynamicTemperature,
        water: ThermodynamicTemperature,
    ) -> ThermodynamicTemperature;

    /// Temperature of the Peltier cold junction.
    fn cold_junction(
        &self,
        air: ThermodynamicTemperature,
        water: ThermodynamicTemperature,
    ) -> ThermodynamicTemperature;

    /// Distributes one step of cold flux and updates both temperatures.
    fn exchange(&self, input: &ExchangeInput) -> ExchangeOutput;
}

/// State of one cold-side body at the start of a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColdBody {
    pub temperature: ThermodynamicTemperature,
    pub mass: ThermalMass,

    /// Envelope heat this body receives during the step.
    pub loss: Energy,
}

/// Everything one exchange step needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeInput {
    /// Heat absorbed by the Peltier cold face during the step.
    pub cold: Energy,
    pub air: ColdBody,
    pub water: ColdBody,
    pub target: ThermodynamicTemperature,
    pub dt: Time,
}

/// Outcome of one exchange step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeOutput {
    /// Cold energy taken by the air.
    pub to_air: Energy,
    /// Cold energy taken by the water.
    pub to_water: Energy,
    /// Cold energy neither body could take.
    pub unabsorbed: Energy,
    pub air: ThermodynamicTemperature,
    pub water: ThermodynamicTemperature,
}

/// Result of [`primary_then_secondary`], in topology-neutral terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Split {
    pub(super) to_primary: Energy,
    pub(super) to_secondary: Energy,
    pub(super) unabsorbed: Energy,
    pub(super) primary: ThermodynamicTemperature,
    pub(super) secondary: ThermodynamicTemperature,
}

/// Cools `primary` toward `target`, then hands the rest to `secondary`.
///
/// The primary body takes what it needs to land exactly on the target,
/// including the envelope heat it gains during the step. The secondary body
/// takes `coupling·(T_primary − T_secondary)·dt` from the start-of-step
/// temperatures, clamped to `[0, remaining]`.
pub(super) fn primary_then_secondary(
    cold: Energy,
    primary: ColdBody,
    secondary: ColdBody,
    target: ThermodynamicTemperature,
    coupling: ThermalConductance,
    dt: Time,
) -> Split {
    let needed = primary.mass.energy_for(primary.temperature.minus(target)) + primary.loss;

    let (to_primary, primary_after) = if needed <= Energy::ZERO {
        (
            Energy::ZERO,
            primary.temperature + primary.mass.temperature_change(primary.loss),
        )
    } else if cold >= needed {
        (needed, target)
    } else {
        (
            cold,
            primary.temperature + primary.mass.temperature_change(primary.loss - cold),
        )
    };

    let remaining = cold - to_primary;
    let drive = primary.temperature.minus(secondary.temperature);

    let to_secondary = if remaining > Energy::ZERO && drive > TemperatureInterval::ZERO {
        remaining.min(coupling * drive * dt)
    } else {
        Energy::ZERO
    };

    Split {
        to_primary,
        to_secondary,
        unabsorbed: remaining - to_secondary,
        primary: primary_after,
        secondary: secondary.temperature
            + secondary.mass.temperature_change(secondary.loss - to_secondary),
    }
}
