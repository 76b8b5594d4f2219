use serde::{Deserialize, Serialize};
use uom::{
    ConstZero,
    si::f64::{Energy, ThermodynamicTemperature},
};

use super::{
    BatteryTracker, Configuration, DerivedParameters, EnvelopeLoss, ExchangeOutput, MinuteDraws,
    PeltierFlux,
};

/// Energies summed since the start of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CumulativeEnergy {
    pub peltier: Energy,
    pub hot_pump: Energy,
    pub cold_pump: Energy,
    pub fan: Energy,

    /// Electrical energy drawn by all devices.
    pub total: Energy,

    /// Heat gained through the box envelope.
    pub heat_loss: Energy,

    pub cold_to_air: Energy,
    pub cold_to_water: Energy,

    /// Cold flux that neither the air nor the water took.
    pub unabsorbed: Energy,

    /// Heat rejected into the hot reservoir.
    pub hot_side: Energy,

    /// Heat the hot reservoir lost to the exterior air.
    pub hot_ambient_loss: Energy,
}

impl CumulativeEnergy {
    pub(super) fn accumulate(
        &mut self,
        draws: &MinuteDraws,
        flux: &PeltierFlux,
        loss: &EnvelopeLoss,
        exchange: &ExchangeOutput,
        hot_ambient_loss: Energy,
    ) {
        self.peltier += draws.peltier;
        self.hot_pump += draws.hot_pump;
        self.cold_pump += draws.cold_pump;
        self.fan += draws.fan;
        self.total += draws.total();
        self.heat_loss += loss.total;
        self.cold_to_air += exchange.to_air;
        self.cold_to_water += exchange.to_water;
        self.unabsorbed += exchange.unabsorbed;
        self.hot_side += flux.hot;
        self.hot_ambient_loss += hot_ambient_loss;
    }
}

impl Default for CumulativeEnergy {
    fn default() -> Self {
        Self {
            peltier: Energy::ZERO,
            hot_pump: Energy::ZERO,
            cold_pump: Energy::ZERO,
            fan: Energy::ZERO,
            total: Energy::ZERO,
            heat_loss: Energy::ZERO,
            cold_to_air: Energy::ZERO,
            cold_to_water: Energy::ZERO,
            unabsorbed: Energy::ZERO,
            hot_side: Energy::ZERO,
            hot_ambient_loss: Energy::ZERO,
        }
    }
}

/// Mutable state of a running simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub hot_water: ThermodynamicTemperature,
    pub cold_water: ThermodynamicTemperature,
    pub cold_air: ThermodynamicTemperature,
    pub cumulative: CumulativeEnergy,
    pub battery: BatteryTracker,

    /// Whether the Peltier ran during the last step.
    pub active: bool,

    /// Number of steps the Peltier ran.
    pub active_minutes: u32,
}

impl SimulationState {
    /// State at minute zero.
    #[must_use]
    pub fn initial(config: &Configuration, derived: &DerivedParameters) -> Self {
        Self {
            hot_water: config.hot_reservoir.initial_temperature,
            cold_water: config.cold_reservoir.initial_water_temperature,
            cold_air: config.cold_reservoir.initial_air_temperature,
            cumulative: CumulativeEnergy::default(),
            battery: BatteryTracker::new(derived.battery_energy, config.run.battery_policy),
            active: false,
            active_minutes: 0,
        }
    }
}
