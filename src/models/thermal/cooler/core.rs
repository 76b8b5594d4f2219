//! Lumped-capacitance simulation of a battery-powered Peltier cooler box.
//!
//! Three bodies exchange heat: a hot water reservoir on the Peltier hot
//! face, and the water and free air inside an insulated box on the cold
//! face. Time advances in one-minute explicit steps. Each step:
//!
//! 1. decides whether the Peltier runs (thermostat, fixed-COP stages only),
//! 2. computes the junction temperatures, the COP and the cold and hot flux,
//! 3. draws the devices' energy from the battery,
//! 4. computes the heat gained through the envelope and splits it by thermal mass,
//! 5. heats the hot reservoir,
//! 6. distributes the cold flux between the air and the water per topology,
//! 7. appends a row to the time series.

mod battery;
mod config;
mod derived;
mod error;
mod exchange;
mod heat_loss;
mod peltier;
mod series;
mod simulation;
mod sizing;
mod state;

#[cfg(test)]
mod test_support;

pub use battery::BatteryTracker;
pub use config::{
    AmbientLoss, Battery, BatteryPolicy, Circulator, ColdReservoir, Configuration, CopModel,
    Enclosure, HotReservoir, MAX_HORIZON_MINUTES, Peltier, RunParameters, Topology, Variant,
};
pub use derived::{DerivedParameters, MinuteDraws};
pub use error::{ConfigurationError, SimulationError};
pub use exchange::{
    AirFirst, ColdBody, ColdSideExchange, ExchangeInput, ExchangeOutput, WaterFirst,
};
pub use heat_loss::{EnvelopeLoss, LossReference};
pub use peltier::{CopFormulation, Junctions, PeltierFlux};
pub use series::{Results, Row, Summary, TimeSeries};
pub use simulation::{Complete, Idle, Ready, Simulation, simulate};
pub use sizing::{SizedCurrent, SizingConfig, SizingError, size_peltier_current};
pub use state::{CumulativeEnergy, SimulationState};
