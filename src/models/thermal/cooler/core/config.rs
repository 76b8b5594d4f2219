//! Immutable configuration of a cooler box.
//!
//! A [`Configuration`] is a plain value: it holds what a user entered and
//! nothing computed from it. Editing produces a new value through the
//! `with_*` methods, and the derived parameters are resolved again from
//! scratch.
//!
//! Validation happens when the configuration is resolved into
//! [`DerivedParameters`](super::DerivedParameters), so a configuration
//! can be deserialized, edited, and stored freely before it is checked.

mod devices;
mod enclosure;
mod reservoirs;
mod run;
mod topology;

pub use devices::{Battery, Circulator, CopModel, Peltier};
pub use enclosure::Enclosure;
pub use reservoirs::{AmbientLoss, ColdReservoir, HotReservoir};
pub use run::{BatteryPolicy, MAX_HORIZON_MINUTES, RunParameters};
pub use topology::{Topology, Variant};

use serde::{Deserialize, Serialize};

/// Every physical and electrical parameter of one cooler box design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub battery: Battery,
    pub peltier: Peltier,
    pub enclosure: Enclosure,
    pub hot_reservoir: HotReservoir,
    pub cold_reservoir: ColdReservoir,
    pub hot_pump: Circulator,
    pub topology: Topology,
    pub run: RunParameters,
}

impl Configuration {
    /// Returns a configuration with the given battery.
    #[must_use]
    pub fn with_battery(self, battery: Battery) -> Self {
        Self { battery, ..self }
    }

    /// Returns a configuration with the given Peltier stage.
    #[must_use]
    pub fn with_peltier(self, peltier: Peltier) -> Self {
        Self { peltier, ..self }
    }

    /// Returns a configuration with the given enclosure.
    #[must_use]
    pub fn with_enclosure(self, enclosure: Enclosure) -> Self {
        Self { enclosure, ..self }
    }

    /// Returns a configuration with the given hot-side reservoir.
    #[must_use]
    pub fn with_hot_reservoir(self, hot_reservoir: HotReservoir) -> Self {
        Self {
            hot_reservoir,
            ..self
        }
    }

    /// Returns a configuration with the given cold-side reservoir.
    #[must_use]
    pub fn with_cold_reservoir(self, cold_reservoir: ColdReservoir) -> Self {
        Self {
            cold_reservoir,
            ..self
        }
    }

    /// Returns a configuration with the given hot-side pump.
    #[must_use]
    pub fn with_hot_pump(self, hot_pump: Circulator) -> Self {
        Self { hot_pump, ..self }
    }

    /// Returns a configuration with the given cold-side topology.
    #[must_use]
    pub fn with_topology(self, topology: Topology) -> Self {
        Self { topology, ..self }
    }

    /// Returns a configuration with the given run parameters.
    #[must_use]
    pub fn with_run(self, run: RunParameters) -> Self {
        Self { run, ..self }
    }
}
