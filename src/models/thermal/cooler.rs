//! Battery-powered thermoelectric cooler box.
//!
//! [`CoolerBox`] runs a whole [`Configuration`] to completion and returns its
//! minute-by-minute [`Results`]. The computational core is in the internal
//! `core` module; the types needed to build a configuration and read its
//! results are re-exported here.
//!
//! # Example
//!
//! ```
//! use peltier_box::models::thermal::cooler::{Configuration, CoolerBox, RunParameters};
//! use twine_core::Model;
//!
//! let config = Configuration::default().with_run(RunParameters::default().with_horizon(30));
//! let results = CoolerBox.call(&config)?;
//!
//! assert_eq!(results.series.len(), 30);
//! # Ok::<(), peltier_box::models::thermal::cooler::SimulationError>(())
//! ```

pub(crate) mod core;

pub use core::{
    AmbientLoss, Battery, BatteryPolicy, Circulator, ColdReservoir, Complete, Configuration,
    ConfigurationError, CopFormulation, CopModel, CumulativeEnergy, DerivedParameters, Enclosure,
    HotReservoir, Idle, Junctions, MAX_HORIZON_MINUTES, MinuteDraws, Peltier, Ready, Results,
    Row, RunParameters, Simulation, SimulationError, SizedCurrent, SizingConfig, SizingError,
    Summary, TimeSeries, Topology, Variant, simulate, size_peltier_current,
};

use twine_core::Model;

/// A cooler box simulation as a [`Model`].
///
/// Each call validates the configuration and runs the full horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoolerBox;

impl Model for CoolerBox {
    type Input = Configuration;
    type Output = Results;
    type Error = SimulationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        simulate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_matches_simulate() {
        let config = Configuration::default().with_run(RunParameters::default().with_horizon(15));

        assert_eq!(CoolerBox.call(&config), simulate(&config));
    }

    #[test]
    fn model_reports_invalid_configurations() {
        let config = Configuration::default().with_run(RunParameters::default().with_horizon(0));

        assert!(matches!(
            CoolerBox.call(&config),
            Err(SimulationError::Configuration(ConfigurationError::Horizon { .. }))
        ));
    }
}
