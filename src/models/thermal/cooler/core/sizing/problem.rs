//! Problem formulation for current sizing.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
};

use super::SizedCurrent;
use crate::{
    models::thermal::cooler::core::{BatteryPolicy, Configuration, Simulation, SimulationError},
    support::units::TemperatureDifference,
};

/// Model adapter for current sizing.
///
/// Runs the base configuration with the Peltier driven at the input current,
/// continuously and without battery limits, so the final temperature varies
/// smoothly with the current.
pub(super) struct SizingModel {
    base: Configuration,
}

impl SizingModel {
    pub(super) fn new(config: &Configuration) -> Self {
        let mut base = config.clone();
        base.battery.max_current = None;
        base.run.battery_policy = BatteryPolicy::Report;
        Self { base }
    }
}

impl Model for SizingModel {
    type Input = ElectricCurrent;
    type Output = SizedCurrent;
    type Error = SimulationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let config = self
            .base
            .clone()
            .with_peltier(self.base.peltier.with_current(*input));

        let results = Simulation::new(config)
            .prepare()?
            .continuous()
            .run()?
            .into_results();

        Ok(SizedCurrent {
            current: *input,
            results,
        })
    }
}

/// Equation problem definition for current sizing.
///
/// Computes the residual as `final_monitored - goal`.
pub(super) struct SizingProblem {
    goal: ThermodynamicTemperature,
}

impl SizingProblem {
    pub(super) fn new(goal: ThermodynamicTemperature) -> Self {
        Self { goal }
    }
}

impl EquationProblem<1> for SizingProblem {
    type Input = ElectricCurrent;
    type Output = SizedCurrent;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ElectricCurrent::new::<ampere>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let residual = output.results.summary.monitored.minus(self.goal);
        Ok([residual.get::<delta_kelvin>()])
    }
}
