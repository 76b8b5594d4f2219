//! Iterative solver for the Peltier drive current.
//!
//! This module finds the per-module current that brings the monitored
//! cold-side temperature to a goal value at the end of the horizon, by
//! bisecting on the current and re-running the whole simulation each time.

mod config;
mod error;
mod problem;

pub use config::SizingConfig;
pub use error::SizingError;

use twine_solvers::equation::bisection;
use uom::si::{
    f64::{ElectricCurrent, TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
};

use super::{Configuration, DerivedParameters, Results};

use problem::{SizingModel, SizingProblem};

/// A drive current that meets the goal, and the run it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SizedCurrent {
    /// Per-module drive current.
    pub current: ElectricCurrent,

    /// Results of the run at that current, with the Peltier always on.
    pub results: Results,
}

/// Sizes the Peltier current so the final monitored temperature equals `goal`.
///
/// Sizing runs ignore the thermostat and the battery limits of `config`, so
/// the final temperature falls continuously as the current rises.
///
/// # Errors
///
/// Returns [`SizingError`] if the base configuration is invalid, the goal is
/// not bracketed by the configured current range, or the solver fails to
/// converge.
pub fn size_peltier_current(
    config: &Configuration,
    goal: ThermodynamicTemperature,
    sizing: SizingConfig,
) -> Result<SizedCurrent, SizingError> {
    DerivedParameters::resolve(config)?;

    let model = SizingModel::new(config);
    let problem = SizingProblem::new(goal);

    let solution = bisection::solve(
        &model,
        &problem,
        sizing.bracket(),
        &sizing.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A current the base configuration rejects drives nothing, so
            // treat it as leaving the box too warm.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(SizingError::MaxIters {
            residual: TemperatureInterval::new::<delta_kelvin>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{electric_current::ampere, thermodynamic_temperature::degree_celsius};

    use crate::models::thermal::cooler::core::{
        RunParameters, simulate,
        test_support::{celsius, scenario},
    };

    #[test]
    fn reaches_goal_at_the_end_of_the_horizon() {
        let sized = size_peltier_current(&scenario(), celsius(20.0), SizingConfig::default())
            .expect("sizing should converge");

        assert_relative_eq!(
            sized.results.summary.monitored.get::<degree_celsius>(),
            20.0,
            epsilon = 1e-3
        );
        assert_eq!(sized.results.summary.active_minutes, 60);

        let amps = sized.current.get::<ampere>();
        assert!(amps > 0.01 && amps < 5.0, "unexpected current {amps} A");
    }

    #[test]
    fn sized_current_reproduces_the_goal() {
        let sized = size_peltier_current(&scenario(), celsius(20.0), SizingConfig::default())
            .expect("sizing should converge");

        // Far from the target, the thermostat never switches off, so a
        // regular run at the sized current ends at the goal too.
        let config = scenario().with_peltier(scenario().peltier.with_current(sized.current));
        let results = simulate(&config).unwrap();

        assert_relative_eq!(
            results.summary.monitored.get::<degree_celsius>(),
            20.0,
            epsilon = 1e-3
        );
    }

    #[test]
    fn unreachable_goal_is_an_error() {
        // Nothing below the thermostat target is reachable.
        let result = size_peltier_current(&scenario(), celsius(5.0), SizingConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn invalid_base_configuration() {
        let config = scenario().with_run(RunParameters {
            horizon_minutes: 0,
            ..scenario().run
        });

        assert!(matches!(
            size_peltier_current(&config, celsius(20.0), SizingConfig::default()),
            Err(SizingError::Configuration(_))
        ));
    }

    #[test]
    fn too_few_iterations() {
        let sizing = SizingConfig {
            max_iters: 3,
            ..SizingConfig::default()
        };

        assert!(matches!(
            size_peltier_current(&scenario(), celsius(20.0), sizing),
            Err(SizingError::MaxIters { .. })
        ));
    }
}
