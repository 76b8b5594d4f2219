//! Minute-by-minute simulation loop.
//!
//! A [`Simulation`] moves through three stages, each a distinct type:
//!
//! ```text
//! Simulation<Idle> --prepare--> Simulation<Ready> --run--> Simulation<Complete>
//! ```
//!
//! Preparing validates the configuration and resolves the derived
//! parameters. Running owns all mutable state and either completes every
//! minute of the horizon or fails without producing any rows.

use tracing::{debug, info};
use uom::{
    ConstZero,
    si::{
        energy::watt_hour,
        f64::{Energy, ThermodynamicTemperature},
        heat_capacity::joule_per_kelvin,
        thermodynamic_temperature::degree_celsius,
        volume::liter,
    },
};

use crate::support::units::{TemperatureDifference, minute_step};

use super::{
    AirFirst, ColdBody, ColdSideExchange, ConfigurationError, Configuration, DerivedParameters,
    EnvelopeLoss, ExchangeInput, Junctions, MinuteDraws, PeltierFlux, Results, Row,
    SimulationError, SimulationState, Summary, TimeSeries, Topology, WaterFirst,
};

/// A configuration that has not been validated yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Idle;

/// A validated configuration, ready to run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ready {
    derived: DerivedParameters,
    thermostat: bool,
}

/// A finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct Complete {
    results: Results,
}

/// One simulation of a cooler box, in stage `S`.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation<S> {
    config: Configuration,
    stage: S,
}

impl<S> Simulation<S> {
    /// Configuration this simulation was created from.
    pub fn config(&self) -> &Configuration {
        &self.config
    }
}

impl Simulation<Idle> {
    #[must_use]
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            stage: Idle,
        }
    }

    /// Validates the configuration and resolves the derived parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if any parameter is invalid.
    pub fn prepare(self) -> Result<Simulation<Ready>, ConfigurationError> {
        let derived = DerivedParameters::resolve(&self.config)?;
        let thermostat = derived.cop.is_thermostat_gated();

        debug!(
            variant = ?self.config.topology.variant(),
            interior_l = derived.interior_volume.get::<liter>(),
            free_air_l = derived.free_air_volume.get::<liter>(),
            cold_water_j_per_k = derived.cold_water.get::<joule_per_kelvin>(),
            cold_air_j_per_k = derived.cold_air.get::<joule_per_kelvin>(),
            battery_wh = derived.battery_energy.get::<watt_hour>(),
            thermostat,
            "prepared cooler simulation"
        );

        Ok(Simulation {
            config: self.config,
            stage: Ready {
                derived,
                thermostat,
            },
        })
    }
}

impl Simulation<Ready> {
    #[must_use]
    pub fn derived(&self) -> &DerivedParameters {
        &self.stage.derived
    }

    /// Runs the Peltier every minute, ignoring the thermostat.
    ///
    /// Sizing needs the final temperature to vary continuously with the
    /// drive current, which on/off switching breaks.
    #[must_use]
    pub(crate) fn continuous(self) -> Self {
        Self {
            stage: Ready {
                thermostat: false,
                ..self.stage
            },
            ..self
        }
    }

    /// Simulates every minute of the horizon.
    ///
    /// # Errors
    ///
    /// Returns a [`SimulationError`] if the battery is depleted under
    /// [`BatteryPolicy::Abort`](super::BatteryPolicy::Abort) or a temperature
    /// becomes non-finite.
    pub fn run(self) -> Result<Simulation<Complete>, SimulationError> {
        let Ready {
            derived,
            thermostat,
        } = self.stage;
        let coupling = derived.coupling;

        let results = match self.config.topology {
            Topology::AirFirst { .. } => {
                run_loop(&self.config, &derived, thermostat, AirFirst { coupling })
            }
            Topology::WaterFirst {
                cold_pass_delta_t, ..
            } => run_loop(
                &self.config,
                &derived,
                thermostat,
                WaterFirst {
                    coupling,
                    cold_pass_delta_t,
                },
            ),
        }?;

        Ok(Simulation {
            config: self.config,
            stage: Complete { results },
        })
    }
}

impl Simulation<Complete> {
    #[must_use]
    pub fn results(&self) -> &Results {
        &self.stage.results
    }

    #[must_use]
    pub fn into_results(self) -> Results {
        self.stage.results
    }
}

/// Validates `config` and runs it to completion.
///
/// # Errors
///
/// Returns a [`SimulationError`] if the configuration is invalid or the run fails.
pub fn simulate(config: &Configuration) -> Result<Results, SimulationError> {
    Ok(Simulation::new(config.clone())
        .prepare()?
        .run()?
        .into_results())
}

fn run_loop<E: ColdSideExchange>(
    config: &Configuration,
    derived: &DerivedParameters,
    thermostat: bool,
    exchange: E,
) -> Result<Results, SimulationError> {
    let dt = minute_step();
    let target = config.run.target;
    let exterior = config.enclosure.exterior_temperature;
    let loss_reference = derived.cop.loss_reference();

    let mut state = SimulationState::initial(config, derived);
    let mut junctions = Junctions::new(
        state.hot_water,
        derived.hot_pass_delta_t,
        exchange.cold_junction(state.cold_air, state.cold_water),
    );
    let mut rows = Vec::with_capacity(config.run.horizon_minutes as usize);

    for minute in 1..=config.run.horizon_minutes {
        let air = state.cold_air;
        let water = state.cold_water;

        let active = !thermostat || exchange.monitored(air, water) > target;
        if thermostat && minute > 1 && active != state.active {
            debug!(minute, active, "thermostat switched");
        }
        state.active = active;

        let draws = if active {
            derived.draws
        } else {
            MinuteDraws::idle()
        };

        junctions = Junctions::new(
            state.hot_water,
            derived.hot_pass_delta_t,
            exchange.cold_junction(air, water),
        );
        let cop = derived.cop.cop(junctions);
        let flux = if active {
            PeltierFlux::new(draws.peltier, cop)
        } else {
            PeltierFlux::idle(cop)
        };

        let battery_remaining = state.battery.draw(minute, draws.total())?;

        let loss = EnvelopeLoss::compute(
            derived.envelope_conductance,
            exterior,
            loss_reference.temperature(air, water),
            dt,
            derived.cold_air,
            derived.cold_water,
        );

        let hot_ambient_loss = derived.ambient_loss.map_or(Energy::ZERO, |conductance| {
            conductance * state.hot_water.minus(exterior) * dt
        });
        let hot_water =
            state.hot_water + derived.hot_water.temperature_change(flux.hot - hot_ambient_loss);

        let exchanged = exchange.exchange(&ExchangeInput {
            cold: flux.cold,
            air: ColdBody {
                temperature: air,
                mass: derived.cold_air,
                loss: loss.air,
            },
            water: ColdBody {
                temperature: water,
                mass: derived.cold_water,
                loss: loss.water,
            },
            target,
            dt,
        });

        ensure_finite(minute, "hot water temperature", hot_water)?;
        ensure_finite(minute, "cold water temperature", exchanged.water)?;
        ensure_finite(minute, "cold air temperature", exchanged.air)?;

        state.hot_water = hot_water;
        state.cold_water = exchanged.water;
        state.cold_air = exchanged.air;
        state
            .cumulative
            .accumulate(&draws, &flux, &loss, &exchanged, hot_ambient_loss);
        if active {
            state.active_minutes += 1;
        }

        rows.push(Row {
            minute,
            active,
            hot_water,
            cold_water: exchanged.water,
            cold_air: exchanged.air,
            junctions,
            cop,
            cold_flux: flux.cold,
            hot_flux: flux.hot,
            consumption: draws.total(),
            heat_loss: loss.total,
            unabsorbed: exchanged.unabsorbed,
            hot_loop_saturated: flux.hot > derived.hot_loop_capacity,
            cold_loop_saturated: derived
                .cold_loop_capacity
                .is_some_and(|capacity| flux.cold > capacity),
            cumulative: state.cumulative,
            battery_remaining,
        });
    }

    let monitored = exchange.monitored(state.cold_air, state.cold_water);
    let summary = Summary::new(exchange.variant(), &state, monitored, junctions);

    info!(
        variant = ?summary.variant,
        minutes = rows.len(),
        active_minutes = summary.active_minutes,
        monitored_c = monitored.get::<degree_celsius>(),
        consumption_wh = summary.energy.total.get::<watt_hour>(),
        battery_wh = summary.battery_remaining.get::<watt_hour>(),
        "cooler simulation complete"
    );

    Ok(Results {
        series: TimeSeries::new(rows),
        summary,
    })
}

fn ensure_finite(
    minute: u32,
    quantity: &'static str,
    value: ThermodynamicTemperature,
) -> Result<(), SimulationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::NonFinite { minute, quantity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        energy::joule, f64::ElectricCharge, electric_charge::ampere_hour,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::models::thermal::cooler::core::{
        Battery, BatteryPolicy, CopModel, Variant,
        test_support::{celsius, scenario},
    };

    fn run(config: Configuration) -> Results {
        simulate(&config).expect("scenario should run")
    }

    #[test]
    fn series_has_one_row_per_minute() {
        let results = run(scenario());

        assert_eq!(results.series.len(), 60);
        for (index, row) in results.series.iter().enumerate() {
            assert_eq!(row.minute as usize, index + 1);
        }
        assert_eq!(results.series.minute(1).map(|row| row.minute), Some(1));
        assert!(results.series.minute(0).is_none());
        assert!(results.series.minute(61).is_none());
    }

    #[test]
    fn one_minute_by_hand() {
        let results = run(scenario().with_run(scenario().run.with_horizon(1)));
        let row = results.series.minute(1).expect("one row");

        // Water is monitored and above target, so everything runs.
        assert!(row.active);

        // 60 W Peltier, 5 W hot pump and 5 W cold pump for 60 s.
        assert_relative_eq!(row.consumption.get::<joule>(), 4200.0, epsilon = 1e-9);
        assert_relative_eq!(row.cold_flux.get::<joule>(), 2880.0, epsilon = 1e-9);
        assert_relative_eq!(row.hot_flux.get::<joule>(), 6480.0, epsilon = 1e-9);

        // Interior and exterior at 30 °C, no envelope loss.
        assert_relative_eq!(row.heat_loss.get::<joule>(), 0.0, epsilon = 1e-9);

        assert_relative_eq!(
            row.hot_water.get::<degree_celsius>(),
            30.0 + 6480.0 / (5.0 * 4186.8),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            row.cold_water.get::<degree_celsius>(),
            30.0 - 2880.0 / 4186.8,
            epsilon = 1e-9
        );
        assert_relative_eq!(row.cold_air.get::<degree_celsius>(), 30.0, epsilon = 1e-9);
        assert_relative_eq!(
            row.battery_remaining.get::<watt_hour>(),
            1200.0 - 4200.0 / 3600.0,
            epsilon = 1e-9
        );

        // Hot junction half a 5 K pass above the reservoir, cold junction half
        // a 5 K pass below the water.
        assert_relative_eq!(row.junctions.hot.get::<degree_celsius>(), 32.5, epsilon = 1e-9);
        assert_relative_eq!(row.junctions.cold.get::<degree_celsius>(), 27.5, epsilon = 1e-9);
    }

    #[test]
    fn energy_is_conserved() {
        let results = run(scenario());
        let energy = results.summary.energy;

        let cold = energy.cold_to_air + energy.cold_to_water + energy.unabsorbed;
        assert_relative_eq!(
            energy.hot_side.get::<joule>(),
            (cold + energy.peltier).get::<joule>(),
            max_relative = 1e-12
        );

        for row in &results.series {
            let electrical = if row.active { 3600.0 } else { 0.0 };
            assert_relative_eq!(
                row.hot_flux.get::<joule>(),
                row.cold_flux.get::<joule>() + electrical,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn battery_drains_while_devices_run() {
        let results = run(scenario());
        let mut previous = Energy::new::<watt_hour>(1200.0);
        let mut consumed = Energy::ZERO;

        for row in &results.series {
            if row.active {
                assert!(row.battery_remaining < previous, "minute {}", row.minute);
            } else {
                assert_eq!(row.battery_remaining, previous, "minute {}", row.minute);
            }
            assert!(row.cumulative.total >= consumed, "minute {}", row.minute);

            previous = row.battery_remaining;
            consumed = row.cumulative.total;
        }

        // The thermostat cycles, so both branches above were exercised.
        assert!(results.series.iter().any(|row| !row.active));
    }

    #[test]
    fn thermostat_holds_the_target() {
        let results = run(scenario());
        let target = celsius(10.0);

        let mut previous_water = celsius(30.0);
        let mut previous_hot = celsius(30.0);
        for row in &results.series {
            assert!(row.cold_water >= target, "minute {} fell below target", row.minute);
            assert!(row.hot_water >= previous_hot);
            if row.active {
                assert!(row.cold_water <= previous_water);
                assert_relative_eq!(
                    (row.hot_flux - row.cold_flux).get::<watt_hour>(),
                    1.0,
                    epsilon = 1e-9
                );
            }
            previous_water = row.cold_water;
            previous_hot = row.hot_water;
        }

        // The water reaches the target well within the hour and the
        // thermostat then cycles the Peltier off.
        assert!(results.summary.active_minutes < 60);
        assert_relative_eq!(
            results.summary.monitored.get::<degree_celsius>(),
            10.0,
            epsilon = 0.05
        );
    }

    #[test]
    fn thermostat_cuts_off_near_target() {
        let config = scenario().with_run(scenario().run.with_target(celsius(29.0)));
        let exterior = config.enclosure.exterior_temperature;
        let results = run(config);

        let idle = results
            .series
            .iter()
            .take(5)
            .find(|row| !row.active)
            .expect("an idle minute");

        assert_eq!(idle.consumption, Energy::ZERO);
        assert_eq!(idle.cold_flux, Energy::ZERO);
        assert_eq!(idle.hot_flux, Energy::ZERO);
        assert!(idle.cop > 0.0);

        // Idle minutes only gain envelope heat, so the box warms back toward
        // the 30 °C exterior without reaching it.
        let mut idle_minutes = 0;
        for pair in results.series.rows().windows(2) {
            let (before, row) = (&pair[0], &pair[1]);
            if row.active {
                continue;
            }
            idle_minutes += 1;

            assert!(row.heat_loss > Energy::ZERO, "minute {}", row.minute);
            assert!(row.cold_water > before.cold_water, "minute {}", row.minute);
            assert!(row.cold_air > before.cold_air, "minute {}", row.minute);
            assert!(row.cold_water < exterior, "minute {}", row.minute);
            assert_eq!(row.hot_water, before.hot_water);

            let mean = row.cold_water.get::<degree_celsius>() / 2.0
                + row.cold_air.get::<degree_celsius>() / 2.0;
            assert!(mean < 30.0, "minute {}", row.minute);
        }
        assert!(idle_minutes > 10);
    }

    #[test]
    fn temperature_dependent_runs_continuously() {
        let config = scenario()
            .with_peltier(scenario().peltier.with_cop(CopModel::TemperatureDependent {
                efficiency: 0.3,
            }));
        let results = run(config);

        assert_eq!(results.summary.active_minutes, 60);
        assert!(results.series.iter().all(|row| row.active && row.cop >= 0.5));
    }

    #[test]
    fn variants_run_the_same_configuration() {
        let b = run(scenario());
        let a = run(scenario().with_topology(Topology::air_first()));

        assert_eq!(a.summary.variant, Variant::AirFirst);
        assert_eq!(b.summary.variant, Variant::WaterFirst);

        // Air-first has no cold pump but a fan.
        assert_eq!(a.summary.energy.cold_pump, Energy::ZERO);
        assert!(a.summary.energy.fan > Energy::ZERO);
        assert_eq!(b.summary.energy.fan, Energy::ZERO);
    }

    #[test]
    fn abort_policy_fails_the_run() {
        let config = scenario()
            .with_battery(Battery {
                capacity: ElectricCharge::new::<ampere_hour>(0.5),
                ..scenario().battery
            })
            .with_run(scenario().run.with_battery_policy(BatteryPolicy::Abort));

        // 6 Wh at 70 W lasts a little over five minutes.
        assert!(matches!(
            simulate(&config),
            Err(SimulationError::BatteryDepleted { minute: 6, .. })
        ));
    }

    #[test]
    fn report_policy_records_depletion() {
        let config = scenario().with_battery(Battery {
            capacity: ElectricCharge::new::<ampere_hour>(0.5),
            ..scenario().battery
        });
        let results = run(config);

        assert_eq!(results.series.len(), 60);
        assert_eq!(results.summary.depleted_at, Some(6));
        assert!(results.summary.battery_remaining < Energy::ZERO);
    }

    #[test]
    fn invalid_configuration_never_runs() {
        let config = scenario().with_run(scenario().run.with_horizon(0));
        assert!(matches!(
            Simulation::new(config).prepare(),
            Err(ConfigurationError::Horizon { .. })
        ));
    }

    #[test]
    fn stages_keep_the_configuration() {
        let ready = Simulation::new(scenario()).prepare().unwrap();
        assert_eq!(ready.config(), &scenario());

        let derived = *ready.derived();
        let complete = ready.run().unwrap();
        assert_eq!(complete.config(), &scenario());
        assert_eq!(DerivedParameters::resolve(&scenario()).unwrap(), derived);
    }
}
