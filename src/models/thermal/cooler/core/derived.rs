//! Quantities resolved once from a [`Configuration`] before a run starts.

use uom::{
    ConstZero,
    si::{
        f64::{
            Area, ElectricCurrent, Energy, HeatTransfer, Length, Power, TemperatureInterval,
            ThermalConductance, ThermodynamicTemperature, Volume, VolumeRate,
        },
        thermodynamic_temperature::degree_celsius,
    },
};

use crate::support::{
    constraint::{Constrained, ConstraintError, NonNegative, StrictlyPositive},
    fluid::{Air, LumpedFluid, Water},
    thermal_mass::ThermalMass,
    units::minute_step,
};

use super::{
    Circulator, ConfigurationError, Configuration, CopFormulation, MAX_HORIZON_MINUTES, Topology,
};

/// Plausible exterior temperatures, in °C.
const EXTERIOR_RANGE_CELSIUS: (f64, f64) = (-50.0, 50.0);

/// Plausible interior targets, in °C.
const TARGET_RANGE_CELSIUS: (f64, f64) = (-20.0, 30.0);

/// Electrical energy each device draws during one active minute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinuteDraws {
    pub peltier: Energy,
    pub hot_pump: Energy,
    /// Zero unless the box is water-first.
    pub cold_pump: Energy,
    /// Zero unless the box is air-first.
    pub fan: Energy,
}

impl MinuteDraws {
    /// Draws of a switched-off box.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            peltier: Energy::ZERO,
            hot_pump: Energy::ZERO,
            cold_pump: Energy::ZERO,
            fan: Energy::ZERO,
        }
    }

    /// Combined draw of all devices.
    #[must_use]
    pub fn total(&self) -> Energy {
        self.peltier + self.hot_pump + self.cold_pump + self.fan
    }
}

/// Parameters computed from a validated [`Configuration`].
///
/// Resolving the same configuration twice yields equal values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedParameters {
    /// Internal volume of the box, `(h−2t)(w−2t)(d−2t)`.
    pub interior_volume: Volume,

    /// External surface of the box, `2(hw + hd + wd)`.
    pub envelope_area: Area,

    /// Internal floor, `(w−2t)(d−2t)`, where the cold air and water exchange heat.
    pub exchange_area: Area,

    /// Wall heat transfer coefficient `U = λ/t`.
    pub envelope_u: HeatTransfer,

    /// `U` times the envelope area.
    pub envelope_conductance: ThermalConductance,

    /// Interior volume not taken by the cold water.
    pub free_air_volume: Volume,

    pub hot_water: ThermalMass,
    pub cold_water: ThermalMass,
    pub cold_air: ThermalMass,

    /// Electrical power of the Peltier stage, `modules × V × I`.
    pub peltier_power: Power,

    pub draws: MinuteDraws,

    /// Energy stored in a full battery.
    pub battery_energy: Energy,

    /// Heat the hot loop can carry in one minute, `ṁ·c_p·ΔT_pass·Δt`.
    pub hot_loop_capacity: Energy,

    /// Heat the cold loop can carry in one minute, for water-first boxes.
    pub cold_loop_capacity: Option<Energy>,

    pub cop: CopFormulation,

    /// Convective conductance between the cold air and the cold water.
    pub coupling: ThermalConductance,

    pub hot_pass_delta_t: TemperatureInterval,

    /// Cold loop temperature drop across the Peltier, for water-first boxes.
    pub cold_pass_delta_t: Option<TemperatureInterval>,

    /// Conductance between the hot reservoir and the exterior air, if it leaks.
    pub ambient_loss: Option<ThermalConductance>,
}

impl DerivedParameters {
    /// Validates `config` and computes every derived quantity.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] found.
    pub fn resolve(config: &Configuration) -> Result<Self, ConfigurationError> {
        let dt = minute_step();
        let Configuration {
            battery,
            peltier,
            enclosure,
            hot_reservoir,
            cold_reservoir,
            hot_pump,
            topology,
            run,
        } = config;

        // Enclosure geometry.
        let height = positive("box height", enclosure.height)?;
        let width = positive("box width", enclosure.width)?;
        let depth = positive("box depth", enclosure.depth)?;
        let thickness = positive("wall thickness", enclosure.wall_thickness)?;
        let conductivity = positive("wall conductivity", enclosure.wall_conductivity)?;

        let inner_height = interior_extent("height", height, thickness)?;
        let inner_width = interior_extent("width", width, thickness)?;
        let inner_depth = interior_extent("depth", depth, thickness)?;

        let interior_volume = inner_height * inner_width * inner_depth;
        let envelope_area = (height * width + height * depth + width * depth) * 2.0;
        let exchange_area = inner_width * inner_depth;
        let envelope_u = conductivity / thickness;

        check_range(
            "exterior temperature",
            enclosure.exterior_temperature,
            EXTERIOR_RANGE_CELSIUS,
        )?;
        check_range("target temperature", run.target, TARGET_RANGE_CELSIUS)?;
        finite("hot reservoir temperature", hot_reservoir.initial_temperature)?;
        finite("cold water temperature", cold_reservoir.initial_water_temperature)?;
        finite("cold air temperature", cold_reservoir.initial_air_temperature)?;

        if run.horizon_minutes == 0 || run.horizon_minutes > MAX_HORIZON_MINUTES {
            return Err(ConfigurationError::Horizon {
                minutes: run.horizon_minutes,
                max: MAX_HORIZON_MINUTES,
            });
        }

        // Thermal masses.
        let cold_water_volume = positive("cold water volume", cold_reservoir.water)?;
        let free_air_volume = interior_volume - cold_water_volume;
        if free_air_volume <= Volume::ZERO {
            return Err(ConfigurationError::NoFreeAir {
                water: cold_water_volume,
                interior: interior_volume,
            });
        }

        let hot_water = Water::thermal_mass(hot_reservoir.water)
            .map_err(ConfigurationError::invalid("hot water volume"))?;
        let cold_water = Water::thermal_mass(cold_water_volume)
            .map_err(ConfigurationError::invalid("cold water volume"))?;
        let cold_air = Air::thermal_mass(free_air_volume)
            .map_err(ConfigurationError::invalid("free air volume"))?;

        // Electrical side.
        if peltier.modules == 0 {
            return Err(ConfigurationError::Invalid {
                field: "Peltier module count",
                source: ConstraintError::Zero,
            });
        }
        let peltier_power = positive("Peltier voltage", peltier.voltage)?
            * positive("Peltier current", peltier.current)?
            * f64::from(peltier.modules);
        let cop = CopFormulation::new(peltier.cop)?;

        let hot_pump_power = device_power("hot pump power", hot_pump)?;
        let hot_pass_delta_t = positive("hot pass temperature rise", run.hot_pass_delta_t)?;
        let hot_loop_capacity =
            loop_capacity("hot pump flow", hot_pump.flow, hot_pass_delta_t)? * dt;

        let convection = positive("cold side convection coefficient", topology.convection())?;
        let coupling = convection * exchange_area;

        let (fan_power, cold_pump_power, cold_pass_delta_t, cold_loop_capacity) = match topology {
            Topology::AirFirst { fan, .. } => {
                positive("fan flow", fan.flow)?;
                (device_power("fan power", fan)?, Power::ZERO, None, None)
            }
            Topology::WaterFirst {
                pump,
                cold_pass_delta_t,
                ..
            } => {
                let delta_t = positive("cold pass temperature drop", *cold_pass_delta_t)?;
                let capacity = loop_capacity("cold pump flow", pump.flow, delta_t)? * dt;
                (
                    Power::ZERO,
                    device_power("cold pump power", pump)?,
                    Some(delta_t),
                    Some(capacity),
                )
            }
        };

        let battery_voltage = positive("battery voltage", battery.voltage)?;
        let battery_energy = positive("battery capacity", battery.capacity)? * battery_voltage;

        if let Some(limit) = battery.max_current {
            let limit = positive("battery maximum current", limit)?;
            let draw: ElectricCurrent =
                (peltier_power + hot_pump_power + cold_pump_power + fan_power) / battery_voltage;
            if draw > limit {
                return Err(ConfigurationError::BatteryCurrent { draw, limit });
            }
        }

        let ambient_loss = hot_reservoir
            .ambient_loss
            .map(|loss| -> Result<ThermalConductance, ConfigurationError> {
                let coefficient = positive("hot reservoir loss coefficient", loss.coefficient)?;
                let area = positive("hot reservoir loss area", loss.area)?;
                Ok(coefficient * area)
            })
            .transpose()?;

        Ok(Self {
            interior_volume,
            envelope_area,
            exchange_area,
            envelope_u,
            envelope_conductance: envelope_u * envelope_area,
            free_air_volume,
            hot_water,
            cold_water,
            cold_air,
            peltier_power,
            draws: MinuteDraws {
                peltier: peltier_power * dt,
                hot_pump: hot_pump_power * dt,
                cold_pump: cold_pump_power * dt,
                fan: fan_power * dt,
            },
            battery_energy,
            hot_loop_capacity,
            cold_loop_capacity,
            cop,
            coupling,
            hot_pass_delta_t,
            cold_pass_delta_t,
            ambient_loss,
        })
    }
}

fn positive<T>(field: &'static str, value: T) -> Result<T, ConfigurationError>
where
    T: PartialOrd + num_traits::Zero,
{
    StrictlyPositive::new(value)
        .map(Constrained::into_inner)
        .map_err(ConfigurationError::invalid(field))
}

fn device_power(field: &'static str, device: &Circulator) -> Result<Power, ConfigurationError> {
    NonNegative::new(device.power)
        .map(Constrained::into_inner)
        .map_err(ConfigurationError::invalid(field))
}

/// Heat rate a water loop carries at `flow` with a `delta_t` rise per pass.
fn loop_capacity(
    field: &'static str,
    flow: VolumeRate,
    delta_t: TemperatureInterval,
) -> Result<Power, ConfigurationError> {
    let flow = positive(field, flow)?;
    Ok(flow * Water::density() * Water::specific_heat() * delta_t)
}

fn interior_extent(
    dimension: &'static str,
    extent: Length,
    thickness: Length,
) -> Result<Length, ConfigurationError> {
    let inner = extent - thickness * 2.0;
    if inner <= Length::ZERO {
        return Err(ConfigurationError::WallTooThick {
            dimension,
            thickness,
            extent,
        });
    }
    Ok(inner)
}

fn check_range(
    field: &'static str,
    value: ThermodynamicTemperature,
    (min_celsius, max_celsius): (f64, f64),
) -> Result<(), ConfigurationError> {
    let value_celsius = value.get::<degree_celsius>();
    if (min_celsius..=max_celsius).contains(&value_celsius) {
        Ok(())
    } else {
        Err(ConfigurationError::TemperatureOutOfRange {
            field,
            value_celsius,
            min_celsius,
            max_celsius,
        })
    }
}

fn finite(field: &'static str, value: ThermodynamicTemperature) -> Result<(), ConfigurationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigurationError::Invalid {
            field,
            source: ConstraintError::NotANumber,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, electric_current::ampere, energy::watt_hour,
        heat_capacity::joule_per_kelvin, length::meter, thermal_conductance::watt_per_kelvin,
        volume::liter,
    };

    use crate::models::thermal::cooler::core::{
        Battery, Enclosure, RunParameters,
        test_support::{celsius, scenario},
    };

    #[test]
    fn scenario_geometry() {
        let derived = DerivedParameters::resolve(&scenario()).unwrap();

        assert_relative_eq!(derived.interior_volume.get::<liter>(), 10.4, epsilon = 1e-9);
        assert_relative_eq!(derived.free_air_volume.get::<liter>(), 9.4, epsilon = 1e-9);
        assert_relative_eq!(derived.envelope_area.get::<square_meter>(), 0.4032, epsilon = 1e-12);
        assert_relative_eq!(derived.exchange_area.get::<square_meter>(), 0.04, epsilon = 1e-12);
        assert_relative_eq!(
            derived.envelope_conductance.get::<watt_per_kelvin>(),
            0.2016,
            epsilon = 1e-12
        );
    }

    #[test]
    fn scenario_masses_and_draws() {
        let derived = DerivedParameters::resolve(&scenario()).unwrap();

        assert_relative_eq!(derived.hot_water.get::<joule_per_kelvin>(), 5.0 * 4186.8, epsilon = 1e-9);
        assert_relative_eq!(derived.cold_water.get::<joule_per_kelvin>(), 4186.8, epsilon = 1e-9);
        assert_relative_eq!(
            derived.cold_air.get::<joule_per_kelvin>(),
            0.0094 * 1.2 * 1005.0,
            epsilon = 1e-9
        );

        // 12 V × 5 A for one minute.
        assert_relative_eq!(derived.draws.peltier.get::<watt_hour>(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(derived.draws.cold_pump.get::<watt_hour>(), 5.0 / 60.0, epsilon = 1e-12);
        assert_eq!(derived.draws.fan, Energy::ZERO);
        assert_relative_eq!(derived.battery_energy.get::<watt_hour>(), 1200.0, epsilon = 1e-9);
        assert!(derived.cold_loop_capacity.is_some());
    }

    #[test]
    fn resolving_twice_is_idempotent() {
        let config = scenario();
        assert_eq!(
            DerivedParameters::resolve(&config).unwrap(),
            DerivedParameters::resolve(&config).unwrap()
        );
    }

    #[test]
    fn air_first_has_a_fan_and_no_cold_pump() {
        let config = scenario().with_topology(Topology::air_first());
        let derived = DerivedParameters::resolve(&config).unwrap();

        assert_relative_eq!(derived.draws.fan.get::<watt_hour>(), 3.0 / 60.0, epsilon = 1e-12);
        assert_eq!(derived.draws.cold_pump, Energy::ZERO);
        assert_eq!(derived.cold_pass_delta_t, None);
        assert_eq!(derived.cold_loop_capacity, None);
    }

    #[test]
    fn rejects_walls_thicker_than_half_the_box() {
        let config = scenario().with_enclosure(Enclosure {
            wall_thickness: Length::new::<meter>(0.12),
            ..scenario().enclosure
        });

        assert!(matches!(
            DerivedParameters::resolve(&config),
            Err(ConfigurationError::WallTooThick { .. })
        ));
    }

    #[test]
    fn rejects_water_filling_the_box() {
        let mut config = scenario();
        config.cold_reservoir.water = Volume::new::<liter>(10.4);

        assert!(matches!(
            DerivedParameters::resolve(&config),
            Err(ConfigurationError::NoFreeAir { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_temperatures() {
        let hot_day = scenario().with_enclosure(Enclosure {
            exterior_temperature: celsius(55.0),
            ..scenario().enclosure
        });
        let deep_freeze = scenario().with_run(RunParameters {
            target: celsius(-25.0),
            ..scenario().run
        });

        for config in [hot_day, deep_freeze] {
            assert!(matches!(
                DerivedParameters::resolve(&config),
                Err(ConfigurationError::TemperatureOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn rejects_bad_horizons() {
        for minutes in [0, MAX_HORIZON_MINUTES + 1] {
            let config = scenario().with_run(scenario().run.with_horizon(minutes));
            assert_eq!(
                DerivedParameters::resolve(&config),
                Err(ConfigurationError::Horizon {
                    minutes,
                    max: MAX_HORIZON_MINUTES
                })
            );
        }
    }

    #[test]
    fn rejects_non_positive_quantities() {
        let mut config = scenario();
        config.hot_reservoir.water = Volume::new::<liter>(0.0);
        assert_eq!(
            DerivedParameters::resolve(&config),
            Err(ConfigurationError::Invalid {
                field: "hot water volume",
                source: ConstraintError::Zero,
            })
        );

        let mut config = scenario();
        config.peltier.modules = 0;
        assert!(matches!(
            DerivedParameters::resolve(&config),
            Err(ConfigurationError::Invalid { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_start() {
        let mut config = scenario();
        config.cold_reservoir.initial_air_temperature = celsius(f64::NAN);

        assert!(matches!(
            DerivedParameters::resolve(&config),
            Err(ConfigurationError::Invalid {
                source: ConstraintError::NotANumber,
                ..
            })
        ));
    }

    #[test]
    fn battery_current_limit() {
        // 60 W + 5 W + 5 W at 12 V is about 5.83 A.
        let limited = |amps| {
            scenario().with_battery(Battery {
                max_current: Some(ElectricCurrent::new::<ampere>(amps)),
                ..scenario().battery
            })
        };

        assert!(DerivedParameters::resolve(&limited(6.0)).is_ok());
        assert!(matches!(
            DerivedParameters::resolve(&limited(5.0)),
            Err(ConfigurationError::BatteryCurrent { .. })
        ));
    }
}
