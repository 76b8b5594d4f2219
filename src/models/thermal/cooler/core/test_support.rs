use uom::si::{
    electric_current::ampere,
    energy::joule,
    f64::{
        ElectricCurrent, Energy, Length, ThermalConductivity, ThermodynamicTemperature, Time,
        Volume,
    },
    heat_capacity::joule_per_kelvin,
    length::meter,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::minute,
    volume::liter,
};

use crate::support::thermal_mass::ThermalMass;

use super::{
    Battery, ColdBody, ColdReservoir, Configuration, CopModel, Enclosure, ExchangeInput,
    HotReservoir, Peltier, RunParameters, Topology,
};

pub(super) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

/// A small water-first box with a fixed-COP stage, everything at 30 °C.
///
/// The enclosure is 0.30 × 0.24 × 0.24 m with 2 cm walls, which leaves a
/// 10.4 L interior, 9.4 L of it air.
pub(super) fn scenario() -> Configuration {
    let start = celsius(30.0);

    Configuration {
        battery: Battery {
            max_current: None,
            ..Battery::default()
        },
        peltier: Peltier::default()
            .with_current(ElectricCurrent::new::<ampere>(5.0))
            .with_cop(CopModel::Fixed { cop: 0.8 }),
        enclosure: Enclosure {
            height: Length::new::<meter>(0.30),
            width: Length::new::<meter>(0.24),
            depth: Length::new::<meter>(0.24),
            wall_thickness: Length::new::<meter>(0.02),
            wall_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.01),
            exterior_temperature: start,
        },
        hot_reservoir: HotReservoir {
            water: Volume::new::<liter>(5.0),
            initial_temperature: start,
            ambient_loss: None,
        },
        cold_reservoir: ColdReservoir {
            water: Volume::new::<liter>(1.0),
            ..ColdReservoir::default()
        }
        .starting_at(start),
        topology: Topology::water_first(),
        run: RunParameters::default()
            .with_target(celsius(10.0))
            .with_horizon(60),
        ..Configuration::default()
    }
}

/// Exchange input with the scenario's air and water masses and no envelope loss.
pub(super) fn exchange_input(cold: Energy, air_celsius: f64, water_celsius: f64) -> ExchangeInput {
    let body = |temperature: f64, joule_per_k: f64| ColdBody {
        temperature: celsius(temperature),
        mass: ThermalMass::new::<joule_per_kelvin>(joule_per_k)
            .expect("test masses are positive"),
        loss: Energy::new::<joule>(0.0),
    };

    ExchangeInput {
        cold,
        air: body(air_celsius, 0.0094 * 1.2 * 1005.0),
        water: body(water_celsius, 4186.8),
        target: celsius(10.0),
        dt: Time::new::<minute>(1.0),
    }
}
