use serde::{Deserialize, Serialize};
use uom::si::{
    electric_charge::ampere_hour,
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCharge, ElectricCurrent, ElectricPotential, Power, VolumeRate},
    power::watt,
    volume_rate::cubic_meter_per_hour,
};

/// Battery pack feeding every electrical device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    /// Rated capacity.
    pub capacity: ElectricCharge,

    /// Nominal voltage.
    pub voltage: ElectricPotential,

    /// Maximum continuous discharge current, if the pack has one.
    ///
    /// When set, the combined draw of all devices running together must not
    /// exceed it.
    pub max_current: Option<ElectricCurrent>,
}

impl Default for Battery {
    fn default() -> Self {
        Self {
            capacity: ElectricCharge::new::<ampere_hour>(100.0),
            voltage: ElectricPotential::new::<volt>(12.0),
            max_current: Some(ElectricCurrent::new::<ampere>(10.0)),
        }
    }
}

/// How the Peltier stage's coefficient of performance is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CopModel {
    /// A fraction of the Carnot COP between the two junction temperatures.
    ///
    /// The stage runs for the whole horizon, without a thermostat.
    TemperatureDependent {
        /// Fraction of the ideal COP realized by the stage, in `(0, 1]`.
        efficiency: f64,
    },

    /// A constant COP, with the stage switched by an on/off thermostat.
    Fixed {
        /// Heat absorbed on the cold face per unit of electrical energy.
        cop: f64,
    },
}

impl Default for CopModel {
    fn default() -> Self {
        Self::TemperatureDependent { efficiency: 0.3 }
    }
}

/// One or more identical thermoelectric modules wired in parallel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peltier {
    pub modules: u32,
    pub voltage: ElectricPotential,
    /// Drive current of a single module.
    pub current: ElectricCurrent,
    pub cop: CopModel,
}

impl Peltier {
    /// Returns the stage driven at a different current.
    #[must_use]
    pub fn with_current(self, current: ElectricCurrent) -> Self {
        Self { current, ..self }
    }

    /// Returns the stage with a different COP model.
    #[must_use]
    pub fn with_cop(self, cop: CopModel) -> Self {
        Self { cop, ..self }
    }
}

impl Default for Peltier {
    fn default() -> Self {
        Self {
            modules: 1,
            voltage: ElectricPotential::new::<volt>(12.0),
            current: ElectricCurrent::new::<ampere>(6.0),
            cop: CopModel::default(),
        }
    }
}

/// A pump or fan moving fluid through one of the loops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circulator {
    /// Electrical power drawn while running.
    pub power: Power,

    /// Volumetric flow delivered while running.
    pub flow: VolumeRate,
}

impl Circulator {
    /// The reference pump used on both water loops: 5 W, 1 m³/h.
    #[must_use]
    pub fn pump() -> Self {
        Self {
            power: Power::new::<watt>(5.0),
            flow: VolumeRate::new::<cubic_meter_per_hour>(1.0),
        }
    }

    /// The reference cold-side fan: 3 W, 0.5 m³/h.
    #[must_use]
    pub fn fan() -> Self {
        Self {
            power: Power::new::<watt>(3.0),
            flow: VolumeRate::new::<cubic_meter_per_hour>(0.5),
        }
    }
}

impl Default for Circulator {
    fn default() -> Self {
        Self::pump()
    }
}
