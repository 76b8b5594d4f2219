use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{HeatTransfer, TemperatureInterval},
    heat_transfer::watt_per_square_meter_kelvin,
    temperature_interval::kelvin as delta_kelvin,
};

use super::Circulator;

/// Cold-side plumbing of the box.
///
/// Each variant carries the devices that only exist in that topology, so a
/// fan cannot be attached to a water-first box or a cold pump to an air-first one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Topology {
    /// Variant A: the Peltier cold face blows into the box air.
    ///
    /// The air is cooled first and the water picks up what the air does not need.
    AirFirst {
        fan: Circulator,

        /// Air-to-water convective coefficient at the reservoir surface.
        convection: HeatTransfer,
    },

    /// Variant B: the Peltier cold face chills a pumped water loop.
    ///
    /// The water is cooled first and the air picks up what the water does not need.
    WaterFirst {
        pump: Circulator,

        /// Temperature drop of the cold loop water across one pass of the cold face.
        cold_pass_delta_t: TemperatureInterval,

        /// Water-to-air convective coefficient at the exchanger.
        convection: HeatTransfer,
    },
}

impl Topology {
    /// Variant A with the reference fan and a 10 W/m²·K air-side coefficient.
    #[must_use]
    pub fn air_first() -> Self {
        Self::AirFirst {
            fan: Circulator::fan(),
            convection: HeatTransfer::new::<watt_per_square_meter_kelvin>(10.0),
        }
    }

    /// Variant B with the reference pump and a 25 W/m²·K liquid-side coefficient.
    #[must_use]
    pub fn water_first() -> Self {
        Self::WaterFirst {
            pump: Circulator::pump(),
            cold_pass_delta_t: TemperatureInterval::new::<delta_kelvin>(5.0),
            convection: HeatTransfer::new::<watt_per_square_meter_kelvin>(25.0),
        }
    }

    /// Returns the variant tag of this topology.
    #[must_use]
    pub fn variant(&self) -> Variant {
        match self {
            Self::AirFirst { .. } => Variant::AirFirst,
            Self::WaterFirst { .. } => Variant::WaterFirst,
        }
    }

    /// Convective coefficient between the cold-side air and water.
    #[must_use]
    pub fn convection(&self) -> HeatTransfer {
        match self {
            Self::AirFirst { convection, .. } | Self::WaterFirst { convection, .. } => *convection,
        }
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::air_first()
    }
}

/// Which cold-side body the Peltier stage cools first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Variant A.
    AirFirst,
    /// Variant B.
    WaterFirst,
}
