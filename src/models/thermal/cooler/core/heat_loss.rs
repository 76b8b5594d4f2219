//! Conduction through the box envelope.

use serde::{Deserialize, Serialize};
use uom::si::f64::{Energy, ThermalConductance, ThermodynamicTemperature, Time};

use crate::support::{thermal_mass::ThermalMass, units::TemperatureDifference};

/// Interior temperature the envelope loss is driven by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReference {
    /// The free air inside the box.
    Air,
    /// The arithmetic mean of the air and cold water temperatures.
    ColdSideMean,
}

impl LossReference {
    /// Resolves the reference temperature from the current cold-side state.
    #[must_use]
    pub fn temperature(
        self,
        air: ThermodynamicTemperature,
        water: ThermodynamicTemperature,
    ) -> ThermodynamicTemperature {
        match self {
            Self::Air => air,
            Self::ColdSideMean => air + water.minus(air) / 2.0,
        }
    }
}

/// Heat gained through the envelope during one step, and where it goes.
///
/// Positive values warm the interior. The air and water shares always add up
/// to exactly the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeLoss {
    pub total: Energy,
    pub air: Energy,
    pub water: Energy,
}

impl EnvelopeLoss {
    /// Conduction `U·A·(T_ext − T_ref)` over `dt`, split by thermal mass.
    #[must_use]
    pub fn compute(
        conductance: ThermalConductance,
        exterior: ThermodynamicTemperature,
        interior: ThermodynamicTemperature,
        dt: Time,
        air_mass: ThermalMass,
        water_mass: ThermalMass,
    ) -> Self {
        let total = conductance * exterior.minus(interior) * dt;
        Self::split(total, air_mass, water_mass)
    }

    /// Splits `total` between air and water in proportion to thermal mass.
    #[must_use]
    pub fn split(total: Energy, air_mass: ThermalMass, water_mass: ThermalMass) -> Self {
        let air_fraction = (*air_mass / *air_mass.combined(water_mass)).value;
        let air = total * air_fraction;
        Self {
            total,
            air,
            water: total - air,
        }
    }
}
