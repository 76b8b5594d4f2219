use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Area, HeatTransfer, ThermodynamicTemperature, Volume},
    thermodynamic_temperature::degree_celsius,
    volume::liter,
};

/// Water reservoir receiving the heat rejected by the Peltier hot face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HotReservoir {
    /// Water volume, one liter per kilogram.
    pub water: Volume,
    pub initial_temperature: ThermodynamicTemperature,

    /// Convective loss from the reservoir to the exterior air.
    ///
    /// `None` models a perfectly insulated reservoir.
    pub ambient_loss: Option<AmbientLoss>,
}

impl Default for HotReservoir {
    fn default() -> Self {
        Self {
            water: Volume::new::<liter>(4.0),
            initial_temperature: ThermodynamicTemperature::new::<degree_celsius>(17.0),
            ambient_loss: None,
        }
    }
}

/// Convective exchange between a reservoir and the surrounding air.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientLoss {
    pub coefficient: HeatTransfer,
    pub area: Area,
}

/// Cold-side reservoir: a water volume sitting in the box's free air.
///
/// The air volume is whatever the box interior leaves around the water.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColdReservoir {
    pub water: Volume,
    pub initial_water_temperature: ThermodynamicTemperature,
    pub initial_air_temperature: ThermodynamicTemperature,
}

impl ColdReservoir {
    /// Returns the reservoir with water and air both starting at `temperature`.
    #[must_use]
    pub fn starting_at(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            initial_water_temperature: temperature,
            initial_air_temperature: temperature,
            ..self
        }
    }
}

impl Default for ColdReservoir {
    fn default() -> Self {
        let start = ThermodynamicTemperature::new::<degree_celsius>(23.2);
        Self {
            water: Volume::new::<liter>(1.0),
            initial_water_temperature: start,
            initial_air_temperature: start,
        }
    }
}
