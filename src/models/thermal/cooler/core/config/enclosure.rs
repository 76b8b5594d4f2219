use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Length, ThermalConductivity, ThermodynamicTemperature},
    length::{meter, millimeter},
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

/// Insulated box, described by its external dimensions and uniform walls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enclosure {
    pub height: Length,
    pub width: Length,
    pub depth: Length,

    /// Wall thickness, identical on all six faces.
    pub wall_thickness: Length,

    /// Thermal conductivity `λ` of the wall material.
    pub wall_conductivity: ThermalConductivity,

    /// Temperature of the air surrounding the box.
    pub exterior_temperature: ThermodynamicTemperature,
}

impl Enclosure {
    /// Returns the enclosure placed in a different environment.
    #[must_use]
    pub fn with_exterior_temperature(self, exterior_temperature: ThermodynamicTemperature) -> Self {
        Self {
            exterior_temperature,
            ..self
        }
    }

    /// Returns the enclosure with walls of a different thickness.
    #[must_use]
    pub fn with_wall_thickness(self, wall_thickness: Length) -> Self {
        Self {
            wall_thickness,
            ..self
        }
    }
}

impl Default for Enclosure {
    fn default() -> Self {
        Self {
            height: Length::new::<meter>(0.2),
            width: Length::new::<meter>(0.3),
            depth: Length::new::<meter>(0.1833),
            wall_thickness: Length::new::<millimeter>(40.0),
            wall_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.033),
            exterior_temperature: ThermodynamicTemperature::new::<degree_celsius>(23.2),
        }
    }
}
