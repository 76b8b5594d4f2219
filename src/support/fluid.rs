//! Property constants for the lumped water and air bodies of the cooler.
//!
//! Both fluids are treated as calorically perfect with constant density:
//! a body of volume `V` holds `V·ρ·c_p` of thermal mass. Water is taken at
//! one kilogram per liter so reservoir volumes read directly as masses.

use uom::si::{
    f64::{Mass, MassDensity, SpecificHeatCapacity, Volume},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::{constraint::ConstraintResult, thermal_mass::ThermalMass};

/// Constant properties of a fluid filling a lumped body.
pub trait LumpedFluid {
    /// Constant mass density.
    fn density() -> MassDensity;

    /// Constant specific heat capacity.
    fn specific_heat() -> SpecificHeatCapacity;

    /// Mass of fluid held in `volume`.
    fn mass(volume: Volume) -> Mass {
        volume * Self::density()
    }

    /// Thermal mass of fluid held in `volume`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `volume` is not strictly positive.
    fn thermal_mass(volume: Volume) -> ConstraintResult<ThermalMass> {
        ThermalMass::from_mass_and_specific_heat(Self::mass(volume), Self::specific_heat())
    }
}

/// Liquid water, one kilogram per liter, 1.163 Wh/kg·K.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

impl LumpedFluid for Water {
    fn density() -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(1000.0)
    }

    fn specific_heat() -> SpecificHeatCapacity {
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4186.8)
    }
}

/// Dry air near room temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Air;

impl LumpedFluid for Air {
    fn density() -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(1.2)
    }

    fn specific_heat() -> SpecificHeatCapacity {
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0)
    }
}
