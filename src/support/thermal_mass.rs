use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::f64::{Energy, HeatCapacity, Mass, SpecificHeatCapacity, TemperatureInterval};

/// Thermal mass (`m` * `c_p`) of a lumped body.
///
/// The value must be strictly positive, so dividing an energy by a
/// [`ThermalMass`] is always defined.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ThermalMass(Constrained<HeatCapacity, StrictlyPositive>);

impl ThermalMass {
    /// Create a [`ThermalMass`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::heat_capacity::Unit + uom::Conversion<f64, T = f64>,
    {
        Self::from_quantity(HeatCapacity::new::<U>(value))
    }

    /// Create a [`ThermalMass`] from a heat capacity quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: HeatCapacity) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Create a [`ThermalMass`] from a mass and a specific heat capacity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the product is not strictly positive.
    pub fn from_mass_and_specific_heat(
        mass: Mass,
        specific_heat: SpecificHeatCapacity,
    ) -> ConstraintResult<Self> {
        Self::from_quantity(mass * specific_heat)
    }

    /// Temperature change produced by adding `energy` to the body.
    #[must_use]
    pub fn temperature_change(&self, energy: Energy) -> TemperatureInterval {
        energy / **self
    }

    /// Energy that changes the body's temperature by `delta_t`.
    #[must_use]
    pub fn energy_for(&self, delta_t: TemperatureInterval) -> Energy {
        **self * delta_t
    }

    /// Combined thermal mass of two bodies.
    #[must_use]
    pub fn combined(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Deref for ThermalMass {
    type Target = HeatCapacity;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
