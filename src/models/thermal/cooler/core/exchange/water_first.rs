use uom::si::f64::{TemperatureInterval, ThermalConductance, ThermodynamicTemperature};

use super::{ColdSideExchange, ExchangeInput, ExchangeOutput, primary_then_secondary};
use crate::models::thermal::cooler::core::Variant;

/// Variant B: the cold face chills a pumped water loop, which then cools the air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterFirst {
    /// Convective conductance from the air to the water.
    pub coupling: ThermalConductance,

    /// Cold loop temperature drop across one pass of the Peltier.
    pub cold_pass_delta_t: TemperatureInterval,
}

impl ColdSideExchange for WaterFirst {
    fn variant(&self) -> Variant {
        Variant::WaterFirst
    }

    fn monitored(
        &self,
        _air: ThermodynamicTemperature,
        water: ThermodynamicTemperature,
    ) -> ThermodynamicTemperature {
        water
    }

    /// The junction sits half a pass below the returning water.
    fn cold_junction(
        &self,
        _air: ThermodynamicTemperature,
        water: ThermodynamicTemperature,
    ) -> ThermodynamicTemperature {
        water - self.cold_pass_delta_t / 2.0
    }

    fn exchange(&self, input: &ExchangeInput) -> ExchangeOutput {
        let split = primary_then_secondary(
            input.cold,
            input.water,
            input.air,
            input.target,
            self.coupling,
            input.dt,
        );

        ExchangeOutput {
            to_air: split.to_secondary,
            to_water: split.to_primary,
            unabsorbed: split.unabsorbed,
            air: split.secondary,
            water: split.primary,
        }
    }
}
