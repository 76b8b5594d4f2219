use uom::si::f64::{ThermalConductance, ThermodynamicTemperature};

use super::{ColdSideExchange, ExchangeInput, ExchangeOutput, primary_then_secondary};
use crate::models::thermal::cooler::core::Variant;

/// Variant A: the cold face chills the air, which then cools the water.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirFirst {
    /// Convective conductance from the water to the air.
    pub coupling: ThermalConductance,
}

impl ColdSideExchange for AirFirst {
    fn variant(&self) -> Variant {
        Variant::AirFirst
    }

    fn monitored(
        &self,
        air: ThermodynamicTemperature,
        _water: ThermodynamicTemperature,
    ) -> ThermodynamicTemperature {
        air
    }

    fn cold_junction(
        &self,
        air: ThermodynamicTemperature,
        _water: ThermodynamicTemperature,
    ) -> ThermodynamicTemperature {
        air
    }

    fn exchange(&self, input: &ExchangeInput) -> ExchangeOutput {
        let split = primary_then_secondary(
            input.cold,
            input.air,
            input.water,
            input.target,
            self.coupling,
            input.dt,
        );

        ExchangeOutput {
            to_air: split.to_primary,
            to_water: split.to_secondary,
            unabsorbed: split.unabsorbed,
            air: split.primary,
            water: split.secondary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::ConstZero;
    use uom::si::{
        energy::joule, f64::Energy, thermal_conductance::watt_per_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::models::thermal::cooler::core::test_support::{celsius, exchange_input};

    #[test]
    fn air_is_cooled_first() {
        let exchange = AirFirst {
            coupling: ThermalConductance::new::<watt_per_kelvin>(1.0),
        };
        let input = exchange_input(Energy::new::<joule>(50.0), 20.0, 20.0);
        let output = exchange.exchange(&input);

        // 50 J cannot bring the air from 20 °C to 10 °C, so the water gets nothing.
        assert_relative_eq!(output.to_air.get::<joule>(), 50.0, epsilon = 1e-9);
        assert_relative_eq!(output.to_water.get::<joule>(), 0.0);
        assert!(output.air < celsius(20.0));
        assert_relative_eq!(output.water.get::<degree_celsius>(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn warmer_water_gets_nothing() {
        let exchange = AirFirst {
            coupling: ThermalConductance::new::<watt_per_kelvin>(8.0),
        };
        let input = exchange_input(Energy::new::<joule>(480.0), 10.5, 30.0);
        let output = exchange.exchange(&input);

        // Air lands on target and the air-minus-water drive is negative.
        assert_eq!(output.air, input.target);
        assert_eq!(output.to_water, Energy::ZERO);
        assert_relative_eq!(output.water.get::<degree_celsius>(), 30.0, epsilon = 1e-9);
        assert_relative_eq!(
            (output.to_air + output.unabsorbed).get::<joule>(),
            480.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn colder_water_takes_the_convective_share() {
        let exchange = AirFirst {
            coupling: ThermalConductance::new::<watt_per_kelvin>(1.0),
        };
        let input = exchange_input(Energy::new::<joule>(5_000.0), 14.0, 12.0);
        let output = exchange.exchange(&input);

        // 1 W/K × (14 − 12) K × 60 s.
        assert_relative_eq!(output.to_water.get::<joule>(), 120.0, epsilon = 1e-9);
        assert!(output.water < celsius(12.0));
    }

    #[test]
    fn monitors_the_air() {
        let exchange = AirFirst {
            coupling: ThermalConductance::new::<watt_per_kelvin>(1.0),
        };
        assert_eq!(exchange.monitored(celsius(12.0), celsius(8.0)), celsius(12.0));
        assert_eq!(exchange.cold_junction(celsius(12.0), celsius(8.0)), celsius(12.0));
    }
}
