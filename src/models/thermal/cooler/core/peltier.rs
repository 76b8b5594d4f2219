//! Thermoelectric stage: COP and the energy it moves each step.
//!
//! Whatever the COP formulation, the stage conserves energy:
//!
//! ```text
//! Q_cold = W · COP
//! Q_hot  = Q_cold + W
//! ```
//!
//! where `W` is the electrical energy drawn by the stage during the step.

use serde::{Deserialize, Serialize};
use uom::{
    ConstZero,
    si::{
        f64::{Energy, TemperatureInterval, ThermodynamicTemperature},
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive, UnitIntervalLowerOpen},
    units::TemperatureDifference,
};

use super::{ConfigurationError, CopModel, LossReference};

/// Floor on the hot-to-cold junction difference used in the Carnot COP, in kelvin.
///
/// Equal or inverted junction temperatures would otherwise divide by zero
/// or yield a negative COP.
pub const MIN_JUNCTION_DELTA_T_KELVIN: f64 = 0.1;

/// Floor on the realized COP of the temperature-dependent formulation.
pub const MIN_COP: f64 = 0.5;

/// Validated COP formulation, fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CopFormulation {
    /// `COP = max(0.5, efficiency · T_cold / max(T_hot − T_cold, 0.1 K))`.
    TemperatureDependent {
        efficiency: Constrained<f64, UnitIntervalLowerOpen>,
    },

    /// Constant COP under thermostat control.
    Fixed { cop: Constrained<f64, StrictlyPositive> },
}

impl CopFormulation {
    /// Validates a configured COP model.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the efficiency is outside `(0, 1]`
    /// or the fixed COP is not strictly positive.
    pub fn new(model: CopModel) -> Result<Self, ConfigurationError> {
        match model {
            CopModel::TemperatureDependent { efficiency } => Ok(Self::TemperatureDependent {
                efficiency: UnitIntervalLowerOpen::new(efficiency)
                    .map_err(ConfigurationError::invalid("Peltier efficiency"))?,
            }),
            CopModel::Fixed { cop } => Ok(Self::Fixed {
                cop: StrictlyPositive::new(cop).map_err(ConfigurationError::invalid("Peltier COP"))?,
            }),
        }
    }

    /// COP at the given junction temperatures.
    #[must_use]
    pub fn cop(&self, junctions: Junctions) -> f64 {
        match self {
            Self::TemperatureDependent { efficiency } => {
                let delta_t = junctions
                    .hot
                    .minus(junctions.cold)
                    .get::<delta_kelvin>()
                    .max(MIN_JUNCTION_DELTA_T_KELVIN);
                let ideal = junctions.cold.get::<kelvin>() / delta_t;
                (ideal * efficiency.into_inner()).max(MIN_COP)
            }
            Self::Fixed { cop } => cop.into_inner(),
        }
    }

    /// Whether an on/off thermostat switches the stage.
    #[must_use]
    pub fn is_thermostat_gated(&self) -> bool {
        matches!(self, Self::Fixed { .. })
    }

    /// Interior temperature the envelope loss is computed against.
    #[must_use]
    pub fn loss_reference(&self) -> LossReference {
        match self {
            Self::TemperatureDependent { .. } => LossReference::Air,
            Self::Fixed { .. } => LossReference::ColdSideMean,
        }
    }
}

/// Hot and cold junction temperatures of the stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Junctions {
    pub hot: ThermodynamicTemperature,
    pub cold: ThermodynamicTemperature,
}

impl Junctions {
    /// Hot junction sits half a pass above the hot reservoir.
    #[must_use]
    pub fn new(
        hot_reservoir: ThermodynamicTemperature,
        hot_pass_delta_t: TemperatureInterval,
        cold: ThermodynamicTemperature,
    ) -> Self {
        Self {
            hot: hot_reservoir + hot_pass_delta_t / 2.0,
            cold,
        }
    }
}

/// Energy moved by the stage during one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeltierFlux {
    pub cop: f64,
    /// Electrical energy consumed.
    pub electrical: Energy,
    /// Heat absorbed on the cold face.
    pub cold: Energy,
    /// Heat rejected on the hot face.
    pub hot: Energy,
}

impl PeltierFlux {
    /// Flux of a stage consuming `electrical` at the given COP.
    #[must_use]
    pub fn new(electrical: Energy, cop: f64) -> Self {
        let cold = electrical * cop;
        Self {
            cop,
            electrical,
            cold,
            hot: cold + electrical,
        }
    }

    /// Flux of a switched-off stage.
    ///
    /// The COP is still reported so the series stays continuous.
    #[must_use]
    pub fn idle(cop: f64) -> Self {
        Self {
            cop,
            electrical: Energy::ZERO,
            cold: Energy::ZERO,
            hot: Energy::ZERO,
        }
    }
}
