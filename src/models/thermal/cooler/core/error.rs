use thiserror::Error;
use uom::si::f64::{ElectricCurrent, Energy, Length, Volume};

use crate::support::constraint::ConstraintError;

/// Errors raised while validating a [`Configuration`](super::Configuration).
///
/// These are reported before any simulation state exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// A parameter violates its numeric constraint.
    #[error("invalid {field}: {source}")]
    Invalid {
        /// Name of the offending parameter.
        field: &'static str,
        source: ConstraintError,
    },

    /// The walls are at least half as thick as one of the box dimensions.
    #[error("wall thickness {thickness:?} leaves no interior along the box {dimension}")]
    WallTooThick {
        dimension: &'static str,
        thickness: Length,
        extent: Length,
    },

    /// The cold water fills the whole interior, leaving no free air.
    #[error("cold water {water:?} does not fit in the {interior:?} interior")]
    NoFreeAir { water: Volume, interior: Volume },

    /// A temperature lies outside its plausible range.
    #[error("{field} of {value_celsius} °C is outside [{min_celsius}, {max_celsius}] °C")]
    TemperatureOutOfRange {
        field: &'static str,
        value_celsius: f64,
        min_celsius: f64,
        max_celsius: f64,
    },

    /// The horizon is zero or longer than the supported maximum.
    #[error("horizon of {minutes} minutes is outside 1..={max}")]
    Horizon { minutes: u32, max: u32 },

    /// All devices running together draw more than the battery can deliver.
    #[error("combined draw of {draw:?} exceeds the battery limit of {limit:?}")]
    BatteryCurrent {
        draw: ElectricCurrent,
        limit: ElectricCurrent,
    },
}

impl ConfigurationError {
    pub(super) fn invalid(field: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::Invalid { field, source }
    }
}

/// Errors that abort a simulation run.
///
/// A failed run yields no partial time series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The configuration was rejected before the run started.
    #[error("invalid configuration")]
    Configuration(#[from] ConfigurationError),

    /// The battery ran out under [`BatteryPolicy::Abort`](super::BatteryPolicy::Abort).
    #[error("battery depleted at minute {minute}")]
    BatteryDepleted {
        minute: u32,
        /// Remaining energy at that minute, already negative.
        remaining: Energy,
    },

    /// A state temperature stopped being a finite number.
    #[error("non-finite {quantity} at minute {minute}")]
    NonFinite {
        minute: u32,
        quantity: &'static str,
    },
}
