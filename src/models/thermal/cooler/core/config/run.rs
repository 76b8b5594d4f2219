use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

/// Longest supported horizon: one week of minutes.
pub const MAX_HORIZON_MINUTES: u32 = 10_080;

/// What the simulation does when the battery runs out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatteryPolicy {
    /// Keep running and let the remaining energy go negative.
    ///
    /// The first minute with negative energy is recorded in the summary.
    #[default]
    Report,

    /// Fail the run at the first minute with negative energy.
    Abort,
}

/// Parameters of a single simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunParameters {
    /// Interior temperature the cold side is driven toward.
    pub target: ThermodynamicTemperature,

    /// Number of one-minute steps to simulate.
    pub horizon_minutes: u32,

    /// Temperature rise of the hot loop water across one pass of the Peltier hot face.
    pub hot_pass_delta_t: TemperatureInterval,

    pub battery_policy: BatteryPolicy,
}

impl RunParameters {
    /// Returns the run aimed at a different interior temperature.
    #[must_use]
    pub fn with_target(self, target: ThermodynamicTemperature) -> Self {
        Self { target, ..self }
    }

    /// Returns the run over a different horizon.
    #[must_use]
    pub fn with_horizon(self, horizon_minutes: u32) -> Self {
        Self {
            horizon_minutes,
            ..self
        }
    }

    /// Returns the run with a different battery policy.
    #[must_use]
    pub fn with_battery_policy(self, battery_policy: BatteryPolicy) -> Self {
        Self {
            battery_policy,
            ..self
        }
    }
}

impl Default for RunParameters {
    fn default() -> Self {
        Self {
            target: ThermodynamicTemperature::new::<degree_celsius>(4.0),
            horizon_minutes: 600,
            hot_pass_delta_t: TemperatureInterval::new::<delta_kelvin>(5.0),
            battery_policy: BatteryPolicy::Report,
        }
    }
}
