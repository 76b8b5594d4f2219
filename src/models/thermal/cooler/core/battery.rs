use tracing::warn;
use uom::{
    ConstZero,
    si::{energy::watt_hour, f64::Energy},
};

use super::{BatteryPolicy, SimulationError};

/// Remaining battery energy over a run.
///
/// Draws are never negative, so the remaining energy never increases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryTracker {
    remaining: Energy,
    policy: BatteryPolicy,
    depleted_at: Option<u32>,
}

impl BatteryTracker {
    /// Starts a run with a full battery holding `full`.
    #[must_use]
    pub fn new(full: Energy, policy: BatteryPolicy) -> Self {
        Self {
            remaining: full,
            policy,
            depleted_at: None,
        }
    }

    /// Removes `energy` drawn during `minute` and returns what is left.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::BatteryDepleted`] when the battery goes
    /// negative under [`BatteryPolicy::Abort`].
    pub fn draw(&mut self, minute: u32, energy: Energy) -> Result<Energy, SimulationError> {
        self.remaining -= energy;

        if self.remaining < Energy::ZERO && self.depleted_at.is_none() {
            match self.policy {
                BatteryPolicy::Abort => {
                    return Err(SimulationError::BatteryDepleted {
                        minute,
                        remaining: self.remaining,
                    });
                }
                BatteryPolicy::Report => {
                    warn!(
                        minute,
                        remaining_wh = self.remaining.get::<watt_hour>(),
                        "battery depleted, continuing"
                    );
                    self.depleted_at = Some(minute);
                }
            }
        }

        Ok(self.remaining)
    }

    #[must_use]
    pub fn remaining(&self) -> Energy {
        self.remaining
    }

    /// First minute that ended with a negative remaining energy.
    #[must_use]
    pub fn depleted_at(&self) -> Option<u32> {
        self.depleted_at
    }
}
