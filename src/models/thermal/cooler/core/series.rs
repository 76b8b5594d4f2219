//! Per-minute output of a run.

use serde::{Deserialize, Serialize};
use uom::si::f64::{Energy, ThermodynamicTemperature};

use super::{CumulativeEnergy, Junctions, SimulationState, Variant};

/// State at the end of one simulated minute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// One-based minute index.
    pub minute: u32,

    /// Whether the Peltier ran during this minute.
    pub active: bool,

    pub hot_water: ThermodynamicTemperature,
    pub cold_water: ThermodynamicTemperature,
    pub cold_air: ThermodynamicTemperature,

    /// Junction temperatures at the start of the minute.
    pub junctions: Junctions,

    pub cop: f64,
    pub cold_flux: Energy,
    pub hot_flux: Energy,

    /// Electrical energy drawn by all devices during this minute.
    pub consumption: Energy,

    /// Heat gained through the envelope during this minute.
    pub heat_loss: Energy,

    /// Cold flux that neither body took during this minute.
    pub unabsorbed: Energy,

    /// The hot flux exceeded what the hot loop can carry at its rated ΔT.
    pub hot_loop_saturated: bool,

    /// The cold flux exceeded what the cold loop can carry at its rated ΔT.
    pub cold_loop_saturated: bool,

    pub cumulative: CumulativeEnergy,
    pub battery_remaining: Energy,
}

/// Rows of a completed run, one per minute in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries(Vec<Row>);

impl TimeSeries {
    pub(super) fn new(rows: Vec<Row>) -> Self {
        Self(rows)
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Row of a one-based `minute`, if the run reached it.
    #[must_use]
    pub fn minute(&self, minute: u32) -> Option<&Row> {
        let index = usize::try_from(minute).ok()?.checked_sub(1)?;
        self.0.get(index)
    }

    #[must_use]
    pub fn last(&self) -> Option<&Row> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// End-of-run totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub variant: Variant,

    pub hot_water: ThermodynamicTemperature,
    pub cold_water: ThermodynamicTemperature,
    pub cold_air: ThermodynamicTemperature,

    /// Final temperature of the body the thermostat watches.
    pub monitored: ThermodynamicTemperature,

    /// Junction temperatures of the last minute.
    pub junctions: Junctions,

    pub energy: CumulativeEnergy,
    pub battery_remaining: Energy,

    /// First minute the battery ended below zero.
    pub depleted_at: Option<u32>,

    /// Minutes the Peltier ran.
    pub active_minutes: u32,
}

impl Summary {
    pub(super) fn new(
        variant: Variant,
        state: &SimulationState,
        monitored: ThermodynamicTemperature,
        junctions: Junctions,
    ) -> Self {
        Self {
            variant,
            hot_water: state.hot_water,
            cold_water: state.cold_water,
            cold_air: state.cold_air,
            monitored,
            junctions,
            energy: state.cumulative,
            battery_remaining: state.battery.remaining(),
            depleted_at: state.battery.depleted_at(),
            active_minutes: state.active_minutes,
        }
    }
}

/// Output of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Results {
    pub series: TimeSeries,
    pub summary: Summary,
}
