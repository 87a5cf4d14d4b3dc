//! Dated health observations — the engine's only raw input signal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::health::HealthStatus;
use super::unit::UnitId;

/// An immutable, dated health report for a leaf unit.
///
/// Observations are created by an external workflow and are append-only
/// from the engine's perspective. The engine never mutates or stores
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub unit_id: UnitId,
    pub date: NaiveDate,
    pub health: HealthStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Observation {
    pub fn new(unit_id: impl Into<UnitId>, date: NaiveDate, health: HealthStatus) -> Self {
        Self {
            unit_id: unit_id.into(),
            date,
            health,
            note: None,
        }
    }

    /// Attach a free-text note (builder style).
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
