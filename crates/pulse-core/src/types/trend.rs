//! Trend series, direction, and the full evaluation report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::confidence::{ConfidenceFactors, ConfidenceLevel};
use super::health::HealthStatus;

/// One entry in a bounded weekly trend series.
///
/// `date` is the Monday-aligned week start for historical points, or
/// the evaluation date for the synthetic current point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub score: f64,
    pub health: HealthStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TrendPoint {
    pub fn new(date: NaiveDate, score: f64, health: HealthStatus) -> Self {
        Self {
            date,
            score,
            health,
            note: None,
        }
    }

    /// Build a point directly from a classification. `NotAvailable`
    /// carries no numeric value; its plotted score is 0.
    pub fn from_health(date: NaiveDate, health: HealthStatus, note: Option<String>) -> Self {
        Self {
            date,
            score: health.score().unwrap_or(0.0),
            health,
            note,
        }
    }
}

/// Direction of a weekly score series between its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current-health counts over a leaf population. `NotAvailable` units
/// are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSummary {
    pub on_track: usize,
    pub at_risk: usize,
    pub off_track: usize,
}

impl HealthSummary {
    /// Tally one classification. `NotAvailable` is ignored.
    pub fn record(&mut self, health: HealthStatus) {
        match health {
            HealthStatus::OnTrack => self.on_track += 1,
            HealthStatus::AtRisk => self.at_risk += 1,
            HealthStatus::OffTrack => self.off_track += 1,
            HealthStatus::NotAvailable => {}
        }
    }
}

/// Name/health pair for a direct child, surfaced in hover tooltips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildHealth {
    pub name: String,
    pub health: HealthStatus,
}

/// Full result of a trend/confidence evaluation.
///
/// Consumed by presentation-layer collaborators; the engine stores
/// nothing on their behalf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub health_summary: HealthSummary,
    pub trend_data: Vec<TrendPoint>,
    pub trend_direction: TrendDirection,
    pub trend_delta: f64,
    pub weeks_of_data: usize,
    pub confidence_score: u32,
    pub confidence_level: ConfidenceLevel,
    pub confidence_factors: ConfidenceFactors,
}
