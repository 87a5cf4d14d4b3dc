//! Confidence scoring types: levels, penalty breakdown, and the
//! explainable "biggest drag" factor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Graduated confidence in a computed trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// score ≥ 70 — trend is trustworthy.
    High,
    /// score ≥ 40 — trend is indicative but noisy or stale.
    Medium,
    /// score < 40 — trend should not drive decisions.
    Low,
}

impl ConfidenceLevel {
    /// Classify a 0–100 confidence score. Boundaries are inclusive.
    pub fn from_score(score: u32) -> Self {
        if score >= 70 {
            Self::High
        } else if score >= 40 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The single penalty category contributing most to a reduced
/// confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragFactor {
    /// Volatile weekly scores.
    Variance,
    /// Data is old.
    Staleness,
    /// Too few units reporting.
    Coverage,
    /// No penalty applied at all.
    None,
    /// No leaves or no weekly data to judge.
    InsufficientData,
}

impl DragFactor {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Variance => "variance",
            Self::Staleness => "staleness",
            Self::Coverage => "coverage",
            Self::None => "none",
            Self::InsufficientData => "insufficient_data",
        }
    }
}

impl fmt::Display for DragFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw penalty values behind a confidence score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceDetails {
    pub variance_penalty: u32,
    pub staleness_penalty: u32,
    pub coverage_penalty: u32,
    /// Days since the newest observation across all leaves. `None`
    /// when no leaf has ever reported.
    pub days_since_update: Option<i64>,
    /// Leaves whose latest observation is missing or older than the
    /// staleness window.
    pub units_needing_update: usize,
}

/// Explainable confidence breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceFactors {
    pub biggest_drag: DragFactor,
    pub details: ConfidenceDetails,
}
