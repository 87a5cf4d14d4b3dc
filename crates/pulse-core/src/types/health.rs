//! Health classification and its numeric mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean score above this classifies as `OnTrack`.
pub const ON_TRACK_THRESHOLD: f64 = 0.5;
/// Mean score at or below this classifies as `OffTrack`.
pub const OFF_TRACK_THRESHOLD: f64 = -0.5;

/// Categorical health of a unit of work.
///
/// Numeric mapping for aggregation: `OnTrack` = +1, `AtRisk` = 0,
/// `OffTrack` = −1. `NotAvailable` carries no numeric value and is
/// excluded from averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    OnTrack,
    AtRisk,
    OffTrack,
    NotAvailable,
}

impl HealthStatus {
    /// Numeric score for aggregation, `None` for `NotAvailable`.
    pub fn score(&self) -> Option<f64> {
        match self {
            Self::OnTrack => Some(1.0),
            Self::AtRisk => Some(0.0),
            Self::OffTrack => Some(-1.0),
            Self::NotAvailable => None,
        }
    }

    /// Classify a mean score.
    ///
    /// The thresholds are asymmetric on purpose: a single mixed signal
    /// among many positives resolves to `AtRisk`, not `OnTrack` — the
    /// system surfaces risk early.
    pub fn from_mean(mean: f64) -> Self {
        if mean > ON_TRACK_THRESHOLD {
            Self::OnTrack
        } else if mean <= OFF_TRACK_THRESHOLD {
            Self::OffTrack
        } else {
            Self::AtRisk
        }
    }

    /// Severity rank for canonical ordering. Worst health sorts first.
    pub fn sort_rank(&self) -> u8 {
        match self {
            Self::OffTrack => 0,
            Self::AtRisk => 1,
            Self::OnTrack => 2,
            Self::NotAvailable => 3,
        }
    }

    /// Classification name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OnTrack => "on_track",
            Self::AtRisk => "at_risk",
            Self::OffTrack => "off_track",
            Self::NotAvailable => "not_available",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mean_thresholds() {
        assert_eq!(HealthStatus::from_mean(1.0), HealthStatus::OnTrack);
        assert_eq!(HealthStatus::from_mean(0.51), HealthStatus::OnTrack);
        // Exactly 0.5 is not on track — threshold is strict.
        assert_eq!(HealthStatus::from_mean(0.5), HealthStatus::AtRisk);
        assert_eq!(HealthStatus::from_mean(0.0), HealthStatus::AtRisk);
        assert_eq!(HealthStatus::from_mean(-0.49), HealthStatus::AtRisk);
        // Exactly -0.5 is off track — threshold is inclusive.
        assert_eq!(HealthStatus::from_mean(-0.5), HealthStatus::OffTrack);
        assert_eq!(HealthStatus::from_mean(-1.0), HealthStatus::OffTrack);
    }

    #[test]
    fn test_score_mapping() {
        assert_eq!(HealthStatus::OnTrack.score(), Some(1.0));
        assert_eq!(HealthStatus::AtRisk.score(), Some(0.0));
        assert_eq!(HealthStatus::OffTrack.score(), Some(-1.0));
        assert_eq!(HealthStatus::NotAvailable.score(), None);
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&HealthStatus::OnTrack).unwrap();
        assert_eq!(json, "\"on_track\"");
        let back: HealthStatus = serde_json::from_str("\"not_available\"").unwrap();
        assert_eq!(back, HealthStatus::NotAvailable);
    }
}
