//! Engine configuration: trend window and confidence penalty tiers.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Tunable knobs for trend and confidence computation.
///
/// Every field is optional in TOML; `effective_*` accessors fall back
/// to the compiled defaults, which are the canonical scoring rules.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Weekly points kept in a trend series. Default: 6.
    pub trend_window_weeks: Option<usize>,
    /// Absolute delta below which a trend reads as stable. Default: 0.1.
    pub direction_threshold: Option<f64>,
    /// Days after which data is stale. Default: 7.
    pub stale_after_days: Option<i64>,
    /// Days after which data is severely stale (also the coverage
    /// window). Default: 14.
    pub very_stale_after_days: Option<i64>,
    /// Penalty for stale data. Default: 15.
    pub staleness_penalty: Option<u32>,
    /// Penalty for severely stale or absent data. Default: 30.
    pub severe_staleness_penalty: Option<u32>,
    /// Coverage ratio below which the heavy penalty applies. Default: 0.5.
    pub low_coverage_ratio: Option<f64>,
    /// Penalty for low coverage. Default: 25.
    pub low_coverage_penalty: Option<u32>,
    /// Coverage ratio below which the light penalty applies. Default: 0.75.
    pub partial_coverage_ratio: Option<f64>,
    /// Penalty for partial coverage. Default: 10.
    pub partial_coverage_penalty: Option<u32>,
}

impl EngineConfig {
    /// Load from a TOML file and validate.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            trend_window_weeks = config.effective_trend_window_weeks(),
            "engine configuration loaded"
        );
        Ok(config)
    }

    /// Reject values the scoring rules cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.effective_trend_window_weeks() == 0 {
            return Err(ConfigError::InvalidValue {
                field: "trend_window_weeks".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        for (field, ratio) in [
            ("low_coverage_ratio", self.effective_low_coverage_ratio()),
            ("partial_coverage_ratio", self.effective_partial_coverage_ratio()),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("{ratio} is outside [0, 1]"),
                });
            }
        }
        if self.effective_stale_after_days() > self.effective_very_stale_after_days() {
            return Err(ConfigError::InvalidValue {
                field: "stale_after_days".to_string(),
                message: "must not exceed very_stale_after_days".to_string(),
            });
        }
        Ok(())
    }

    pub fn effective_trend_window_weeks(&self) -> usize {
        self.trend_window_weeks.unwrap_or(6)
    }

    pub fn effective_direction_threshold(&self) -> f64 {
        self.direction_threshold.unwrap_or(0.1)
    }

    pub fn effective_stale_after_days(&self) -> i64 {
        self.stale_after_days.unwrap_or(7)
    }

    pub fn effective_very_stale_after_days(&self) -> i64 {
        self.very_stale_after_days.unwrap_or(14)
    }

    pub fn effective_staleness_penalty(&self) -> u32 {
        self.staleness_penalty.unwrap_or(15)
    }

    pub fn effective_severe_staleness_penalty(&self) -> u32 {
        self.severe_staleness_penalty.unwrap_or(30)
    }

    pub fn effective_low_coverage_ratio(&self) -> f64 {
        self.low_coverage_ratio.unwrap_or(0.5)
    }

    pub fn effective_low_coverage_penalty(&self) -> u32 {
        self.low_coverage_penalty.unwrap_or(25)
    }

    pub fn effective_partial_coverage_ratio(&self) -> f64 {
        self.partial_coverage_ratio.unwrap_or(0.75)
    }

    pub fn effective_partial_coverage_penalty(&self) -> u32 {
        self.partial_coverage_penalty.unwrap_or(10)
    }
}
