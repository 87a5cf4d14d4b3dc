//! TrendAnalyzer — the top-level trend/confidence entry point.

use chrono::NaiveDate;

use pulse_core::{EngineConfig, HealthSummary, ObservationStore, TrendReport, Unit};

use crate::health::HealthEngine;
use crate::hierarchy::active_leaves;

use super::bucket::{direction_and_delta, weekly_series};
use super::confidence::evaluate_confidence;

/// Evaluates a leaf population (or a node's active leaf descendants)
/// into a [`TrendReport`]: health summary, weekly trend series,
/// direction/delta, and an explainable confidence score.
///
/// Stateless across calls — every evaluation recomputes from current
/// store data. Two analyzers over different trees may run in parallel
/// without coordination.
pub struct TrendAnalyzer<'a, S: ObservationStore + ?Sized> {
    store: &'a S,
    today: NaiveDate,
    config: EngineConfig,
}

impl<'a, S: ObservationStore + ?Sized> TrendAnalyzer<'a, S> {
    pub fn new(store: &'a S, today: NaiveDate) -> Self {
        Self::with_config(store, today, EngineConfig::default())
    }

    pub fn with_config(store: &'a S, today: NaiveDate, config: EngineConfig) -> Self {
        Self {
            store,
            today,
            config,
        }
    }

    /// Evaluate a node: `{self}` when it is a leaf, otherwise its
    /// active leaf descendants (archived, done, and on-hold excluded).
    pub fn evaluate_unit(&self, unit: &Unit) -> TrendReport {
        let leaves: Vec<&Unit> = if unit.is_leaf() {
            vec![unit]
        } else {
            active_leaves(unit)
        };
        self.evaluate(&leaves)
    }

    /// Evaluate a flat leaf population.
    pub fn evaluate(&self, leaves: &[&Unit]) -> TrendReport {
        let series = weekly_series(self.store, leaves, &self.config);
        let (direction, delta) = direction_and_delta(&series, &self.config);
        let outcome =
            evaluate_confidence(self.store, leaves, &series, self.today, &self.config);

        let engine = HealthEngine::with_config(self.store, self.today, self.config.clone());
        let mut summary = HealthSummary::default();
        for leaf in leaves {
            summary.record(engine.health(leaf));
        }

        tracing::debug!(
            leaves = leaves.len(),
            weeks = series.len(),
            direction = %direction,
            confidence = outcome.score,
            drag = %outcome.factors.biggest_drag,
            "trend evaluation complete"
        );

        TrendReport {
            health_summary: summary,
            weeks_of_data: series.len(),
            trend_data: series,
            trend_direction: direction,
            trend_delta: delta,
            confidence_score: outcome.score,
            confidence_level: outcome.level,
            confidence_factors: outcome.factors,
        }
    }
}
