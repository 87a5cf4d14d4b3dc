//! Weekly score bucketing and trend direction.

use chrono::NaiveDate;

use pulse_core::types::collections::FxHashMap;
use pulse_core::types::week_start;
use pulse_core::{
    EngineConfig, HealthStatus, ObservationStore, TrendDirection, TrendPoint, Unit,
};

/// Combined weekly score series over a leaf population.
///
/// Every observation of every leaf is assigned to its Monday-aligned
/// week; the numeric scores within each week are averaged across all
/// leaves combined and the mean reclassified. Ascending by week,
/// capped to the configured window (most recent weeks win).
pub fn weekly_series<S: ObservationStore + ?Sized>(
    store: &S,
    leaves: &[&Unit],
    config: &EngineConfig,
) -> Vec<TrendPoint> {
    let mut by_week: FxHashMap<NaiveDate, Vec<f64>> = FxHashMap::default();
    for leaf in leaves {
        for obs in store.all_for(&leaf.id) {
            if let Some(score) = obs.health.score() {
                by_week.entry(week_start(obs.date)).or_default().push(score);
            }
        }
    }

    let mut weeks: Vec<(NaiveDate, f64)> = by_week
        .into_iter()
        .map(|(week, scores)| {
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            (week, mean)
        })
        .collect();
    weeks.sort_by_key(|(week, _)| *week);

    let window = config.effective_trend_window_weeks();
    if weeks.len() > window {
        weeks.drain(..weeks.len() - window);
    }

    weeks
        .into_iter()
        .map(|(week, mean)| TrendPoint::new(week, mean, HealthStatus::from_mean(mean)))
        .collect()
}

/// Direction and endpoint delta of a weekly series.
///
/// Fewer than two points is always `Stable` with delta 0.0; otherwise
/// the delta is `last − first` rounded to two decimals and compared
/// against the configured direction threshold.
pub fn direction_and_delta(series: &[TrendPoint], config: &EngineConfig) -> (TrendDirection, f64) {
    if series.len() < 2 {
        return (TrendDirection::Stable, 0.0);
    }
    let first = &series[0];
    let last = &series[series.len() - 1];
    let delta = round2(last.score - first.score);
    let threshold = config.effective_direction_threshold();
    let direction = if delta > threshold {
        TrendDirection::Up
    } else if delta < -threshold {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    };
    (direction, delta)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
