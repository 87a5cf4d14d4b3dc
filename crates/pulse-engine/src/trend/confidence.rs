//! Confidence scoring: variance base, staleness and coverage
//! penalties, and the dominant-drag explanation.

use chrono::NaiveDate;

use pulse_core::{
    ConfidenceDetails, ConfidenceFactors, ConfidenceLevel, DragFactor, EngineConfig,
    ObservationStore, TrendPoint, Unit,
};

/// Fully-computed confidence result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceOutcome {
    pub score: u32,
    pub level: ConfidenceLevel,
    pub factors: ConfidenceFactors,
}

/// Per-leaf reporting freshness over the whole population.
#[derive(Debug, Clone, Copy, Default)]
struct Freshness {
    /// Days since the newest observation across all leaves.
    days_since_update: Option<i64>,
    /// Leaves whose latest observation falls inside the coverage window.
    covered: usize,
    /// Leaves with no observation or one older than the window.
    needing_update: usize,
    total: usize,
}

fn freshness<S: ObservationStore + ?Sized>(
    store: &S,
    leaves: &[&Unit],
    today: NaiveDate,
    window_days: i64,
) -> Freshness {
    let mut fresh = Freshness {
        total: leaves.len(),
        ..Freshness::default()
    };
    for leaf in leaves {
        match store.latest_for(&leaf.id) {
            Some(obs) => {
                // A future-dated latest observation counts as zero
                // days old rather than negative.
                let days = (today - obs.date).num_days().max(0);
                if days <= window_days {
                    fresh.covered += 1;
                } else {
                    fresh.needing_update += 1;
                }
                fresh.days_since_update = Some(match fresh.days_since_update {
                    Some(best) => best.min(days),
                    None => days,
                });
            }
            None => fresh.needing_update += 1,
        }
    }
    fresh
}

/// Population standard deviation of the weekly scores. A flat series
/// yields 0 and therefore the full variance base.
pub fn population_stddev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    if variance.is_finite() && variance >= 0.0 {
        variance.sqrt()
    } else {
        0.0
    }
}

/// Compute the confidence score, level, and factor breakdown for a
/// weekly series over a leaf population.
pub(crate) fn evaluate_confidence<S: ObservationStore + ?Sized>(
    store: &S,
    leaves: &[&Unit],
    series: &[TrendPoint],
    today: NaiveDate,
    config: &EngineConfig,
) -> ConfidenceOutcome {
    let window_days = config.effective_very_stale_after_days();
    let fresh = freshness(store, leaves, today, window_days);

    // Base rewards a flat, consistent trend and punishes volatility.
    // With fewer than two weekly points there is no volatility to
    // measure, so the base is the full 100.
    let base = if series.len() < 2 {
        100.0
    } else {
        let scores: Vec<f64> = series.iter().map(|point| point.score).collect();
        (100.0 - 100.0 * population_stddev(&scores)).max(0.0)
    };
    let variance_penalty = (100.0 - base).round() as u32;

    let staleness_penalty = match fresh.days_since_update {
        // No observation anywhere is the worst case.
        None => config.effective_severe_staleness_penalty(),
        Some(days) if days > config.effective_very_stale_after_days() => {
            config.effective_severe_staleness_penalty()
        }
        Some(days) if days > config.effective_stale_after_days() => {
            config.effective_staleness_penalty()
        }
        Some(_) => 0,
    };

    // Coverage only matters with more than one leaf; the denominator
    // is the full leaf set, including leaves that are intentionally
    // NotAvailable.
    let coverage_penalty = if fresh.total > 1 {
        let ratio = fresh.covered as f64 / fresh.total as f64;
        if ratio < config.effective_low_coverage_ratio() {
            config.effective_low_coverage_penalty()
        } else if ratio < config.effective_partial_coverage_ratio() {
            config.effective_partial_coverage_penalty()
        } else {
            0
        }
    } else {
        0
    };

    let score = (base - f64::from(staleness_penalty) - f64::from(coverage_penalty))
        .max(0.0)
        .round() as u32;
    let level = ConfidenceLevel::from_score(score);

    let biggest_drag = if leaves.is_empty() || series.is_empty() {
        DragFactor::InsufficientData
    } else {
        dominant_drag(variance_penalty, staleness_penalty, coverage_penalty)
    };

    ConfidenceOutcome {
        score,
        level,
        factors: ConfidenceFactors {
            biggest_drag,
            details: ConfidenceDetails {
                variance_penalty,
                staleness_penalty,
                coverage_penalty,
                days_since_update: fresh.days_since_update,
                units_needing_update: fresh.needing_update,
            },
        },
    }
}

/// The largest of the three penalties, ties resolving to the first in
/// the fixed order variance → staleness → coverage. All-zero reads as
/// no drag at all.
fn dominant_drag(variance: u32, staleness: u32, coverage: u32) -> DragFactor {
    let candidates = [
        (DragFactor::Variance, variance),
        (DragFactor::Staleness, staleness),
        (DragFactor::Coverage, coverage),
    ];
    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.1 > best.1 {
            best = *candidate;
        }
    }
    if best.1 == 0 {
        DragFactor::None
    } else {
        best.0
    }
}
