//! Health rollup: averaging a set of classifications into one.

use pulse_core::HealthStatus;

/// Aggregate a set of per-child classifications into one parent
/// classification.
///
/// `NotAvailable` entries are discarded; an empty remainder rolls up
/// to `NotAvailable`. Otherwise the numeric scores are averaged and
/// the mean reclassified via [`HealthStatus::from_mean`]. Pure,
/// idempotent, order-independent.
pub fn rollup<I>(healths: I) -> HealthStatus
where
    I: IntoIterator<Item = HealthStatus>,
{
    let mut sum = 0.0;
    let mut count = 0u32;
    for health in healths {
        if let Some(score) = health.score() {
            sum += score;
            count += 1;
        }
    }
    if count == 0 {
        return HealthStatus::NotAvailable;
    }
    HealthStatus::from_mean(sum / f64::from(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use HealthStatus::*;

    #[test]
    fn test_empty_is_not_available() {
        assert_eq!(rollup([]), NotAvailable);
        assert_eq!(rollup([NotAvailable, NotAvailable]), NotAvailable);
    }

    #[test]
    fn test_single_value_passthrough() {
        assert_eq!(rollup([OnTrack]), OnTrack);
        assert_eq!(rollup([AtRisk]), AtRisk);
        assert_eq!(rollup([OffTrack]), OffTrack);
    }

    #[test]
    fn test_mixed_signal_resolves_to_at_risk() {
        // Mean 0 is at risk, not on track.
        assert_eq!(rollup([OnTrack, OffTrack]), AtRisk);
    }

    #[test]
    fn test_majority_positive() {
        // Mean 0.667 > 0.5.
        assert_eq!(rollup([OnTrack, OnTrack, AtRisk]), OnTrack);
    }

    #[test]
    fn test_not_available_excluded_from_mean() {
        assert_eq!(rollup([OnTrack, NotAvailable]), OnTrack);
        assert_eq!(rollup([OnTrack, OffTrack, NotAvailable]), AtRisk);
    }

    #[test]
    fn test_order_independent() {
        assert_eq!(
            rollup([OnTrack, OffTrack, AtRisk, OnTrack]),
            rollup([OffTrack, OnTrack, OnTrack, AtRisk])
        );
    }

    #[test]
    fn test_off_track_boundary_inclusive() {
        // Mean -0.5 exactly.
        assert_eq!(rollup([OffTrack, AtRisk]), OffTrack);
        assert_eq!(rollup([OffTrack, OffTrack, AtRisk, AtRisk]), OffTrack);
    }
}
