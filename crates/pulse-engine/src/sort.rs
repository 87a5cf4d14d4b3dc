//! Canonical ordering of units for ranked presentation.

use chrono::NaiveDate;

use pulse_core::{ObservationStore, Unit};

use crate::health::HealthEngine;
use crate::hierarchy::effective_state;

/// Rank for units with no usable state or health — sorts after
/// everything known, including `Done` and `NotAvailable`.
const UNKNOWN_RANK: u8 = 99;

/// Deterministic multi-key ordering: state severity, health severity,
/// staleness (oldest data first, no data counting as oldest), then
/// case-insensitive name. Stable, so duplicate names keep their
/// original relative order.
pub fn canonical_order<'u, S: ObservationStore + ?Sized>(
    units: impl IntoIterator<Item = &'u Unit>,
    engine: &HealthEngine<'_, S>,
) -> Vec<&'u Unit> {
    let mut ordered: Vec<&'u Unit> = units.into_iter().collect();
    ordered.sort_by_cached_key(|unit| sort_key(unit, engine));
    ordered
}

fn sort_key<S: ObservationStore + ?Sized>(
    unit: &Unit,
    engine: &HealthEngine<'_, S>,
) -> (u8, u8, Option<NaiveDate>, String) {
    let state_rank = effective_state(unit)
        .map(|state| state.sort_rank())
        .unwrap_or(UNKNOWN_RANK);
    let health_rank = engine.health(unit).sort_rank();
    // `None` orders before every date, so units that never reported
    // sort first regardless of how old the other data is.
    let freshness = engine.latest_update(unit).map(|obs| obs.date);
    (state_rank, health_rank, freshness, unit.name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pulse_core::{HealthStatus, InMemoryObservationStore, Observation, UnitState};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn leaf(id: &str, state: UnitState) -> Unit {
        Unit::leaf(id, id.to_uppercase(), Some(state))
    }

    #[test]
    fn test_state_severity_order() {
        use UnitState::*;
        let units: Vec<Unit> = [
            ("done", Done),
            ("on_hold", OnHold),
            ("todo", Todo),
            ("new", New),
            ("in_progress", InProgress),
            ("blocked", Blocked),
        ]
        .iter()
        .map(|(id, state)| leaf(id, *state))
        .collect();

        let store = InMemoryObservationStore::new();
        let engine = HealthEngine::new(&store, d(2025, 6, 16));
        let ordered = canonical_order(units.iter(), &engine);
        let ids: Vec<&str> = ordered.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["blocked", "in_progress", "new", "todo", "on_hold", "done"]
        );
    }

    #[test]
    fn test_unknown_state_sorts_last() {
        let units = vec![Unit::leaf("x", "X", None), leaf("done", UnitState::Done)];
        let store = InMemoryObservationStore::new();
        let engine = HealthEngine::new(&store, d(2025, 6, 16));
        let ordered = canonical_order(units.iter(), &engine);
        assert_eq!(ordered.last().unwrap().id.as_str(), "x");
    }

    #[test]
    fn test_health_breaks_state_ties() {
        let store = InMemoryObservationStore::from_observations([
            Observation::new("good", d(2025, 6, 10), HealthStatus::OnTrack),
            Observation::new("bad", d(2025, 6, 10), HealthStatus::OffTrack),
        ]);
        let engine = HealthEngine::new(&store, d(2025, 6, 16));
        let units = vec![leaf("good", UnitState::InProgress), leaf("bad", UnitState::InProgress)];
        let ordered = canonical_order(units.iter(), &engine);
        assert_eq!(ordered[0].id.as_str(), "bad");
    }

    #[test]
    fn test_staleness_breaks_health_ties() {
        let store = InMemoryObservationStore::from_observations([
            Observation::new("fresh", d(2025, 6, 13), HealthStatus::OnTrack),
            Observation::new("stale", d(2025, 5, 1), HealthStatus::OnTrack),
        ]);
        let engine = HealthEngine::new(&store, d(2025, 6, 16));
        let units = vec![
            leaf("fresh", UnitState::InProgress),
            leaf("stale", UnitState::InProgress),
            leaf("silent", UnitState::InProgress),
        ];
        let ordered = canonical_order(units.iter(), &engine);
        let ids: Vec<&str> = ordered.iter().map(|u| u.id.as_str()).collect();
        // Among same-health units oldest data sorts first; the
        // never-reported unit falls behind on health rank instead.
        assert_eq!(ids, vec!["stale", "fresh", "silent"]);
    }

    #[test]
    fn test_never_reported_sorts_before_pre_epoch_data() {
        // Both units read NotAvailable, so the staleness key decides.
        let store = InMemoryObservationStore::from_observations([Observation::new(
            "ancient",
            d(1969, 12, 29),
            HealthStatus::NotAvailable,
        )]);
        let engine = HealthEngine::new(&store, d(2025, 6, 16));
        let units = vec![
            leaf("ancient", UnitState::InProgress),
            leaf("silent", UnitState::InProgress),
        ];
        let ordered = canonical_order(units.iter(), &engine);
        let ids: Vec<&str> = ordered.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["silent", "ancient"]);
    }

    #[test]
    fn test_name_is_final_tiebreak_case_insensitive() {
        let units = vec![
            Unit::leaf("b", "beta", Some(UnitState::Todo)),
            Unit::leaf("a", "Alpha", Some(UnitState::Todo)),
        ];
        let store = InMemoryObservationStore::new();
        let engine = HealthEngine::new(&store, d(2025, 6, 16));
        let ordered = canonical_order(units.iter(), &engine);
        assert_eq!(ordered[0].name, "Alpha");
    }
}
