//! Read-only observation repository contract.

use crate::types::collections::FxHashMap;
use crate::types::{week_start, Observation, UnitId};

/// Read contract over observation storage.
///
/// Returned sequences may be unordered; the engine sorts what it needs
/// sorted. Implementations are expected to either succeed or return
/// empty collections — fallible queries are the caller's problem to
/// surface before evaluation.
pub trait ObservationStore {
    /// Every observation recorded for `unit`, any order.
    fn all_for(&self, unit: &UnitId) -> Vec<Observation>;

    /// The newest observation for `unit`: max by date, ties broken by
    /// the later position in the underlying sequence.
    fn latest_for(&self, unit: &UnitId) -> Option<Observation> {
        let mut latest: Option<Observation> = None;
        for obs in self.all_for(unit) {
            match &latest {
                Some(best) if obs.date < best.date => {}
                _ => latest = Some(obs),
            }
        }
        latest
    }

    /// Weekly sampling of `unit`'s observations: one observation per
    /// Monday-aligned week (the last of that week), ascending by week.
    fn weekly_for(&self, unit: &UnitId) -> Vec<Observation> {
        let mut by_week: FxHashMap<chrono::NaiveDate, Observation> = FxHashMap::default();
        for obs in self.all_for(unit) {
            let week = week_start(obs.date);
            match by_week.get(&week) {
                Some(best) if obs.date < best.date => {}
                _ => {
                    by_week.insert(week, obs);
                }
            }
        }
        let mut weeks: Vec<(chrono::NaiveDate, Observation)> = by_week.into_iter().collect();
        weeks.sort_by_key(|(week, _)| *week);
        weeks.into_iter().map(|(_, obs)| obs).collect()
    }
}

/// Map-backed store for tests and embedding callers that already hold
/// their data in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryObservationStore {
    by_unit: FxHashMap<UnitId, Vec<Observation>>,
}

impl InMemoryObservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a flat observation sequence. Input order is
    /// preserved per unit (it breaks date ties in `latest_for`).
    pub fn from_observations(observations: impl IntoIterator<Item = Observation>) -> Self {
        let mut store = Self::new();
        for obs in observations {
            store.insert(obs);
        }
        store
    }

    /// Append one observation.
    pub fn insert(&mut self, observation: Observation) {
        self.by_unit
            .entry(observation.unit_id.clone())
            .or_default()
            .push(observation);
    }

    /// Total observation count across all units.
    pub fn len(&self) -> usize {
        self.by_unit.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_unit.values().all(Vec::is_empty)
    }
}

impl ObservationStore for InMemoryObservationStore {
    fn all_for(&self, unit: &UnitId) -> Vec<Observation> {
        self.by_unit.get(unit).cloned().unwrap_or_default()
    }
}
