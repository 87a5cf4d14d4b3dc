//! HealthEngine — memoized per-evaluation health and trend computation.

use std::cell::RefCell;

use chrono::NaiveDate;
use smallvec::SmallVec;

use pulse_core::types::collections::FxHashMap;
use pulse_core::types::{is_week_start, week_start};
use pulse_core::{
    ChildHealth, EngineConfig, HealthStatus, Observation, ObservationStore, TrendPoint, Unit,
    UnitId,
};

use crate::rollup::rollup;

/// Computes a node's current health, its bounded weekly trend series,
/// and tooltip-facing breakdowns.
///
/// Results are memoized per unit id for the lifetime of one engine
/// instance, so a tree is walked at most once per accessor per node.
/// An engine instance is one evaluation: build it, query it, drop it.
/// Unit ids are assumed unique within a tree — the caches are keyed
/// on them.
pub struct HealthEngine<'a, S: ObservationStore + ?Sized> {
    store: &'a S,
    today: NaiveDate,
    config: EngineConfig,
    health_cache: RefCell<FxHashMap<UnitId, HealthStatus>>,
    latest_cache: RefCell<FxHashMap<UnitId, Option<Observation>>>,
    trend_cache: RefCell<FxHashMap<UnitId, Vec<TrendPoint>>>,
}

impl<'a, S: ObservationStore + ?Sized> HealthEngine<'a, S> {
    pub fn new(store: &'a S, today: NaiveDate) -> Self {
        Self::with_config(store, today, EngineConfig::default())
    }

    pub fn with_config(store: &'a S, today: NaiveDate, config: EngineConfig) -> Self {
        Self {
            store,
            today,
            config,
            health_cache: RefCell::new(FxHashMap::default()),
            latest_cache: RefCell::new(FxHashMap::default()),
            trend_cache: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Current health of `unit`.
    ///
    /// Composite: rollup over non-archived children's health. Leaf:
    /// classification of the latest non-future observation, or
    /// `NotAvailable` when none exists.
    pub fn health(&self, unit: &Unit) -> HealthStatus {
        let cached = self.health_cache.borrow().get(&unit.id).copied();
        if let Some(health) = cached {
            return health;
        }
        let health = if unit.is_leaf() {
            self.latest_update(unit)
                .map(|obs| obs.health)
                .unwrap_or(HealthStatus::NotAvailable)
        } else {
            rollup(
                unit.children
                    .iter()
                    .filter(|child| !child.archived)
                    .map(|child| self.health(child))
                    .collect::<Vec<_>>(),
            )
        };
        self.health_cache.borrow_mut().insert(unit.id.clone(), health);
        health
    }

    /// The most recent non-future observation for `unit`: max by date,
    /// ties broken by the later input position.
    pub fn latest_update(&self, unit: &Unit) -> Option<Observation> {
        let cached = self.latest_cache.borrow().get(&unit.id).cloned();
        if let Some(value) = cached {
            return value;
        }
        let mut latest: Option<Observation> = None;
        for obs in self.store.all_for(&unit.id) {
            // Observations dated after the evaluation date never
            // count as current data.
            if obs.date > self.today {
                continue;
            }
            match &latest {
                Some(best) if obs.date < best.date => {}
                _ => latest = Some(obs),
            }
        }
        self.latest_cache
            .borrow_mut()
            .insert(unit.id.clone(), latest.clone());
        latest
    }

    /// The bounded weekly trend series for `unit`.
    ///
    /// Historical points cover at most the configured window (default
    /// 6 weeks); one synthetic point at the evaluation date always
    /// closes the series, so the length is between 1 and window + 1.
    pub fn health_trend(&self, unit: &Unit) -> Vec<TrendPoint> {
        let cached = self.trend_cache.borrow().get(&unit.id).cloned();
        if let Some(points) = cached {
            return points;
        }
        let points = if unit.is_leaf() {
            self.leaf_trend(unit)
        } else {
            self.composite_trend(unit)
        };
        self.trend_cache
            .borrow_mut()
            .insert(unit.id.clone(), points.clone());
        points
    }

    fn leaf_trend(&self, unit: &Unit) -> Vec<TrendPoint> {
        let mut points: Vec<TrendPoint> = self
            .store
            .weekly_for(&unit.id)
            .into_iter()
            .filter(|obs| obs.date <= self.today)
            .map(|obs| TrendPoint::from_health(week_start(obs.date), obs.health, obs.note))
            .collect();
        points.sort_by_key(|point| point.date);
        self.truncate_to_window(&mut points);

        let latest_note = self.latest_update(unit).and_then(|obs| obs.note);
        points.push(TrendPoint::from_health(
            self.today,
            self.health(unit),
            latest_note,
        ));
        points
    }

    fn composite_trend(&self, unit: &Unit) -> Vec<TrendPoint> {
        let children: Vec<&Unit> = unit
            .children
            .iter()
            .filter(|child| !child.archived)
            .collect();
        let child_trends: Vec<Vec<TrendPoint>> = children
            .iter()
            .map(|child| self.health_trend(child))
            .collect();

        let mut mondays: Vec<NaiveDate> = child_trends
            .iter()
            .flat_map(|trend| trend.iter().map(|point| point.date))
            .filter(|date| *date <= self.today && is_week_start(*date))
            .collect();
        mondays.sort();
        mondays.dedup();
        self.truncate_dates_to_window(&mut mondays);

        let mut points: Vec<TrendPoint> = mondays
            .into_iter()
            .map(|monday| {
                // Children with no point at this Monday are skipped,
                // not zero-filled.
                let healths: SmallVec<[HealthStatus; 8]> = child_trends
                    .iter()
                    .filter_map(|trend| trend.iter().find(|point| point.date == monday))
                    .map(|point| point.health)
                    .collect();
                TrendPoint::from_health(monday, rollup(healths), None)
            })
            .collect();

        let current = rollup(children.iter().map(|child| self.health(child)).collect::<Vec<_>>());
        points.push(TrendPoint::from_health(self.today, current, None));
        points
    }

    fn truncate_to_window(&self, points: &mut Vec<TrendPoint>) {
        let window = self.config.effective_trend_window_weeks();
        if points.len() > window {
            points.drain(..points.len() - window);
        }
    }

    fn truncate_dates_to_window(&self, dates: &mut Vec<NaiveDate>) {
        let window = self.config.effective_trend_window_weeks();
        if dates.len() > window {
            dates.drain(..dates.len() - window);
        }
    }

    /// A leaf's non-future observations, ascending by date. Empty for
    /// composite nodes — their tooltip shows children instead.
    pub fn updates_for_tooltip(&self, unit: &Unit) -> Vec<Observation> {
        if !unit.is_leaf() {
            return Vec::new();
        }
        let mut observations: Vec<Observation> = self
            .store
            .all_for(&unit.id)
            .into_iter()
            .filter(|obs| obs.date <= self.today)
            .collect();
        observations.sort_by_key(|obs| obs.date);
        observations
    }

    /// Name/health pairs for direct non-archived children. Empty for
    /// leaves.
    pub fn children_health_for_tooltip(&self, unit: &Unit) -> Vec<ChildHealth> {
        unit.children
            .iter()
            .filter(|child| !child.archived)
            .map(|child| ChildHealth {
                name: child.name.clone(),
                health: self.health(child),
            })
            .collect()
    }
}
