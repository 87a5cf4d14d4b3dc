//! Pulse scoring engine: hierarchical health rollup, weekly trend
//! series, and explainable trend-confidence scoring.
//!
//! The engine is synchronous, single-threaded, and side-effect-free.
//! Every entry point is a pure function of a materialized unit tree
//! plus an [`ObservationStore`](pulse_core::ObservationStore); nothing
//! is cached across top-level evaluations, and within one evaluation
//! a tree is walked at most once per accessor per node.

pub mod health;
pub mod hierarchy;
pub mod rollup;
pub mod sort;
pub mod trend;

pub use health::HealthEngine;
pub use hierarchy::{active_leaves, derived_state, effective_state, leaf_descendants, STATE_PRIORITY};
pub use rollup::rollup;
pub use sort::canonical_order;
pub use trend::TrendAnalyzer;
