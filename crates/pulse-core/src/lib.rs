//! Core types, traits, errors, config, and tracing setup for the Pulse
//! health engine.
//!
//! This crate carries no algorithmic content. The rollup, trend, and
//! confidence computations live in `pulse-engine`.

pub mod config;
pub mod errors;
pub mod tracing_setup;
pub mod traits;
pub mod types;

pub use config::EngineConfig;
pub use errors::ConfigError;
pub use traits::{InMemoryObservationStore, ObservationStore};
pub use types::{
    ChildHealth, ConfidenceDetails, ConfidenceFactors, ConfidenceLevel, DragFactor,
    HealthStatus, HealthSummary, Observation, TrendDirection, TrendPoint, TrendReport,
    Unit, UnitId, UnitState,
};
