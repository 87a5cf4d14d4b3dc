//! Data model for the Pulse engine: units, observations, health
//! classifications, trend points, and confidence breakdowns.
//!
//! Everything here is transient — recomputed on every evaluation from
//! current data, never persisted by the engine.

pub mod collections;
pub mod confidence;
pub mod health;
pub mod observation;
pub mod trend;
pub mod unit;
pub mod week;

pub use confidence::{ConfidenceDetails, ConfidenceFactors, ConfidenceLevel, DragFactor};
pub use health::HealthStatus;
pub use observation::Observation;
pub use trend::{ChildHealth, HealthSummary, TrendDirection, TrendPoint, TrendReport};
pub use unit::{Unit, UnitId, UnitState};
pub use week::{is_week_start, week_start};
