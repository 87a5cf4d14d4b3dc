//! Per-node health computation: current classification, bounded weekly
//! trend series, and tooltip breakdowns.

pub mod engine;

pub use engine::HealthEngine;
