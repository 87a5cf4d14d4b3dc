//! Trend/confidence evaluation over a flat population of leaf units:
//! weekly score bucketing, direction/delta, and a penalty-decomposed
//! confidence score with an explainable dominant factor.

pub mod analyzer;
pub mod bucket;
pub mod confidence;

pub use analyzer::TrendAnalyzer;
pub use bucket::{direction_and_delta, weekly_series};
pub use confidence::{population_stddev, ConfidenceOutcome};
