//! Configuration for the Pulse engine.
//! TOML-based; compiled defaults match the canonical scoring rules.

pub mod engine_config;

pub use engine_config::EngineConfig;
