//! Error handling for Pulse.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The engine itself raises no domain errors — missing or empty input
//! degrades to `NotAvailable` health, empty trends, and zero
//! confidence. Config loading is the only fallible subsystem.

pub mod config_error;

pub use config_error::ConfigError;
