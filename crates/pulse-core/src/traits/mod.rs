//! Collaborator seams.
//!
//! The engine consumes observation data through the `ObservationStore`
//! trait so any conforming implementation — a database-backed
//! repository or an in-memory test fake — satisfies it without
//! runtime duck-typing.

pub mod observation_store;

pub use observation_store::{InMemoryObservationStore, ObservationStore};
