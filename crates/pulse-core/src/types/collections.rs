//! Hash collections used throughout Pulse.
//!
//! FxHash over SipHash: unit ids and week dates are short keys, and the
//! engine never hashes attacker-controlled input.

pub use rustc_hash::{FxHashMap, FxHashSet};
