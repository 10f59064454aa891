//! Unified telemetry module: counters, progress schedule, and immutable
//! snapshots.
//!
//! Counters are mutated while the stream runs and folded into an immutable
//! `TelemetrySnapshot` at the end. Progress reporting is purely
//! observational: observers are notified about byte boundaries crossed, and
//! nothing here can change the transformed bytes.

pub mod counters;
pub mod progress;
pub mod snapshot;

pub use counters::*;
pub use progress::*;
pub use snapshot::*;
