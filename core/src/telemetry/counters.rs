//! Mutable counters collected during stream processing.
//!
//! Converted into an immutable TelemetrySnapshot at pipeline end.

use serde::Serialize;

/// Deterministic counters collected during stream processing.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransformCounters {
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub chunks: u64,
    pub ticks_emitted: u64,
}

impl TransformCounters {
    /// Record one transformed chunk. Input and output advance in lockstep;
    /// the transform never adds or removes bytes.
    pub fn add_chunk(&mut self, len: usize) {
        self.chunks += 1;
        self.bytes_in += len as u64;
        self.bytes_out += len as u64;
    }

    /// Record one emitted progress marker.
    pub fn add_tick(&mut self) {
        self.ticks_emitted += 1;
    }
}
