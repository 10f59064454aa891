//! Immutable end-of-run telemetry.
//!
//! A snapshot is built once from the counters and timer when the pipeline
//! finishes; it cannot be mutated afterwards, so results are reproducible
//! and safe to serialize.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::telemetry::TransformCounters;

/// Wall-clock timer for one transform run.
#[derive(Debug)]
pub struct TransformTimer {
    started: Instant,
    elapsed: Option<Duration>,
}

impl TransformTimer {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            elapsed: None,
        }
    }

    /// Freeze the elapsed time. Subsequent calls keep the first value.
    pub fn finish(&mut self) {
        if self.elapsed.is_none() {
            self.elapsed = Some(self.started.elapsed());
        }
    }

    /// Elapsed time; falls back to "so far" when not yet finished.
    pub fn elapsed(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.started.elapsed())
    }
}

impl Default for TransformTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable telemetry snapshot for a completed transform.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetrySnapshot {
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub chunks: u64,
    pub ticks_emitted: u64,
    pub key_len: u64,
    pub elapsed: Duration,
    pub throughput_bytes_per_sec: f64,

    /// Captured output buffer for Memory sinks; tests and benchmarks only.
    #[serde(skip)]
    pub output: Option<Vec<u8>>,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TransformCounters, timer: &TransformTimer, key_len: usize) -> Self {
        let elapsed = timer.elapsed();
        let secs = elapsed.as_secs_f64();
        let throughput = if secs > 0.0 {
            counters.bytes_in as f64 / secs
        } else {
            0.0
        };

        Self {
            bytes_in: counters.bytes_in,
            bytes_out: counters.bytes_out,
            chunks: counters.chunks,
            ticks_emitted: counters.ticks_emitted,
            key_len: key_len as u64,
            elapsed,
            throughput_bytes_per_sec: throughput,
            output: None,
        }
    }

    /// Attach the captured output buffer of a Memory sink.
    pub fn attach_output(&mut self, buf: Vec<u8>) {
        self.output = Some(buf);
    }

    /// Cross-field consistency check used by tests.
    pub fn sanity_check(&self) -> bool {
        if self.bytes_in != self.bytes_out {
            return false;
        }
        if (self.chunks == 0) != (self.bytes_in == 0) {
            return false;
        }
        if self.key_len == 0 {
            return false;
        }
        true
    }
}
