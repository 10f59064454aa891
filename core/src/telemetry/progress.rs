//! Progress schedule and observer seam.
//!
//! Progress markers are advisory: they are emitted at roughly fixed byte
//! intervals for large inputs and never affect the transformed bytes.
//! Observers must be cheap; the pipeline calls them synchronously.

use log::info;

use crate::constants::{PROGRESS_THRESHOLD, PROGRESS_TICK_COUNT};
use crate::telemetry::TransformCounters;
use crate::utils::human_bytes;

/// Receives progress markers while a transform runs.
pub trait ProgressObserver {
    /// A tick boundary was crossed. `done` is the boundary in bytes,
    /// `total` the probed input length.
    fn on_tick(&mut self, done: u64, total: u64);

    /// The transform finished; `total` bytes were written.
    fn on_complete(&mut self, total: u64);
}

/// Observer that discards every marker.
pub struct NullProgress;

impl ProgressObserver for NullProgress {
    fn on_tick(&mut self, _done: u64, _total: u64) {}
    fn on_complete(&mut self, _total: u64) {}
}

/// Default library observer: markers go to the `log` crate at info level.
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn on_tick(&mut self, done: u64, total: u64) {
        info!("transformed {} / {}", human_bytes(done), human_bytes(total));
    }

    fn on_complete(&mut self, total: u64) {
        info!("transform complete, {} written", human_bytes(total));
    }
}

/// Progress policy for one transform call.
#[derive(Clone, Debug)]
pub struct ProgressConfig {
    /// Inputs at or below this many bytes emit no markers.
    pub threshold: u64,
    /// Target number of markers per run; must be >= 1.
    pub tick_count: u64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            threshold: PROGRESS_THRESHOLD,
            tick_count: PROGRESS_TICK_COUNT,
        }
    }
}

/// Tick schedule for one run, derived from the probed input length.
/// Inactive when the length is unknown or at/below the threshold.
#[derive(Debug)]
pub struct ProgressPlan {
    total: u64,
    tick_bytes: u64,
    next_tick: u64,
    active: bool,
}

impl ProgressPlan {
    pub fn for_len(total_len: Option<u64>, config: &ProgressConfig) -> Self {
        match total_len {
            Some(total) if total > config.threshold => {
                // Integer division can reach zero for tick counts larger than
                // the input; the interval is clamped to one byte.
                let tick_bytes = (total / config.tick_count.max(1)).max(1);
                Self {
                    total,
                    tick_bytes,
                    next_tick: tick_bytes,
                    active: true,
                }
            }
            _ => Self {
                total: total_len.unwrap_or(0),
                tick_bytes: 0,
                next_tick: 0,
                active: false,
            },
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Byte interval between markers: `max(1, total / tick_count)`.
    pub fn tick_bytes(&self) -> u64 {
        self.tick_bytes
    }

    /// Record that `done` bytes have been written so far, firing one marker
    /// per tick boundary crossed since the last call.
    pub fn advance(
        &mut self,
        done: u64,
        counters: &mut TransformCounters,
        observer: &mut dyn ProgressObserver,
    ) {
        if !self.active {
            return;
        }
        while self.next_tick <= self.total && done >= self.next_tick {
            observer.on_tick(self.next_tick, self.total);
            counters.add_tick();
            self.next_tick += self.tick_bytes;
        }
    }

    /// Emit the completion marker. A no-op when the plan is inactive.
    pub fn complete(&self, done: u64, observer: &mut dyn ProgressObserver) {
        if self.active {
            observer.on_complete(done);
        }
    }
}
