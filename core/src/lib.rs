//! xorpad-core
//!
//! Pure Rust streaming XOR transform engine.
//! Reads a bounded key fully into memory, cycles it against an input stream
//! of unbounded size, and writes output of identical length with O(chunk)
//! memory. XOR is self-inverse, so the same operation encrypts and decrypts.
//!
//! This is a toy cipher by design: no key derivation, no integrity tag, no
//! confidentiality guarantee beyond simple byte mixing.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

pub mod key;
pub mod telemetry;

// Stream layers
pub mod stream;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::key::{KeyError, KeyMaterial};
    pub use crate::stream::{transform_stream, InputSource, OutputSink, TransformOptions};
    pub use crate::telemetry::{
        LogProgress, NullProgress, ProgressConfig, ProgressObserver, TelemetrySnapshot,
    };
    pub use crate::types::StreamError;
}
