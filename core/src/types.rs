use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::key::KeyError;

/// Unified stream error covering file opening, streaming I/O, key validation,
/// and input-size policy.
/// - Ergonomic `From<T>` impls enable `?` across the pipeline.
/// - Open failures carry the offending path so the user sees which of the
///   three files (input, key, output) was at fault.
#[derive(Debug, Error)]
pub enum StreamError {
    /// A named file could not be opened for the required mode.
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O failure while streaming (read, write, or flush). The output file
    /// may be left truncated; partial output is an accepted failure mode.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Key validation failure (empty or oversized key).
    #[error("key error: {0}")]
    Key(#[from] KeyError),

    /// Input file has fewer than the minimum number of bytes. Raised before
    /// the output sink is opened, so no output file is created or modified.
    #[error("input is only {len} byte(s); nothing worth transforming")]
    ContentTooSmall { len: u64 },

    /// Generic high-level validation with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}
