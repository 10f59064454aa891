//! Stream transform layer: source/sink normalization, the XOR keystream
//! engine, the sequential pipeline, and the stable public API.

pub mod core;
pub mod engine;
pub mod io;
pub mod pipeline;

pub use self::core::{transform_stream, TransformOptions};
pub use engine::XorEngine;
pub use io::{InputSource, OutputSink};
