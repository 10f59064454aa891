//! Sequential transform pipeline.
//!
//! Pure pipeline wiring: read a chunk, XOR it in place, optionally echo it,
//! write it, account for it. Single-threaded by design; memory use is one
//! chunk buffer regardless of input size.

use std::io::{Read, Write};

use log::debug;

use crate::key::KeyMaterial;
use crate::stream::engine::XorEngine;
use crate::stream::io::read_chunk;
use crate::telemetry::{ProgressObserver, ProgressPlan, TransformCounters};
use crate::types::StreamError;

/// Run the streaming XOR loop until the reader is exhausted.
///
/// Bytes are written strictly in order, each chunk only after it is fully
/// combined. A mid-stream I/O error aborts and may leave the sink truncated.
pub fn run_transform_pipeline<R, W>(
    reader: &mut R,
    writer: &mut W,
    key: &KeyMaterial,
    chunk_size: usize,
    echo_content: bool,
    plan: &mut ProgressPlan,
    observer: &mut dyn ProgressObserver,
) -> Result<TransformCounters, StreamError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut counters = TransformCounters::default();
    let mut engine = XorEngine::new(key);
    let mut buf = vec![0u8; chunk_size];

    debug!(
        "pipeline start: chunk_size={chunk_size}, key_len={}, progress={}",
        key.len(),
        plan.is_active()
    );

    loop {
        let n = read_chunk(reader, &mut buf)?;
        if n == 0 {
            break;
        }

        engine.apply(&mut buf[..n]);

        if echo_content {
            // Advisory echo of the transformed bytes; failures here must not
            // abort the transform.
            let _ = std::io::stderr().write_all(&buf[..n]);
        }

        writer.write_all(&buf[..n])?;
        counters.add_chunk(n);
        plan.advance(engine.position(), &mut counters, observer);
    }

    writer.flush()?;
    plan.complete(engine.position(), observer);

    debug!(
        "pipeline done: {} bytes in {} chunks, {} ticks",
        counters.bytes_in, counters.chunks, counters.ticks_emitted
    );

    Ok(counters)
}
