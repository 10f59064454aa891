//! Stable public API for the transform engine.

use log::debug;

use crate::stream::io::{open_input, open_output, probe_len, InputSource, OutputSink};
use crate::stream::pipeline::run_transform_pipeline;
use crate::constants::MIN_INPUT_LEN;
use crate::key::KeyMaterial;
use crate::telemetry::{ProgressConfig, ProgressObserver, ProgressPlan, TelemetrySnapshot, TransformTimer};
use crate::types::StreamError;
use crate::utils::effective_chunk_size;

/// Per-call options for a transform.
#[derive(Clone, Debug, Default)]
pub struct TransformOptions {
    /// Streaming chunk size; `None` means the default. Normalized via
    /// `effective_chunk_size`, affects memory and syscalls only.
    pub chunk_size: Option<usize>,

    /// Copy transformed bytes to standard error as they are produced. An
    /// explicit per-call option rather than a process-wide flag.
    pub echo_content: bool,

    /// Progress threshold and tick count.
    pub progress: ProgressConfig,
}

impl TransformOptions {
    pub fn validate(&self) -> Result<(), StreamError> {
        if self.progress.tick_count == 0 {
            return Err(StreamError::Validation(
                "progress tick_count must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

/// Transform `input` into `output` by XOR-combining every byte with the
/// cycling `key`. Output length always equals input length; running the same
/// transform again with the same key restores the original bytes.
///
/// Validation order: options, then input length (inputs of 0 or 1 bytes are
/// rejected with `ContentTooSmall`), and only then is the output sink opened.
/// A probed-length failure or small input therefore never creates or
/// truncates the output file.
///
/// Output is not written atomically: an I/O error mid-stream aborts the run
/// and may leave a truncated output file. That is an accepted failure mode;
/// there is no temp-file-and-rename and no checkpointing.
pub fn transform_stream(
    input: InputSource,
    output: OutputSink,
    key: &KeyMaterial,
    options: &TransformOptions,
    observer: &mut dyn ProgressObserver,
) -> Result<TelemetrySnapshot, StreamError> {
    options.validate()?;

    let mut timer = TransformTimer::new();
    let chunk_size = effective_chunk_size(options.chunk_size);

    // ---- Validate input size before touching the output ----
    let total_len = probe_len(&input)?;
    if let Some(len) = total_len {
        if len < MIN_INPUT_LEN {
            return Err(StreamError::ContentTooSmall { len });
        }
    }
    debug!("input length: {total_len:?}");

    let mut plan = ProgressPlan::for_len(total_len, &options.progress);

    // ---- Open streams: input first, output only after validation ----
    let mut reader = open_input(input)?;
    let (mut writer, maybe_buf) = open_output(output)?;

    // ---- Run the sequential pipeline ----
    let counters = run_transform_pipeline(
        &mut *reader,
        &mut *writer,
        key,
        chunk_size,
        options.echo_content,
        &mut plan,
        observer,
    )?;
    drop(writer);

    timer.finish();
    let mut snapshot = TelemetrySnapshot::from(&counters, &timer, key.len());

    // ---- Buffer extraction for Memory sinks ----
    if let Some(ref arc_buf) = maybe_buf {
        let buf = arc_buf.lock().unwrap();
        snapshot.attach_output(buf.clone());
    }

    Ok(snapshot)
}
