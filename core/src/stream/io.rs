//! Normalized I/O for the transform pipeline.
//!
//! Sources and sinks are plain enums normalized into boxed readers and
//! writers. File variants carry their path so open failures can name the
//! offending file; length probing uses metadata and never reads content.

use std::fs::File;
use std::io::{Cursor, Read, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::types::StreamError;

/// Canonical input abstraction.
pub enum InputSource {
    /// Arbitrary reader; length unknown, so size validation and progress
    /// estimation are skipped.
    Reader(Box<dyn Read>),
    File(PathBuf),
    Memory(Vec<u8>),
}

/// Canonical output abstraction.
pub enum OutputSink {
    Writer(Box<dyn Write>),
    File(PathBuf),
    /// In-memory capture; the buffer comes back on the telemetry snapshot.
    Memory,
}

/// Probe the input length without consuming any bytes. `None` for plain
/// reader sources.
pub fn probe_len(src: &InputSource) -> Result<Option<u64>, StreamError> {
    match src {
        InputSource::Reader(_) => Ok(None),
        InputSource::File(path) => {
            let meta = std::fs::metadata(path).map_err(|e| StreamError::Open {
                path: path.clone(),
                source: e,
            })?;
            Ok(Some(meta.len()))
        }
        InputSource::Memory(buf) => Ok(Some(buf.len() as u64)),
    }
}

/// Normalize an input source into a boxed reader.
pub fn open_input(src: InputSource) -> Result<Box<dyn Read>, StreamError> {
    let reader: Box<dyn Read> = match src {
        InputSource::Reader(r) => r,
        InputSource::File(path) => Box::new(File::open(&path).map_err(|e| StreamError::Open {
            path,
            source: e,
        })?),
        InputSource::Memory(buf) => Box::new(Cursor::new(buf)),
    };
    Ok(reader)
}

/// Normalize an output sink into a boxed writer. Memory sinks additionally
/// hand back the shared buffer so the caller can recover the bytes after the
/// boxed writer is dropped.
pub fn open_output(
    sink: OutputSink,
) -> Result<(Box<dyn Write>, Option<Arc<Mutex<Vec<u8>>>>), StreamError> {
    match sink {
        OutputSink::Writer(w) => Ok((w, None)),
        OutputSink::File(path) => {
            let file = File::create(&path).map_err(|e| StreamError::Open {
                path,
                source: e,
            })?;
            Ok((Box::new(file), None))
        }
        OutputSink::Memory => {
            let buf = Arc::new(Mutex::new(Vec::new()));
            let writer = SharedBufferWriter { buf: buf.clone() };
            Ok((Box::new(writer), Some(buf)))
        }
    }
}

/// Writer into a shared in-memory buffer, used by the Memory sink.
pub struct SharedBufferWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for SharedBufferWriter {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        let mut guard = self.buf.lock().unwrap();
        guard.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Fill `buf` from the reader until it is full or EOF is reached, returning
/// the number of bytes read. Short reads from pipes and sockets are retried;
/// only a zero-length result means end of stream.
pub fn read_chunk<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = r.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
