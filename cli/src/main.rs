//! xorpad — symmetric XOR file transformer.
//!
//! `xorpad <INPUT> <KEY> <OUTPUT>` XOR-combines every input byte with a byte
//! drawn cyclically from the key file. The operation is self-inverse: running
//! it again with the same key restores the original file, so the same command
//! both encrypts and decrypts. This is a toy cipher, not a secure one.
//!
//! Exit codes (explicit, documented mapping from error kind to code):
//! - 0 — success, or help display
//! - 1 — I/O failure (open/read/write), offending path named on stderr
//! - 2 — usage error (clap's convention)
//! - 3 — input too small (0 or 1 bytes)
//! - 4 — invalid key (empty or oversized)

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::debug;

use xorpad_core::prelude::*;
use xorpad_core::utils::human_bytes;

const EXIT_IO: u8 = 1;
const EXIT_USAGE: u8 = 2;
const EXIT_CONTENT_TOO_SMALL: u8 = 3;
const EXIT_INVALID_KEY: u8 = 4;

#[derive(Parser, Debug)]
#[command(
    name = "xorpad",
    version,
    about = "XOR file encryptor/decryptor; the same key file encrypts and decrypts",
    after_help = "Example: create key.txt containing e.g. 'mZq4t7w!' and run\n  \
                  xorpad secret.pdf key.txt secret.pdf.enc\n\
                  xorpad secret.pdf.enc key.txt secret.pdf"
)]
struct Args {
    /// File to transform
    input: PathBuf,

    /// Key file (raw bytes, any length >= 1; cycles when shorter than input)
    key: PathBuf,

    /// Destination file (overwritten if it exists)
    output: PathBuf,

    /// Echo the transformed bytes to stderr
    #[arg(long)]
    echo: bool,

    /// Print the telemetry snapshot as JSON on completion
    #[arg(long)]
    stats: bool,

    /// Streaming chunk size in bytes (rounded up to a supported size)
    #[arg(long, value_name = "BYTES")]
    chunk_size: Option<usize>,

    /// Suppress console progress markers
    #[arg(short, long)]
    quiet: bool,
}

/// Console progress renderer: one percentage line per tick, rewritten in
/// place, plus a final summary.
struct ConsoleProgress;

impl ProgressObserver for ConsoleProgress {
    fn on_tick(&mut self, done: u64, total: u64) {
        let percent = done * 100 / total.max(1);
        eprint!("\r{:>3}% ({} / {})", percent, human_bytes(done), human_bytes(total));
    }

    fn on_complete(&mut self, total: u64) {
        eprintln!("\rdone: {} written          ", human_bytes(total));
    }
}

fn run(args: &Args) -> anyhow::Result<TelemetrySnapshot> {
    // Key first: an unreadable or invalid key aborts before the input or
    // output is touched.
    let key = KeyMaterial::load(&args.key)?;
    debug!("key loaded: {} bytes", key.len());

    let options = TransformOptions {
        chunk_size: args.chunk_size,
        echo_content: args.echo,
        progress: ProgressConfig::default(),
    };

    let snapshot = if args.quiet {
        transform_stream(
            InputSource::File(args.input.clone()),
            OutputSink::File(args.output.clone()),
            &key,
            &options,
            &mut NullProgress,
        )?
    } else {
        transform_stream(
            InputSource::File(args.input.clone()),
            OutputSink::File(args.output.clone()),
            &key,
            &options,
            &mut ConsoleProgress,
        )?
    };

    Ok(snapshot)
}

/// Map an error to the documented process exit code.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<StreamError>() {
        Some(StreamError::Open { .. }) | Some(StreamError::Io(_)) => EXIT_IO,
        Some(StreamError::ContentTooSmall { .. }) => EXIT_CONTENT_TOO_SMALL,
        Some(StreamError::Key(_)) => EXIT_INVALID_KEY,
        Some(StreamError::Validation(_)) => EXIT_USAGE,
        None => EXIT_IO,
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(snapshot) => {
            if args.stats {
                match serde_json::to_string_pretty(&snapshot)
                    .context("serializing telemetry snapshot")
                {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        eprintln!("warning: {err:#}");
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}
