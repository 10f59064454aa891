/// Defaults when Option<T> is None
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024; // 64 KiB

/// Industry-standard chunk sizes (in bytes)
pub const ALLOWED_CHUNK_SIZES: &[usize] = &[
    16 * 1024,   // 16 KiB
    32 * 1024,   // 32 KiB
    64 * 1024,   // 64 KiB
    128 * 1024,  // 128 KiB
    256 * 1024,  // 256 KiB
    1024 * 1024, // 1 MiB
    2048 * 1024, // 2 MiB
    4096 * 1024, // 4 MiB
];

/// Max chunk size sanity bound (4 MiB, the largest allowed size).
pub const MAX_CHUNK_SIZE: usize = 4096 * 1024;

/// Inputs shorter than this are rejected with `ContentTooSmall` before the
/// output sink is opened. Empty and single-byte files are treated as "not
/// worth processing"; this is an explicit policy, not a technical limit.
pub const MIN_INPUT_LEN: u64 = 2;

/// Keys are loaded fully into memory and must stay small relative to the
/// input. Anything above this bound is rejected before allocation.
pub const MAX_KEY_SIZE: u64 = 16 * 1024 * 1024; // 16 MiB

/// Progress markers are emitted only for inputs larger than this.
pub const PROGRESS_THRESHOLD: u64 = 5 * 1024 * 1024; // 5 MiB

/// Target number of progress markers per run. The byte interval between
/// markers is `max(1, total_len / PROGRESS_TICK_COUNT)`.
pub const PROGRESS_TICK_COUNT: u64 = 20;
