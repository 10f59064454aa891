use crate::constants::{ALLOWED_CHUNK_SIZES, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};

/// Normalize a requested chunk size against the allowed table.
/// `None` means the default; anything else rounds up to the next allowed
/// size and clamps at the maximum. Chunk size only affects memory use and
/// syscall count, never the transformed bytes.
pub fn effective_chunk_size(requested: Option<usize>) -> usize {
    match requested {
        None => DEFAULT_CHUNK_SIZE,
        Some(size) => {
            if size >= MAX_CHUNK_SIZE {
                return MAX_CHUNK_SIZE;
            }
            for &allowed in ALLOWED_CHUNK_SIZES {
                if size <= allowed {
                    return allowed;
                }
            }
            MAX_CHUNK_SIZE
        }
    }
}

/// Render a byte count for log lines (binary units, one decimal).
pub fn human_bytes(n: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;
    const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

    let n = n as f64;
    if n >= GIB {
        format!("{:.1} GiB", n / GIB)
    } else if n >= MIB {
        format!("{:.1} MiB", n / MIB)
    } else if n >= KIB {
        format!("{:.1} KiB", n / KIB)
    } else {
        format!("{} B", n as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_means_default() {
        assert_eq!(effective_chunk_size(None), DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn exact_allowed_sizes_pass_through() {
        for &allowed in ALLOWED_CHUNK_SIZES {
            assert_eq!(effective_chunk_size(Some(allowed)), allowed);
        }
    }

    #[test]
    fn odd_sizes_round_up() {
        assert_eq!(effective_chunk_size(Some(1)), 16 * 1024);
        assert_eq!(effective_chunk_size(Some(70 * 1024)), 128 * 1024);
    }

    #[test]
    fn oversized_requests_clamp_to_max() {
        assert_eq!(effective_chunk_size(Some(usize::MAX)), MAX_CHUNK_SIZE);
        assert_eq!(effective_chunk_size(Some(MAX_CHUNK_SIZE + 1)), MAX_CHUNK_SIZE);
    }

    #[test]
    fn human_bytes_units() {
        assert_eq!(human_bytes(512), "512 B");
        assert_eq!(human_bytes(2048), "2.0 KiB");
        assert_eq!(human_bytes(5 * 1024 * 1024), "5.0 MiB");
        assert_eq!(human_bytes(3 * 1024 * 1024 * 1024), "3.0 GiB");
    }
}
