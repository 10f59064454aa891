//! Key Loader.
//!
//! Reads a bounded-size key file fully into memory and exposes it as an
//! immutable, cyclically-indexed byte sequence. The file handle is released
//! as soon as loading returns; the key is never mutated afterwards.

use std::fs;
use std::path::Path;

use bytes::Bytes;
use thiserror::Error;

use crate::constants::MAX_KEY_SIZE;
use crate::types::StreamError;

/// Key validation errors, surfaced before any transform begins.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// A zero-length key would make the cyclic index `i % 0` undefined, so it
    /// is a hard validation error rather than undefined behavior.
    #[error("key is empty; a key must contain at least one byte")]
    Empty,

    /// Key file exceeds the in-memory bound.
    #[error("key is {len} bytes; keys are capped at {max} bytes")]
    TooLarge { len: u64, max: u64 },
}

/// Immutable key material, length K >= 1, loaded fully into memory.
#[derive(Debug, Clone)]
pub struct KeyMaterial {
    bytes: Bytes,
}

impl KeyMaterial {
    /// Load a key from a file. Fails with `StreamError::Open` naming the path
    /// when the file is unreadable, and with `KeyError` when the content is
    /// empty or oversized. The size bound is checked against metadata before
    /// the content is read, so an oversized key is never allocated.
    pub fn load(path: &Path) -> Result<Self, StreamError> {
        let meta = fs::metadata(path).map_err(|e| StreamError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        if meta.len() > MAX_KEY_SIZE {
            return Err(KeyError::TooLarge {
                len: meta.len(),
                max: MAX_KEY_SIZE,
            }
            .into());
        }

        let raw = fs::read(path).map_err(|e| StreamError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_bytes(raw)
    }

    /// Build key material from an in-memory buffer, applying the same
    /// validation as [`KeyMaterial::load`].
    pub fn from_bytes(raw: impl Into<Bytes>) -> Result<Self, StreamError> {
        let bytes = raw.into();
        if bytes.is_empty() {
            return Err(KeyError::Empty.into());
        }
        if bytes.len() as u64 > MAX_KEY_SIZE {
            return Err(KeyError::TooLarge {
                len: bytes.len() as u64,
                max: MAX_KEY_SIZE,
            }
            .into());
        }
        Ok(Self { bytes })
    }

    /// Key length K. Always >= 1.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Key byte for absolute stream offset `offset`, cycling over the key.
    #[inline]
    pub fn byte_at(&self, offset: u64) -> u8 {
        self.bytes[(offset % self.bytes.len() as u64) as usize]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
