//! Stateful XOR keystream combiner.
//!
//! XOR is self-inverse, so the same engine state applied twice restores the
//! original bytes; "encrypt" and "decrypt" are the same operation. The
//! engine mutates chunks in place and tracks the absolute stream offset, so
//! key cycling stays correct across chunk boundaries of any size.

use crate::key::KeyMaterial;

pub struct XorEngine<'k> {
    key: &'k KeyMaterial,
    /// Absolute offset of the next byte in the stream.
    cursor: u64,
}

impl<'k> XorEngine<'k> {
    pub fn new(key: &'k KeyMaterial) -> Self {
        Self { key, cursor: 0 }
    }

    /// XOR `data` in place against the cycling key, advancing the cursor.
    /// Output byte at stream position i is `input[i] ^ key[i % K]`.
    pub fn apply(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            *byte ^= self.key.byte_at(self.cursor);
            self.cursor += 1;
        }
    }

    /// Total number of bytes combined so far.
    pub fn position(&self) -> u64 {
        self.cursor
    }
}
