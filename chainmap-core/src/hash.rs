//! FNV-1a hashing for bucket addressing
//!
//! 32-bit Fowler-Noll-Vo, variant 1a: xor the byte in, then multiply.

use std::hash::Hasher;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Streaming 32-bit FNV-1a state
#[derive(Clone, Copy, Debug)]
pub struct Fnv1a32 {
    state: u32,
}

impl Fnv1a32 {
    /// Create a hasher seeded with the FNV offset basis
    pub fn new() -> Self {
        Fnv1a32 {
            state: FNV_OFFSET_BASIS,
        }
    }

    /// Current 32-bit digest
    #[inline(always)]
    pub fn finish_u32(&self) -> u32 {
        self.state
    }
}

impl Default for Fnv1a32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1a32 {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= byte as u32;
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.state as u64
    }
}

/// Hash raw bytes in one call
///
/// Callers hashing a `str` must pass `as_bytes()`; going through `Hash` would
/// append a terminator byte and change the digest.
#[inline]
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hasher = Fnv1a32::new();
    hasher.write(bytes);
    hasher.finish_u32()
}
