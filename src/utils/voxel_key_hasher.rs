//! FxHasher-style hasher for keys that already hash themselves into a single word.

use core::hash::Hasher;

// The 64-bit multiplier of rustc's FxHasher.
const K: u64 = 0x517c_c1b7_2722_0a95;

/// A fast, deterministic hasher for [`VoxelKey`](crate::VoxelKey), backing the
/// insertion-ordered map of the `enhanced-determinism` feature.
///
/// Voxel keys feed a single pre-mixed `u64` to the hasher. That word is only spread over
/// the high bits here, which the underlying table uses for its control bytes.
#[derive(Copy, Clone, Debug, Default)]
pub struct VoxelKeyHasher {
    hash: u64,
}

impl VoxelKeyHasher {
    #[inline]
    fn add_to_hash(&mut self, i: u64) {
        self.hash = (self.hash.rotate_left(5) ^ i).wrapping_mul(K);
    }
}

impl Hasher for VoxelKeyHasher {
    #[inline]
    fn write(&mut self, mut bytes: &[u8]) {
        while let Some((chunk, rest)) = bytes.split_first_chunk::<8>() {
            self.add_to_hash(u64::from_le_bytes(*chunk));
            bytes = rest;
        }
        if let Some((chunk, rest)) = bytes.split_first_chunk::<4>() {
            self.add_to_hash(u32::from_le_bytes(*chunk) as u64);
            bytes = rest;
        }
        for byte in bytes {
            self.add_to_hash(*byte as u64);
        }
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.add_to_hash(i as u64);
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.add_to_hash(i as u64);
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.add_to_hash(i);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.add_to_hash(i as u64);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }
}
