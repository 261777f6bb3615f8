//! Hashing helpers backing the voxel map.

#[cfg(feature = "enhanced-determinism")]
pub use self::voxel_key_hasher::VoxelKeyHasher;

pub mod hashmap;
#[cfg(feature = "enhanced-determinism")]
mod voxel_key_hasher;
