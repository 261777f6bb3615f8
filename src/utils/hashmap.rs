//! A hash-map that behaves deterministically when the
//! `enhanced-determinism` feature is enabled.

/// Builds [`VoxelKeyHasher`](super::VoxelKeyHasher)s.
#[cfg(feature = "enhanced-determinism")]
pub type VoxelKeyState = core::hash::BuildHasherDefault<super::VoxelKeyHasher>;

/// Deterministic hashmap using [`indexmap::IndexMap`].
///
/// Iteration follows insertion order, independently of the hash values.
#[cfg(feature = "enhanced-determinism")]
pub type IndexedHashMap<K, V> = indexmap::IndexMap<K, V, VoxelKeyState>;
#[cfg(feature = "enhanced-determinism")]
pub use {self::IndexedHashMap as HashMap, indexmap::map::Entry};

#[cfg(not(feature = "enhanced-determinism"))]
pub use hashbrown::hash_map::Entry;
/// Hashmap using [`hashbrown::HashMap`] with a fixed-seed hasher.
#[cfg(not(feature = "enhanced-determinism"))]
pub type HashMap<K, V> = hashbrown::hash_map::HashMap<K, V, foldhash::fast::FixedState>;
