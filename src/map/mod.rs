//! The voxel hash map and its configuration.

pub use self::config::{ConfigurationError, VoxelMapConfig};
pub use self::voxel_hash_map::VoxelHashMap;
pub use self::voxel_hash_map_query::Neighbor;

mod config;
mod voxel_hash_map;
mod voxel_hash_map_edition;
mod voxel_hash_map_query;
