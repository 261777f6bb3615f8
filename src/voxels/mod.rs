//! Voxel keys and the bounded point containers stored under them.

pub use self::voxel_cell::VoxelCell;
pub use self::voxel_key::VoxelKey;
pub use self::voxels_consts::NEIGHBOR_OFFSETS;

mod voxel_cell;
mod voxel_key;
mod voxels_consts;
