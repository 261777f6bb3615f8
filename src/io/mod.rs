//! Readers loading point clouds from files.
//!
//! These are used to populate a [`VoxelHashMap`](crate::VoxelHashMap) from a previously
//! recorded map, see [`VoxelHashMap::from_source`](crate::VoxelHashMap::from_source).

pub use self::load_error::LoadError;
#[cfg(feature = "wavefront")]
pub use self::obj_reader::ObjReader;
#[cfg(feature = "ply")]
pub use self::ply_reader::PlyReader;
pub use self::point_cloud_reader::{FileReader, PointCloudFormat, PointCloudReader};
pub use self::xyz_reader::XyzReader;

mod load_error;
#[cfg(feature = "wavefront")]
mod obj_reader;
#[cfg(feature = "ply")]
mod ply_reader;
mod point_cloud_reader;
mod xyz_reader;
