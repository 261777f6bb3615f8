use super::{LoadError, XyzReader};
use crate::math::Point;
use std::path::Path;

#[cfg(feature = "wavefront")]
use super::ObjReader;
#[cfg(feature = "ply")]
use super::PlyReader;

/// A source of point clouds stored in files.
pub trait PointCloudReader {
    /// Reads every point stored in the file at `path`.
    fn read_points(&self, path: &Path) -> Result<Vec<Point>, LoadError>;
}

/// The point cloud file formats understood by [`FileReader`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointCloudFormat {
    /// Wavefront `.obj` files. Only the vertex positions are read.
    ///
    /// Requires the `wavefront` feature.
    Obj,
    /// Stanford `.ply` files, in any encoding. Only the vertex positions are read.
    ///
    /// Requires the `ply` feature.
    Ply,
    /// Whitespace-separated text files with one point per line (`.xyz`, `.xyzn`, `.xyzrgb`,
    /// `.pts`, `.txt`).
    Xyz,
}

impl PointCloudFormat {
    /// Deduces the format of a file from its extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "obj" => Some(Self::Obj),
            "ply" => Some(Self::Ply),
            "xyz" | "xyzn" | "xyzrgb" | "pts" | "txt" => Some(Self::Xyz),
            _ => None,
        }
    }
}

/// Reads point clouds with the reader matching the file extension.
///
/// This is the reader used by [`VoxelHashMap::from_source`](crate::VoxelHashMap::from_source).
#[derive(Copy, Clone, Debug, Default)]
pub struct FileReader;

impl PointCloudReader for FileReader {
    fn read_points(&self, path: &Path) -> Result<Vec<Point>, LoadError> {
        match PointCloudFormat::from_path(path) {
            #[cfg(feature = "wavefront")]
            Some(PointCloudFormat::Obj) => ObjReader.read_points(path),
            #[cfg(feature = "ply")]
            Some(PointCloudFormat::Ply) => PlyReader.read_points(path),
            Some(PointCloudFormat::Xyz) => XyzReader.read_points(path),
            _ => Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
