use super::{LoadError, PointCloudReader};
use crate::math::{Point, Real};
use obj::{Obj, ObjData};
use std::path::Path;

/// Reads the vertices of a Wavefront (`.obj`) file as a point cloud.
///
/// Faces, normals and texture coordinates are ignored. Vertex positions are stored in single
/// precision by the parser and widened to [`Real`].
///
/// This reader is enabled by the `wavefront` feature flag.
#[derive(Copy, Clone, Debug, Default)]
pub struct ObjReader;

impl PointCloudReader for ObjReader {
    fn read_points(&self, path: &Path) -> Result<Vec<Point>, LoadError> {
        let Obj {
            data: ObjData { position, .. },
            ..
        } = Obj::load(path).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        Ok(position
            .iter()
            .map(|v| Point::new(v[0] as Real, v[1] as Real, v[2] as Real))
            .collect())
    }
}
