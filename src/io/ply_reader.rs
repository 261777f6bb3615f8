use super::{LoadError, PointCloudReader};
use crate::math::{Point, Real};
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads the vertices of a Stanford (`.ply`) file as a point cloud.
///
/// The `x`, `y`, `z` properties of the `vertex` element are read, whatever their scalar type.
/// Other properties (normals, colors, intensity…) and other elements (faces…) are ignored.
/// ASCII, binary little-endian and binary big-endian files are supported.
///
/// This reader is enabled by the `ply` feature flag.
#[derive(Copy, Clone, Debug, Default)]
pub struct PlyReader;

impl PlyReader {
    /// Parses a point cloud from any byte source.
    ///
    /// `path` is only used to report errors.
    pub fn read_from(&self, mut input: impl Read, path: &Path) -> Result<Vec<Point>, LoadError> {
        let parse_error = |source: Box<dyn std::error::Error + Send + Sync>| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        };

        let ply = Parser::<DefaultElement>::new()
            .read_ply(&mut input)
            .map_err(|e| parse_error(Box::new(e)))?;
        let vertices = ply
            .payload
            .get("vertex")
            .ok_or_else(|| parse_error("the file has no `vertex` element".into()))?;

        let mut points = Vec::with_capacity(vertices.len());

        for (i, vertex) in vertices.iter().enumerate() {
            let mut coords = [0.0; 3];
            for (coord, name) in coords.iter_mut().zip(["x", "y", "z"]) {
                *coord = vertex.get(name).and_then(scalar).ok_or_else(|| {
                    parse_error(format!("vertex {i} has no scalar `{name}` property").into())
                })?;
            }
            points.push(Point::from(coords));
        }

        Ok(points)
    }
}

impl PointCloudReader for PlyReader {
    fn read_points(&self, path: &Path) -> Result<Vec<Point>, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_from(BufReader::new(file), path)
    }
}

fn scalar(property: &Property) -> Option<Real> {
    match *property {
        Property::Char(v) => Some(v as Real),
        Property::UChar(v) => Some(v as Real),
        Property::Short(v) => Some(v as Real),
        Property::UShort(v) => Some(v as Real),
        Property::Int(v) => Some(v as Real),
        Property::UInt(v) => Some(v as Real),
        Property::Float(v) => Some(v as Real),
        Property::Double(v) => Some(v),
        _ => None,
    }
}
