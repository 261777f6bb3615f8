use super::{LoadError, PointCloudReader};
use crate::math::{Point, Real};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads whitespace-separated text point clouds.
///
/// Each line describes one point; its first three numbers are the `x`, `y`, `z` coordinates
/// and any further column (normal, color, intensity…) is ignored. Blank lines and lines
/// starting with `#` are skipped, as is a single integer preceding every point (the point
/// count header of `.pts` files).
#[derive(Copy, Clone, Debug, Default)]
pub struct XyzReader;

impl XyzReader {
    /// Parses a point cloud from any buffered text source.
    ///
    /// `path` is only used to report errors.
    pub fn read_from(&self, input: impl BufRead, path: &Path) -> Result<Vec<Point>, LoadError> {
        let mut points = Vec::new();
        let mut first_record = true;

        for (i, line) in input.lines().enumerate() {
            let line = line.map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if core::mem::take(&mut first_record) && line.parse::<u64>().is_ok() {
                // Point count header.
                continue;
            }

            let malformed = |reason: String| LoadError::Malformed {
                path: path.to_path_buf(),
                line: i + 1,
                reason,
            };

            let mut coords = [0.0; 3];
            let mut tokens = line.split_whitespace();
            for (k, coord) in coords.iter_mut().enumerate() {
                let token = tokens
                    .next()
                    .ok_or_else(|| malformed(format!("expected 3 coordinates, found {k}")))?;
                *coord = token
                    .parse::<Real>()
                    .map_err(|e| malformed(format!("invalid coordinate {token:?}: {e}")))?;
            }

            points.push(Point::from(coords));
        }

        Ok(points)
    }
}

impl PointCloudReader for XyzReader {
    fn read_points(&self, path: &Path) -> Result<Vec<Point>, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_from(BufReader::new(file), path)
    }
}
