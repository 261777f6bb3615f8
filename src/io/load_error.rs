use crate::map::ConfigurationError;
use std::path::PathBuf;

/// Error returned when a point cloud cannot be loaded into a voxel map.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read the point cloud file {path:?}: {source}")]
    Io {
        /// The path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file could not be decoded by the parser of its format.
    #[error("failed to parse the point cloud file {path:?}: {source}")]
    Parse {
        /// The path of the file.
        path: PathBuf,
        /// The error reported by the format parser.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// A line of a text point cloud does not describe a point.
    #[error("malformed point cloud file {path:?}, line {line}: {reason}")]
    Malformed {
        /// The path of the file.
        path: PathBuf,
        /// The 1-based index of the offending line.
        line: usize,
        /// What is wrong with the line.
        reason: String,
    },
    /// The file extension does not match any supported point cloud format.
    #[error("unsupported point cloud format for {0:?}")]
    UnsupportedFormat(PathBuf),
    /// The voxel map parameters are invalid.
    #[error("invalid voxel map configuration: {0}")]
    Configuration(#[from] ConfigurationError),
}
