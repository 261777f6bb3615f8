use super::{ConfigurationError, VoxelMapConfig};
use crate::io::{FileReader, LoadError, PointCloudReader};
use crate::math::{Point, Real};
use crate::utils::hashmap::HashMap;
use crate::voxels::{VoxelCell, VoxelKey};
use std::path::Path;

/// A sparse voxel grid storing a bounded number of 3D points per voxel.
///
/// This is the local map of an online point-cloud registration pipeline. Every frame, the
/// registration queries it with [`VoxelHashMap::closest_neighbor`] to build correspondences,
/// then absorbs the registered scan with [`VoxelHashMap::update_with_pose`].
///
/// # Memory bounds
///
/// - Each voxel stores at most [`VoxelMapConfig::max_points_per_voxel`] points. Points falling
///   into a full voxel are discarded.
/// - Every update prunes the points farther than [`VoxelMapConfig::max_distance`] from the
///   sensor. Voxels left empty by pruning are removed entirely.
///
/// # Concurrency
///
/// Queries take `&self` and the map is `Sync`, so any number of threads may search it at the
/// same time. Insertion and pruning take `&mut self`: the borrow checker guarantees that no
/// query is in flight while the map is modified.
///
/// # Example
///
/// ```
/// use voxhash3d::math::Point;
/// use voxhash3d::VoxelHashMap;
///
/// let mut map = VoxelHashMap::new(1.0, 10.0, 1).unwrap();
/// assert!(map.is_empty());
///
/// // Both points fall into the voxel (0, 0, 0), which holds a single point.
/// map.add_points(&[Point::new(0.1, 0.0, 0.0), Point::new(0.2, 0.0, 0.0)]);
/// assert_eq!(map.export_points(), vec![Point::new(0.1, 0.0, 0.0)]);
///
/// // Points farther than 10 from the origin are pruned.
/// map.add_points(&[Point::new(100.0, 0.0, 0.0)]);
/// map.remove_far_from(&Point::origin());
/// assert_eq!(map.export_points(), vec![Point::new(0.1, 0.0, 0.0)]);
/// ```
#[derive(Clone, Debug)]
pub struct VoxelHashMap {
    pub(super) config: VoxelMapConfig,
    pub(super) voxels: HashMap<VoxelKey, VoxelCell>,
    // Sum of the lengths of every cell.
    pub(super) num_points: usize,
}

impl VoxelHashMap {
    /// Creates an empty map.
    ///
    /// Fails if `voxel_size` or `max_distance` isn’t strictly positive, or if
    /// `max_points_per_voxel` is zero.
    pub fn new(
        voxel_size: Real,
        max_distance: Real,
        max_points_per_voxel: usize,
    ) -> Result<Self, ConfigurationError> {
        Self::with_config(VoxelMapConfig::new(
            voxel_size,
            max_distance,
            max_points_per_voxel,
        ))
    }

    /// Creates an empty map with the given configuration.
    pub fn with_config(config: VoxelMapConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self {
            config,
            voxels: HashMap::default(),
            num_points: 0,
        })
    }

    /// Creates a map and inserts `points` with [`Self::add_points`].
    pub fn from_points(
        config: VoxelMapConfig,
        points: &[Point],
    ) -> Result<Self, ConfigurationError> {
        let mut result = Self::with_config(config)?;
        result.add_points(points);
        Ok(result)
    }

    /// Creates a map populated with the point cloud stored in the file at `path`.
    ///
    /// The file format is deduced from the extension of `path`, see
    /// [`PointCloudFormat`](crate::io::PointCloudFormat). This is equivalent to
    /// [`Self::new`] followed by [`Self::add_points`] with every point read from the file.
    ///
    /// No map is returned if the file cannot be read or parsed.
    pub fn from_source(
        path: impl AsRef<Path>,
        voxel_size: Real,
        max_distance: Real,
        max_points_per_voxel: usize,
    ) -> Result<Self, LoadError> {
        let config = VoxelMapConfig::new(voxel_size, max_distance, max_points_per_voxel);
        Self::from_source_with_reader(&FileReader, path.as_ref(), config)
    }

    /// Creates a map populated with the points `reader` extracts from `path`.
    ///
    /// The configuration is validated before anything is read.
    pub fn from_source_with_reader(
        reader: &impl PointCloudReader,
        path: &Path,
        config: VoxelMapConfig,
    ) -> Result<Self, LoadError> {
        let mut result = Self::with_config(config)?;
        let points = reader.read_points(path)?;
        result.add_points(&points);
        log::debug!(
            "Loaded {} points from {}, {} kept in {} voxels.",
            points.len(),
            path.display(),
            result.num_points,
            result.voxels.len()
        );
        Ok(result)
    }

    /// The configuration this map was created with.
    #[inline]
    pub fn config(&self) -> &VoxelMapConfig {
        &self.config
    }

    /// The edge length of the voxels.
    #[inline]
    pub fn voxel_size(&self) -> Real {
        self.config.voxel_size
    }

    /// The distance beyond which points are pruned.
    #[inline]
    pub fn max_distance(&self) -> Real {
        self.config.max_distance
    }

    /// The maximum number of points stored in a single voxel.
    #[inline]
    pub fn max_points_per_voxel(&self) -> usize {
        self.config.max_points_per_voxel
    }

    /// The key of the voxel containing `point`.
    ///
    /// Returns `None` for points that cannot be stored, see [`VoxelKey::from_point`].
    #[inline]
    pub fn voxel_key(&self, point: &Point) -> Option<VoxelKey> {
        VoxelKey::from_point(point, self.config.voxel_size)
    }

    /// The total number of points stored in this map.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_points
    }

    /// The number of non-empty voxels of this map.
    #[inline]
    pub fn num_voxels(&self) -> usize {
        self.voxels.len()
    }

    /// Whether this map contains no point.
    ///
    /// Runs in constant time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_points == 0
    }

    /// The cell of the voxel identified by `key`, if it contains any point.
    #[inline]
    pub fn cell(&self, key: &VoxelKey) -> Option<&VoxelCell> {
        self.voxels.get(key)
    }

    /// Iterates through every non-empty voxel of this map.
    ///
    /// The iteration order is unspecified, but deterministic for a given map state.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = (&VoxelKey, &VoxelCell)> + '_ {
        self.voxels.iter()
    }

    /// Iterates through every point of this map, voxel after voxel.
    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.voxels.values().flat_map(|cell| cell.points().iter())
    }

    /// Collects every point of this map into a single vector.
    ///
    /// The points are ordered as per [`Self::cells`], then in insertion order within each
    /// voxel.
    pub fn export_points(&self) -> Vec<Point> {
        let mut result = Vec::with_capacity(self.num_points);
        result.extend(self.points().copied());
        result
    }
}
