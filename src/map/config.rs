use crate::math::Real;

/// Error returned when a voxel map is configured with invalid parameters.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ConfigurationError {
    /// The voxel size must be finite and strictly positive.
    #[error("the voxel size must be finite and strictly positive, got {0}.")]
    NonPositiveVoxelSize(Real),
    /// The pruning distance must be strictly positive.
    #[error("the maximum distance must be strictly positive, got {0}.")]
    NonPositiveMaxDistance(Real),
    /// Each voxel must be able to hold at least one point.
    #[error("the maximum number of points per voxel must be at least 1.")]
    ZeroCapacity,
}

/// The construction parameters of a [`VoxelHashMap`](crate::VoxelHashMap).
///
/// These parameters are fixed for the whole lifetime of a map.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct VoxelMapConfig {
    /// The edge length of each (cubic) voxel.
    pub voxel_size: Real,
    /// Points farther than this distance from the pruning origin are forgotten.
    pub max_distance: Real,
    /// The maximum number of points stored in a single voxel.
    ///
    /// Points falling into a full voxel are discarded.
    pub max_points_per_voxel: usize,
}

impl Default for VoxelMapConfig {
    fn default() -> Self {
        Self::from_max_range(Self::DEFAULT_MAX_RANGE)
    }
}

impl VoxelMapConfig {
    /// The sensor range assumed by [`VoxelMapConfig::default`].
    pub const DEFAULT_MAX_RANGE: Real = 100.0;
    /// The number of points per voxel used by [`VoxelMapConfig::default`].
    pub const DEFAULT_MAX_POINTS_PER_VOXEL: usize = 20;

    /// Creates a new configuration.
    ///
    /// The parameters are checked by [`Self::validate`], which every map constructor calls.
    pub fn new(voxel_size: Real, max_distance: Real, max_points_per_voxel: usize) -> Self {
        Self {
            voxel_size,
            max_distance,
            max_points_per_voxel,
        }
    }

    /// A configuration derived from the maximum range of the sensor.
    ///
    /// The map keeps everything the sensor can see (`max_distance == max_range`) and uses
    /// voxels of one hundredth of that range.
    pub fn from_max_range(max_range: Real) -> Self {
        Self::new(
            max_range / 100.0,
            max_range,
            Self::DEFAULT_MAX_POINTS_PER_VOXEL,
        )
    }

    /// Checks that every parameter is in its valid range.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        // NOTE: written as negated comparisons so that NaNs are rejected too.
        if !(self.voxel_size > 0.0 && self.voxel_size.is_finite()) {
            return Err(ConfigurationError::NonPositiveVoxelSize(self.voxel_size));
        }

        if !(self.max_distance > 0.0) {
            return Err(ConfigurationError::NonPositiveMaxDistance(
                self.max_distance,
            ));
        }

        if self.max_points_per_voxel == 0 {
            return Err(ConfigurationError::ZeroCapacity);
        }

        Ok(())
    }
}
