use crate::math::{Point, Real};
use core::hash::{Hash, Hasher};
use na::{point, Point3};

/// The integer grid coordinates of a voxel.
///
/// The voxel with key `(x, y, z)` covers the half-open cube
/// `[x, x + 1) × [y, y + 1) × [z, z + 1)` scaled by the voxel size. Two points share a key
/// if and only if they lie in the same cube. Points whose cube is out of the `i32` range have
/// no key.
///
/// Keys compare structurally. Their [`Hash`] implementation mixes the three axes into a single
/// word (see [`VoxelKey::spatial_hash`]) instead of hashing the fields one after the other.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct VoxelKey {
    /// Grid coordinate along the `x` axis.
    pub x: i32,
    /// Grid coordinate along the `y` axis.
    pub y: i32,
    /// Grid coordinate along the `z` axis.
    pub z: i32,
}

impl VoxelKey {
    /// Creates a key from its grid coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The key of the voxel of size `voxel_size` containing `point`.
    ///
    /// Coordinates are floored, not truncated, so that points on both sides of an axis plane
    /// never collapse into the same voxel:
    ///
    /// ```
    /// use voxhash3d::math::Point;
    /// use voxhash3d::VoxelKey;
    ///
    /// let key = VoxelKey::from_point(&Point::new(0.5, -0.5, 2.0), 1.0);
    /// assert_eq!(key, Some(VoxelKey::new(0, -1, 2)));
    /// let key = VoxelKey::from_point(&Point::new(-2.5, 1.0, 0.9), 0.5);
    /// assert_eq!(key, Some(VoxelKey::new(-5, 2, 1)));
    ///
    /// // Too far away to be indexed by an `i32` grid coordinate.
    /// assert_eq!(VoxelKey::from_point(&Point::new(3.0e9, 0.0, 0.0), 1.0), None);
    /// ```
    ///
    /// Returns `None` if a coordinate is not finite, or if its voxel lies outside of the `i32`
    /// grid range.
    #[inline]
    pub fn from_point(point: &Point, voxel_size: Real) -> Option<Self> {
        let scaled = point.coords / voxel_size;
        Some(Self {
            x: grid_coordinate(scaled.x)?,
            y: grid_coordinate(scaled.y)?,
            z: grid_coordinate(scaled.z)?,
        })
    }

    /// The key displaced by `offset` grid steps.
    ///
    /// Saturates at the boundaries of the `i32` range.
    #[inline]
    pub fn offset(self, offset: [i32; 3]) -> Self {
        Self {
            x: self.x.saturating_add(offset[0]),
            y: self.y.saturating_add(offset[1]),
            z: self.z.saturating_add(offset[2]),
        }
    }

    /// Combines the three coordinates into one hash word.
    ///
    /// This is the classic spatial hash of Teschner et al. ("Optimized Spatial Hashing for
    /// Collision Detection of Deformable Objects"): each axis is multiplied by a large prime
    /// and the products are xor-ed together.
    #[inline]
    pub fn spatial_hash(&self) -> u64 {
        let hx = (self.x as u32).wrapping_mul(73_856_093);
        let hy = (self.y as u32).wrapping_mul(19_349_669);
        let hz = (self.z as u32).wrapping_mul(83_492_791);
        (hx ^ hy ^ hz) as u64
    }
}

#[inline]
fn grid_coordinate(scaled: Real) -> Option<i32> {
    let floored = scaled.floor();
    // NOTE: negated so that NaNs are rejected too.
    if !(floored >= i32::MIN as Real && floored <= i32::MAX as Real) {
        return None;
    }
    Some(floored as i32)
}

impl Hash for VoxelKey {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.spatial_hash());
    }
}

impl From<Point3<i32>> for VoxelKey {
    fn from(p: Point3<i32>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<VoxelKey> for Point3<i32> {
    fn from(key: VoxelKey) -> Self {
        point![key.x, key.y, key.z]
    }
}

impl From<[i32; 3]> for VoxelKey {
    fn from(coords: [i32; 3]) -> Self {
        Self::new(coords[0], coords[1], coords[2])
    }
}
