use super::VoxelHashMap;
use crate::math::{Point, Real};
use crate::voxels::NEIGHBOR_OFFSETS;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The result of a nearest-neighbor query on a [`VoxelHashMap`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    /// The stored point closest to the query.
    pub point: Point,
    /// The Euclidean distance between the query and `point`.
    pub distance: Real,
}

impl Neighbor {
    /// Initializes a new `Neighbor`.
    pub fn new(point: Point, distance: Real) -> Self {
        Neighbor { point, distance }
    }
}

impl VoxelHashMap {
    /// Finds the stored point closest to `query`, searching only the 27 voxels surrounding it.
    ///
    /// The search covers the voxel containing `query` and its 26 direct neighbors. Points
    /// further away are never returned, even when they are closer to `query` than the result,
    /// which can happen when the query lies near a face of its voxel. This bounds the cost of
    /// each query, and matches the needs of registration: under a good pose estimate, true
    /// correspondences lie within one voxel of the query.
    ///
    /// Returns `None` if none of these voxels contains a point, or if `query` has no voxel key
    /// (see [`VoxelKey::from_point`](crate::VoxelKey::from_point)). Registration must then skip
    /// this correspondence.
    ///
    /// ```
    /// use voxhash3d::math::Point;
    /// use voxhash3d::VoxelHashMap;
    ///
    /// let mut map = VoxelHashMap::new(1.0, 100.0, 20).unwrap();
    /// map.add_points(&[Point::new(0.5, 0.5, 0.5), Point::new(1.5, 0.5, 0.5)]);
    ///
    /// let neighbor = map.closest_neighbor(&Point::new(1.25, 0.5, 0.5)).unwrap();
    /// assert_eq!(neighbor.point, Point::new(1.5, 0.5, 0.5));
    /// assert_eq!(neighbor.distance, 0.25);
    ///
    /// // Too far from any stored point.
    /// assert!(map.closest_neighbor(&Point::new(10.0, 0.0, 0.0)).is_none());
    /// ```
    pub fn closest_neighbor(&self, query: &Point) -> Option<Neighbor> {
        let center = self.voxel_key(query)?;
        let mut best: Option<(Point, Real)> = None;

        for offset in &NEIGHBOR_OFFSETS {
            let Some(cell) = self.voxels.get(&center.offset(*offset)) else {
                continue;
            };

            if let Some((pt, dist2)) = cell.closest_point(query) {
                if best.map(|(_, best_dist2)| dist2 < best_dist2).unwrap_or(true) {
                    best = Some((pt, dist2));
                }
            }
        }

        best.map(|(point, dist2)| Neighbor::new(point, dist2.sqrt()))
    }

    /// Same as [`Self::closest_neighbor`], but rejects neighbors farther than `max_dist`.
    pub fn closest_neighbor_with_max_dist(
        &self,
        query: &Point,
        max_dist: Real,
    ) -> Option<Neighbor> {
        self.closest_neighbor(query)
            .filter(|neighbor| neighbor.distance <= max_dist)
    }

    /// Runs [`Self::closest_neighbor`] for every query.
    ///
    /// The `i`-th result is the neighbor of `queries[i]`. With the `parallel` feature enabled,
    /// the queries are distributed over the `rayon` thread pool.
    pub fn closest_neighbors(&self, queries: &[Point]) -> Vec<Option<Neighbor>> {
        #[cfg(feature = "parallel")]
        let queries = queries.par_iter();
        #[cfg(not(feature = "parallel"))]
        let queries = queries.iter();

        queries.map(|query| self.closest_neighbor(query)).collect()
    }
}
