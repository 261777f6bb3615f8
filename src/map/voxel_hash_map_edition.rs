use super::VoxelHashMap;
use crate::math::{Isometry, Point};
use crate::utils::hashmap::Entry;
use crate::voxels::{VoxelCell, VoxelKey};

impl VoxelHashMap {
    /// Inserts points into the voxels containing them.
    ///
    /// A point is appended to its voxel unless that voxel already contains
    /// [`max_points_per_voxel`](Self::max_points_per_voxel) points, in which case it is
    /// silently discarded. Points are neither deduplicated nor merged.
    ///
    /// Points without a voxel key are skipped: points with a NaN or infinite coordinate,
    /// and points too far from the world origin for their voxel to be indexed.
    pub fn add_points(&mut self, points: &[Point]) {
        let mut num_skipped = 0;

        for point in points {
            let Some(key) = VoxelKey::from_point(point, self.config.voxel_size) else {
                num_skipped += 1;
                continue;
            };
            let inserted = match self.voxels.entry(key) {
                Entry::Occupied(mut entry) => entry.get_mut().push(*point),
                Entry::Vacant(entry) => {
                    let mut cell = VoxelCell::new(self.config.max_points_per_voxel);
                    let inserted = cell.push(*point);
                    let _ = entry.insert(cell);
                    inserted
                }
            };

            if inserted {
                self.num_points += 1;
            }
        }

        if num_skipped != 0 {
            log::debug!(
                "Skipped {} non-finite or out-of-range points out of {} to insert.",
                num_skipped,
                points.len()
            );
        }
    }

    /// Inserts a batch of world-space points, then prunes everything farther than
    /// [`max_distance`](Self::max_distance) from `origin`.
    ///
    /// The points must already be expressed in the map frame, `origin` is typically the
    /// current sensor position.
    pub fn update(&mut self, points: &[Point], origin: &Point) {
        self.add_points(points);
        self.remove_far_from(origin);
    }

    /// Inserts a scan expressed in the sensor frame located at `pose`, then prunes
    /// everything farther than [`max_distance`](Self::max_distance) from the sensor.
    ///
    /// Every point is transformed by `pose` before insertion, and the translational part of
    /// `pose` is used as the pruning origin.
    pub fn update_with_pose(&mut self, points: &[Point], pose: &Isometry) {
        let world_points: Vec<_> = points.iter().map(|pt| pose * pt).collect();
        let origin = Point::from(pose.translation.vector);
        self.update(&world_points, &origin);
    }

    /// Removes every point farther than [`max_distance`](Self::max_distance) from `origin`.
    ///
    /// Voxels left empty are removed from the map. Points exactly at `max_distance` are
    /// kept.
    pub fn remove_far_from(&mut self, origin: &Point) {
        let max_distance = self.config.max_distance;
        let mut num_removed = 0;
        let num_voxels_before = self.voxels.len();

        self.voxels.retain(|_, cell| {
            num_removed += cell.remove_far_from(origin, max_distance);
            !cell.is_empty()
        });

        self.num_points -= num_removed;
        log::trace!(
            "Pruned {} points and {} voxels farther than {} from {:?}.",
            num_removed,
            num_voxels_before - self.voxels.len(),
            max_distance,
            origin
        );
    }

    /// Removes every voxel, and every point, from this map.
    pub fn clear(&mut self) {
        self.voxels.clear();
        self.num_points = 0;
    }
}
