use crate::math::{Point, Real};

/// The points stored inside of a single voxel.
///
/// A cell never holds more than the capacity it was created with: [`VoxelCell::push`] refuses
/// points once the cell is full. Points are kept in insertion order and are not deduplicated.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelCell {
    points: Vec<Point>,
    capacity: usize,
}

impl VoxelCell {
    const MAX_PREALLOCATED_POINTS: usize = 32;

    /// An empty cell accepting at most `capacity` points.
    ///
    /// No memory is reserved until the first insertion.
    pub fn new(capacity: usize) -> Self {
        Self {
            points: Vec::new(),
            capacity,
        }
    }

    /// The maximum number of points this cell accepts.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of points in this cell.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether this cell contains no point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether this cell reached its capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.points.len() >= self.capacity
    }

    /// The points of this cell, in insertion order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Appends `point` unless the cell is full.
    ///
    /// Returns `false` if the point was discarded.
    #[inline]
    pub fn push(&mut self, point: Point) -> bool {
        if self.is_full() {
            return false;
        }

        if self.points.capacity() == 0 {
            // Most cells fill up: allocate them in one go.
            self.points
                .reserve_exact(self.capacity.min(Self::MAX_PREALLOCATED_POINTS));
        }

        self.points.push(point);
        true
    }

    /// Removes every point farther than `max_distance` from `origin`.
    ///
    /// Returns the number of removed points. The allocation is kept so that the cell can be
    /// refilled without reallocating.
    pub fn remove_far_from(&mut self, origin: &Point, max_distance: Real) -> usize {
        let max_distance2 = max_distance * max_distance;
        let len_before = self.points.len();

        if max_distance2.is_normal() {
            self.points
                .retain(|pt| na::distance_squared(pt, origin) <= max_distance2);
        } else {
            // The squared bound over- or underflowed: compare unsquared distances instead.
            self.points.retain(|pt| {
                let d = pt - origin;
                d.x.hypot(d.y).hypot(d.z) <= max_distance
            });
        }

        len_before - self.points.len()
    }

    /// The point of this cell closest to `query`, with its squared distance.
    pub fn closest_point(&self, query: &Point) -> Option<(Point, Real)> {
        let mut best: Option<(Point, Real)> = None;

        for pt in &self.points {
            let dist2 = na::distance_squared(pt, query);
            if best.map(|(_, best_dist2)| dist2 < best_dist2).unwrap_or(true) {
                best = Some((*pt, dist2));
            }
        }

        best
    }
}
