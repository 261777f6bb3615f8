use voxhash3d::math::{Isometry, Point, Real};
use voxhash3d::{VoxelHashMap, VoxelMapConfig};

// A ring of points around the sensor, in the sensor frame.
fn scan(radius: Real) -> Vec<Point> {
    (0..360)
        .map(|i| {
            let angle = (i as Real).to_radians();
            Point::new(radius * angle.cos(), radius * angle.sin(), 0.0)
        })
        .collect()
}

#[test]
fn map_follows_a_moving_sensor() {
    let config = VoxelMapConfig::new(0.5, 20.0, 5);
    let mut map = VoxelHashMap::with_config(config).unwrap();
    let scan = scan(8.0);

    let step = 0.1;

    for frame in 0..300 {
        let sensor = Point::new(frame as Real * step, 0.0, 0.0);
        let pose = Isometry::translation(sensor.x, 0.0, 0.0);

        if !map.is_empty() {
            // Correspondence search of the registration, from the exact pose. The previous
            // ring passes at most `step` away from each point, so its voxels are neighbors.
            let world: Vec<_> = scan.iter().map(|pt| pose * pt).collect();
            let neighbors = map.closest_neighbors(&world);
            assert!(neighbors.iter().all(|n| n.is_some()), "frame {frame}");
        }

        map.update_with_pose(&scan, &pose);

        assert!(map
            .points()
            .all(|pt| voxhash3d::na::distance(pt, &sensor) <= config.max_distance));
        assert!(map.cells().all(|(_, cell)| cell.len() <= config.max_points_per_voxel));
    }

    // The sensor ended at x = 29.9: nothing is left from where it started.
    assert!(map.points().all(|pt| pt.x > 5.0));
}
