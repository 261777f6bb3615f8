use voxhash3d::math::Point;
use voxhash3d::VoxelHashMap;

#[test]
fn closer_point_two_voxels_away_is_not_returned() {
    let mut map = VoxelHashMap::new(1.0, 100.0, 20).unwrap();

    // The query sits at the far right edge of voxel (0, 0, 0).
    let query = Point::new(0.99, 0.5, 0.5);
    // Voxel (-1, 0, 0), inside the neighborhood, 1.49 away.
    let within = Point::new(-0.5, 0.5, 0.5);
    // Voxel (2, 0, 0), outside the neighborhood, only 1.02 away.
    let beyond = Point::new(2.01, 0.5, 0.5);
    map.add_points(&[within, beyond]);

    let neighbor = map.closest_neighbor(&query).unwrap();
    assert_eq!(neighbor.point, within);
    assert!(neighbor.distance > voxhash3d::na::distance(&query, &beyond));
}

#[test]
fn point_only_beyond_the_neighborhood_is_not_found() {
    let mut map = VoxelHashMap::new(1.0, 100.0, 20).unwrap();
    map.add_points(&[Point::new(2.01, 0.5, 0.5)]);

    assert!(map.closest_neighbor(&Point::new(0.99, 0.5, 0.5)).is_none());
    assert!(map.closest_neighbor(&Point::new(1.01, 0.5, 0.5)).is_some());
}

#[test]
fn diagonal_neighbors_are_searched() {
    let mut map = VoxelHashMap::new(1.0, 100.0, 20).unwrap();
    let corner = Point::new(-0.5, -0.5, -0.5);
    map.add_points(&[corner]);

    let neighbor = map.closest_neighbor(&Point::new(0.5, 0.5, 0.5)).unwrap();
    assert_eq!(neighbor.point, corner);
    approx::assert_relative_eq!(neighbor.distance, 3.0f64.sqrt());
}

#[test]
fn empty_map_finds_nothing() {
    let map = VoxelHashMap::new(0.5, 10.0, 5).unwrap();
    assert!(map.closest_neighbor(&Point::origin()).is_none());
    assert!(map.closest_neighbors(&[Point::origin()]).iter().all(Option::is_none));
}
