use std::io::Write;
use std::path::Path;
use voxhash3d::io::{FileReader, PointCloudReader, XyzReader};
use voxhash3d::math::Point;
use voxhash3d::{ConfigurationError, LoadError, VoxelHashMap, VoxelMapConfig};

fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn load_equals_new_then_add_points() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "map.xyz",
        "0.1 0 0\n0.2 0 0\n5.5 1.5 -2.5\n100 0 0\n",
    );

    let loaded = VoxelHashMap::from_source(&path, 1.0, 10.0, 1).unwrap();

    let mut expected = VoxelHashMap::new(1.0, 10.0, 1).unwrap();
    expected.add_points(&[
        Point::new(0.1, 0.0, 0.0),
        Point::new(0.2, 0.0, 0.0),
        Point::new(5.5, 1.5, -2.5),
        Point::new(100.0, 0.0, 0.0),
    ]);

    // Loading does not prune.
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.export_points(), expected.export_points());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err =
        VoxelHashMap::from_source(dir.path().join("missing.xyz"), 1.0, 10.0, 20).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }), "{err}");
}

#[test]
fn malformed_file_produces_no_map() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "map.txt", "0 0 0\n1 2\n");
    let err = VoxelHashMap::from_source(&path, 1.0, 10.0, 20).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { line: 2, .. }), "{err}");
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "map.las", "LASF");
    let err = VoxelHashMap::from_source(&path, 1.0, 10.0, 20).unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedFormat(_)), "{err}");
}

#[test]
fn configuration_is_checked_before_reading() {
    // The file does not exist: a configuration error proves nothing was read.
    let err = VoxelHashMap::from_source("does/not/exist.xyz", 1.0, 10.0, 0).unwrap_err();
    assert!(
        matches!(
            err,
            LoadError::Configuration(ConfigurationError::ZeroCapacity)
        ),
        "{err}"
    );
}

#[test]
fn custom_readers_can_be_plugged_in() {
    struct Line;

    impl PointCloudReader for Line {
        fn read_points(&self, _: &Path) -> Result<Vec<Point>, LoadError> {
            Ok((0..10).map(|i| Point::new(i as f64, 0.0, 0.0)).collect())
        }
    }

    let map = VoxelHashMap::from_source_with_reader(
        &Line,
        Path::new("line"),
        VoxelMapConfig::new(2.0, 100.0, 1),
    )
    .unwrap();
    assert_eq!(map.len(), 5);
    assert_eq!(map.num_voxels(), 5);
}

#[test]
fn xyz_reader_is_the_file_reader_for_text_formats() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "scan.pts", "2\n1 2 3 0.5\n4 5 6 0.25\n");
    let points = FileReader.read_points(&path).unwrap();
    assert_eq!(points, XyzReader.read_points(&path).unwrap());
    assert_eq!(points, vec![Point::new(1.0, 2.0, 3.0), Point::new(4.0, 5.0, 6.0)]);
}

#[cfg(feature = "wavefront")]
#[test]
fn obj_vertices_are_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "map.obj",
        "# triangle\nv 0.5 0.5 0.5\nv 1.5 0.5 0.5\nv 0.5 1.5 0.5\nf 1 2 3\n",
    );

    let map = VoxelHashMap::from_source(&path, 1.0, 10.0, 20).unwrap();
    assert_eq!(map.len(), 3);
    let neighbor = map.closest_neighbor(&Point::new(1.4, 0.5, 0.5)).unwrap();
    assert_eq!(neighbor.point, Point::new(1.5, 0.5, 0.5));
}

#[cfg(feature = "ply")]
#[test]
fn ply_vertices_are_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "map.ply",
        "ply\nformat ascii 1.0\nelement vertex 3\nproperty float x\nproperty float y\n\
         property float z\nproperty float intensity\nend_header\n\
         0.1 0 0 1\n0.2 0 0 1\n5.5 1.5 -2.5 0.5\n",
    );

    let loaded = VoxelHashMap::from_source(&path, 1.0, 10.0, 1).unwrap();
    let mut expected = VoxelHashMap::new(1.0, 10.0, 1).unwrap();
    expected.add_points(&[
        Point::new(0.1f32 as f64, 0.0, 0.0),
        Point::new(5.5, 1.5, -2.5),
    ]);
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.export_points(), expected.export_points());
}

#[cfg(feature = "ply")]
#[test]
fn binary_ply_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.ply");
    let mut bytes = b"ply\nformat binary_little_endian 1.0\nelement vertex 2\n\
property float x\nproperty float y\nproperty float z\nend_header\n"
        .to_vec();
    for v in [0.5f32, 0.5, 0.5, 1.5, 0.5, 0.5] {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    std::fs::write(&path, bytes).unwrap();

    let map = VoxelHashMap::from_source(&path, 1.0, 10.0, 20).unwrap();
    assert_eq!(map.len(), 2);
    let neighbor = map.closest_neighbor(&Point::new(1.4, 0.5, 0.5)).unwrap();
    assert_eq!(neighbor.point, Point::new(1.5, 0.5, 0.5));
}

#[cfg(feature = "ply")]
#[test]
fn corrupted_ply_produces_no_map() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "map.ply", "ply\nformat ascii 1.0\nend_of_nothing\n");
    let err = VoxelHashMap::from_source(&path, 1.0, 10.0, 20).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }), "{err}");
}
