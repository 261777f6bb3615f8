/// Grid offsets of the 27 voxels forming the closed neighborhood of a voxel.
///
/// The center voxel comes first so that exact-voxel candidates are visited before any
/// neighbor. The remaining offsets are ordered lexicographically on `(x, y, z)`.
pub const NEIGHBOR_OFFSETS: [[i32; 3]; 27] = [
    [0, 0, 0],
    [-1, -1, -1],
    [-1, -1, 0],
    [-1, -1, 1],
    [-1, 0, -1],
    [-1, 0, 0],
    [-1, 0, 1],
    [-1, 1, -1],
    [-1, 1, 0],
    [-1, 1, 1],
    [0, -1, -1],
    [0, -1, 0],
    [0, -1, 1],
    [0, 0, -1],
    [0, 0, 1],
    [0, 1, -1],
    [0, 1, 0],
    [0, 1, 1],
    [1, -1, -1],
    [1, -1, 0],
    [1, -1, 1],
    [1, 0, -1],
    [1, 0, 0],
    [1, 0, 1],
    [1, 1, -1],
    [1, 1, 0],
    [1, 1, 1],
];
