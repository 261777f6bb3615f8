/*!
voxhash3d
=========

**voxhash3d** is a voxel-partitioned spatial hash map of 3D points, built to be the
incrementally updated world model of an online point-cloud registration (ICP) pipeline.

Every processed scan both queries the map, to find correspondences for pose refinement, and
updates it, to absorb newly observed geometry and forget geometry left far behind the sensor.
The map bounds its memory in two ways: each voxel holds at most a fixed number of points, and
points farther than a fixed distance from the sensor are pruned.

```
use voxhash3d::math::{Isometry, Point};
use voxhash3d::VoxelHashMap;

let mut map = VoxelHashMap::new(1.0, 100.0, 20).unwrap();
let scan = [Point::new(1.25, 0.5, 0.0), Point::new(1.5, 0.75, 0.25)];
let pose = Isometry::translation(2.0, 0.0, 0.0);
map.update_with_pose(&scan, &pose);

let neighbor = map.closest_neighbor(&Point::new(3.3, 0.5, 0.0)).unwrap();
assert_eq!(neighbor.point, Point::new(3.25, 0.5, 0.0));
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::module_inception)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod io;
pub mod map;
pub mod utils;
pub mod voxels;

pub use crate::io::LoadError;
pub use crate::map::{ConfigurationError, Neighbor, VoxelHashMap, VoxelMapConfig};
pub use crate::voxels::{VoxelCell, VoxelKey};

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Isometry3, Point3, Vector3};

    /// The scalar type used throughout this crate.
    pub use f64 as Real;

    /// The point type.
    pub type Point = Point3<Real>;

    /// The vector type.
    pub type Vector = Vector3<Real>;

    /// The rigid transformation type.
    pub type Isometry = Isometry3<Real>;
}
