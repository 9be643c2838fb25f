//! Point types and related functionality

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use bytemuck::{Pod, Zeroable};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// One LIDAR return: position in the sensor frame plus reflectance.
///
/// Laid out exactly like a record of a KITTI velodyne `.bin` file
/// (`x, y, z, intensity` as 32-bit floats).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct LidarPoint {
    pub position: Point3f,
    pub intensity: f32,
}

unsafe impl Pod for LidarPoint {}
unsafe impl Zeroable for LidarPoint {}

impl LidarPoint {
    pub fn new(x: f32, y: f32, z: f32, intensity: f32) -> Self {
        Self {
            position: Point3f::new(x, y, z),
            intensity,
        }
    }

    /// True when every coordinate satisfies `|c| <= bound`.
    ///
    /// NaN coordinates never satisfy the bound.
    pub fn within_cube(&self, bound: f32) -> bool {
        self.position.iter().all(|c| c.abs() <= bound)
    }
}

impl Default for LidarPoint {
    fn default() -> Self {
        Self {
            position: Point3f::origin(),
            intensity: 0.0,
        }
    }
}

impl From<LidarPoint> for Point3f {
    fn from(point: LidarPoint) -> Self {
        point.position
    }
}
