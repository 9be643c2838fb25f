//! KITTI object annotations

use crate::color::Rgb;
use crate::point::Point3f;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Object class of an annotation.
///
/// Only the classes with a dedicated overlay color get their own variant;
/// every other label (Van, Cyclist, DontCare, ...) is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Car,
    Pedestrian,
    Misc,
    Other(String),
}

impl Category {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Car" => Category::Car,
            "Pedestrian" => Category::Pedestrian,
            "Misc" => Category::Misc,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Car => "Car",
            Category::Pedestrian => "Pedestrian",
            Category::Misc => "Misc",
            Category::Other(label) => label,
        }
    }

    /// Overlay color for member points. Total: unknown labels are gray.
    pub fn color(&self) -> Rgb {
        match self {
            Category::Car => Rgb::RED,
            Category::Pedestrian => Rgb::BLUE,
            Category::Misc => Rgb::GREEN,
            Category::Other(_) => Rgb::GRAY,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a location from the KITTI camera frame (y down, z forward) into the
/// LIDAR-aligned world frame used by the point cloud: `(x, -y, -z)`.
pub fn camera_to_world(location: Point3f) -> Point3f {
    Point3f::new(location.x, -location.y, -location.z)
}

/// One label line, before box construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAnnotation {
    pub category: Category,
    /// Object height
    pub h: f32,
    /// Object width
    pub w: f32,
    /// Object length
    pub l: f32,
    /// Bottom-center of the object in the source camera frame.
    ///
    /// On disk the three values appear in `(y, z, x)` order.
    pub location: Point3f,
    /// Yaw in radians
    pub rotation_y: f32,
}

impl RawAnnotation {
    /// Bottom-center in the world frame
    pub fn world_location(&self) -> Point3f {
        camera_to_world(self.location)
    }
}
