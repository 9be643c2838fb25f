//! Oriented bounding boxes built from KITTI annotations

use crate::annotation::{Category, RawAnnotation};
use crate::error::{Error, Result};
use crate::point::{Point3f, Vector3f};
use nalgebra::{Isometry3, Rotation3, Translation3, UnitQuaternion};
use serde::{Deserialize, Serialize};

/// Corner index pairs forming the 12 wireframe edges of a box.
///
/// Corner `i` takes the positive half extent along local x when bit 0 of `i`
/// is set, along local y for bit 1 and along local z for bit 2 (see
/// [`OrientedBoundingBox::corners`]).
pub const BOX_EDGES: [[usize; 2]; 12] = [
    [0, 1], [2, 3], [4, 5], [6, 7],
    [0, 2], [1, 3], [4, 6], [5, 7],
    [0, 4], [1, 5], [2, 6], [3, 7],
];

/// A world-frame box rotated about the vertical (world y) axis only.
///
/// `extent` holds the full side lengths along the box's local axes:
/// width along local x, height along local y, length along local z.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrientedBoundingBox {
    pub category: Category,
    pub center: Point3f,
    pub extent: Vector3f,
    pub rotation_y: f32,
}

impl OrientedBoundingBox {
    /// Create a box, rejecting non-positive (or NaN) side lengths
    pub fn new(category: Category, center: Point3f, extent: Vector3f, rotation_y: f32) -> Result<Self> {
        if !extent.iter().all(|&e| e > 0.0) {
            return Err(Error::InvalidBoxExtent {
                category: category.to_string(),
                h: extent.y,
                w: extent.x,
                l: extent.z,
            });
        }

        Ok(Self {
            category,
            center,
            extent,
            rotation_y,
        })
    }

    /// Build the box for one label line.
    ///
    /// The label's location is the bottom-center of the object, so the world
    /// z of the center is lifted by half the height.
    pub fn from_annotation(annotation: &RawAnnotation) -> Result<Self> {
        let location = annotation.world_location();
        let center = Point3f::new(location.x, location.y, location.z + annotation.h / 2.0);
        let extent = Vector3f::new(annotation.w, annotation.h, annotation.l);
        Self::new(annotation.category.clone(), center, extent, annotation.rotation_y)
    }

    pub fn half_extent(&self) -> Vector3f {
        self.extent / 2.0
    }

    pub fn rotation(&self) -> Rotation3<f32> {
        Rotation3::from_axis_angle(&Vector3f::y_axis(), self.rotation_y)
    }

    /// Local-to-world rigid transform
    pub fn pose(&self) -> Isometry3<f32> {
        Isometry3::from_parts(
            Translation3::from(self.center.coords),
            UnitQuaternion::from_rotation_matrix(&self.rotation()),
        )
    }

    /// Express a world point in the box's local frame
    pub fn to_local(&self, point: &Point3f) -> Point3f {
        Point3f::from(self.rotation().matrix().transpose() * (point - self.center))
    }

    /// Closed-boundary membership test: a point on a face is inside
    pub fn contains(&self, point: &Point3f) -> bool {
        let local = self.to_local(point);
        let half = self.half_extent();
        local.x.abs() <= half.x && local.y.abs() <= half.y && local.z.abs() <= half.z
    }

    pub fn corner(&self, index: usize) -> Point3f {
        let half = self.half_extent();
        let sign = |bit: usize| if index & bit != 0 { 1.0 } else { -1.0 };
        let local = Point3f::new(half.x * sign(0b001), half.y * sign(0b010), half.z * sign(0b100));
        self.pose() * local
    }

    /// The eight world-frame corners, indexed as described on [`BOX_EDGES`]
    pub fn corners(&self) -> [Point3f; 8] {
        std::array::from_fn(|i| self.corner(i))
    }

    /// World-frame axis-aligned bounds `(min, max)` enclosing the box
    pub fn axis_aligned_bounds(&self) -> (Point3f, Point3f) {
        let corners = self.corners();
        let mut min = corners[0];
        let mut max = corners[0];
        for c in &corners[1..] {
            min = min.inf(c);
            max = max.sup(c);
        }
        (min, max)
    }
}
