//! Core traits for kittivis

use crate::{bbox::OrientedBoundingBox, point::*, point_cloud::*};

/// Trait for drawable/renderable objects
pub trait Drawable {
    /// Get the axis-aligned bounding box `(min, max)` of the object
    fn bounding_box(&self) -> (Point3f, Point3f);

    /// Get the center point of the object
    fn center(&self) -> Point3f {
        let (min, max) = self.bounding_box();
        nalgebra::center(&min, &max)
    }
}

impl<T> Drawable for PointCloud<T>
where
    T: Clone + Copy,
    Point3f: From<T>,
{
    fn bounding_box(&self) -> (Point3f, Point3f) {
        let mut positions = self.points.iter().map(|p| Point3f::from(*p));
        let Some(first) = positions.next() else {
            return (Point3f::origin(), Point3f::origin());
        };

        positions.fold((first, first), |(min, max), p| (min.inf(&p), max.sup(&p)))
    }
}

impl Drawable for OrientedBoundingBox {
    fn bounding_box(&self) -> (Point3f, Point3f) {
        self.axis_aligned_bounds()
    }

    fn center(&self) -> Point3f {
        self.center
    }
}
