//! Point-in-box classification
//!
//! Membership is tested for every (box, point) pair, which makes this the
//! dominant per-frame cost. Each box is first reduced to a [`BoxMembership`]
//! (inverse rotation and half extents precomputed, plus a world AABB used to
//! reject most points without rotating them), then the points are scanned in
//! parallel.

use kittivis_core::{Matrix3, OrientedBoundingBox, Point3f, Vector3f};
use rayon::prelude::*;

/// Precomputed membership test for one oriented box
#[derive(Debug, Clone)]
pub struct BoxMembership {
    center: Point3f,
    world_to_local: Matrix3<f32>,
    half_extent: Vector3f,
    aabb_min: Point3f,
    aabb_max: Point3f,
}

impl BoxMembership {
    pub fn new(bbox: &OrientedBoundingBox) -> Self {
        let (min, max) = bbox.axis_aligned_bounds();
        // Corners go through a quaternion and can land a few ulps inside the
        // true faces; pad so the prune never rejects a boundary point.
        let pad = Vector3f::repeat(1e-5 * (1.0 + bbox.center.coords.amax() + bbox.extent.amax()));

        Self {
            center: bbox.center,
            world_to_local: bbox.rotation().matrix().transpose(),
            half_extent: bbox.half_extent(),
            aabb_min: min - pad,
            aabb_max: max + pad,
        }
    }

    /// Closed-boundary test: points exactly on a face are inside
    #[inline]
    pub fn contains(&self, point: &Point3f) -> bool {
        if point.x < self.aabb_min.x
            || point.y < self.aabb_min.y
            || point.z < self.aabb_min.z
            || point.x > self.aabb_max.x
            || point.y > self.aabb_max.y
            || point.z > self.aabb_max.z
        {
            return false;
        }

        let local = self.world_to_local * (point - self.center);
        local.x.abs() <= self.half_extent.x
            && local.y.abs() <= self.half_extent.y
            && local.z.abs() <= self.half_extent.z
    }
}

/// Indices (ascending) of the points inside `bbox`.
///
/// Indices refer to positions in `points`; they are meaningless for any
/// other point set, including a filtered copy of this one.
pub fn points_in_box<T>(bbox: &OrientedBoundingBox, points: &[T]) -> Vec<usize>
where
    T: Copy + Sync,
    Point3f: From<T>,
{
    let membership = BoxMembership::new(bbox);
    let indices: Vec<usize> = points
        .par_iter()
        .enumerate()
        .filter_map(|(i, p)| membership.contains(&Point3f::from(*p)).then_some(i))
        .collect();

    tracing::trace!(category = %bbox.category, members = indices.len(), "classified box");
    indices
}

/// Number of member points for each box, in box order
pub fn points_per_box<T>(boxes: &[OrientedBoundingBox], points: &[T]) -> Vec<usize>
where
    T: Copy + Sync,
    Point3f: From<T>,
{
    boxes
        .iter()
        .map(|bbox| {
            let membership = BoxMembership::new(bbox);
            points
                .par_iter()
                .filter(|p| membership.contains(&Point3f::from(**p)))
                .count()
        })
        .collect()
}
