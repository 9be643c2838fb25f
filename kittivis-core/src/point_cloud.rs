//! Point cloud containers

use crate::point::*;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered point container.
///
/// Order is the on-disk order. It carries no meaning of its own, but color and
/// normal buffers are correlated with points by index, so every operation that
/// drops points keeps the relative order of the survivors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointCloud<T> {
    pub points: Vec<T>,
}

/// A LIDAR frame as read from a velodyne `.bin` file
pub type LidarPointCloud = PointCloud<LidarPoint>;

impl<T> PointCloud<T> {
    /// Create a new empty point cloud
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a point cloud from a vector of points
    pub fn from_points(points: Vec<T>) -> Self {
        Self { points }
    }

    /// Get the number of points in the cloud
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.points
    }
}

impl<T> PointCloud<T>
where
    T: Copy,
    Point3f: From<T>,
{
    /// Positions only, in cloud order
    pub fn positions(&self) -> Vec<Point3f> {
        self.points.iter().map(|p| Point3f::from(*p)).collect()
    }
}

impl LidarPointCloud {
    /// Keep only points with `|x|, |y|, |z| <= bound`, preserving order.
    ///
    /// Used to drop far-range LIDAR noise right after loading.
    pub fn within_cube(&self, bound: f32) -> Self {
        self.points
            .iter()
            .filter(|p| p.within_cube(bound))
            .copied()
            .collect()
    }

    /// Reflectance values, in cloud order
    pub fn intensities(&self) -> Vec<f32> {
        self.points.iter().map(|p| p.intensity).collect()
    }
}

impl<T> Default for PointCloud<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for PointCloud<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a, T> IntoIterator for &'a PointCloud<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T> FromIterator<T> for PointCloud<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}
