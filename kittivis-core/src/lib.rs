//! Core data structures for kittivis
//!
//! This crate provides the data model shared by the loaders and the geometry
//! algorithms: LIDAR points and point clouds, KITTI annotations, oriented
//! bounding boxes, per-point colors and the display configuration.

pub mod point;
pub mod point_cloud;
pub mod annotation;
pub mod bbox;
pub mod color;
pub mod settings;
pub mod traits;
pub mod error;

pub use point::*;
pub use point_cloud::*;
pub use annotation::*;
pub use bbox::*;
pub use color::*;
pub use settings::*;
pub use traits::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Matrix3, Isometry3, Rotation3};
