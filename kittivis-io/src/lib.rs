//! I/O for KITTI LIDAR frames and their object labels
//!
//! This crate reads velodyne `.bin` point clouds and `label_2` text files,
//! turns labels into world-frame oriented bounding boxes, finds the label
//! file belonging to a frame, and exports colored clouds as PLY.
//!
//! Every reader opens its file, parses it completely and drops the handle
//! before returning, on success and on error alike.

pub mod kitti_bin;
pub mod kitti_label;
pub mod paths;
pub mod ply;

pub use kitti_bin::{KittiBinReader, KittiBinWriter};
pub use kitti_label::{build_boxes, KittiLabelReader};
pub use paths::{label_path_candidates, resolve_label_path};
pub use ply::ColoredPlyWriter;

use kittivis_core::{FrameLoadOptions, LidarPointCloud, OrientedBoundingBox, Point3f, PointCloud, Result, Rgb};
use std::path::Path;

/// Trait for reading point clouds from files
pub trait PointCloudReader {
    type Point;

    fn read_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud<Self::Point>>;
}

/// Trait for writing point clouds to files
pub trait PointCloudWriter {
    type Point;

    fn write_point_cloud<P: AsRef<Path>>(cloud: &PointCloud<Self::Point>, path: P) -> Result<()>;
}

/// One LIDAR frame together with its labelled objects
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub points: LidarPointCloud,
    pub boxes: Vec<OrientedBoundingBox>,
}

/// Read a velodyne frame
pub fn load_frame<P: AsRef<Path>>(path: P) -> Result<LidarPointCloud> {
    KittiBinReader::read_point_cloud(path)
}

/// Read a velodyne frame, applying the load options (far-range cube filter)
pub fn load_frame_with_options<P: AsRef<Path>>(path: P, options: &FrameLoadOptions) -> Result<LidarPointCloud> {
    KittiBinReader::read_with_options(path, options)
}

/// Read a label file and build its boxes
pub fn load_annotations<P: AsRef<Path>>(path: P) -> Result<Vec<OrientedBoundingBox>> {
    KittiLabelReader::read_boxes(path)
}

/// Write a frame in the velodyne binary layout
pub fn write_frame<P: AsRef<Path>>(cloud: &LidarPointCloud, path: P) -> Result<()> {
    KittiBinWriter::write_point_cloud(cloud, path)
}

/// Write points with their colors as an ASCII PLY file
pub fn write_colored_ply<T, P>(points: &[T], colors: &[Rgb], path: P) -> Result<()>
where
    T: Copy,
    Point3f: From<T>,
    P: AsRef<Path>,
{
    ColoredPlyWriter::write(points, colors, path)
}

/// Read a frame and, if one can be found, its label file.
///
/// `labels` overrides label discovery. Without an override a frame with no
/// label file on disk gets an empty box list; a label file that exists but is
/// malformed is still an error.
pub fn load_frame_with_labels(
    frame_path: &Path,
    labels: Option<&Path>,
    options: &FrameLoadOptions,
) -> Result<Frame> {
    let points = load_frame_with_options(frame_path, options)?;

    let label_path = match labels {
        Some(path) => Some(path.to_path_buf()),
        None => resolve_label_path(frame_path),
    };
    let boxes = match label_path {
        Some(path) => load_annotations(&path)?,
        None => {
            tracing::debug!(frame = %frame_path.display(), "no label file found");
            Vec::new()
        }
    };

    Ok(Frame { points, boxes })
}

#[cfg(test)]
mod tests;
