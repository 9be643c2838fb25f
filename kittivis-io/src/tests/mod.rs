//! Shared helpers and cross-module tests for kittivis-io

use super::*;
use kittivis_core::{Category, Error, LidarPoint};
use std::path::PathBuf;

/// A per-process scratch path under the system temp directory
pub(crate) fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("kittivis-io-{}-{name}", std::process::id()))
}

const CAR: &str = "Car 0.00 0 -1.57 599.41 156.40 629.75 189.25 1.50 1.60 3.90 0.00 1.20 5.00 0.00";

fn write_sample_frame(path: &Path) {
    let cloud = LidarPointCloud::from_points(vec![
        LidarPoint::new(5.0, 0.0, 0.0, 0.1),
        LidarPoint::new(-8.0, 2.0, -1.0, 0.2),
    ]);
    write_frame(&cloud, path).unwrap();
}

#[test]
fn test_load_frame_with_discovered_labels() {
    let root = temp_path("frame_with_labels");
    std::fs::create_dir_all(root.join("velodyne")).unwrap();
    std::fs::create_dir_all(root.join("label_2")).unwrap();
    let frame_path = root.join("velodyne").join("000011.bin");
    write_sample_frame(&frame_path);
    std::fs::write(root.join("label_2").join("000011.txt"), format!("{CAR}\n")).unwrap();

    let frame = load_frame_with_labels(&frame_path, None, &FrameLoadOptions::default()).unwrap();
    assert_eq!(frame.points.len(), 2);
    assert_eq!(frame.boxes.len(), 1);
    assert_eq!(frame.boxes[0].category, Category::Car);

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn test_load_frame_without_labels_has_no_boxes() {
    let root = temp_path("frame_without_labels");
    std::fs::create_dir_all(&root).unwrap();
    let frame_path = root.join("000012.bin");
    write_sample_frame(&frame_path);

    let frame = load_frame_with_labels(&frame_path, None, &FrameLoadOptions::default()).unwrap();
    assert_eq!(frame.points.len(), 2);
    assert!(frame.boxes.is_empty());

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn test_explicit_label_path_must_exist() {
    let root = temp_path("explicit_labels");
    std::fs::create_dir_all(&root).unwrap();
    let frame_path = root.join("000013.bin");
    write_sample_frame(&frame_path);

    let missing = root.join("nope.txt");
    let result = load_frame_with_labels(&frame_path, Some(&missing), &FrameLoadOptions::default());
    assert!(matches!(result, Err(Error::FileNotFound { .. })));

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn test_load_options_are_applied() {
    let root = temp_path("frame_options");
    std::fs::create_dir_all(&root).unwrap();
    let frame_path = root.join("000014.bin");
    write_sample_frame(&frame_path);

    let options = FrameLoadOptions { max_abs_coordinate: Some(6.0) };
    let frame = load_frame_with_labels(&frame_path, None, &options).unwrap();
    assert_eq!(frame.points.len(), 1);
    assert_eq!(frame.points[0].intensity, 0.1);

    let _ = std::fs::remove_dir_all(&root);
}
