//! Locating the label file that belongs to a velodyne frame

use std::path::{Component, Path, PathBuf};

/// Directory holding labels next to a `data/` root
pub const LABEL_DIR: &str = "Label";
/// Label directory of the standard KITTI object training layout
pub const KITTI_LABEL_DIR: &str = "label_2";
const KITTI_VELODYNE_DIR: &str = "velodyne";

/// Frame ids are the trailing six characters of the file stem (`000011`)
fn frame_id(stem: &str) -> &str {
    let start = stem
        .char_indices()
        .rev()
        .nth(5)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &stem[start..]
}

/// Candidate label paths for a frame, most specific first.
///
/// 1. `<prefix up to the first "data" dir>/Label/<id>.txt`, or when the path has
///    no `data` component, a `Label/` directory beside the frame's directory.
/// 2. `.../label_2/<stem>.txt` when the frame lives in a `velodyne/` directory.
pub fn label_path_candidates(frame_path: &Path) -> Vec<PathBuf> {
    let Some(stem) = frame_path.file_stem().and_then(|s| s.to_str()) else {
        return Vec::new();
    };
    let label_file = format!("{}.txt", frame_id(stem));

    let mut candidates = Vec::new();

    let mut data_root = PathBuf::new();
    let mut found_data = false;
    for component in frame_path.components() {
        data_root.push(component.as_os_str());
        if component == Component::Normal("data".as_ref()) {
            found_data = true;
            break;
        }
    }
    // the file name itself may be "data"; only directories count
    if found_data && data_root != frame_path {
        candidates.push(data_root.join(LABEL_DIR).join(&label_file));
    } else if let Some(grandparent) = frame_path.parent().and_then(Path::parent) {
        candidates.push(grandparent.join(LABEL_DIR).join(&label_file));
    }

    if let Some(parent) = frame_path.parent() {
        if parent.file_name().is_some_and(|name| name == KITTI_VELODYNE_DIR) {
            if let Some(root) = parent.parent() {
                candidates.push(root.join(KITTI_LABEL_DIR).join(format!("{stem}.txt")));
            }
        }
    }

    candidates
}

/// First candidate label path that exists on disk
pub fn resolve_label_path(frame_path: &Path) -> Option<PathBuf> {
    label_path_candidates(frame_path)
        .into_iter()
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::temp_path;

    #[test]
    fn test_frame_id_takes_last_six_chars() {
        assert_eq!(frame_id("scan_000011"), "000011");
        assert_eq!(frame_id("000011"), "000011");
        assert_eq!(frame_id("42"), "42");
    }

    #[test]
    fn test_data_root_layout() {
        let candidates = label_path_candidates(Path::new("/mnt/data/kitti/velodyne/scan_000011.bin"));
        assert_eq!(candidates[0], PathBuf::from("/mnt/data/Label/000011.txt"));
        assert_eq!(candidates[1], PathBuf::from("/mnt/data/kitti/label_2/scan_000011.txt"));
    }

    #[test]
    fn test_kitti_training_layout_without_data_dir() {
        let candidates = label_path_candidates(Path::new("training/velodyne/000003.bin"));
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("training/Label/000003.txt"),
                PathBuf::from("training/label_2/000003.txt"),
            ]
        );
    }

    #[test]
    fn test_resolve_picks_existing_file() {
        let root = temp_path("resolve_layout");
        let velodyne = root.join("velodyne");
        let labels = root.join("label_2");
        std::fs::create_dir_all(&velodyne).unwrap();
        std::fs::create_dir_all(&labels).unwrap();
        std::fs::write(labels.join("000005.txt"), "").unwrap();

        let frame = velodyne.join("000005.bin");
        assert_eq!(resolve_label_path(&frame), Some(labels.join("000005.txt")));
        assert_eq!(resolve_label_path(&velodyne.join("000006.bin")), None);

        let _ = std::fs::remove_dir_all(&root);
    }
}
