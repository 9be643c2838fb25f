//! KITTI `label_2` object annotations
//!
//! One object per line, whitespace separated. Only these columns are read:
//!
//! | column | meaning |
//! |---|---|
//! | 0 | category |
//! | 8, 9, 10 | height, width, length |
//! | 11, 12, 13 | camera-frame location, stored as `y, z, x` |
//! | 14 | rotation_y (radians) |
//!
//! Truncation, occlusion, alpha, the 2D box and the optional score are ignored.

use kittivis_core::{Category, Error, OrientedBoundingBox, Point3f, RawAnnotation, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Minimum number of columns on a label line
pub const MIN_FIELDS: usize = 15;

pub struct KittiLabelReader;

impl KittiLabelReader {
    /// Read every annotation in a label file.
    ///
    /// A single bad line fails the whole read.
    pub fn read_annotations<P: AsRef<Path>>(path: P) -> Result<Vec<RawAnnotation>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::from_open(e, path))?;
        let annotations = parse_annotations(BufReader::new(file))?;
        tracing::debug!(path = %path.display(), objects = annotations.len(), "read label file");
        Ok(annotations)
    }

    /// Read a label file and build one box per annotation, in file order
    pub fn read_boxes<P: AsRef<Path>>(path: P) -> Result<Vec<OrientedBoundingBox>> {
        build_boxes(&Self::read_annotations(path)?)
    }
}

/// Build world-frame boxes for a list of annotations
pub fn build_boxes(annotations: &[RawAnnotation]) -> Result<Vec<OrientedBoundingBox>> {
    annotations.iter().map(OrientedBoundingBox::from_annotation).collect()
}

/// Parse annotations from any buffered reader. Blank lines are skipped.
pub fn parse_annotations<R: BufRead>(reader: R) -> Result<Vec<RawAnnotation>> {
    let mut annotations = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        annotations.push(parse_label_line(&line, index + 1)?);
    }
    Ok(annotations)
}

/// Parse one non-empty label line. `line_number` is 1-based and only used in errors.
pub fn parse_label_line(line: &str, line_number: usize) -> Result<RawAnnotation> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return Err(Error::MalformedAnnotationLine {
            line: line_number,
            reason: format!("expected at least {MIN_FIELDS} fields, found {}", fields.len()),
        });
    }

    let number = |column: usize| -> Result<f32> {
        let raw = fields[column];
        match raw.parse::<f32>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(Error::MalformedAnnotationLine {
                line: line_number,
                reason: format!("field {column} is not a finite number: {raw:?}"),
            }),
        }
    };

    let (h, w, l) = (number(8)?, number(9)?, number(10)?);
    let (y, z, x) = (number(11)?, number(12)?, number(13)?);
    let rotation_y = number(14)?;

    Ok(RawAnnotation {
        category: Category::from_label(fields[0]),
        h,
        w,
        l,
        location: Point3f::new(x, y, z),
        rotation_y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::temp_path;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    const CAR: &str = "Car 0.00 0 -1.57 599.41 156.40 629.75 189.25 2.85 2.63 12.34 2.00 1.50 8.00 -1.56";
    const PEDESTRIAN: &str =
        "Pedestrian 0.00 0 -0.20 712.40 143.00 810.73 307.92 1.89 0.48 1.20 1.84 1.47 8.41 0.01";

    #[test]
    fn test_parse_consumed_columns() {
        let a = parse_label_line(CAR, 1).unwrap();

        assert_eq!(a.category, Category::Car);
        assert_relative_eq!(a.h, 2.85);
        assert_relative_eq!(a.w, 2.63);
        assert_relative_eq!(a.l, 12.34);
        // columns 11..14 are y, z, x
        assert_eq!(a.location, Point3f::new(8.00, 2.00, 1.50));
        assert_relative_eq!(a.rotation_y, -1.56);
    }

    #[test]
    fn test_world_location_sign_pattern() {
        // y = 2, z = 3, x = 1 on disk
        let line = "Misc 0 0 0 0 0 0 0 1.0 1.0 1.0 2.0 3.0 1.0 0.0";
        let a = parse_label_line(line, 1).unwrap();
        assert_eq!(a.location, Point3f::new(1.0, 2.0, 3.0));
        assert_eq!(a.world_location(), Point3f::new(1.0, -2.0, -3.0));
    }

    #[test]
    fn test_score_column_is_ignored() {
        let line = format!("{CAR} 0.97");
        assert_eq!(parse_label_line(&line, 1).unwrap(), parse_label_line(CAR, 1).unwrap());
    }

    #[test]
    fn test_short_line_is_malformed() {
        let line = "Car 0.00 0 -1.57 599.41 156.40 629.75 189.25 2.85 2.63 12.34 2.00 1.50 8.00";
        match parse_label_line(line, 7) {
            Err(Error::MalformedAnnotationLine { line, reason }) => {
                assert_eq!(line, 7);
                assert!(reason.contains("14"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_consumed_field_is_malformed() {
        let line = CAR.replace("12.34", "long");
        assert!(matches!(
            parse_label_line(&line, 1),
            Err(Error::MalformedAnnotationLine { line: 1, .. })
        ));

        let line = CAR.replace("-1.56", "nan");
        assert!(parse_label_line(&line, 1).is_err());
    }

    #[test]
    fn test_unconsumed_fields_are_not_validated() {
        // Column 1 (truncation) is garbage but never read
        let line = CAR.replacen("0.00", "n/a", 1);
        assert!(parse_label_line(&line, 1).is_ok());
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let text = format!("{CAR}\n\n   \n{PEDESTRIAN}\n");
        let annotations = parse_annotations(Cursor::new(text)).unwrap();
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations[1].category, Category::Pedestrian);
    }

    #[test]
    fn test_one_bad_line_fails_the_whole_file() {
        let text = format!("{CAR}\nDontCare -1 -1 -10\n{PEDESTRIAN}\n");
        match parse_annotations(Cursor::new(text)) {
            Err(Error::MalformedAnnotationLine { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_read_boxes_from_file() {
        let path = temp_path("read_boxes.txt");
        std::fs::write(&path, format!("{CAR}\n{PEDESTRIAN}\n")).unwrap();

        let boxes = KittiLabelReader::read_boxes(&path).unwrap();
        assert_eq!(boxes.len(), 2);

        let car = &boxes[0];
        assert_eq!(car.category, Category::Car);
        assert_relative_eq!(car.center.x, 8.00);
        assert_relative_eq!(car.center.y, -2.00);
        assert_relative_eq!(car.center.z, -1.50 + 2.85 / 2.0);
        assert_relative_eq!(car.extent.x, 2.63);
        assert_relative_eq!(car.extent.y, 2.85);
        assert_relative_eq!(car.extent.z, 12.34);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_zero_dimension_fails_box_build() {
        let path = temp_path("zero_dimension.txt");
        std::fs::write(&path, CAR.replace("2.63", "0.00")).unwrap();

        assert!(matches!(
            KittiLabelReader::read_boxes(&path),
            Err(Error::InvalidBoxExtent { .. })
        ));

        let _ = std::fs::remove_file(&path);
    }
}
