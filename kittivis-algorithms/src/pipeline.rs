//! One-call display preparation for a loaded frame

use crate::colorize::colorize;
use crate::distance_filter::{filter_and_recolor, FilteredFrame};
use kittivis_core::{DisplaySettings, OrientedBoundingBox, Point3f, Result, Vector3f};

/// Color a frame and, if `settings.filter_radius` is set, cut it down to that
/// radius with the overlay recomputed on the survivors.
///
/// Without a radius the output holds every input point in order.
pub fn prepare_display<T>(
    points: &[T],
    normals: Option<&[Vector3f]>,
    boxes: &[OrientedBoundingBox],
    settings: &DisplaySettings,
) -> Result<FilteredFrame<T>>
where
    T: Copy + Sync,
    Point3f: From<T>,
{
    let colors = colorize(points, boxes, settings);

    match settings.filter_radius {
        Some(radius) => filter_and_recolor(points, &colors, normals, boxes, radius, settings),
        None => Ok(FilteredFrame {
            points: points.to_vec(),
            colors,
            normals: normals
                .filter(|normals| normals.len() >= points.len())
                .map(|normals| normals[..points.len()].to_vec()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kittivis_core::{Category, Error, Rgb};

    fn car_at(x: f32) -> OrientedBoundingBox {
        OrientedBoundingBox::new(Category::Car, Point3f::new(x, 0.0, 0.0), Vector3f::repeat(2.0), 0.0).unwrap()
    }

    #[test]
    fn test_without_radius_keeps_everything() {
        let points = vec![Point3f::new(-30.0, 0.0, 0.0), Point3f::new(3.0, 0.0, 0.0)];
        let frame = prepare_display(&points, None, &[car_at(3.0)], &DisplaySettings::default()).unwrap();
        assert_eq!(frame.points, points);
        assert_eq!(frame.colors[1], Rgb::RED);
        assert!(frame.normals.is_none());
    }

    #[test]
    fn test_with_radius_filters_and_recolors() {
        let points = vec![
            Point3f::new(-30.0, 0.0, 0.0),
            Point3f::new(3.0, 0.0, 0.0),
            Point3f::new(1.0, 0.0, 0.0),
        ];
        let normals = vec![Vector3f::x(), Vector3f::y(), Vector3f::z()];
        let settings = DisplaySettings {
            filter_radius: Some(10.0),
            ..DisplaySettings::default()
        };

        let frame = prepare_display(&points, Some(normals.as_slice()), &[car_at(3.0)], &settings).unwrap();
        assert_eq!(frame.points, points[1..].to_vec());
        assert_eq!(frame.colors[0], Rgb::RED);
        assert_eq!(frame.normals, Some(vec![Vector3f::y(), Vector3f::z()]));
    }

    #[test]
    fn test_invalid_radius_surfaces() {
        let settings = DisplaySettings {
            filter_radius: Some(0.0),
            ..DisplaySettings::default()
        };
        let result = prepare_display::<Point3f>(&[], None, &[], &settings);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }
}
