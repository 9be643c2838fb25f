//! Radial distance filtering of a colored point set

use crate::colorize::paint_box_members;
use kittivis_core::{ColorBuffer, DisplaySettings, Error, OrientedBoundingBox, Point3f, Result, Rgb, Vector3f};

/// The compacted output of a radial filter.
///
/// Indices are renumbered: position `i` here is unrelated to position `i` in
/// the unfiltered input, so any box membership computed on one is invalid on
/// the other.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredFrame<T> {
    pub points: Vec<T>,
    pub colors: ColorBuffer,
    pub normals: Option<Vec<Vector3f>>,
}

impl<T> FilteredFrame<T> {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Keep the points with `x² + y² + z² <= radius²`, together with their colors
/// and (when complete) normals. Survivors keep their relative order.
///
/// Normals shorter than the point set are dropped from the output instead of
/// being padded. `radius` must be positive and `colors` parallel to `points`.
pub fn filter_by_distance<T>(
    points: &[T],
    colors: &[Rgb],
    normals: Option<&[Vector3f]>,
    radius: f32,
) -> Result<FilteredFrame<T>>
where
    T: Copy,
    Point3f: From<T>,
{
    if !(radius > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "filter radius must be positive, got {radius}"
        )));
    }
    if colors.len() != points.len() {
        return Err(Error::InvalidParameter(format!(
            "{} points but {} colors",
            points.len(),
            colors.len()
        )));
    }

    let normals = match normals {
        Some(normals) if normals.len() >= points.len() => Some(normals),
        Some(normals) => {
            tracing::warn!(
                points = points.len(),
                normals = normals.len(),
                "normals do not cover every point, dropping them"
            );
            None
        }
        None => None,
    };

    let radius_squared = radius * radius;
    let keep: Vec<usize> = points
        .iter()
        .enumerate()
        .filter(|(_, p)| Point3f::from(**p).coords.norm_squared() <= radius_squared)
        .map(|(i, _)| i)
        .collect();

    tracing::debug!(radius, kept = keep.len(), total = points.len(), "radial filter");

    Ok(FilteredFrame {
        points: keep.iter().map(|&i| points[i]).collect(),
        colors: keep.iter().map(|&i| colors[i]).collect(),
        normals: normals.map(|normals| keep.iter().map(|&i| normals[i]).collect()),
    })
}

/// Radial filter followed by a fresh category overlay on the compacted set.
///
/// Box membership is recomputed against the filtered points, never carried
/// over from the unfiltered indices. The overlay only runs when
/// `settings.use_label_overlay` is set.
pub fn filter_and_recolor<T>(
    points: &[T],
    colors: &[Rgb],
    normals: Option<&[Vector3f]>,
    boxes: &[OrientedBoundingBox],
    radius: f32,
    settings: &DisplaySettings,
) -> Result<FilteredFrame<T>>
where
    T: Copy + Sync,
    Point3f: From<T>,
{
    let mut filtered = filter_by_distance(points, colors, normals, radius)?;
    if settings.use_label_overlay {
        paint_box_members(&mut filtered.colors, &filtered.points, boxes);
    }
    Ok(filtered)
}
