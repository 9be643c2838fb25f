//! Per-point coloring: distance colormap plus category overlay

use crate::classify::points_in_box;
use kittivis_core::{ColorBuffer, ColormapRange, DisplaySettings, Error, OrientedBoundingBox, Point3f, Result, Rgb};

/// Diverging red/blue color for a forward coordinate `x`.
///
/// `x / max_distance` is mapped from `[-1, 1]` to `t` in `[0, 1]` and the color
/// is `(t, 0.5 * (1 - |t - 0.5|), 1 - t)`: red grows forward, blue grows
/// backward and green peaks at `x = 0`. Values beyond `max_distance` are not
/// clamped. A non-positive `max_distance` maps every point to `x = 0`.
pub fn distance_color(x: f32, max_distance: f32) -> Rgb {
    let normalized = if max_distance > 0.0 { x / max_distance } else { 0.0 };
    let t = (normalized + 1.0) / 2.0;
    Rgb::new(t, 0.5 * (1.0 - (t - 0.5).abs()), 1.0 - t)
}

/// Normalization distance for `range` over `points`
pub fn colormap_distance<T>(points: &[T], range: ColormapRange) -> f32
where
    T: Copy,
    Point3f: From<T>,
{
    match range {
        ColormapRange::Fixed(distance) => distance,
        // Non-finite returns would stretch the range to infinity
        ColormapRange::Auto => points
            .iter()
            .map(|p| Point3f::from(*p).x.abs())
            .filter(|x| x.is_finite())
            .fold(0.0, f32::max),
    }
}

/// Distance-gradient color for every point
pub fn colormap<T>(points: &[T], range: ColormapRange) -> ColorBuffer
where
    T: Copy,
    Point3f: From<T>,
{
    let max_distance = colormap_distance(points, range);
    points
        .iter()
        .map(|p| distance_color(Point3f::from(*p).x, max_distance))
        .collect()
}

/// Paint the members of each box with its category color.
///
/// Boxes are applied in order, so where boxes overlap the later box wins.
/// Fails with `InvalidParameter` unless `colors` is parallel to `points`.
pub fn apply_label_overlay<T>(colors: &mut [Rgb], points: &[T], boxes: &[OrientedBoundingBox]) -> Result<()>
where
    T: Copy + Sync,
    Point3f: From<T>,
{
    if colors.len() != points.len() {
        return Err(Error::InvalidParameter(format!(
            "{} points but {} colors",
            points.len(),
            colors.len()
        )));
    }
    paint_box_members(colors, points, boxes);
    Ok(())
}

/// Overlay without the length check, for buffers built alongside `points`
pub(crate) fn paint_box_members<T>(colors: &mut [Rgb], points: &[T], boxes: &[OrientedBoundingBox])
where
    T: Copy + Sync,
    Point3f: From<T>,
{
    for bbox in boxes {
        let color = bbox.category.color();
        for index in points_in_box(bbox, points) {
            colors[index] = color;
        }
    }
}

/// Compute a fresh color buffer for `points`.
///
/// Base colors come from the distance colormap or flat gray, depending on
/// `settings.use_colormap`; box members are then overlaid with category
/// colors when `settings.use_label_overlay` is set. The inputs are not
/// modified.
pub fn colorize<T>(points: &[T], boxes: &[OrientedBoundingBox], settings: &DisplaySettings) -> ColorBuffer
where
    T: Copy + Sync,
    Point3f: From<T>,
{
    let mut colors = if settings.use_colormap {
        colormap(points, settings.colormap_range)
    } else {
        vec![Rgb::GRAY; points.len()]
    };

    if settings.use_label_overlay {
        paint_box_members(&mut colors, points, boxes);
    }

    colors
}
