//! Explicit configuration values passed into loading and coloring calls

use serde::{Deserialize, Serialize};

/// Normalization used by the distance colormap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColormapRange {
    /// Maximum `|x|` over the point set being colored
    Auto,
    /// A fixed forward distance
    Fixed(f32),
}

impl ColormapRange {
    pub const DEFAULT_FIXED_DISTANCE: f32 = 25.0;
}

impl Default for ColormapRange {
    fn default() -> Self {
        ColormapRange::Fixed(Self::DEFAULT_FIXED_DISTANCE)
    }
}

/// Display configuration for one coloring/filtering pass.
///
/// This is an immutable value: callers build a new one when a toggle changes
/// and recompute colors from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Distance gradient when true, flat gray when false
    pub use_colormap: bool,
    /// Paint points inside boxes with their category color
    pub use_label_overlay: bool,
    pub colormap_range: ColormapRange,
    /// Radial cut-off applied after coloring, if any
    pub filter_radius: Option<f32>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            use_colormap: true,
            use_label_overlay: true,
            colormap_range: ColormapRange::default(),
            filter_radius: None,
        }
    }
}

/// Options for reading a LIDAR frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameLoadOptions {
    /// Discard points with any `|coordinate|` above this bound
    pub max_abs_coordinate: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DisplaySettings::default();
        assert!(settings.use_colormap);
        assert!(settings.use_label_overlay);
        assert_eq!(settings.colormap_range, ColormapRange::Fixed(25.0));
        assert_eq!(settings.filter_radius, None);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let settings: DisplaySettings =
            serde_json::from_str(r#"{ "use_label_overlay": false, "colormap_range": "Auto" }"#).unwrap();
        assert!(settings.use_colormap);
        assert!(!settings.use_label_overlay);
        assert_eq!(settings.colormap_range, ColormapRange::Auto);
    }

    #[test]
    fn test_fixed_range_json() {
        let settings: DisplaySettings =
            serde_json::from_str(r#"{ "colormap_range": { "Fixed": 40.0 }, "filter_radius": 12.5 }"#).unwrap();
        assert_eq!(settings.colormap_range, ColormapRange::Fixed(40.0));
        assert_eq!(settings.filter_radius, Some(12.5));
    }
}
