//! # kittivis
//!
//! Load KITTI velodyne frames and their object labels, find which points fall
//! inside each labelled box, and color the frame for display.
//!
//! This is the umbrella crate. Use it to get everything in one place, or depend
//! on the individual crates for finer control over dependencies.
//!
//! ## Quick Start
//!
//! ```no_run
//! use kittivis::prelude::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let frame = load_frame_with_labels(
//!     std::path::Path::new("data/kitti/velodyne/000011.bin"),
//!     None,
//!     &FrameLoadOptions::default(),
//! )?;
//!
//! let settings = DisplaySettings {
//!     filter_radius: Some(20.0),
//!     ..DisplaySettings::default()
//! };
//! let display = prepare_display(frame.points.as_slice(), None, &frame.boxes, &settings)?;
//! assert_eq!(display.points.len(), display.colors.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables core, algorithms and io
//! - `algorithms`: Box membership, colormaps and radial filtering
//! - `io`: KITTI `.bin`/label readers, label discovery and PLY export
//! - `all`: Enables all features

// Re-export core functionality
pub use kittivis_core::*;

// Re-export sub-crates
#[cfg(feature = "algorithms")]
pub use kittivis_algorithms as algorithms;

#[cfg(feature = "io")]
pub use kittivis_io as io;

/// Convenient imports for common use cases
pub mod prelude {
    pub use kittivis_core::*;

    #[cfg(feature = "algorithms")]
    pub use kittivis_algorithms::*;

    #[cfg(feature = "io")]
    pub use kittivis_io::*;
}
