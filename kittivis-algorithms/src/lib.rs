//! # kittivis algorithms
//!
//! Geometry on a loaded frame: which points fall inside which labelled box,
//! how every point is colored, and how a colored frame is cut down to a
//! radius without losing its box coloring.
//!
//! All functions are pure: they take borrowed inputs and return new buffers.

pub mod classify;
pub mod colorize;
pub mod distance_filter;
pub mod pipeline;

// Re-export commonly used items
pub use classify::*;
pub use colorize::*;
pub use distance_filter::*;
pub use pipeline::*;
