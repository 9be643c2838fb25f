//! Error types for kittivis

use thiserror::Error;

/// Main error type for kittivis operations
///
/// Every variant is fatal to the load or build call that produced it. Nothing
/// in the library retries or skips over bad input.
#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed point cloud {path}: {byte_len} bytes is not a whole number of 16-byte records")]
    MalformedPointCloud { path: String, byte_len: usize },

    #[error("Malformed annotation on line {line}: {reason}")]
    MalformedAnnotationLine { line: usize, reason: String },

    #[error("Invalid box extent for {category}: h={h}, w={w}, l={l} (all must be positive)")]
    InvalidBoxExtent {
        category: String,
        h: f32,
        w: f32,
        l: f32,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl Error {
    /// Map an `std::io::Error` raised while opening `path`, keeping "not found"
    /// distinct from other read failures.
    pub fn from_open(err: std::io::Error, path: &std::path::Path) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(err)
        }
    }
}

/// Result type alias for kittivis operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_not_found_maps_to_file_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        match Error::from_open(err, Path::new("frames/000001.bin")) {
            Error::FileNotFound { path } => assert_eq!(path, "frames/000001.bin"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_other_io_errors_stay_io() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert!(matches!(Error::from_open(err, Path::new("x.bin")), Error::Io(_)));
    }
}
