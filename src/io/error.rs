//! Error types for composing tile grids

use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Main error type for all compose operations
#[derive(Debug)]
pub enum ComposeError {
    /// A caller-supplied parameter failed validation
    InvalidArgument {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Threshold file is missing, unreadable or does not hold a usable number
    DataRead {
        /// Path to the threshold file
        path: PathBuf,
        /// Description of what went wrong
        reason: String,
    },

    /// No tile image exists for the selection index (or indices) tried
    MissingTile {
        /// Source directory that was searched
        directory: PathBuf,
        /// Selection indices that were looked up
        searched: RangeInclusive<u32>,
    },

    /// Failed to decode a tile image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Composite dimensions exceed what the output format can hold
    CanvasTooLarge {
        /// Requested canvas width in pixels
        width: u64,
        /// Requested canvas height in pixels
        height: u64,
        /// Largest allowed dimension
        limit: u32,
    },

    /// Failed to encode the composite image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::DataRead { path, reason } => {
                write!(
                    f,
                    "Failed to read threshold from '{}': {reason}",
                    path.display()
                )
            }
            Self::MissingTile {
                directory,
                searched,
            } => {
                if searched.start() == searched.end() {
                    write!(
                        f,
                        "No tile image for K={} in '{}'",
                        searched.start(),
                        directory.display()
                    )
                } else {
                    write!(
                        f,
                        "No tile image for any K in {}..={} in '{}'",
                        searched.start(),
                        searched.end(),
                        directory.display()
                    )
                }
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::CanvasTooLarge {
                width,
                height,
                limit,
            } => {
                write!(
                    f,
                    "Composite canvas {width}x{height} exceeds the {limit} pixel limit"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ComposeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for compose results
pub type Result<T> = std::result::Result<T, ComposeError>;

/// Create an invalid argument error
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ComposeError {
    ComposeError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a threshold read error for the given file
pub fn data_read_error(path: impl Into<PathBuf>, reason: &impl ToString) -> ComposeError {
    ComposeError::DataRead {
        path: path.into(),
        reason: reason.to_string(),
    }
}
