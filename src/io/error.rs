//! Error types for stereogram generation and file handling

use std::fmt;
use std::path::PathBuf;

use crate::io::configuration::MAX_CANVAS_DIMENSION;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum StereogramError {
    /// Canvas width or height is zero or exceeds the allocation limit
    ///
    /// Raised before any buffer is allocated.
    InvalidDimensions {
        /// Requested canvas width
        width: usize,
        /// Requested canvas height
        height: usize,
    },

    /// Shape name or kind has no depth model
    UnsupportedShape {
        /// Name that failed to resolve
        name: String,
    },

    /// Failed to decode the depth source image
    SourceDecode {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// Source pixels don't match the requested canvas
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
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

impl fmt::Display for StereogramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "Invalid canvas dimensions {width}x{height}: each side must be between 1 and \
                     {MAX_CANVAS_DIMENSION} pixels"
                )
            }
            Self::UnsupportedShape { name } => {
                write!(f, "Unsupported shape '{name}'")
            }
            Self::SourceDecode { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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

impl std::error::Error for StereogramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceDecode { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, StereogramError>;

impl From<image::ImageError> for StereogramError {
    fn from(err: image::ImageError) -> Self {
        Self::SourceDecode {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for StereogramError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> StereogramError {
    StereogramError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an unsupported shape error
pub fn unsupported_shape(name: &impl ToString) -> StereogramError {
    StereogramError::UnsupportedShape {
        name: name.to_string(),
    }
}

/// Reject canvases that are empty or too large to allocate
///
/// # Errors
///
/// Returns `InvalidDimensions` if either side is zero or exceeds
/// `MAX_CANVAS_DIMENSION`, the cap on buffer allocation
pub fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 || width > MAX_CANVAS_DIMENSION || height > MAX_CANVAS_DIMENSION
    {
        return Err(StereogramError::InvalidDimensions { width, height });
    }
    Ok(())
}

