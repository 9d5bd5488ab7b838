//! Error types for grid addressing, color handling and the I/O boundary

use std::fmt;
use std::path::PathBuf;

/// Main error type for all recolor operations
#[derive(Debug)]
pub enum BoxesError {
    /// Grid or palette index outside the calibrated range
    OutOfRange {
        /// Axis that was indexed (`col`, `row`, `palette col`, `palette row`)
        axis: &'static str,
        /// The offending index
        index: usize,
        /// Number of valid positions along the axis
        limit: usize,
    },

    /// Standard color name absent from the palette table
    UnknownColorName {
        /// The name that was looked up
        name: String,
    },

    /// RGB component outside `[0, 255]`
    InvalidComponent {
        /// Channel name (`r`, `g` or `b`)
        channel: &'static str,
        /// Provided value
        value: i64,
    },

    /// Color cycler or sampler constructed without any colors
    EmptyPalette,

    /// Box packing found no uncovered cell while the grid is not yet covered
    NoUncoveredCells {
        /// Cells covered so far
        covered: usize,
        /// Cells in the grid
        total: usize,
    },

    /// Spreadsheet-style cell name that cannot be parsed
    InvalidCellName {
        /// The offending name
        name: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Encoded calibration record could not be decoded
    MalformedRecord {
        /// Description of the decoding failure
        reason: String,
    },

    /// Calibration or pattern asset missing from disk
    MissingAsset {
        /// Expected asset location
        path: PathBuf,
    },

    /// Failed to load a source raster from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a preview image to disk
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

    /// Action sink rejected an operation
    Sink {
        /// Sink operation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for BoxesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { axis, index, limit } => {
                write!(f, "{axis} index {index} is out of range (limit: {limit})")
            }
            Self::UnknownColorName { name } => {
                write!(f, "Unknown standard color '{name}'")
            }
            Self::InvalidComponent { channel, value } => {
                write!(f, "Color component {channel} = {value} is outside [0, 255]")
            }
            Self::EmptyPalette => write!(f, "Palette must contain at least one color"),
            Self::NoUncoveredCells { covered, total } => {
                write!(
                    f,
                    "No uncovered cells available ({covered} of {total} covered)"
                )
            }
            Self::InvalidCellName { name } => {
                write!(f, "Invalid cell name '{name}'")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MalformedRecord { reason } => {
                write!(f, "Malformed calibration record: {reason}")
            }
            Self::MissingAsset { path } => {
                write!(f, "Missing asset '{}'", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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
            Self::Sink { operation, reason } => {
                write!(f, "Action sink failed during {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for BoxesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for recolor results
pub type Result<T> = std::result::Result<T, BoxesError>;

impl From<image::ImageError> for BoxesError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for BoxesError {
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
) -> BoxesError {
    BoxesError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a range error for an index along the named axis
pub const fn out_of_range(axis: &'static str, index: usize, limit: usize) -> BoxesError {
    BoxesError::OutOfRange { axis, index, limit }
}

/// Create a sink failure error
pub fn sink_error(operation: &'static str, reason: &impl ToString) -> BoxesError {
    BoxesError::Sink {
        operation,
        reason: reason.to_string(),
    }
}
