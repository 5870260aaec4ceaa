//! Error types and path context for the mosaic pipeline

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to decode an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode or save the mosaic to disk
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

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A pixel buffer with no pixels was handed to an operation that needs at least one
    EmptyBuffer {
        /// Name of the operation that received the buffer
        operation: &'static str,
    },

    /// No tile in the dataset could be indexed
    EmptyPalette {
        /// Dataset directory that was scanned
        dataset: PathBuf,
        /// Number of tile files that were found but could not be decoded
        skipped: usize,
    },

    /// Matching found no candidate for a block
    ///
    /// Only reachable with an empty palette, which the pipeline rejects
    /// before matching starts.
    NoMatchFound {
        /// Block origin in pixels (x, y)
        position: (u32, u32),
    },

    /// Resampling or writing a tile into its block failed
    Compositing {
        /// Block origin in pixels (x, y)
        position: (u32, u32),
        /// Tile that was being placed
        tile: PathBuf,
        /// Underlying failure
        source: Box<MosaicError>,
    },

    /// Strict mode rejected a mosaic with unplaced blocks
    IncompleteMosaic {
        /// Number of blocks that could not be placed
        failed: usize,
        /// Total number of blocks in the grid
        total: usize,
        /// Output file that was still written
        output: PathBuf,
    },

    /// The worker pool could not be created
    ThreadPool {
        /// Description reported by the pool builder
        reason: String,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyBuffer { operation } => {
                write!(f, "Cannot compute {operation} of an image with no pixels")
            }
            Self::EmptyPalette { dataset, skipped } => {
                write!(
                    f,
                    "No usable tiles in dataset '{}' ({skipped} unreadable)",
                    dataset.display()
                )
            }
            Self::NoMatchFound { position } => {
                write!(
                    f,
                    "No palette entry matched block at ({}, {})",
                    position.0, position.1
                )
            }
            Self::Compositing {
                position,
                tile,
                source,
            } => {
                write!(
                    f,
                    "Failed to place tile '{}' at ({}, {}): {source}",
                    tile.display(),
                    position.0,
                    position.1
                )
            }
            Self::IncompleteMosaic {
                failed,
                total,
                output,
            } => {
                write!(
                    f,
                    "{failed} of {total} blocks were not placed in '{}'",
                    output.display()
                )
            }
            Self::ThreadPool { reason } => {
                write!(f, "Failed to start worker pool: {reason}")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Compositing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Attaches the path being worked on to errors raised without one
pub trait WithPath<T> {
    /// Replace the placeholder path of load, export and file system errors
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<MosaicError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                MosaicError::ImageLoad { path: slot, .. }
                | MosaicError::ImageExport { path: slot, .. }
                | MosaicError::FileSystem { path: slot, .. } => {
                    *slot = path.to_path_buf();
                }
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for MosaicError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MosaicError {
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
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
