//! Error types for placement setup and output operations
//!
//! Failing to place a word is not an error and never appears here; these
//! are construction-time and I/O failures only.

use std::fmt;
use std::path::PathBuf;

/// Main error type for placement setup and output operations
#[derive(Debug)]
pub enum PlacementError {
    /// Grid shape is degenerate or exceeds the safety maximum
    InvalidGridShape {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// A candidate word failed vocabulary normalization
    InvalidWord {
        /// The offending word
        word: String,
        /// Why the word was rejected
        reason: String,
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

    /// Failed to read a word list from the filesystem
    WordListLoad {
        /// Path to the word list file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
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

    /// Failed to save the layout image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Export was requested for a grid with no placed letters
    EmptyGrid,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridShape { rows, cols } => {
                write!(f, "Invalid grid shape {rows}x{cols}")
            }
            Self::InvalidWord { word, reason } => {
                write!(f, "Invalid word '{word}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::WordListLoad { path, source } => {
                write!(
                    f,
                    "Failed to load word list '{}': {source}",
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
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::EmptyGrid => {
                write!(f, "No letters have been placed in the grid")
            }
        }
    }
}

impl std::error::Error for PlacementError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WordListLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for placement results
pub type Result<T> = std::result::Result<T, PlacementError>;

impl From<std::io::Error> for PlacementError {
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
) -> PlacementError {
    PlacementError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = PlacementError::WordListLoad {
            path: "/tmp/words.txt".into(),
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/words.txt"));
    }

    #[test]
    fn test_invalid_shape_message() {
        let error = PlacementError::InvalidGridShape { rows: 0, cols: 9 };
        assert_eq!(error.to_string(), "Invalid grid shape 0x9");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("attempts", &0, &"must be at least 1");
        match error {
            PlacementError::InvalidParameter { parameter, .. } => {
                assert_eq!(parameter, "attempts");
            }
            _ => unreachable!("Expected InvalidParameter error type"),
        }
    }
}
