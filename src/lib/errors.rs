//! Custom error types for chunksort operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for chunksort operations
pub type Result<T> = std::result::Result<T, ChunkSortError>;

/// Error type for chunksort operations
#[derive(Error, Debug)]
pub enum ChunkSortError {
    /// Sequence is too short to be sorted by the chunk pipeline
    #[error("Sequence has {len} numbers; at least {min} are required")]
    PreconditionViolation {
        /// Number of values supplied
        len: usize,
        /// Minimum number of values accepted
        min: usize,
    },

    /// A line of a text source could not be parsed as an integer
    #[error("Invalid integer in '{source_name}' on line {line}: {text:?}")]
    MalformedInput {
        /// Name of the source (usually a file path)
        source_name: String,
        /// 1-based line number
        line: usize,
        /// The trimmed offending line
        text: String,
    },

    /// Underlying file or directory could not be read, written, or found
    #[error("Cannot access '{}': {reason}", .path.display())]
    ResourceAccess {
        /// The path being accessed
        path: PathBuf,
        /// What went wrong
        reason: String,
        /// The underlying I/O error, if any
        #[source]
        source: Option<io::Error>,
    },

    /// Invalid parameter value provided
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// The parameter name
        parameter: String,
        /// Explanation of why it's invalid
        reason: String,
    },
}

impl ChunkSortError {
    /// Builds a [`ChunkSortError::ResourceAccess`] wrapping an I/O error.
    pub fn io(path: impl Into<PathBuf>, reason: impl Into<String>, source: io::Error) -> Self {
        Self::ResourceAccess { path: path.into(), reason: reason.into(), source: Some(source) }
    }
}
