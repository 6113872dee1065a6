//! Input validation utilities
//!
//! This module provides common validation functions for command-line parameters,
//! sequence lengths, and file paths with consistent error messages.

use crate::errors::{ChunkSortError, Result};
use std::path::Path;

/// Validate that a sequence holds at least `min` values
///
/// # Arguments
/// * `len` - Number of values in the sequence
/// * `min` - Minimum number of values accepted
///
/// # Errors
/// Returns [`ChunkSortError::PreconditionViolation`] if `len < min`
///
/// # Example
/// ```
/// use chunksort_lib::validation::validate_min_len;
///
/// validate_min_len(10, 10).unwrap();
/// assert!(validate_min_len(3, 10).is_err());
/// ```
pub fn validate_min_len(len: usize, min: usize) -> Result<()> {
    if len < min {
        return Err(ChunkSortError::PreconditionViolation { len, min });
    }
    Ok(())
}

/// Validate that a file exists
///
/// # Arguments
/// * `path` - Path to validate
/// * `description` - Human-readable description of the file (e.g., "Input file")
///
/// # Errors
/// Returns an error if the path does not exist or is not a file
///
/// # Example
/// ```
/// use chunksort_lib::validation::validate_file_exists;
///
/// let result = validate_file_exists("/nonexistent/numbers.txt", "Input file");
/// assert!(result.is_err());
/// ```
pub fn validate_file_exists<P: AsRef<Path>>(path: P, description: &str) -> Result<()> {
    let path_ref = path.as_ref();
    if !path_ref.is_file() {
        return Err(ChunkSortError::ResourceAccess {
            path: path_ref.to_path_buf(),
            reason: format!("{description} does not exist or is not a file"),
            source: None,
        });
    }
    Ok(())
}

/// Validate that a directory exists
///
/// # Errors
/// Returns an error if the path does not exist or is not a directory
pub fn validate_directory_exists<P: AsRef<Path>>(path: P, description: &str) -> Result<()> {
    let path_ref = path.as_ref();
    let metadata = std::fs::metadata(path_ref)
        .map_err(|e| ChunkSortError::io(path_ref, format!("cannot access {description}"), e))?;
    if !metadata.is_dir() {
        return Err(ChunkSortError::ResourceAccess {
            path: path_ref.to_path_buf(),
            reason: format!("{description} is not a directory"),
            source: None,
        });
    }
    Ok(())
}

/// Validate that a count parameter is at least `min`
///
/// # Errors
/// Returns [`ChunkSortError::InvalidParameter`] if `value < min`
///
/// # Example
/// ```
/// use chunksort_lib::validation::validate_at_least;
///
/// validate_at_least(4, 1, "threads").unwrap();
/// assert!(validate_at_least(0, 1, "threads").is_err());
/// ```
pub fn validate_at_least(value: usize, min: usize, name: &str) -> Result<()> {
    if value < min {
        return Err(ChunkSortError::InvalidParameter {
            parameter: name.to_string(),
            reason: format!("must be >= {min}, got {value}"),
        });
    }
    Ok(())
}
