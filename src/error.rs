//! Metric error types.

use thiserror::Error;

/// Errors raised by metric entry points before any computation begins.
///
/// Structural invalidity (mismatched or empty inputs, too few clusters,
/// ragged point dimensions) is an error. Numeric degeneracies with a
/// defined convention (zero-support classes, singleton clusters) are not:
/// they resolve to the documented value at the computation site.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    #[error("Input length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Empty input")]
    EmptyInput,

    #[error("Silhouette requires at least 2 distinct clusters, found {found}")]
    InsufficientClusters { found: usize },

    #[error("Point {index} has dimension {found}, expected {expected}")]
    InvalidDimension {
        expected: usize,
        found: usize,
        index: usize,
    },
}

/// Result type for metric operations
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Validate that two parallel sequences are equal-length and non-empty.
/// Mismatch is checked first: a zero-length pair still "matches".
pub(crate) fn check_lengths(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(MetricsError::LengthMismatch { left, right });
    }
    if left == 0 {
        return Err(MetricsError::EmptyInput);
    }
    Ok(())
}
