//! Error type for caller mistakes.
//!
//! Query points outside the grid interior are not errors; they are dropped
//! from weight outputs and evaluate to zero. Errors are reserved for inputs
//! that cannot be given that treatment, like a degenerate axis or a query
//! batch whose dimensionality does not match the grid.
use thiserror::Error;

/// Shorthand for results of fallible grid operations
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Degenerate grid or inconsistent dimensionality
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A buffer or batch does not have the length implied by the grid or the queries
    #[error("shape mismatch: expected length {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

/// Fail with [`Error::ShapeMismatch`] unless `actual == expected`.
#[inline]
pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::ShapeMismatch { expected, actual })
    }
}

/// Number of points in a grid with the given axis lengths.
///
/// Fails with [`Error::InvalidArgument`] if the count does not fit in a `usize`.
pub(crate) fn grid_size(dims: impl IntoIterator<Item = usize>) -> Result<usize> {
    dims.into_iter()
        .try_fold(1_usize, |acc, n| acc.checked_mul(n))
        .ok_or(Error::InvalidArgument("Number of grid points overflows usize"))
}
