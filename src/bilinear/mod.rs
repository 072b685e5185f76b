//! Bilinear interpolation on a 2D rectilinear grid, and its adjoint.
//!
//! Grid values are C-ordered, with `vals[i * ny + j]` at `(x[i], y[j])`
//! so that axis 0 indexes rows and axis 1 indexes columns.
//!
//! * [`bilinear_weights`] gives the four corner weights of each valid point
//! * [`interp`] gathers grid values at the corners into one value per point
//! * [`adjoint`] scatters one quantity per point onto the corners, summing
//!   where points share a cell
//!
//! [`adjoint`] is the exact transpose of [`interp`] for a fixed batch of
//! observation points.
//!
//! References
//! * https://en.wikipedia.org/wiki/Bilinear_interpolation#Weighted_mean

pub mod adjoint;
pub mod forward;
pub mod weights;

#[cfg(feature = "parallel")]
pub use adjoint::adjoint_par;
pub use adjoint::{adjoint, adjoint_alloc};
pub use forward::{interp, interp_alloc};
pub use weights::{bilinear_weights, BilinearWeights, CornerWeights};

use num_traits::Float;

use crate::error::{check_len, Result};

/// The quantity to distribute from each observation point in an adjoint.
#[derive(Clone, Copy, Debug)]
pub enum Quantity<'a, T> {
    /// The same value for every observation point
    Scalar(T),
    /// One value per observation point in the batch, including dropped points
    PerPoint(&'a [T]),
}

impl<T: Float> Quantity<'_, T> {
    /// Value at observation point `i` of the original batch
    #[inline]
    pub fn at(&self, i: usize) -> T {
        match self {
            Self::Scalar(v) => *v,
            Self::PerPoint(v) => v[i],
        }
    }

    /// Check that a per-point quantity covers a batch of `nobs` points
    pub fn check(&self, nobs: usize) -> Result<()> {
        match self {
            Self::Scalar(_) => Ok(()),
            Self::PerPoint(v) => check_len(nobs, v.len()),
        }
    }
}

impl<'a, T> From<&'a [T]> for Quantity<'a, T> {
    fn from(v: &'a [T]) -> Self {
        Self::PerPoint(v)
    }
}

/// Add `v` to `target[i]`.
///
/// Every deposit into an accumulation target goes through here;
/// assigning instead would keep only the last of several points
/// that share a grid corner.
#[inline]
pub(crate) fn scatter_add<T: Float>(target: &mut [T], i: usize, v: T) {
    target[i] = target[i] + v;
}
