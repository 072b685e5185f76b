//! Multilinear interpolation on rectilinear grids, with exact adjoint (transpose)
//! operators for use inside reverse-mode differentiation.
//!
//! Every method here is built on the same bracket search and weight computation
//! in [`weights`]. Query points on or outside the outer bounds of any axis are
//! dropped: they are excluded from weight outputs, evaluate to zero in the
//! forward interpolators, and deposit nothing in the adjoints.
//! There is no extrapolation.
//!
//! # Forward and Adjoint
//! For a fixed set of observation points, multilinear interpolation is a linear
//! map from grid values `V` to observed values. The adjoint methods apply the
//! transpose of that map, scattering a quantity at each observation point onto
//! the corners of its grid cell, so that for any co-vector `g`
//!
//! `dot(interp(Q, V), g) == dot(V, adjoint(Q, g))`
//!
//! up to floating-point rounding. Contributions from points sharing a grid
//! cell are summed.
//!
//! The forward and adjoint are never invoked from one another; an autodiff
//! binding is expected to pair them.
//!
//! | Method                 | Dims | Cost per point                  |
//! |------------------------|------|---------------------------------|
//! | one_dim::interp1d      | 1    | O(2) + log2(gridsize)           |
//! | bilinear::interp       | 2    | O(4) + log2(gridsize)           |
//! | bilinear::adjoint      | 2    | O(4) + log2(gridsize)           |
//! | multilinear::interpn   | N    | O(2^ndims) + log2(gridsize)     |
//! | multilinear::adjoint   | N    | O(2^ndims) + log2(gridsize)     |
//!
//! # Example: Bilinear Forward and Adjoint
//! ```rust
//! use gridinterp::bilinear::{self, Quantity};
//!
//! // Define a grid
//! let x = [0.0_f64, 1.0, 2.0];
//! let y = [0.0_f64, 1.0, 2.0];
//! let grids = [&x[..], &y[..]];
//!
//! // Values at grid points, C-ordered, z[i, j] = i + j
//! let z = [0.0, 1.0, 2.0, 1.0, 2.0, 3.0, 2.0, 3.0, 4.0];
//!
//! // Observation points; the second one is on the boundary and is dropped
//! let xobs = [0.5, 0.0];
//! let yobs = [0.5, 0.0];
//! let obs = [&xobs[..], &yobs[..]];
//!
//! let out = bilinear::interp_alloc(grids, &z, obs).unwrap();
//! assert_eq!(out, vec![1.0, 0.0]);
//!
//! // Scatter a unit quantity back onto the grid
//! let grad = bilinear::adjoint_alloc(grids, obs, Quantity::Scalar(1.0)).unwrap();
//! assert_eq!(grad, vec![0.25, 0.25, 0.0, 0.25, 0.25, 0.0, 0.0, 0.0, 0.0]);
//! ```
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

pub mod error;
pub use error::{Error, Result};

pub mod weights;
pub use weights::{grid_weights, GridWeights};

pub mod one_dim;
pub use one_dim::{linear::Linear1D, RectilinearGrid1D};

pub mod bilinear;
pub use bilinear::{BilinearWeights, CornerWeights, Quantity};

pub mod multilinear;

pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

/// Cumulative product of the sizes of dimensions higher than each one,
/// which is the stride along each dimension of a C-ordered array.
pub(crate) fn dimprod(dims: &[usize]) -> Vec<usize> {
    let mut acc = 1;
    let mut out = vec![1_usize; dims.len()];
    for i in (0..dims.len()).rev() {
        out[i] = acc;
        acc *= dims[i];
    }
    out
}

/// Flat index of a location in a C-ordered array
#[inline]
pub(crate) fn flat_index(loc: &[usize], dimprod: &[usize]) -> usize {
    let mut i = 0;
    for j in 0..dimprod.len() {
        i += loc[j] * dimprod[j];
    }
    i
}
