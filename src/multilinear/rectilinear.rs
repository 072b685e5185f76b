//! Multilinear interpolation on an N-dimensional rectilinear grid, and its adjoint.
//!
//! ```rust
//! use gridinterp::bilinear::Quantity;
//! use gridinterp::multilinear::rectilinear;
//!
//! // Define a grid
//! let x = [1.0_f64, 1.2, 2.0];
//! let y = [1.0_f64, 1.3, 1.5];
//! let z = [0.0_f64, 1.0];
//!
//! // Grid input for rectilinear method
//! let grids = &[&x[..], &y[..], &z[..]];
//!
//! // Values at grid points
//! let v = [2.0; 18];
//!
//! // Points to interpolate; the second one is outside the grid
//! let xobs = [1.1_f64, 5.0];
//! let yobs = [1.4, 1.4];
//! let zobs = [0.5, 0.5];
//! let obs = [&xobs[..], &yobs[..], &zobs[..]];
//!
//! // Do interpolation, allocating for the output for convenience
//! let out = rectilinear::interpn_alloc(grids, &v, &obs).unwrap();
//! assert!((out[0] - 2.0).abs() < 1e-12);
//! assert_eq!(out[1], 0.0);
//!
//! // Adjoint of a unit quantity sums to the number of points inside the grid
//! let grad = rectilinear::adjoint_alloc(grids, &obs, Quantity::Scalar(1.0)).unwrap();
//! assert!((grad.iter().sum::<f64>() - 1.0).abs() < 1e-12);
//! ```
//!
//! References
//! * https://en.wikipedia.org/wiki/Bilinear_interpolation#Weighted_mean
use log::trace;
use num_traits::Float;

use crate::bilinear::{scatter_add, Quantity};
use crate::error::{check_len, grid_size, Error, Result};
use crate::weights::{grid_weights, GridWeights};
use crate::{dimprod, flat_index};

/// Maximum number of dimensions; each point touches 2^MAXDIMS grid values
pub const MAXDIMS: usize = 8;

/// Visit the 2^ndims vertices of a grid cell, with the flat index of
/// each vertex in a C-ordered array and its weight.
///
/// Bit `j` of the vertex number selects the left (0) or right (1)
/// neighbor along axis `j`.
#[inline]
fn for_each_vertex<T: Float>(
    weights: &[T],
    origin: &[usize],
    strides: &[usize],
    mut f: impl FnMut(usize, T),
) {
    let ndims = weights.len();
    let mut loc = [0_usize; MAXDIMS];
    for vert in 0..(1_usize << ndims) {
        let mut w = T::one();
        for j in 0..ndims {
            let right = (vert >> j) & 1;
            loc[j] = origin[j] + right;
            w = w * if right == 1 {
                T::one() - weights[j]
            } else {
                weights[j]
            };
        }
        f(flat_index(&loc[..ndims], strides), w);
    }
}

/// Weights for the batch and the C-order strides of the grid,
/// after checking the number of grid values.
fn prepare<T: Float>(
    grids: &[&[T]],
    obs: &[&[T]],
    nvals: usize,
) -> Result<(GridWeights<T>, Vec<usize>)> {
    if grids.len() > MAXDIMS {
        return Err(Error::InvalidArgument("Dimension exceeds maximum (8)"));
    }
    let w = grid_weights(grids, obs)?;
    let dims: Vec<usize> = grids.iter().map(|g| g.len()).collect();
    check_len(grid_size(dims.iter().copied())?, nvals)?;
    Ok((w, dimprod(&dims)))
}

/// Evaluate multilinear interpolation on a rectilinear grid in up to 8 dimensions,
/// writing one value per observation point in the original order.
///
/// Assumes C-style ordering of vals (z(x0, y0), z(x0, y1), ..., z(x0, yn), z(x1, y0), ...).
/// Points that are not strictly inside the grid are set to zero.
///
/// # Errors
/// * If there are no grids or more than [`MAXDIMS`]
/// * If any grid has fewer than 2 entries or its first two entries are not increasing
/// * If the number of coordinate slices does not match the number of grids
/// * If `vals` does not have one entry per grid point
/// * If the coordinate slices and `out` do not all have the same length
pub fn interpn<T: Float>(grids: &[&[T]], vals: &[T], obs: &[&[T]], out: &mut [T]) -> Result<()> {
    let (w, strides) = prepare(grids, obs, vals.len())?;
    check_len(w.nobs(), out.len())?;

    out.fill(T::zero());
    for (i, wl, origin) in w.rows() {
        let mut acc = T::zero();
        for_each_vertex(wl, origin, &strides, |k, wv| acc = acc + wv * vals[k]);
        out[i] = acc;
    }

    Ok(())
}

/// Evaluate interpolant, allocating a new Vec for the output.
pub fn interpn_alloc<T: Float>(grids: &[&[T]], vals: &[T], obs: &[&[T]]) -> Result<Vec<T>> {
    let mut out = vec![T::zero(); obs.first().map_or(0, |x| x.len())];
    interpn(grids, vals, obs, &mut out)?;
    Ok(out)
}

/// Distribute a quantity from each observation point onto the vertices
/// of its grid cell, adding to the existing contents of `target`.
///
/// This is the transpose of [`interpn`] for a fixed batch of observation
/// points, and matches [`crate::bilinear::adjoint`] in two dimensions.
///
/// # Errors
/// * Under the same conditions as [`interpn`], with `target` in place of `vals`
/// * If a per-point quantity does not have one entry per observation point
pub fn adjoint<T: Float>(
    grids: &[&[T]],
    obs: &[&[T]],
    quantity: Quantity<'_, T>,
    target: &mut [T],
) -> Result<()> {
    let (w, strides) = prepare(grids, obs, target.len())?;
    quantity.check(w.nobs())?;

    trace!(
        "scattering {} of {} points onto {} vertices per cell",
        w.len(),
        w.nobs(),
        1_usize << w.ndims()
    );

    for (i, wl, origin) in w.rows() {
        let q = quantity.at(i);
        for_each_vertex(wl, origin, &strides, |k, wv| scatter_add(target, k, wv * q));
    }

    Ok(())
}

/// Distribute a quantity from each observation point onto a new,
/// zero-initialized grid.
pub fn adjoint_alloc<T: Float>(
    grids: &[&[T]],
    obs: &[&[T]],
    quantity: Quantity<'_, T>,
) -> Result<Vec<T>> {
    let mut target = vec![T::zero(); grid_size(grids.iter().map(|g| g.len()))?];
    adjoint(grids, obs, quantity, &mut target)?;
    Ok(target)
}
