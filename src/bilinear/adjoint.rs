//! Adjoint of bilinear interpolation: a scatter-add of one quantity per
//! observation point onto the four corners of its grid cell.
//!
//! For a fixed batch of observation points `Q`, any grid values `V`,
//! and any co-vector `g` over the batch,
//!
//! `dot(interp(Q, V), g) == dot(V, adjoint(Q, g))`
//!
//! up to floating-point rounding. Points that share a grid corner each add
//! their own contribution to it.
//!
//! ```rust
//! use gridinterp::bilinear::{adjoint, Quantity};
//!
//! let x = [0.0_f64, 1.0, 2.0];
//! let y = [0.0_f64, 1.0, 2.0];
//!
//! // Two points in the same cell
//! let xobs = [0.5, 0.5];
//! let yobs = [0.5, 0.5];
//!
//! // Accumulate on top of an existing gradient
//! let mut grad = [1.0; 9];
//! let g = [1.0, 2.0];
//! let grids = [&x[..], &y[..]];
//! let obs = [&xobs[..], &yobs[..]];
//! adjoint(grids, obs, Quantity::PerPoint(&g), &mut grad).unwrap();
//! assert_eq!(grad, [1.75, 1.75, 1.0, 1.75, 1.75, 1.0, 1.0, 1.0, 1.0]);
//! ```
use log::trace;
use num_traits::Float;

use super::{bilinear_weights, scatter_add, CornerWeights, Quantity};
use crate::error::{check_len, grid_size, Result};

/// Deposit `q` on the corners of the cell with lower corner `(ix, iy)`
#[inline]
fn deposit<T: Float>(
    target: &mut [T],
    ny: usize,
    c: &CornerWeights<T>,
    [ix, iy]: [usize; 2],
    q: T,
) {
    for ([dx, dy], w) in c.corners() {
        scatter_add(target, (ix + dx) * ny + iy + dy, w * q);
    }
}

/// Distribute a quantity from each observation point onto the grid,
/// adding to the existing contents of `target`.
///
/// `target` is C-ordered like the values of [`super::interp`], with one
/// entry per grid point. Points that are not strictly inside the grid
/// contribute nothing.
///
/// # Errors
/// * If either grid has fewer than 2 entries or its first two entries are not increasing
/// * If the coordinate slices, and a per-point quantity, do not all have the same length
/// * If `target` does not have one entry per grid point
pub fn adjoint<T: Float>(
    grids: [&[T]; 2],
    obs: [&[T]; 2],
    quantity: Quantity<'_, T>,
    target: &mut [T],
) -> Result<()> {
    let bw = bilinear_weights(grids, obs)?;
    let ny = grids[1].len();
    check_len(grid_size([grids[0].len(), ny])?, target.len())?;
    quantity.check(bw.nobs())?;

    trace!(
        "scattering {} of {} points onto a {}x{} grid",
        bw.len(),
        bw.nobs(),
        grids[0].len(),
        ny
    );

    // Serial accumulation keeps the result deterministic for a given batch order
    for (i, c, b) in bw.iter() {
        deposit(target, ny, c, b, quantity.at(i));
    }

    Ok(())
}

/// Distribute a quantity from each observation point onto a new,
/// zero-initialized grid.
pub fn adjoint_alloc<T: Float>(
    grids: [&[T]; 2],
    obs: [&[T]; 2],
    quantity: Quantity<'_, T>,
) -> Result<Vec<T>> {
    let mut target = vec![T::zero(); grid_size([grids[0].len(), grids[1].len()])?];
    adjoint(grids, obs, quantity, &mut target)?;
    Ok(target)
}

/// Parallel form of [`adjoint`].
///
/// Each worker accumulates into its own zero-initialized grid, and the
/// partial grids are summed element-wise before being added to `target`.
/// The result matches [`adjoint`] up to the order of floating-point addition.
#[cfg(feature = "parallel")]
pub fn adjoint_par<T: Float + Send + Sync>(
    grids: [&[T]; 2],
    obs: [&[T]; 2],
    quantity: Quantity<'_, T>,
    target: &mut [T],
) -> Result<()> {
    use rayon::prelude::*;

    let bw = bilinear_weights(grids, obs)?;
    let ny = grids[1].len();
    let size = grid_size([grids[0].len(), ny])?;
    check_len(size, target.len())?;
    quantity.check(bw.nobs())?;

    let partial = bw
        .index
        .par_iter()
        .zip(&bw.corners)
        .zip(&bw.brackets)
        .fold(
            || vec![T::zero(); size],
            |mut acc, ((&i, c), &b)| {
                deposit(&mut acc, ny, c, b, quantity.at(i));
                acc
            },
        )
        .reduce(
            || vec![T::zero(); size],
            |mut a, b| {
                a.iter_mut().zip(b).for_each(|(u, v)| *u = *u + v);
                a
            },
        );

    target
        .iter_mut()
        .zip(partial)
        .for_each(|(u, v)| *u = *u + v);

    Ok(())
}
