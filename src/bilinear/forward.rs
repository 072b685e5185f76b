//! Bilinear interpolation as a gather from the four corners of each grid cell.
use num_traits::Float;

use super::bilinear_weights;
use crate::error::{check_len, grid_size, Result};

/// Evaluate bilinear interpolation on a 2D rectilinear grid,
/// writing one value per observation point in the original order.
///
/// Assumes C-style ordering of vals (z(x0, y0), z(x0, y1), ..., z(x0, yn), z(x1, y0), ...).
/// Points that are not strictly inside the grid are set to zero.
///
/// # Errors
/// * If either grid has fewer than 2 entries or its first two entries are not increasing
/// * If `vals` does not have one entry per grid point
/// * If the coordinate slices and `out` do not all have the same length
pub fn interp<T: Float>(
    grids: [&[T]; 2],
    vals: &[T],
    obs: [&[T]; 2],
    out: &mut [T],
) -> Result<()> {
    let bw = bilinear_weights(grids, obs)?;
    let ny = grids[1].len();
    check_len(grid_size([grids[0].len(), ny])?, vals.len())?;
    check_len(bw.nobs(), out.len())?;

    out.fill(T::zero());
    for (i, c, [ix, iy]) in bw.iter() {
        out[i] = c
            .corners()
            .iter()
            .fold(T::zero(), |acc, &([dx, dy], w)| {
                acc + w * vals[(ix + dx) * ny + iy + dy]
            });
    }

    Ok(())
}

/// Evaluate bilinear interpolation, allocating a new Vec for the output.
pub fn interp_alloc<T: Float>(grids: [&[T]; 2], vals: &[T], obs: [&[T]; 2]) -> Result<Vec<T>> {
    let mut out = vec![T::zero(); obs[0].len()];
    interp(grids, vals, obs, &mut out)?;
    Ok(out)
}
