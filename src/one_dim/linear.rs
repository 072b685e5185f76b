//! Special case of 1D linear interpolation, which can be
//! significantly faster than more general N-D interpolation.
//!
//! ```rust
//! use gridinterp::one_dim::{interp1d_alloc, Interp1D, RectilinearGrid1D};
//! use gridinterp::Linear1D;
//!
//! let x = [0.0_f64, 1.0, 3.0];
//! let y = [1.0_f64, 2.0, 0.0];
//!
//! // Batch evaluation; the last point is on the boundary and evaluates to zero
//! let out = interp1d_alloc(&x, &y, &[0.5, 2.0, 3.0]).unwrap();
//! assert_eq!(out, vec![1.5, 1.0, 0.0]);
//!
//! // Point-by-point evaluation gives the same result
//! let interpolator = Linear1D::new(RectilinearGrid1D::new(&x, &y).unwrap());
//! assert_eq!(interpolator.eval_one(2.0), 1.0);
//! ```

use num_traits::Float;

use super::{Grid1D, GridSample, Interp1D};
use crate::error::{check_len, Result};
use crate::weights::grid_weights;

/// Linear interpolation without extrapolation.
pub struct Linear1D<G> {
    grid: G,
}

impl<G> Linear1D<G> {
    pub fn new(grid: G) -> Self {
        Self { grid }
    }
}

impl<'a, T, G> Interp1D<'a, T, G> for Linear1D<G>
where
    T: Float,
    G: Grid1D<'a, T>,
{
    #[inline]
    fn eval_one(&self, loc: T) -> T {
        match self.grid.at(loc) {
            Some(GridSample { w_left, y0, y1, .. }) => w_left * y0 + (T::one() - w_left) * y1,
            None => T::zero(),
        }
    }
}

/// Interpolate a batch of observation points on one axis,
/// writing one value per point in the original order.
///
/// Points that are not strictly inside the grid are set to zero.
///
/// # Errors
/// * If the grid has fewer than 2 entries or its first two entries are not increasing
/// * If `vals` is not the same length as `grid`
/// * If `out` is not the same length as `obs`
pub fn interp1d<T: Float>(grid: &[T], vals: &[T], obs: &[T], out: &mut [T]) -> Result<()> {
    let w = grid_weights(&[grid], &[obs])?;
    check_len(grid.len(), vals.len())?;
    check_len(obs.len(), out.len())?;

    out.fill(T::zero());
    for (i, wl, b) in w.rows() {
        let (wl, b) = (wl[0], b[0]);
        out[i] = wl * vals[b] + (T::one() - wl) * vals[b + 1];
    }

    Ok(())
}

/// Interpolate a batch of observation points on one axis,
/// allocating for the output for convenience.
pub fn interp1d_alloc<T: Float>(grid: &[T], vals: &[T], obs: &[T]) -> Result<Vec<T>> {
    let mut out = vec![T::zero(); obs.len()];
    interp1d(grid, vals, obs, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod test {
    use crate::one_dim::{Interp1D, RectilinearGrid1D};
    use crate::testing::{randn, random_grid, randn_in, rng_fixed_seed};
    use crate::utils::linspace;
    use crate::Error;

    use super::{interp1d, interp1d_alloc, Linear1D};

    #[test]
    fn test_linear_1d() {
        let rng = &mut rng_fixed_seed();

        let n = 77;

        let vals = &randn::<f64>(rng, n)[..];
        let (start, stop) = (-3.14, 314.0);
        let x = random_grid(rng, n, start, stop);
        let lin = Linear1D::new(RectilinearGrid1D::new(&x, vals).unwrap());

        // Observations both inside and outside the grid
        let locs = randn_in(rng, 3 * n, 2.0 * start, 2.0 * stop);

        let y_batch = interp1d_alloc(&x, vals, &locs).unwrap();
        let y_each = lin.eval_alloc(&locs);

        for i in 0..locs.len() {
            let loc = locs[i];
            assert_eq!(y_batch[i], y_each[i]);

            if loc <= x[0] || loc >= x[n - 1] {
                assert_eq!(y_batch[i], 0.0);
                continue;
            }

            let j = x.partition_point(|v| v <= &loc) - 1;
            let (xleft, xright) = (x[j], x[j + 1]);
            let (yleft, yright) = (vals[j], vals[j + 1]);
            assert!(loc >= xleft && loc < xright, "Didn't find the correct cell");

            let y_expected = yleft + (yright - yleft) / (xright - xleft) * (loc - xleft);
            assert!((y_batch[i] - y_expected).abs() < 1e-12);
            assert!(y_batch[i] <= yleft.max(yright) + 1e-12);
            assert!(y_batch[i] >= yleft.min(yright) - 1e-12);
        }
    }

    /// Approaching a grid point from either side recovers its value
    #[test]
    fn test_recovery_at_grid_points() {
        let x = linspace(0.0, 4.0, 5);
        let vals: [f64; 5] = [3.0, -1.0, 2.0, 7.0, 5.0];
        for i in 1..4 {
            for eps in [1e-3, 1e-6, 1e-9] {
                let out = interp1d_alloc(&x, &vals, &[x[i] + eps, x[i] - eps]).unwrap();
                assert!((out[0] - vals[i]).abs() < 10.0 * eps);
                assert!((out[1] - vals[i]).abs() < 10.0 * eps);
            }
            // Exactly on an interior grid point
            assert_eq!(interp1d_alloc(&x, &vals, &[x[i]]).unwrap()[0], vals[i]);
        }
    }

    #[test]
    fn test_boundaries_evaluate_to_zero() {
        let x = [1.0, 2.0];
        let vals = [10.0, 20.0];
        let out = interp1d_alloc(&x, &vals, &[1.0, 1.5, 2.0, f64::NAN]).unwrap();
        assert_eq!(out, vec![0.0, 15.0, 0.0, 0.0]);

        let lin = Linear1D::new(RectilinearGrid1D::new(&x, &vals).unwrap());
        assert_eq!(lin.eval_one(1.0), 0.0);
        assert_eq!(lin.eval_one(2.0), 0.0);
    }

    #[test]
    fn test_errors() {
        let x = [0.0, 1.0];
        let mut out = [0.0; 2];
        assert_eq!(
            interp1d(&x, &[1.0, 2.0, 3.0], &[0.5, 0.5], &mut out),
            Err(Error::ShapeMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert!(interp1d(&x, &[1.0, 2.0], &[0.5], &mut out).is_err());
        assert!(RectilinearGrid1D::new(&x, &[1.0]).is_err());
        assert!(RectilinearGrid1D::new(&[1.0, 0.0], &[1.0, 2.0]).is_err());

        let lin = Linear1D::new(RectilinearGrid1D::new(&x, &[1.0, 2.0]).unwrap());
        assert!(lin.eval(&[0.5], &mut out).is_err());
    }
}
