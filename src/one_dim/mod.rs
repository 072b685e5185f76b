//! Special-cases for one-dimensional interpolation, which can use
//! a more lightweight evaluation pattern than the multidimensional methods.
//!
//! As everywhere in this crate, observation points on or outside the
//! ends of the grid are not extrapolated and evaluate to zero.

pub mod linear;
pub use linear::{interp1d, interp1d_alloc};

use num_traits::Float;

use crate::error::{check_len, Error, Result};
use crate::weights::weights_one;

/// The grid cell containing an observation point
pub struct GridSample<T> {
    /// Index of the left neighbor
    pub index: usize,
    /// Weight of the left neighbor; the right neighbor has `1 - w_left`
    pub w_left: T,
    pub y0: T,
    pub y1: T,
}

/// A rectilinear 1D grid with values
pub trait Grid1D<'a, T: Float> {
    /// Get the left and right values and the weight of the left value
    /// for an observation point, or `None` if the point is not
    /// strictly inside the grid.
    ///
    /// It is highly recommended to inline implementations of this function.
    fn at(&self, loc: T) -> Option<GridSample<T>>;
}

/// A one-dimensional interpolator.
pub trait Interp1D<'a, T: Float, G: Grid1D<'a, T>> {
    /// Evaluate the interpolant at an observation point.
    ///
    /// It is highly recommended to inline implementations of this function.
    fn eval_one(&self, loc: T) -> T;

    /// Evaluate the interpolant at a set of observation points.
    ///
    /// # Errors
    /// * If `locs` and `out` have different lengths
    #[inline]
    fn eval(&self, locs: &[T], out: &mut [T]) -> Result<()> {
        check_len(locs.len(), out.len())?;

        for i in 0..locs.len() {
            out[i] = self.eval_one(locs[i]);
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of observation points, allocating
    /// for the output values for convenience.
    #[inline]
    fn eval_alloc(&self, locs: &[T]) -> Vec<T> {
        locs.iter().map(|&x| self.eval_one(x)).collect()
    }
}

/// A rectilinear grid, which may have uneven spacing.
#[derive(Clone, Copy)]
pub struct RectilinearGrid1D<'a, T: Float> {
    grid: &'a [T],
    vals: &'a [T],
}

impl<'a, T: Float> RectilinearGrid1D<'a, T> {
    /// # Errors
    /// * If the grid has fewer than 2 entries or its first two entries are not increasing
    /// * If `vals` is not the same length as `grid`
    pub fn new(grid: &'a [T], vals: &'a [T]) -> Result<Self> {
        if grid.len() < 2 {
            return Err(Error::InvalidArgument(
                "All grids must have at least 2 entries",
            ));
        }
        if grid[1] <= grid[0] {
            return Err(Error::InvalidArgument(
                "All grids must be monotonically increasing",
            ));
        }
        check_len(grid.len(), vals.len())?;

        Ok(Self { grid, vals })
    }

    pub fn grid(&self) -> &'a [T] {
        self.grid
    }

    pub fn vals(&self) -> &'a [T] {
        self.vals
    }
}

impl<'a, T: Float> Grid1D<'a, T> for RectilinearGrid1D<'a, T> {
    #[inline]
    fn at(&self, loc: T) -> Option<GridSample<T>> {
        let ([index], [w_left]) = weights_one(&[self.grid], [loc])?;

        Some(GridSample {
            index,
            w_left,
            y0: self.vals[index],
            y1: self.vals[index + 1],
        })
    }
}
