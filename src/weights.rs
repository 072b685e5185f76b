//! Bracket search and left-weight computation for queries against
//! N rectilinear axis grids.
//!
//! This is the shared leaf of every interpolator and adjoint in the crate.
//! The computation is split into pure steps so that the validity rule
//! can be inspected on its own:
//!
//! 1. [`raw_brackets`]: a search-to-the-right on every axis for every point
//! 2. [`valid_mask`]: which points are bracketed on every axis
//! 3. [`grid_weights`]: keep the valid rows and compute their weights
//!
//! A point is bracketed on an axis only when it lies strictly inside
//! `(grid[0], grid[last])`. Points on or beyond the outer bounds are dropped
//! rather than extrapolated, and the returned [`GridWeights`] carries an index
//! map from each kept row back to its position in the query batch.
//!
//! ```rust
//! use gridinterp::weights::grid_weights;
//!
//! let x = [0.0_f64, 1.0, 2.0];
//! let y = [0.0_f64, 1.0, 2.0];
//!
//! // The middle point sits on the lower bound of `x` and is dropped
//! let xobs = [0.5, 0.0, 1.5];
//! let yobs = [0.5, 0.5, 1.75];
//!
//! let w = grid_weights(&[&x[..], &y[..]], &[&xobs[..], &yobs[..]]).unwrap();
//! assert_eq!(w.len(), 2);
//! assert_eq!(w.index(), &[0, 2]);
//! assert_eq!(w.bracket_row(1), &[1, 1]);
//! assert_eq!(w.weight_row(1), &[0.5, 0.25]);
//! ```
use log::debug;
use num_traits::Float;

use crate::error::{check_len, Error, Result};

/// Check that there is at least one axis, and that every axis has at least
/// two entries with the first two increasing.
///
/// Full monotonicity is not checked; that would cost as much as the
/// interpolation itself, and is left to the caller.
///
/// Returns the number of dimensions.
pub fn check_grids<T: Float>(grids: &[&[T]]) -> Result<usize> {
    if grids.is_empty() {
        return Err(Error::InvalidArgument("At least one grid is required"));
    }
    if grids.iter().any(|g| g.len() < 2) {
        return Err(Error::InvalidArgument(
            "All grids must have at least 2 entries",
        ));
    }
    if !grids.iter().all(|g| g[1] > g[0]) {
        return Err(Error::InvalidArgument(
            "All grids must be monotonically increasing",
        ));
    }
    Ok(grids.len())
}

/// Check that there is one coordinate slice per axis and that all of them
/// describe the same number of points.
///
/// Returns the number of observation points.
pub fn check_obs<T>(ndims: usize, obs: &[&[T]]) -> Result<usize> {
    if obs.len() != ndims {
        return Err(Error::InvalidArgument(
            "Query dimensionality does not match the number of grids",
        ));
    }
    let nobs = obs.first().map_or(0, |x| x.len());
    for x in obs {
        check_len(nobs, x.len())?;
    }
    Ok(nobs)
}

/// Insertion index of `x` into `grid` to the right of any equal entries,
/// which is the index of the first entry strictly greater than `x`.
///
/// A NaN observation returns `0`.
#[inline]
pub fn search_right<T: Float>(grid: &[T], x: T) -> usize {
    grid.partition_point(|&g| g <= x)
}

/// Whether `x`, with right-bracket index `r` from [`search_right`], lies
/// strictly inside the grid.
///
/// The lower bound itself is excluded even though the search places it
/// inside the first cell; the upper bound is excluded by `r == grid.len()`.
#[inline]
pub fn is_bracketed<T: Float>(grid: &[T], x: T, r: usize) -> bool {
    r > 0 && r < grid.len() && grid[0] < x
}

/// Weight of the left neighbor `grid[r - 1]` of a bracketed `x`.
///
/// Only meaningful when [`is_bracketed`] holds.
#[inline]
pub fn left_weight<T: Float>(grid: &[T], x: T, r: usize) -> T {
    let x0 = grid[r - 1];
    let x1 = grid[r];
    (x1 - x) / (x1 - x0)
}

/// Right-bracket index of every observation on every axis,
/// row-major with one row of `grids.len()` entries per observation.
///
/// Assumes inputs have passed [`check_grids`] and [`check_obs`].
pub fn raw_brackets<T: Float>(grids: &[&[T]], obs: &[&[T]], nobs: usize) -> Vec<usize> {
    let ndims = grids.len();
    let mut raw = vec![0_usize; nobs * ndims];
    for j in 0..ndims {
        let (grid, x) = (grids[j], obs[j]);
        for i in 0..nobs {
            raw[i * ndims + j] = search_right(grid, x[i]);
        }
    }
    raw
}

/// Validity of each observation given its row of right-bracket indices
/// from [`raw_brackets`]. A point is valid only if it is bracketed on every axis.
pub fn valid_mask<T: Float>(grids: &[&[T]], obs: &[&[T]], raw: &[usize]) -> Vec<bool> {
    let ndims = grids.len();
    if ndims == 0 {
        return Vec::new();
    }
    raw.chunks_exact(ndims)
        .enumerate()
        .map(|(i, r)| (0..ndims).all(|j| is_bracketed(grids[j], obs[j][i], r[j])))
        .collect()
}

/// Left weights and lower-corner indices of the valid observation points.
///
/// `weights` and `brackets` are row-major with [`GridWeights::ndims`] entries
/// per row, and row `k` belongs to observation `index[k]` of the original batch.
#[derive(Clone, Debug, PartialEq)]
pub struct GridWeights<T> {
    ndims: usize,
    nobs: usize,
    weights: Vec<T>,
    index: Vec<usize>,
    brackets: Vec<usize>,
}

impl<T: Float> GridWeights<T> {
    /// Number of valid observation points
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of axes
    pub fn ndims(&self) -> usize {
        self.ndims
    }

    /// Number of observation points in the original batch, valid or not
    pub fn nobs(&self) -> usize {
        self.nobs
    }

    /// Whether every observation point in the batch was kept
    pub fn is_complete(&self) -> bool {
        self.len() == self.nobs
    }

    /// Row-major left weights, `len() x ndims()`
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Position of each kept row in the original batch
    pub fn index(&self) -> &[usize] {
        &self.index
    }

    /// Row-major lower-corner indices, `len() x ndims()`
    pub fn brackets(&self) -> &[usize] {
        &self.brackets
    }

    /// Left weight on each axis for kept row `k`
    pub fn weight_row(&self, k: usize) -> &[T] {
        &self.weights[k * self.ndims..(k + 1) * self.ndims]
    }

    /// Lower-corner index on each axis for kept row `k`
    pub fn bracket_row(&self, k: usize) -> &[usize] {
        &self.brackets[k * self.ndims..(k + 1) * self.ndims]
    }

    /// Iterate over `(original index, left weights, lower corner)` of kept rows
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[T], &[usize])> + '_ {
        self.index
            .iter()
            .zip(self.weights.chunks_exact(self.ndims))
            .zip(self.brackets.chunks_exact(self.ndims))
            .map(|((&i, w), b)| (i, w, b))
    }
}

/// Compute the bracket and left weight on every axis for a batch of
/// observation points, keeping only points strictly inside the grid.
///
/// `obs` holds one coordinate slice per axis, all of the same length.
/// Grids are assumed to be monotonically _increasing_; only the first
/// two entries of each are checked.
///
/// # Errors
/// * If there are no grids, or any grid has fewer than 2 entries
/// * If the first two entries of any grid are not increasing
/// * If the number of coordinate slices does not match the number of grids
/// * If the coordinate slices have different lengths
pub fn grid_weights<T: Float>(grids: &[&[T]], obs: &[&[T]]) -> Result<GridWeights<T>> {
    let ndims = check_grids(grids)?;
    let nobs = check_obs(ndims, obs)?;

    let raw = raw_brackets(grids, obs, nobs);
    let mask = valid_mask(grids, obs, &raw);

    let nvalid = mask.iter().filter(|&&m| m).count();
    let mut weights = Vec::with_capacity(nvalid * ndims);
    let mut brackets = Vec::with_capacity(nvalid * ndims);
    let mut index = Vec::with_capacity(nvalid);

    // Weights are only formed for kept rows, so every `r` here is in `1..len`
    for i in (0..nobs).filter(|&i| mask[i]) {
        index.push(i);
        for j in 0..ndims {
            let r = raw[i * ndims + j];
            weights.push(left_weight(grids[j], obs[j][i], r));
            brackets.push(r - 1);
        }
    }

    if nvalid < nobs {
        debug!(
            "{} of {} observation points are outside the {}-dimensional grid interior and were dropped",
            nobs - nvalid,
            nobs,
            ndims
        );
    }

    Ok(GridWeights {
        ndims,
        nobs,
        weights,
        index,
        brackets,
    })
}

/// Lower corner and left weights of a single observation point,
/// or `None` if it is not strictly inside the grid.
///
/// This is the one-row form of [`grid_weights`] and applies the same rule.
/// Grids are not validated; an empty or single-entry grid brackets nothing.
#[inline]
pub fn weights_one<T: Float, const N: usize>(
    grids: &[&[T]; N],
    x: [T; N],
) -> Option<([usize; N], [T; N])> {
    let mut brackets = [0_usize; N];
    let mut weights = [T::zero(); N];
    for j in 0..N {
        let grid = grids[j];
        let r = search_right(grid, x[j]);
        if !is_bracketed(grid, x[j], r) {
            return None;
        }
        brackets[j] = r - 1;
        weights[j] = left_weight(grid, x[j], r);
    }
    Some((brackets, weights))
}
