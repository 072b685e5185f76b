//! Convenience methods for constructing and resampling grids in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use itertools::Itertools;
use num_traits::Float;

use crate::error::{check_len, Error, Result};
use crate::dimprod;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// Returns an empty Vec for `n == 0` and `[start]` for `n == 1`.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    if n < 2 {
        return vec![start; n];
    }
    let dx: T = (stop - start) / T::from(n - 1).unwrap();
    (0..n).map(|i| start + T::from(i).unwrap() * dx).collect()
}

/// Generates a meshgrid in C ordering (x0, y0, z0, x0, y0, z1, ..., x0, yn, zn)
pub fn meshgrid<T>(x: Vec<&Vec<T>>) -> Vec<Vec<T>>
where
    T: Float,
{
    x.into_iter()
        .multi_cartesian_product()
        .map(|xx| xx.iter().map(|y| **y).collect())
        .collect()
}

/// Downsample a C-ordered array of `shape` to `new_shape` by averaging
/// non-overlapping blocks.
///
/// Each block spans `shape[i] / new_shape[i]` samples (floor division) along
/// axis `i`. Trailing samples that do not fill a whole block are ignored.
///
/// # Errors
/// * If `shape` is empty or `new_shape` has a different number of dimensions
/// * If any entry of `new_shape` is zero or exceeds the matching entry of `shape`
/// * If `vals` does not have `shape.iter().product()` entries
pub fn bin_average<T: Float>(vals: &[T], shape: &[usize], new_shape: &[usize]) -> Result<Vec<T>> {
    if shape.is_empty() || new_shape.len() != shape.len() {
        return Err(Error::InvalidArgument(
            "Shapes must have the same, nonzero number of dimensions",
        ));
    }
    if new_shape.iter().zip(shape).any(|(&m, &n)| m == 0 || m > n) {
        return Err(Error::InvalidArgument(
            "Each downsampled dimension must be in 1..=original size",
        ));
    }
    check_len(shape.iter().product(), vals.len())?;

    let factors: Vec<usize> = shape.iter().zip(new_shape).map(|(n, m)| n / m).collect();
    let strides = dimprod(shape);
    let count = T::from(factors.iter().product::<usize>())
        .ok_or(Error::InvalidArgument("Block size is not representable"))?;

    let out = new_shape
        .iter()
        .map(|&m| 0..m)
        .multi_cartesian_product()
        .map(|coarse| {
            let total = factors
                .iter()
                .map(|&f| 0..f)
                .multi_cartesian_product()
                .fold(T::zero(), |acc, fine| {
                    let mut flat = 0;
                    for j in 0..shape.len() {
                        flat += (coarse[j] * factors[j] + fine[j]) * strides[j];
                    }
                    acc + vals[flat]
                });
            total / count
        })
        .collect();

    Ok(out)
}
