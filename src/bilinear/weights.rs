//! Corner weights for bilinear interpolation.
use num_traits::Float;

use crate::error::Result;
use crate::weights::grid_weights;

/// Weights of the four corners of a grid cell.
///
/// The first digit selects left (0) or right (1) on axis 0,
/// and the second digit does the same on axis 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerWeights<T> {
    /// Left on axis 0, left on axis 1
    pub w00: T,
    /// Right on axis 0, left on axis 1
    pub w10: T,
    /// Left on axis 0, right on axis 1
    pub w01: T,
    /// Right on axis 0, right on axis 1
    pub w11: T,
}

impl<T: Float> CornerWeights<T> {
    /// Combine the left weights on each axis into corner weights
    #[inline]
    pub fn from_left_weights(wx: T, wy: T) -> Self {
        let rx = T::one() - wx;
        let ry = T::one() - wy;
        Self {
            w00: wx * wy,
            w10: rx * wy,
            w01: wx * ry,
            w11: rx * ry,
        }
    }

    pub fn sum(&self) -> T {
        self.w00 + self.w10 + self.w01 + self.w11
    }

    /// Corner offsets from the lower corner of the cell, paired with their weights
    #[inline]
    pub fn corners(&self) -> [([usize; 2], T); 4] {
        [
            ([0, 0], self.w00),
            ([1, 0], self.w10),
            ([1, 1], self.w11),
            ([0, 1], self.w01),
        ]
    }
}

/// Corner weights and lower-corner indices of the valid points in a batch.
///
/// Entry `k` of each field belongs to observation `index[k]` of the original batch.
#[derive(Clone, Debug, PartialEq)]
pub struct BilinearWeights<T> {
    pub corners: Vec<CornerWeights<T>>,
    pub index: Vec<usize>,
    pub brackets: Vec<[usize; 2]>,
    nobs: usize,
}

impl<T: Float> BilinearWeights<T> {
    /// Number of valid observation points
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of observation points in the original batch, valid or not
    pub fn nobs(&self) -> usize {
        self.nobs
    }

    /// Iterate over `(original index, corner weights, lower corner)` of valid points
    pub fn iter(&self) -> impl Iterator<Item = (usize, &CornerWeights<T>, [usize; 2])> + '_ {
        self.index
            .iter()
            .zip(&self.corners)
            .zip(&self.brackets)
            .map(|((&i, c), &b)| (i, c, b))
    }

    /// One corner weight of every valid point, selected by its offset
    /// from the lower corner, like `[1, 0]` for right on axis 0 and left on axis 1.
    pub fn column(&self, corner: [usize; 2]) -> Vec<T> {
        self.corners
            .iter()
            .map(|c| match corner {
                [0, 0] => c.w00,
                [1, 0] => c.w10,
                [0, 1] => c.w01,
                _ => c.w11,
            })
            .collect()
    }
}

/// Compute the four corner weights and the lower corner of the grid cell
/// for each observation point strictly inside a 2D grid.
///
/// # Errors
/// * If either grid has fewer than 2 entries or its first two entries are not increasing
/// * If the coordinate slices have different lengths
pub fn bilinear_weights<T: Float>(
    grids: [&[T]; 2],
    obs: [&[T]; 2],
) -> Result<BilinearWeights<T>> {
    let w = grid_weights(&grids, &obs)?;

    let mut corners = Vec::with_capacity(w.len());
    let mut brackets = Vec::with_capacity(w.len());
    for (_, wl, b) in w.rows() {
        corners.push(CornerWeights::from_left_weights(wl[0], wl[1]));
        brackets.push([b[0], b[1]]);
    }

    Ok(BilinearWeights {
        corners,
        index: w.index().to_vec(),
        brackets,
        nobs: w.nobs(),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;

    #[test]
    fn test_corner_weights_sum_to_one() {
        let mut rng = rng_fixed_seed();
        let x = random_grid(&mut rng, 9, -2.0, 7.0);
        let y = random_grid(&mut rng, 13, 0.0, 0.1);
        let xobs = randn_in(&mut rng, 1000, -3.0, 8.0);
        let yobs = randn_in(&mut rng, 1000, -0.05, 0.15);

        let bw = bilinear_weights([&x[..], &y[..]], [&xobs[..], &yobs[..]]).unwrap();
        assert!(!bw.is_empty());
        assert_eq!(bw.nobs(), 1000);
        for (_, c, _) in bw.iter() {
            assert!((c.sum() - 1.0).abs() < 1e-14);
            for (_, w) in c.corners() {
                assert!((0.0..=1.0).contains(&w));
            }
        }
    }

    #[test]
    fn test_corner_ordering() {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 10.0];
        // Near the right edge on axis 0 and near the left edge on axis 1
        let bw = bilinear_weights([&x[..], &y[..]], [&[1.75][..], &[2.5][..]]).unwrap();

        assert_eq!(bw.index, vec![0]);
        assert_eq!(bw.brackets, vec![[1, 0]]);
        let c = bw.corners[0];
        assert_eq!(c.w00, 0.25 * 0.75);
        assert_eq!(c.w10, 0.75 * 0.75);
        assert_eq!(c.w01, 0.25 * 0.25);
        assert_eq!(c.w11, 0.75 * 0.25);
        assert_eq!(bw.column([1, 0]), vec![c.w10]);
        assert_eq!(bw.column([0, 1]), vec![c.w01]);
    }

    #[test]
    fn test_drops_boundary_points() {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 1.0, 2.0];
        let xobs = [0.0, 0.5, 2.0, 0.5];
        let yobs = [0.5, 0.5, 0.5, 2.0];
        let bw = bilinear_weights([&x[..], &y[..]], [&xobs[..], &yobs[..]]).unwrap();
        assert_eq!(bw.index, vec![1]);
        assert_eq!(bw.len(), 1);
        assert_eq!(bw.corners[0].w00, 0.25);
    }
}
