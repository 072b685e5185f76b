use rand::distr::StandardUniform;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>()).take(n).collect()
}

/// Generate `n` uniform samples in `[lo, hi)`
pub fn randn_in(rng: &mut StdRng, n: usize, lo: f64, hi: f64) -> Vec<f64> {
    randn::<f64>(rng, n)
        .into_iter()
        .map(|u| lo + u * (hi - lo))
        .collect()
}

/// An irregular, strictly increasing grid of `n` points from `lo` to `hi`,
/// with each spacing drawn from `[0.5, 1.5)` before rescaling.
pub fn random_grid(rng: &mut StdRng, n: usize, lo: f64, hi: f64) -> Vec<f64> {
    let mut x = vec![0.0; n];
    for i in 1..n {
        x[i] = x[i - 1] + 0.5 + rng.random::<f64>();
    }
    let span = x[n - 1];
    x.iter_mut().for_each(|v| *v = lo + *v / span * (hi - lo));
    (0..n - 1).for_each(|i| assert!(x[i + 1] > x[i]));
    x
}

/// Observation points strictly inside each grid, one coordinate slice per axis.
///
/// Every fourth point repeats the previous one so that batches
/// always contain points sharing a cell.
pub fn interior_obs(rng: &mut StdRng, grids: &[&[f64]], n: usize) -> Vec<Vec<f64>> {
    grids
        .iter()
        .map(|g| {
            let (lo, hi) = (g[0], g[g.len() - 1]);
            let pad = 1e-6 * (hi - lo);
            let mut x = randn_in(rng, n, lo + pad, hi - pad);
            (1..n).step_by(4).for_each(|i| x[i] = x[i - 1]);
            x
        })
        .collect()
}

/// Inner product of two equal-length slices
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
