use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::math::matrix::Matrix;

/// Samples every entry independently from N(0, 1) and multiplies it by `scale`.
///
/// With `scale = sqrt(2 / fan_in)` this is the variance-scaling (He) initializer;
/// biases use `scale = 1.0`.
pub fn random_matrix<R: Rng + ?Sized>(rows: usize, cols: usize, scale: f64, rng: &mut R) -> Matrix {
    let mut res = Matrix::zeros(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            let sample: f64 = rng.sample(StandardNormal);
            res.data[i][j] = sample * scale;
        }
    }
    res
}

/// Uniformly random ordering of `0..n`.
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    indices
}
