pub mod matrix;
pub mod random;

pub use matrix::{argmax, Matrix};
pub use random::{random_matrix, random_permutation};
