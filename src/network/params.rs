use rand::Rng;
use tracing::debug;

use crate::error::{NetError, Result};
use crate::math::matrix::Matrix;
use crate::math::random::random_matrix;

/// The four trainable tensors of the network.
///
/// Shapes are fixed at construction:
/// - `w`  — `hidden × input`   (input → hidden weights)
/// - `b1` — `hidden × 1`       (hidden bias)
/// - `c`  — `classes × hidden` (hidden → output weights)
/// - `b2` — `classes × 1`      (output bias)
///
/// Only `Sgd::step` writes to them after construction; `Network` hands out
/// shared borrows only.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    pub w: Matrix,
    pub b1: Matrix,
    pub c: Matrix,
    pub b2: Matrix,
}

impl ParameterSet {
    /// Random initialization: weights use He scaling `sqrt(2 / fan_in)`,
    /// biases are standard normal.
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        hidden_size: usize,
        classes: usize,
        rng: &mut R,
    ) -> Result<ParameterSet> {
        check_dimension("input_size", input_size)?;
        check_dimension("hidden_size", hidden_size)?;
        check_dimension("classes", classes)?;

        let w = random_matrix(hidden_size, input_size, (2.0 / input_size as f64).sqrt(), rng);
        let c = random_matrix(classes, hidden_size, (2.0 / hidden_size as f64).sqrt(), rng);
        let b1 = random_matrix(hidden_size, 1, 1.0, rng);
        let b2 = random_matrix(classes, 1, 1.0, rng);

        debug!(input_size, hidden_size, classes, "initialized parameters");

        Ok(ParameterSet { w, b1, c, b2 })
    }

    /// Checks that the four tensors agree on `(input, hidden, classes)` and
    /// that none of those is zero.
    pub fn validate(&self) -> Result<()> {
        check_dimension("input_size", self.w.cols)?;
        check_dimension("hidden_size", self.w.rows)?;
        check_dimension("classes", self.c.rows)?;

        let hidden = self.w.rows;
        let classes = self.c.rows;
        check_shape("b1", &self.b1, (hidden, 1))?;
        check_shape("c", &self.c, (classes, hidden))?;
        check_shape("b2", &self.b2, (classes, 1))?;
        Ok(())
    }

    pub fn input_size(&self) -> usize {
        self.w.cols
    }

    pub fn hidden_size(&self) -> usize {
        self.w.rows
    }

    pub fn classes(&self) -> usize {
        self.c.rows
    }

    /// Total number of scalar parameters.
    pub fn len(&self) -> usize {
        [&self.w, &self.b1, &self.c, &self.b2]
            .iter()
            .map(|m| m.rows * m.cols)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn check_dimension(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(NetError::InvalidDimension { name, value });
    }
    Ok(())
}

fn check_shape(name: &str, m: &Matrix, expected: (usize, usize)) -> Result<()> {
    if m.shape() != expected {
        return Err(NetError::ShapeMismatch {
            expected: format!("{} of {}x{}", name, expected.0, expected.1),
            found: format!("{}x{}", m.rows, m.cols),
        });
    }
    Ok(())
}
