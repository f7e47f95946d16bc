use crate::math::matrix::Matrix;

/// Intermediate values of one forward pass, consumed by the matching backward
/// pass for the same sample.
#[derive(Debug, Clone)]
pub struct ActivationCache {
    /// Hidden pre-activation `W·x + b1`.
    pub z: Matrix,
    /// Hidden activation `σ(z)`.
    pub h: Matrix,
    /// Output logits `C·h + b2`.
    pub u: Matrix,
}

/// Per-sample gradients, one per tensor of `ParameterSet` and shaped like it.
#[derive(Debug, Clone)]
pub struct GradientSet {
    pub dw: Matrix,
    pub db1: Matrix,
    pub dc: Matrix,
    pub db2: Matrix,
}
