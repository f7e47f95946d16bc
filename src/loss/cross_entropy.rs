use crate::error::{NetError, Result};
use crate::math::matrix::Matrix;

/// Categorical cross-entropy against a one-hot target, paired with a softmax
/// output.
pub struct CrossEntropyLoss;

/// Small epsilon added inside log() to prevent log(0) = -inf.
const EPS: f64 = 1e-12;

impl CrossEntropyLoss {
    /// `L = -ln(output[label] + eps)` for a `K × 1` probability column.
    pub fn loss(output: &Matrix, label: usize) -> Result<f64> {
        check_label(label, output.rows)?;
        Ok(-(output.data[label][0] + EPS).ln())
    }

    /// Gradient of the combined softmax + cross-entropy w.r.t. the logits `U`:
    ///   ∂L/∂u_i = output[i] - 1{i == label}
    ///
    /// The softmax Jacobian never has to be formed.
    pub fn derivative(output: &Matrix, label: usize) -> Result<Matrix> {
        check_label(label, output.rows)?;
        let mut grad = output.clone();
        grad.data[label][0] -= 1.0;
        Ok(grad)
    }
}

fn check_label(label: usize, classes: usize) -> Result<()> {
    if label >= classes {
        return Err(NetError::InvalidLabel {
            label: label as f64,
            classes,
        });
    }
    Ok(())
}
