use crate::math::matrix::Matrix;

/// Softmax over a column vector: `exp(v) / sum(exp(v))`.
///
/// The maximum is subtracted before exponentiating; the result is unchanged but
/// large logits no longer overflow.
pub fn softmax(logits: &Matrix) -> Matrix {
    let max = logits.max();
    let exps = logits.map(|v| (v - max).exp());
    let total = exps.sum();
    exps.scale(1.0 / total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn uniform_logits_give_uniform_probabilities() {
        let p = softmax(&Matrix::column(&[2.0, 2.0, 2.0, 2.0]));
        for v in p.to_column_vec() {
            assert_abs_diff_eq!(v, 0.25, epsilon = 1e-12);
        }
    }

    #[test]
    fn matches_direct_formula_for_small_logits() {
        let logits = [0.5, -1.0, 2.0];
        let denom: f64 = logits.iter().map(|v: &f64| v.exp()).sum();
        let p = softmax(&Matrix::column(&logits)).to_column_vec();
        for (pi, li) in p.iter().zip(logits.iter()) {
            assert_abs_diff_eq!(*pi, li.exp() / denom, epsilon = 1e-12);
        }
    }

    #[test]
    fn large_logits_do_not_overflow() {
        let p = softmax(&Matrix::column(&[1000.0, 999.0, -1000.0]));
        assert!(p.data.iter().flatten().all(|v| v.is_finite()));
        assert_abs_diff_eq!(p.sum(), 1.0, epsilon = 1e-9);
        assert_eq!(p.argmax_column(), 0);
    }
}
