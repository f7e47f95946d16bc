/// Logistic function `1 / (1 + e^-x)`.
///
/// Evaluated branch-wise so neither `exp` call can overflow: for `x >= 0` the
/// exponent is non-positive, and for `x < 0` the equivalent `e^x / (1 + e^x)`
/// is used.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// `σ'(x) = σ(x)(1 - σ(x))`, taken at the pre-activation value `x`.
pub fn sigmoid_derivative(x: f64) -> f64 {
    let fx = sigmoid(x);
    fx * (1.0 - fx)
}
