use crate::error::{NetError, Result};
use crate::network::cache::GradientSet;
use crate::network::params::ParameterSet;

/// Plain per-sample SGD with a fixed learning rate.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Result<Sgd> {
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(NetError::InvalidLearningRate(learning_rate));
        }
        Ok(Sgd { learning_rate })
    }

    /// Applies `param -= lr * grad` in place to all four tensors.
    pub fn step(&self, params: &mut ParameterSet, grads: GradientSet) {
        let lr = self.learning_rate;
        params.w.sub_assign_scaled(&grads.dw, lr);
        params.b1.sub_assign_scaled(&grads.db1, lr);
        params.c.sub_assign_scaled(&grads.dc, lr);
        params.b2.sub_assign_scaled(&grads.db2, lr);
    }
}
