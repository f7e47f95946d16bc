use rand::Rng;
use tracing::debug;

use crate::activation::{sigmoid, sigmoid_derivative, softmax};
use crate::error::{NetError, Result};
use crate::loss::cross_entropy::CrossEntropyLoss;
use crate::math::matrix::Matrix;
use crate::network::cache::{ActivationCache, GradientSet};
use crate::network::params::ParameterSet;
use crate::optim::sgd::Sgd;

/// Single-hidden-layer classifier: sigmoid hidden layer, softmax output.
///
/// `forward`, `backward` and `predict` only borrow the parameters; `update`
/// and `train_step` are the only paths that mutate them.
#[derive(Debug, Clone)]
pub struct Network {
    params: ParameterSet,
    optimizer: Sgd,
}

impl Network {
    /// Builds a randomly initialized network.
    ///
    /// Argument order is `(learning_rate, classes, input_size, hidden_size)`.
    pub fn new<R: Rng + ?Sized>(
        learning_rate: f64,
        classes: usize,
        input_size: usize,
        hidden_size: usize,
        rng: &mut R,
    ) -> Result<Network> {
        let optimizer = Sgd::new(learning_rate)?;
        let params = ParameterSet::new(input_size, hidden_size, classes, rng)?;
        debug!(learning_rate, parameters = params.len(), "network created");
        Ok(Network { params, optimizer })
    }

    /// Wraps an existing parameter set after checking its tensor shapes agree.
    pub fn from_params(params: ParameterSet, learning_rate: f64) -> Result<Network> {
        params.validate()?;
        Ok(Network {
            params,
            optimizer: Sgd::new(learning_rate)?,
        })
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn learning_rate(&self) -> f64 {
        self.optimizer.learning_rate
    }

    pub fn input_size(&self) -> usize {
        self.params.input_size()
    }

    pub fn hidden_size(&self) -> usize {
        self.params.hidden_size()
    }

    pub fn classes(&self) -> usize {
        self.params.classes()
    }

    /// Forward pass for one `input_size × 1` column.
    ///
    /// Returns the `classes × 1` probability column and the cache the backward
    /// pass for this same sample needs.
    pub fn forward(&self, x: &Matrix) -> Result<(Matrix, ActivationCache)> {
        self.check_input(x)?;
        let p = &self.params;

        let z = &(&p.w * x) + &p.b1;
        let h = z.map(sigmoid);
        let u = &(&p.c * &h) + &p.b2;
        let output = softmax(&u);

        Ok((output, ActivationCache { z, h, u }))
    }

    /// Gradients of the cross-entropy loss for one sample.
    ///
    /// `output` and `cache` must come from `forward(x)` on the current
    /// parameters.
    pub fn backward(
        &self,
        output: &Matrix,
        x: &Matrix,
        label: usize,
        cache: &ActivationCache,
    ) -> Result<GradientSet> {
        self.check_input(x)?;
        check_column("output", output, self.classes())?;
        check_column("cache.z", &cache.z, self.hidden_size())?;
        check_column("cache.h", &cache.h, self.hidden_size())?;
        let p = &self.params;

        // ∂L/∂U = output - one_hot(label)
        let du = CrossEntropyLoss::derivative(output, label)?;
        let dc = &du * &cache.h.transpose();
        let delta = &p.c.transpose() * &du;
        let db1 = delta.hadamard(&cache.z.map(sigmoid_derivative));
        let dw = &db1 * &x.transpose();

        Ok(GradientSet {
            dw,
            db1,
            dc,
            db2: du,
        })
    }

    /// Applies one SGD step with the configured learning rate.
    pub fn update(&mut self, grads: GradientSet) {
        self.optimizer.step(&mut self.params, grads);
    }

    /// forward → backward → update for a single sample. Returns the sample's
    /// loss measured before the update.
    pub fn train_step(&mut self, x: &Matrix, label: usize) -> Result<f64> {
        let (output, cache) = self.forward(x)?;
        let loss = CrossEntropyLoss::loss(&output, label)?;
        let grads = self.backward(&output, x, label, &cache)?;
        self.update(grads);
        Ok(loss)
    }

    /// Cross-entropy loss of one sample under the current parameters.
    pub fn loss(&self, x: &Matrix, label: usize) -> Result<f64> {
        let (output, _) = self.forward(x)?;
        CrossEntropyLoss::loss(&output, label)
    }

    /// Most probable class for `x`.
    pub fn predict(&self, x: &Matrix) -> Result<usize> {
        let (output, _) = self.forward(x)?;
        Ok(output.argmax_column())
    }

    fn check_input(&self, x: &Matrix) -> Result<()> {
        check_column("input", x, self.input_size())
    }
}

fn check_column(name: &str, m: &Matrix, len: usize) -> Result<()> {
    if m.shape() != (len, 1) {
        return Err(NetError::ShapeMismatch {
            expected: format!("{} of {}x1", name, len),
            found: format!("{}x{}", m.rows, m.cols),
        });
    }
    Ok(())
}
