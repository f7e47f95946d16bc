use serde::{Deserialize, Serialize};
use tracing::info;

use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::network::network::Network;

/// Correct / total counts for one true class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassTally {
    pub correct: usize,
    pub total: usize,
}

impl ClassTally {
    pub fn accuracy(&self) -> Option<f64> {
        (self.total > 0).then(|| self.correct as f64 / self.total as f64)
    }
}

/// Result of running the network over a labelled set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub correct: usize,
    pub total: usize,
    /// Indexed by true class.
    pub per_class: Vec<ClassTally>,
}

impl Evaluation {
    /// Fraction of samples whose argmax prediction equals the label.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }
}

/// Classifies every row of `dataset` and compares with its label.
///
/// Read-only: neither the network nor the dataset is modified.
pub fn evaluate(network: &Network, dataset: &Dataset) -> Result<Evaluation> {
    let classes = network.classes();
    let mut per_class = vec![ClassTally::default(); classes];
    let mut correct = 0;

    for i in 0..dataset.len() {
        let (x, label) = dataset.sample(i, classes)?;
        let predicted = network.predict(&x)?;
        per_class[label].total += 1;
        if predicted == label {
            correct += 1;
            per_class[label].correct += 1;
        }
    }

    let evaluation = Evaluation {
        correct,
        total: dataset.len(),
        per_class,
    };
    info!(
        correct = evaluation.correct,
        total = evaluation.total,
        accuracy = evaluation.accuracy(),
        "evaluation finished"
    );
    Ok(evaluation)
}
