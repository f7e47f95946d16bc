use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};

use crate::data::dataset::Dataset;
use crate::error::{NetError, Result};
use crate::math::random::random_permutation;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Trains `network` with per-sample SGD for `config.epochs` epochs.
///
/// Every epoch visits the samples in a fresh random order drawn from `rng`,
/// and each sample runs forward → backward → update before the next one
/// starts. There is no early stopping.
///
/// # Errors
/// - `ShapeMismatch` if the dataset width differs from the network input size
/// - `InvalidLabel` on the first sample whose label is outside
///   `[0, classes)`, `Dataset` on one that is not a whole number;
///   parameters already updated by earlier samples stay updated
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut Network,
    dataset: &Dataset,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<Vec<EpochStats>> {
    if dataset.dim() != network.input_size() {
        return Err(NetError::ShapeMismatch {
            expected: format!("{} features", network.input_size()),
            found: format!("{} features", dataset.dim()),
        });
    }

    let n = dataset.len();
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();
        let mut total_loss = 0.0;

        for (step, idx) in random_permutation(n, rng).into_iter().enumerate() {
            if config.progress_every > 0 && step % config.progress_every == 0 {
                debug!(epoch, progress = step, total = n, "training");
            }
            let (x, label) = dataset.sample(idx, network.classes())?;
            total_loss += network.train_step(&x, label)?;
        }

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_loss: total_loss / n as f64,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };
        info!(
            epoch = stats.epoch,
            total_epochs = stats.total_epochs,
            train_loss = stats.train_loss,
            elapsed_ms = stats.elapsed_ms,
            "epoch finished"
        );
        history.push(stats);
    }

    Ok(history)
}
