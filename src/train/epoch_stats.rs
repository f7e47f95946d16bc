use serde::{Deserialize, Serialize};

/// Per-epoch training statistics returned by `train_loop`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean cross-entropy over the epoch's samples, each measured just before
    /// its own update.
    pub train_loss: f64,
    /// Wall-clock duration of this epoch in milliseconds.
    pub elapsed_ms: u64,
}
