/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`         — total number of full passes over the training data
/// - `progress_every` — log a progress line every this many samples
///                      (`0` disables the per-sample progress lines)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub progress_every: usize,
}

impl TrainConfig {
    pub fn new(epochs: usize) -> Self {
        TrainConfig {
            epochs,
            progress_every: 1000,
        }
    }

    pub fn with_progress_every(mut self, progress_every: usize) -> Self {
        self.progress_every = progress_every;
        self
    }
}
