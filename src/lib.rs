pub mod activation;
pub mod config;
pub mod data;
pub mod error;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use config::RunConfig;
pub use data::dataset::Dataset;
pub use error::{NetError, Result};
pub use loss::cross_entropy::CrossEntropyLoss;
pub use math::matrix::Matrix;
pub use network::{ActivationCache, GradientSet, Network, ParameterSet};
pub use optim::sgd::Sgd;
pub use train::{evaluate, train_loop, EpochStats, Evaluation, TrainConfig};
