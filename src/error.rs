//! Error type shared by the whole crate.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NetError>;

#[derive(Error, Debug)]
pub enum NetError {
    /// One of the network dimensions (input, hidden, classes) is zero.
    #[error("invalid dimension: {name} must be positive, got {value}")]
    InvalidDimension { name: &'static str, value: usize },

    #[error("invalid learning rate: {0} (must be finite and > 0)")]
    InvalidLearningRate(f64),

    /// Label outside `[0, classes)`, including negative stored labels.
    #[error("invalid label {label}: expected an integer in [0, {classes})")]
    InvalidLabel { label: f64, classes: usize },

    #[error("shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: String, found: String },

    #[error("dataset error: {0}")]
    Dataset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
