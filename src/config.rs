use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NetError, Result};
use crate::train::train_config::TrainConfig;

/// Hyperparameters for a full train + evaluate run.
///
/// Can be loaded from JSON; any field left out takes its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub learning_rate: f64,
    /// Hidden-layer width.
    pub hidden: usize,
    /// Number of output classes.
    pub classes: usize,
    pub epochs: usize,
    /// Seed for initialization and shuffling; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub progress_every: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            learning_rate: 0.01,
            hidden: 100,
            classes: 10,
            epochs: 3,
            seed: None,
            progress_every: 1000,
        }
    }
}

impl RunConfig {
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: RunConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NetError::InvalidLearningRate(self.learning_rate));
        }
        for (name, value) in [
            ("hidden", self.hidden),
            ("classes", self.classes),
            ("epochs", self.epochs),
        ] {
            if value == 0 {
                return Err(NetError::InvalidDimension { name, value });
            }
        }
        Ok(())
    }

    pub fn train_config(&self) -> TrainConfig {
        TrainConfig::new(self.epochs).with_progress_every(self.progress_every)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: RunConfig = serde_json::from_str(r#"{ "hidden": 32, "seed": 9 }"#).unwrap();
        assert_eq!(cfg.hidden, 32);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.classes, 10);
        assert_eq!(cfg.epochs, 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_epochs_is_invalid() {
        let cfg = RunConfig {
            epochs: 0,
            ..RunConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(NetError::InvalidDimension { name: "epochs", .. })
        ));
    }

    #[test]
    fn load_json_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        std::fs::write(&path, r#"{ "learning_rate": 0.5, "epochs": 7 }"#).unwrap();
        let cfg = RunConfig::load_json(&path).unwrap();
        assert_eq!(cfg.learning_rate, 0.5);
        assert_eq!(cfg.train_config().epochs, 7);
    }
}
