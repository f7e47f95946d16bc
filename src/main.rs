//! Trains the classifier on one numeric table pair and reports accuracy on
//! another.
//!
//! Data files live in the data directory as `x<suffix>` (features) and
//! `y<suffix>` (labels), e.g.:
//!   DATADIR=./data cargo run --release -- train.csv test.csv

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shallow_nn::{evaluate, train_loop, Dataset, Network, RunConfig};

#[derive(Parser)]
#[command(name = "shallow-nn")]
#[command(about = "Single-hidden-layer softmax classifier trained with per-sample SGD", long_about = None)]
struct Cli {
    /// Suffix of the training files (reads x<TRAIN> and y<TRAIN>)
    train: String,

    /// Suffix of the test files (reads x<TEST> and y<TEST>)
    test: String,

    /// Directory holding the data files
    #[arg(long, env = "DATADIR")]
    data_dir: PathBuf,

    /// JSON file with run hyperparameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hidden-layer width
    #[arg(long)]
    hidden: Option<usize>,

    /// Number of output classes
    #[arg(long)]
    classes: Option<usize>,

    /// Learning rate
    #[arg(long)]
    lr: Option<f64>,

    #[arg(long)]
    epochs: Option<usize>,

    /// Seed for initialization and shuffling
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn run_config(&self) -> Result<RunConfig> {
        let mut cfg = match &self.config {
            Some(path) => RunConfig::load_json(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => RunConfig::default(),
        };
        if let Some(v) = self.hidden {
            cfg.hidden = v;
        }
        if let Some(v) = self.classes {
            cfg.classes = v;
        }
        if let Some(v) = self.lr {
            cfg.learning_rate = v;
        }
        if let Some(v) = self.epochs {
            cfg.epochs = v;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn load_pair(dir: &Path, suffix: &str) -> Result<Dataset> {
    let x_path = dir.join(format!("x{suffix}"));
    let y_path = dir.join(format!("y{suffix}"));
    Dataset::load(&x_path, &y_path)
        .with_context(|| format!("reading {} / {}", x_path.display(), y_path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let cfg = cli.run_config()?;

    let train_set = load_pair(&cli.data_dir, &cli.train)?;
    let test_set = load_pair(&cli.data_dir, &cli.test)?;
    info!(train_rows = train_set.len(), test_rows = test_set.len(), dim = train_set.dim(), "datasets read");

    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut network = Network::new(cfg.learning_rate, cfg.classes, train_set.dim(), cfg.hidden, &mut rng)?;
    train_loop(&mut network, &train_set, &cfg.train_config(), &mut rng)?;

    let result = evaluate(&network, &test_set)?;
    println!("Accuracy: {}", result.accuracy());

    Ok(())
}
