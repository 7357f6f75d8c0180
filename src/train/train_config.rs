use serde::{Deserialize, Serialize};

use crate::error::{NetError, Result};

/// Hyperparameters for a `Network::train` run.
///
/// # Fields
/// - `epochs`          — number of full passes over the shuffled dataset
/// - `mini_batch_size` — samples per gradient step; the last batch of an
///                       epoch may be shorter
/// - `eta`             — learning rate
/// - `lambda`          — L2 weight decay strength, scaled by the dataset size
/// - `mu`              — momentum coefficient; `0.0` gives plain SGD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    pub mini_batch_size: usize,
    pub eta: f64,
    #[serde(default)]
    pub lambda: f64,
    #[serde(default)]
    pub mu: f64,
}

impl TrainConfig {
    /// Creates a config with no weight decay and no momentum.
    pub fn new(epochs: usize, mini_batch_size: usize, eta: f64) -> Self {
        TrainConfig {
            epochs,
            mini_batch_size,
            eta,
            lambda: 0.0,
            mu: 0.0,
        }
    }

    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    pub fn with_mu(mut self, mu: f64) -> Self {
        self.mu = mu;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.mini_batch_size == 0 {
            return Err(NetError::ZeroBatchSize);
        }
        check_hyperparameter("eta", self.eta)?;
        check_hyperparameter("lambda", self.lambda)?;
        check_hyperparameter("mu", self.mu)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a config from a JSON file.
    pub fn load_json(path: &str) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: TrainConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

pub(crate) fn check_hyperparameter(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(NetError::InvalidHyperparameter { name, value })
    }
}
