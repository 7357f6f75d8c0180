use log::{debug, info};
use rand::seq::SliceRandom;

use crate::error::Result;
use crate::network::network::Network;
use crate::train::dataset::{validate_samples, Sample};
use crate::train::mini_batch::batch_ranges;
use crate::train::train_config::TrainConfig;

impl Network {
    /// Trains for `config.epochs` epochs of mini-batch SGD with momentum.
    ///
    /// `dataset` is shuffled in place at the start of every epoch.
    pub fn train(&mut self, dataset: &mut [Sample], config: &TrainConfig) -> Result<()> {
        self.train_with_evaluator(dataset, config, |_: &Network, _: usize| false)
    }

    /// Like `train`, but calls `evaluator(network, epoch)` after every epoch
    /// (0-based). Training stops early once it returns `true`.
    ///
    /// Velocities are reset to zero before the first epoch. The dataset,
    /// batch size and hyperparameters are all validated before any update.
    pub fn train_with_evaluator<F>(
        &mut self,
        dataset: &mut [Sample],
        config: &TrainConfig,
        mut evaluator: F,
    ) -> Result<()>
    where
        F: FnMut(&Network, usize) -> bool,
    {
        config.validate()?;
        validate_samples(self, dataset)?;

        info!(
            "training {:?} on {} samples: epochs={} batch={} eta={} lambda={} mu={}",
            self.sizes,
            dataset.len(),
            config.epochs,
            config.mini_batch_size,
            config.eta,
            config.lambda,
            config.mu
        );

        self.reset_velocities();
        let total = dataset.len();

        for epoch in 0..config.epochs {
            dataset.shuffle(&mut self.rng);

            let mut batches = 0;
            for range in batch_ranges(total, config.mini_batch_size) {
                let batch = &dataset[range];
                self.update_mini_batch(batch, total, config.eta, config.lambda, config.mu)?;
                batches += 1;
            }
            debug!("epoch {epoch} complete ({batches} mini-batches)");

            if evaluator(&*self, epoch) {
                info!("evaluator stopped training after epoch {epoch}");
                break;
            }
        }

        Ok(())
    }
}
