use std::ops::Range;

use log::trace;

use crate::error::{NetError, Result};
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::train::dataset::{validate_samples, Sample};
use crate::train::train_config::check_hyperparameter;

/// Stacks a batch into `(inputs, labels)` matrices, one sample per column.
pub fn stack_batch(batch: &[Sample], input_size: usize, output_size: usize) -> (Matrix, Matrix) {
    let inputs: Vec<&[f64]> = batch.iter().map(|s| s.input.as_slice()).collect();
    let labels: Vec<&[f64]> = batch.iter().map(|s| s.label.as_slice()).collect();
    (
        Matrix::from_columns(&inputs, input_size),
        Matrix::from_columns(&labels, output_size),
    )
}

/// Consecutive index ranges of at most `batch_size` covering `0..len`; the
/// last range is shorter when `len` is not a multiple of `batch_size`.
pub fn batch_ranges(len: usize, batch_size: usize) -> impl Iterator<Item = Range<usize>> {
    (0..len)
        .step_by(batch_size.max(1))
        .map(move |start| start..(start + batch_size).min(len))
}

impl Network {
    /// Runs backprop on `batch` and applies one momentum step.
    ///
    /// Gradients are averaged over the batch, while the L2 decay factor
    /// `1 - eta * lambda / total_size` uses the full dataset size:
    ///
    ///   b ← b - (η/m)·∇b
    ///   v ← μ·v - (η/m)·∇w
    ///   w ← (1 - ηλ/n)·w + v
    pub fn update_mini_batch(
        &mut self,
        batch: &[Sample],
        total_size: usize,
        eta: f64,
        lambda: f64,
        mu: f64,
    ) -> Result<()> {
        validate_samples(self, batch)?;
        if total_size == 0 {
            return Err(NetError::InvalidHyperparameter {
                name: "total_size",
                value: 0.0,
            });
        }
        check_hyperparameter("eta", eta)?;
        check_hyperparameter("lambda", lambda)?;
        check_hyperparameter("mu", mu)?;

        let (activation, label) = stack_batch(batch, self.input_size(), self.output_size());
        let nabla = self.backprop(&activation, &label)?;

        let step = eta / batch.len() as f64;
        let decay = 1.0 - eta * lambda / total_size as f64;

        for (b, nb) in self.biases.iter_mut().zip(&nabla.biases) {
            b.scaled_add(-step, nb);
        }
        let layers = self.weights.iter_mut().zip(self.velocities.iter_mut());
        for ((w, v), nw) in layers.zip(&nabla.weights) {
            v.scale(mu);
            v.scaled_add(-step, nw);
            w.scale(decay);
            w.scaled_add(1.0, v);
        }

        trace!("applied mini-batch of {} samples", batch.len());
        Ok(())
    }
}
