//! Helpers for building evaluator callbacks passed to `train_with_evaluator`.

use crate::error::Result;
use crate::loss::cross_entropy::CrossEntropyCost;
use crate::network::network::Network;
use crate::train::dataset::{validate_samples, Sample};

/// Fraction of samples classified correctly (argmax match), in [0, 1].
///
/// Single-output networks are thresholded at 0.5 instead.
pub fn accuracy(network: &Network, samples: &[Sample]) -> Result<f64> {
    if samples.is_empty() {
        return Ok(0.0);
    }
    validate_samples(network, samples)?;
    let mut correct = 0;
    for sample in samples {
        let output = network.feedforward(&sample.input)?;
        let hit = if output.len() == 1 {
            (output[0] >= 0.5) == (sample.label[0] >= 0.5)
        } else {
            argmax(&output) == argmax(&sample.label)
        };
        if hit {
            correct += 1;
        }
    }
    Ok(correct as f64 / samples.len() as f64)
}

/// Mean cross-entropy over `samples` plus the L2 penalty
/// `0.5 * lambda / n * sum(‖w‖²)` that the weight decay step minimizes.
pub fn total_cost(network: &Network, samples: &[Sample], lambda: f64) -> Result<f64> {
    if samples.is_empty() {
        return Ok(0.0);
    }
    validate_samples(network, samples)?;
    let n = samples.len() as f64;
    let mut cost = 0.0;
    for sample in samples {
        let output = network.feedforward(&sample.input)?;
        cost += CrossEntropyCost::cost(&output, &sample.label) / n;
    }
    let norm: f64 = network.weights().iter().map(|w| w.norm_sq()).sum();
    Ok(cost + 0.5 * lambda / n * norm)
}

/// Index of the maximum element in a slice.
fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
