use serde::{Deserialize, Serialize};

use crate::error::{NetError, Result};
use crate::network::network::Network;

/// One training example: an input vector and its target vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub input: Vec<f64>,
    pub label: Vec<f64>,
}

impl Sample {
    pub fn new(input: Vec<f64>, label: Vec<f64>) -> Sample {
        Sample { input, label }
    }
}

/// Checks that `samples` is non-empty and every sample fits `network`.
pub fn validate_samples(network: &Network, samples: &[Sample]) -> Result<()> {
    if samples.is_empty() {
        return Err(NetError::EmptyDataset);
    }
    for sample in samples {
        if sample.input.len() != network.input_size() {
            return Err(NetError::ShapeMismatch {
                what: "sample input",
                got: sample.input.len(),
                expected: network.input_size(),
            });
        }
        if sample.label.len() != network.output_size() {
            return Err(NetError::ShapeMismatch {
                what: "sample label",
                got: sample.label.len(),
                expected: network.output_size(),
            });
        }
    }
    Ok(())
}
