use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::activation::activation::sigmoid;
use crate::error::{NetError, Result};
use crate::math::matrix::Matrix;

/// Fully-connected sigmoid network.
///
/// For `L` layer sizes the network owns `L - 1` weight matrices
/// (`sizes[i + 1] × sizes[i]`), bias columns (`sizes[i + 1] × 1`) and momentum
/// velocities shaped like the weights, all indexed by layer. The random
/// generator seeded at construction is reused for every per-epoch shuffle.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) sizes: Vec<usize>,
    pub(crate) weights: Vec<Matrix>,
    pub(crate) biases: Vec<Matrix>,
    pub(crate) velocities: Vec<Matrix>,
    pub(crate) rng: StdRng,
}

impl Network {
    /// Builds a network whose generator is seeded from OS entropy.
    pub fn new(sizes: &[usize]) -> Result<Network> {
        Network::with_rng(sizes, StdRng::from_entropy())
    }

    /// Builds a network with a deterministic generator; two networks built from
    /// the same sizes and seed are identical and train identically.
    pub fn with_seed(sizes: &[usize], seed: u64) -> Result<Network> {
        Network::with_rng(sizes, StdRng::seed_from_u64(seed))
    }

    fn with_rng(sizes: &[usize], mut rng: StdRng) -> Result<Network> {
        validate_sizes(sizes)?;

        // Biases ~ N(0, 1); weights ~ N(0, 1/fan_in) to keep sigmoids out of saturation.
        let biases: Vec<Matrix> = sizes[1..]
            .iter()
            .map(|&rows| Matrix::random_normal(rows, 1, 1.0, &mut rng))
            .collect();
        let weights: Vec<Matrix> = sizes
            .windows(2)
            .map(|w| Matrix::random_normal(w[1], w[0], 1.0 / (w[0] as f64).sqrt(), &mut rng))
            .collect();
        let velocities = zeros_like(&weights);

        Ok(Network {
            sizes: sizes.to_vec(),
            weights,
            biases,
            velocities,
            rng,
        })
    }

    /// Forward pass for a single input: `a ← σ(W·a + b)` through every layer.
    pub fn feedforward(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.input_size() {
            return Err(NetError::ShapeMismatch {
                what: "feedforward input",
                got: input.len(),
                expected: self.input_size(),
            });
        }

        let mut a = Matrix::column(input);
        for (w, b) in self.weights.iter().zip(&self.biases) {
            a = (&(w * &a) + b).map(sigmoid);
        }
        Ok(a.column_vec(0))
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of weight layers, `sizes.len() - 1`.
    pub fn num_layers(&self) -> usize {
        self.weights.len()
    }

    pub fn input_size(&self) -> usize {
        self.sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub fn biases(&self) -> &[Matrix] {
        &self.biases
    }

    pub fn velocities(&self) -> &[Matrix] {
        &self.velocities
    }

    pub(crate) fn reset_velocities(&mut self) {
        self.velocities = zeros_like(&self.weights);
    }
}

fn validate_sizes(sizes: &[usize]) -> Result<()> {
    if sizes.len() < 2 {
        return Err(NetError::TooFewLayers { got: sizes.len() });
    }
    match sizes.iter().position(|&n| n == 0) {
        Some(index) => Err(NetError::EmptyLayer { index }),
        None => Ok(()),
    }
}

fn zeros_like(matrices: &[Matrix]) -> Vec<Matrix> {
    matrices.iter().map(|m| Matrix::zeros(m.rows, m.cols)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_shapes_follow_sizes() {
        for sizes in [vec![1, 1], vec![2, 3, 1], vec![784, 30, 10], vec![4, 7, 5, 3, 2]] {
            let net = Network::with_seed(&sizes, 1).unwrap();
            assert_eq!(net.weights().len(), sizes.len() - 1);
            assert_eq!(net.biases().len(), sizes.len() - 1);
            assert_eq!(net.velocities().len(), sizes.len() - 1);
            for i in 0..sizes.len() - 1 {
                assert_eq!(net.weights()[i].shape(), (sizes[i + 1], sizes[i]));
                assert_eq!(net.biases()[i].shape(), (sizes[i + 1], 1));
                assert_eq!(net.velocities()[i], Matrix::zeros(sizes[i + 1], sizes[i]));
            }
        }
    }

    #[test]
    fn test_degenerate_sizes_are_rejected() {
        assert!(matches!(Network::new(&[]), Err(NetError::TooFewLayers { got: 0 })));
        assert!(matches!(Network::new(&[3]), Err(NetError::TooFewLayers { got: 1 })));
        assert!(matches!(Network::new(&[3, 0, 2]), Err(NetError::EmptyLayer { index: 1 })));
    }

    #[test]
    fn test_weight_scale_tracks_fan_in() {
        let net = Network::with_seed(&[400, 50], 3).unwrap();
        let w = &net.weights()[0];
        let var = w.norm_sq() / (w.rows * w.cols) as f64;
        // Expected variance 1/400.
        assert!((var * 400.0 - 1.0).abs() < 0.1, "variance {var}");
    }

    #[test]
    fn test_same_seed_same_parameters() {
        let a = Network::with_seed(&[3, 4, 2], 99).unwrap();
        let b = Network::with_seed(&[3, 4, 2], 99).unwrap();
        let c = Network::with_seed(&[3, 4, 2], 100).unwrap();
        assert_eq!(a.weights(), b.weights());
        assert_eq!(a.biases(), b.biases());
        assert_ne!(a.weights(), c.weights());
    }

    #[test]
    fn test_feedforward_output_is_in_open_unit_interval() {
        let net = Network::with_seed(&[3, 5, 4], 5).unwrap();
        let out = net.feedforward(&[0.2, -1.0, 0.7]).unwrap();
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|&y| y > 0.0 && y < 1.0));
    }

    #[test]
    fn test_feedforward_matches_hand_computation() {
        let mut net = Network::with_seed(&[2, 1], 0).unwrap();
        net.weights[0] = Matrix::from_data(vec![vec![0.5, -1.0]]);
        net.biases[0] = Matrix::column(&[0.25]);
        let out = net.feedforward(&[2.0, 0.5]).unwrap();
        assert_eq!(out, vec![sigmoid(0.5 * 2.0 - 1.0 * 0.5 + 0.25)]);
    }

    #[test]
    fn test_feedforward_rejects_wrong_input_length() {
        let net = Network::with_seed(&[3, 2], 0).unwrap();
        assert!(matches!(
            net.feedforward(&[1.0, 2.0]),
            Err(NetError::ShapeMismatch { got: 2, expected: 3, .. })
        ));
    }
}
