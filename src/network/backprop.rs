use crate::activation::activation::{dsigmoid, sigmoid};
use crate::error::{NetError, Result};
use crate::loss::cross_entropy::CrossEntropyCost;
use crate::math::matrix::Matrix;
use crate::network::network::Network;

/// Per-layer gradients for one mini-batch, summed over its samples and laid
/// out in forward layer order like the network's biases and weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub biases: Vec<Matrix>,
    pub weights: Vec<Matrix>,
}

impl Network {
    /// Computes bias and weight gradients for a batch.
    ///
    /// `activation` holds one input per column (`sizes[0]` rows) and `label`
    /// the matching targets (`sizes[L-1]` rows). The output error is
    /// `a_L - label`, the cross-entropy gradient for a sigmoid output layer.
    pub fn backprop(&self, activation: &Matrix, label: &Matrix) -> Result<Gradients> {
        self.check_batch_shapes(activation, label)?;

        let n = self.num_layers();

        // Forward sweep, keeping every activation and σ' of every layer output.
        let mut activations = Vec::with_capacity(n + 1);
        let mut dzs = Vec::with_capacity(n);
        activations.push(activation.clone());
        for (w, b) in self.weights.iter().zip(&self.biases) {
            let a = (w * &activations[activations.len() - 1]).add_column(b).map(sigmoid);
            dzs.push(a.map(dsigmoid));
            activations.push(a);
        }

        let mut nabla_b: Vec<Matrix> = Vec::with_capacity(n);
        let mut nabla_w: Vec<Matrix> = Vec::with_capacity(n);

        let mut delta = CrossEntropyCost::delta(&activations[n], label);
        nabla_b.push(delta.row_sums());
        nabla_w.push(&delta * &activations[n - 1].transpose());

        for layer in (0..n - 1).rev() {
            delta = (&self.weights[layer + 1].transpose() * &delta).hadamard(&dzs[layer]);
            nabla_b.push(delta.row_sums());
            nabla_w.push(&delta * &activations[layer].transpose());
        }

        // Collected output layer first.
        nabla_b.reverse();
        nabla_w.reverse();

        Ok(Gradients {
            biases: nabla_b,
            weights: nabla_w,
        })
    }

    fn check_batch_shapes(&self, activation: &Matrix, label: &Matrix) -> Result<()> {
        if activation.rows != self.input_size() {
            return Err(NetError::ShapeMismatch {
                what: "batch input rows",
                got: activation.rows,
                expected: self.input_size(),
            });
        }
        if label.rows != self.output_size() {
            return Err(NetError::ShapeMismatch {
                what: "batch label rows",
                got: label.rows,
                expected: self.output_size(),
            });
        }
        if label.cols != activation.cols {
            return Err(NetError::ShapeMismatch {
                what: "batch label columns",
                got: label.cols,
                expected: activation.cols,
            });
        }
        if activation.cols == 0 {
            return Err(NetError::EmptyDataset);
        }
        Ok(())
    }
}
