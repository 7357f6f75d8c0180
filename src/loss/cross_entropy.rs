use crate::math::matrix::Matrix;

/// Cross-entropy cost for a sigmoid output layer.
pub struct CrossEntropyCost;

/// Small epsilon added inside log() to prevent log(0) = -inf.
const EPS: f64 = 1e-12;

impl CrossEntropyCost {
    /// Computes the scalar cost of one sample:
    ///   C = -sum(y[i] * log(a[i]) + (1 - y[i]) * log(1 - a[i]))
    ///
    /// `output` — sigmoid activations of the last layer
    /// `label`  — target vector, same length
    pub fn cost(output: &[f64], label: &[f64]) -> f64 {
        output.iter().zip(label.iter())
            .map(|(a, y)| -(y * (a + EPS).ln() + (1.0 - y) * (1.0 - a + EPS).ln()))
            .sum()
    }

    /// Gradient of the cost w.r.t. the output layer's pre-activations, one
    /// sample per column.
    ///
    /// The sigmoid's derivative cancels against the cost's, leaving
    ///   ∂C/∂z = a - y
    /// which is the error `Network::backprop` starts from.
    pub fn delta(output: &Matrix, label: &Matrix) -> Matrix {
        output - label
    }
}
