use std::f64::consts::E;

/// Logistic sigmoid: 1 / (1 + e^(-x)).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid expressed through its own output.
///
/// `y` must already be `sigmoid(x)`; the result is `y * (1 - y)`. Backprop
/// reuses the activations from its forward sweep this way instead of keeping
/// the pre-activations around.
pub fn dsigmoid(y: f64) -> f64 {
    y * (1.0 - y)
}
