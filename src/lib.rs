pub mod math;
pub mod activation;
pub mod error;
pub mod network;
pub mod loss;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::{dsigmoid, sigmoid};
pub use error::{NetError, Result};
pub use network::backprop::Gradients;
pub use network::network::Network;
pub use loss::cross_entropy::CrossEntropyCost;
pub use train::dataset::Sample;
pub use train::train_config::TrainConfig;
