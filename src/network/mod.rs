pub mod backprop;
pub mod network;

pub use backprop::Gradients;
pub use network::Network;
