pub mod dataset;
pub mod evaluate;
pub mod loop_fn;
pub mod mini_batch;
pub mod train_config;

pub use dataset::Sample;
pub use train_config::TrainConfig;
