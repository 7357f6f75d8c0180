use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, NetError>;

/// Errors raised when a network, dataset or configuration is unusable.
///
/// Every check runs before any parameter is touched, so an `Err` leaves the
/// network exactly as it was.
#[derive(Debug)]
pub enum NetError {
    /// Fewer than two layer sizes were given.
    TooFewLayers { got: usize },
    /// The layer at `index` has zero neurons.
    EmptyLayer { index: usize },
    /// No samples to train on.
    EmptyDataset,
    /// `mini_batch_size` was zero.
    ZeroBatchSize,
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    InvalidHyperparameter { name: &'static str, value: f64 },
    Io(io::Error),
    Json(serde_json::Error),
}

impl Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetError::TooFewLayers { got } => {
                write!(f, "a network needs at least 2 layer sizes, got {got}")
            }
            NetError::EmptyLayer { index } => write!(f, "layer {index} has size 0"),
            NetError::EmptyDataset => write!(f, "dataset is empty"),
            NetError::ZeroBatchSize => write!(f, "mini-batch size must be at least 1"),
            NetError::ShapeMismatch { what, got, expected } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
            NetError::InvalidHyperparameter { name, value } => {
                write!(f, "invalid value for {name}: {value}")
            }
            NetError::Io(e) => write!(f, "i/o error: {e}"),
            NetError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl Error for NetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NetError::Io(e) => Some(e),
            NetError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for NetError {
    fn from(e: io::Error) -> Self {
        NetError::Io(e)
    }
}

impl From<serde_json::Error> for NetError {
    fn from(e: serde_json::Error) -> Self {
        NetError::Json(e)
    }
}
