//! Model-related error types.

use thiserror::Error;

/// Errors that can occur during model operations.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model has no layers defined")]
    NoLayers,

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Layer index {index} out of range for model with {num_layers} layers")]
    IndexOutOfRange { index: usize, num_layers: usize },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Invalid activation: {name}")]
    InvalidActivation { name: String },

    #[error("Training error: {message}")]
    TrainingError { message: String },
}
