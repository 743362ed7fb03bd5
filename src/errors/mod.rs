//! Error types for model construction, access, and training.

pub mod model_error;

pub use model_error::ModelError;
