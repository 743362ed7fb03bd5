//! # multinn
//!
//! A Rust library for building and training small multi-layer feed-forward
//! neural networks for classification.
//!
//! Models are sequences of dense layers (matrix multiply + bias + activation).
//! Training uses plain batched gradient descent: the forward pass is recorded
//! by the Burn autodiff backend, gradients of the sparse softmax cross-entropy
//! loss are computed in reverse mode, and every weight matrix and bias vector
//! is updated in place by `param -= alpha * grad`.
//!
//! ## Features
//!
//! - **Burn Backend**: Uses the Burn framework with the NdArray backend, so
//!   training runs anywhere without external dependencies.
//! - **Direct parameter access**: Weights and biases of every layer can be
//!   read and replaced wholesale, which makes the trainer easy to test and
//!   easy to seed with known parameters.
//! - **Evaluation metrics**: Percent error and confusion matrix over a
//!   labelled dataset.
//!
//! ## Example
//!
//! ```
//! use multinn::prelude::*;
//! use burn::tensor::Tensor;
//!
//! let device = <Backend as burn::tensor::backend::Backend>::Device::default();
//!
//! // Two inputs, one hidden ReLU layer, three output classes.
//! let mut model: MultiNN<Backend> = MultiNN::new(2).expect("Failed to create model");
//! model.add_layer(4, Activation::Relu, &device).expect("Failed to add layer");
//! model.add_layer(3, Activation::Linear, &device).expect("Failed to add layer");
//!
//! let x = Tensor::<Backend, 2>::from_floats([[0.5, -1.0]], &device);
//! let logits = model.predict(x).expect("Forward pass should succeed");
//! assert_eq!(logits.dims(), [1, 3]);
//! ```

pub mod errors;
pub mod layers;
pub mod metrics;
pub mod network;
pub mod training;

// Re-exports for convenience
pub use errors::ModelError;
pub use layers::activation::Activation;
pub use network::MultiNN;
pub use training::TrainingConfig;

/// Backend type alias for NdArray with autodiff support.
pub type Backend = burn::backend::Autodiff<burn::backend::NdArray>;

/// Backend type for inference (no autodiff).
pub type InferenceBackend = burn::backend::NdArray;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::errors::ModelError;
    pub use crate::layers::activation::Activation;
    pub use crate::network::MultiNN;
    pub use crate::training::{TrainingConfig, train};
    pub use crate::{Backend, InferenceBackend};
}
