//! Neural network layer implementations.
//!
//! This module contains the building blocks for constructing networks:
//! dense (fully connected) layers and their activation functions.

pub mod activation;
pub mod dense;

pub use activation::Activation;
pub use dense::{Dense, DenseConfig};
