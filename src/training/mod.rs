//! Training utilities for network models.
//!
//! This module provides training functionality including:
//! - Sparse softmax cross-entropy loss
//! - Training configuration
//! - Batched gradient-descent training loop

mod config;
mod loss;
mod sgd;

pub use config::TrainingConfig;
pub use loss::sparse_cross_entropy_with_logits;
pub use sgd::train;
