//! MultiNN - the main container for building and training networks.
//!
//! This module provides the `MultiNN` struct, a sequential stack of dense
//! layers with direct accessors for every layer's weights and biases, a
//! forward pass producing raw logits, and classification metrics over a
//! labelled dataset.

use crate::errors::ModelError;
use crate::layers::{Activation, Dense, DenseConfig};
use crate::metrics;
use crate::training::{self, TrainingConfig};
use burn::{
    module::Module,
    tensor::{Int, Tensor, backend::AutodiffBackend, backend::Backend},
};

/// A multi-layer feed-forward neural network.
///
/// Layers are appended with [`MultiNN::add_layer`] and never removed or
/// reordered; each layer's input width is the previous layer's node count
/// (the network's input dimension for the first layer), so adjacent weight
/// shapes are always compatible by construction.
#[derive(Module, Debug)]
pub struct MultiNN<B: Backend> {
    /// Number of features per input sample (stored as constant).
    input_dimension: usize,
    /// The dense layers in sequence.
    layers: Vec<Dense<B>>,
}

impl<B: Backend> MultiNN<B> {
    /// Creates an empty network for inputs with `input_dimension` features.
    pub fn new(input_dimension: usize) -> Result<Self, ModelError> {
        if input_dimension == 0 {
            return Err(ModelError::InvalidArgument {
                message: "input_dimension must be positive".to_string(),
            });
        }
        Ok(Self {
            input_dimension,
            layers: Vec::new(),
        })
    }

    /// Appends a dense layer with `num_nodes` nodes and the given activation.
    ///
    /// Weights and biases are initialized from a standard-normal distribution.
    /// The layer's input width is the previous layer's node count, or the
    /// network's input dimension if this is the first layer.
    pub fn add_layer(
        &mut self,
        num_nodes: usize,
        activation: Activation,
        device: &B::Device,
    ) -> Result<(), ModelError> {
        if num_nodes == 0 {
            return Err(ModelError::InvalidArgument {
                message: "num_nodes must be positive".to_string(),
            });
        }

        let input_size = match self.layers.last() {
            Some(layer) => layer.output_size(),
            None => self.input_dimension,
        };

        let layer = DenseConfig::new(input_size, num_nodes)
            .with_activation(activation)
            .init(device);
        self.layers.push(layer);
        Ok(())
    }

    /// Returns the number of input features.
    pub fn input_dimension(&self) -> usize {
        self.input_dimension
    }

    /// Returns the number of layers.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Returns the output width of the network (last layer's node count).
    pub fn output_size(&self) -> usize {
        self.layers.last().map(|l| l.output_size()).unwrap_or(0)
    }

    fn layer(&self, index: usize) -> Result<&Dense<B>, ModelError> {
        self.layers.get(index).ok_or(ModelError::IndexOutOfRange {
            index,
            num_layers: self.layers.len(),
        })
    }

    fn layer_mut(&mut self, index: usize) -> Result<&mut Dense<B>, ModelError> {
        let num_layers = self.layers.len();
        self.layers
            .get_mut(index)
            .ok_or(ModelError::IndexOutOfRange { index, num_layers })
    }

    /// Returns a copy of the weight matrix of the given layer,
    /// shape [inputs_to_layer, nodes_in_layer].
    pub fn get_weights(&self, layer: usize) -> Result<Tensor<B, 2>, ModelError> {
        Ok(self.layer(layer)?.weight())
    }

    /// Returns a copy of the bias vector of the given layer,
    /// shape [nodes_in_layer].
    pub fn get_biases(&self, layer: usize) -> Result<Tensor<B, 1>, ModelError> {
        Ok(self.layer(layer)?.bias())
    }

    /// Replaces the weight matrix of the given layer wholesale.
    ///
    /// Shapes are validated eagerly: the replacement must match the stored
    /// weight shape exactly.
    pub fn set_weights(&mut self, weights: Tensor<B, 2>, layer: usize) -> Result<(), ModelError> {
        self.layer_mut(layer)?.set_weight(weights)
    }

    /// Replaces the bias vector of the given layer wholesale, with the same
    /// eager shape validation as [`MultiNN::set_weights`].
    pub fn set_biases(&mut self, biases: Tensor<B, 1>, layer: usize) -> Result<(), ModelError> {
        self.layer_mut(layer)?.set_bias(biases)
    }

    /// Performs a forward pass through all layers.
    ///
    /// `x` has shape [n_samples, input_dimension]. The returned tensor holds
    /// the last layer's outputs: raw logits unless the caller configured a
    /// final nonlinearity, shape [n_samples, output_size].
    pub fn predict(&self, x: Tensor<B, 2>) -> Result<Tensor<B, 2>, ModelError> {
        let [_, num_features] = x.dims();
        if num_features != self.input_dimension {
            return Err(ModelError::ShapeMismatch {
                expected: vec![self.input_dimension],
                actual: vec![num_features],
            });
        }

        let mut output = x;
        for layer in &self.layers {
            output = layer.forward(output);
        }
        Ok(output)
    }

    /// Computes the mean sparse softmax cross-entropy loss.
    ///
    /// `y` holds the true class index per sample; `y_hat` holds raw
    /// (pre-softmax) logits as returned by [`MultiNN::predict`]. Returns a
    /// scalar tensor so gradients can flow back through the forward pass.
    pub fn calculate_loss(&self, y: Tensor<B, 1, Int>, y_hat: Tensor<B, 2>) -> Tensor<B, 1> {
        training::sparse_cross_entropy_with_logits(y, y_hat)
    }

    /// Returns the fraction of samples in [0, 1] whose predicted class
    /// (argmax of the network output) differs from the true class.
    pub fn calculate_percent_error(
        &self,
        x: Tensor<B, 2>,
        y: Tensor<B, 1, Int>,
    ) -> Result<f64, ModelError> {
        let predicted = self.predicted_classes(x)?;
        let targets = y.to_data().to_vec::<i64>().unwrap();
        Ok(metrics::percent_error(&predicted, &targets))
    }

    /// Builds a confusion matrix over the distinct values of `y`.
    ///
    /// Rows and columns are indexed by the rank of the label within the
    /// sorted distinct values of `y`; entry [true][predicted] counts samples.
    pub fn calculate_confusion_matrix(
        &self,
        x: Tensor<B, 2>,
        y: Tensor<B, 1, Int>,
    ) -> Result<Vec<Vec<usize>>, ModelError> {
        let predicted = self.predicted_classes(x)?;
        let targets = y.to_data().to_vec::<i64>().unwrap();
        Ok(metrics::confusion_matrix(&predicted, &targets))
    }

    fn predicted_classes(&self, x: Tensor<B, 2>) -> Result<Vec<i64>, ModelError> {
        let output = self.predict(x)?;
        let predicted = output.argmax(1).squeeze::<1>(1);
        Ok(predicted.to_data().to_vec::<i64>().unwrap())
    }
}

impl<B: AutodiffBackend> MultiNN<B> {
    /// Trains the network in place with batched gradient descent.
    ///
    /// See [`training::train`] for the loop semantics.
    pub fn train(
        &mut self,
        x_train: Tensor<B, 2>,
        y_train: Tensor<B, 1, Int>,
        config: &TrainingConfig,
    ) -> Result<(), ModelError> {
        training::train(self, x_train, y_train, config)
    }
}
