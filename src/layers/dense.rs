//! Dense (fully connected) layer implementation.

use crate::errors::ModelError;
use crate::layers::Activation;
use burn::{
    module::{Module, Param},
    tensor::{Distribution, Tensor, backend::Backend},
};

/// Configuration for a Dense layer.
#[derive(Debug, Clone)]
pub struct DenseConfig {
    /// Number of input features.
    pub input_size: usize,
    /// Number of nodes (output features).
    pub output_size: usize,
    /// Activation function to apply after the affine transformation.
    pub activation: Activation,
}

impl DenseConfig {
    /// Creates a new DenseConfig.
    pub fn new(input_size: usize, output_size: usize) -> Self {
        Self {
            input_size,
            output_size,
            activation: Activation::Linear,
        }
    }

    /// Sets the activation function.
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    /// Initializes the Dense layer with the given device.
    ///
    /// Weights and biases are drawn from a standard-normal distribution.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Dense<B> {
        let weight = Tensor::random(
            [self.input_size, self.output_size],
            Distribution::Normal(0.0, 1.0),
            device,
        );
        let bias = Tensor::random([self.output_size], Distribution::Normal(0.0, 1.0), device);

        Dense {
            weight: Param::from_tensor(weight),
            bias: Param::from_tensor(bias),
            input_size: self.input_size,
            output_size: self.output_size,
            activation_id: self.activation.to_id(),
        }
    }
}

/// A dense (fully connected) layer with an activation.
///
/// It performs: output = activation(input @ weight + bias), where the weight
/// matrix has shape [input_size, output_size] and the bias has shape
/// [output_size], broadcast over samples.
#[derive(Module, Debug)]
pub struct Dense<B: Backend> {
    /// Weight matrix, shape [input_size, output_size].
    weight: Param<Tensor<B, 2>>,
    /// Bias vector, shape [output_size].
    bias: Param<Tensor<B, 1>>,
    /// Input size (constant metadata).
    input_size: usize,
    /// Output size (constant metadata).
    output_size: usize,
    /// Activation function ID (0=Linear, 1=Relu, 2=Sigmoid).
    activation_id: u8,
}

impl<B: Backend> Dense<B> {
    /// Performs the forward pass.
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let output = input.matmul(self.weight.val()) + self.bias.val().unsqueeze();
        Activation::from_id(self.activation_id).apply(output)
    }

    /// Returns the input size of this layer.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Returns the output size (node count) of this layer.
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// Returns the activation function.
    pub fn activation(&self) -> Activation {
        Activation::from_id(self.activation_id)
    }

    /// Returns a copy of the weight matrix, shape [input_size, output_size].
    pub fn weight(&self) -> Tensor<B, 2> {
        self.weight.val()
    }

    /// Returns a copy of the bias vector, shape [output_size].
    pub fn bias(&self) -> Tensor<B, 1> {
        self.bias.val()
    }

    /// Replaces the weight matrix wholesale.
    ///
    /// The new tensor must match the stored [input_size, output_size] shape;
    /// mismatches are rejected eagerly rather than surfacing on the next
    /// forward pass.
    pub fn set_weight(&mut self, weight: Tensor<B, 2>) -> Result<(), ModelError> {
        let expected = [self.input_size, self.output_size];
        let actual = weight.dims();
        if actual != expected {
            return Err(ModelError::ShapeMismatch {
                expected: expected.to_vec(),
                actual: actual.to_vec(),
            });
        }
        self.weight = Param::from_tensor(weight);
        Ok(())
    }

    /// Replaces the bias vector wholesale, with the same eager shape check
    /// as [`Dense::set_weight`].
    pub fn set_bias(&mut self, bias: Tensor<B, 1>) -> Result<(), ModelError> {
        let expected = [self.output_size];
        let actual = bias.dims();
        if actual != expected {
            return Err(ModelError::ShapeMismatch {
                expected: expected.to_vec(),
                actual: actual.to_vec(),
            });
        }
        self.bias = Param::from_tensor(bias);
        Ok(())
    }
}
