//! Activation functions for neural network layers.

use crate::errors::ModelError;
use burn::tensor::{Tensor, backend::Backend};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported activation functions.
///
/// Names are matched case-insensitively when parsed from a string and stored
/// in their lowercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// Identity function (no nonlinearity).
    #[default]
    Linear,
    /// Rectified Linear Unit: f(x) = max(0, x)
    Relu,
    /// Sigmoid: f(x) = 1 / (1 + exp(-x))
    Sigmoid,
}

impl Activation {
    /// Applies the activation function to a tensor.
    pub fn apply<B: Backend, const D: usize>(&self, tensor: Tensor<B, D>) -> Tensor<B, D> {
        match self {
            Activation::Linear => tensor,
            Activation::Relu => burn::tensor::activation::relu(tensor),
            Activation::Sigmoid => burn::tensor::activation::sigmoid(tensor),
        }
    }

    /// Returns the normalized (lowercase) name of the activation.
    pub fn to_name(&self) -> &'static str {
        match self {
            Activation::Linear => "linear",
            Activation::Relu => "relu",
            Activation::Sigmoid => "sigmoid",
        }
    }

    /// Creates an Activation from a string name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "linear" => Some(Activation::Linear),
            "relu" => Some(Activation::Relu),
            "sigmoid" => Some(Activation::Sigmoid),
            _ => None,
        }
    }

    /// Converts activation to a numeric ID for storage in Module.
    pub fn to_id(&self) -> u8 {
        match self {
            Activation::Linear => 0,
            Activation::Relu => 1,
            Activation::Sigmoid => 2,
        }
    }

    /// Creates an Activation from a numeric ID.
    pub fn from_id(id: u8) -> Self {
        match id {
            0 => Activation::Linear,
            1 => Activation::Relu,
            2 => Activation::Sigmoid,
            _ => Activation::Linear,
        }
    }
}

impl FromStr for Activation {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Activation::from_name(s).ok_or_else(|| ModelError::InvalidActivation {
            name: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_activation_from_name() {
        assert_eq!(Activation::from_name("linear"), Some(Activation::Linear));
        assert_eq!(Activation::from_name("Linear"), Some(Activation::Linear));
        assert_eq!(Activation::from_name("RELU"), Some(Activation::Relu));
        assert_eq!(Activation::from_name("Sigmoid"), Some(Activation::Sigmoid));
        assert_eq!(Activation::from_name("tanh"), None);
        assert_eq!(Activation::from_name(""), None);
    }

    #[test]
    fn test_activation_from_str_error() {
        let result = "softmax".parse::<Activation>();
        assert!(matches!(
            result,
            Err(ModelError::InvalidActivation { name }) if name == "softmax"
        ));
    }

    #[test]
    fn test_activation_name_normalized() {
        assert_eq!(Activation::Linear.to_name(), "linear");
        assert_eq!(Activation::Relu.to_name(), "relu");
        assert_eq!(Activation::Sigmoid.to_name(), "sigmoid");
    }

    #[test]
    fn test_activation_id_roundtrip() {
        let activations = [Activation::Linear, Activation::Relu, Activation::Sigmoid];
        for act in activations {
            assert_eq!(Activation::from_id(act.to_id()), act);
        }
    }

    #[test]
    fn test_linear_is_identity() {
        use burn::tensor::backend::Backend;
        let device = <TestBackend as Backend>::Device::default();
        let input = Tensor::<TestBackend, 1>::from_floats([-2.0, 0.0, 3.5], &device);
        let output = Activation::Linear.apply(input.clone());
        let expected: Vec<f32> = input.to_data().to_vec().unwrap();
        let result: Vec<f32> = output.to_data().to_vec().unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_relu_activation() {
        use burn::tensor::backend::Backend;
        let device = <TestBackend as Backend>::Device::default();
        let input = Tensor::<TestBackend, 1>::from_floats([-1.0, 0.0, 2.0, -0.5], &device);
        let output = Activation::Relu.apply(input);
        let result: Vec<f32> = output.to_data().to_vec().unwrap();
        assert_eq!(result, vec![0.0, 0.0, 2.0, 0.0]);
    }

    #[test]
    fn test_sigmoid_activation() {
        use burn::tensor::backend::Backend;
        let device = <TestBackend as Backend>::Device::default();
        let input = Tensor::<TestBackend, 1>::from_floats([0.0, 2.0, -2.0], &device);
        let output = Activation::Sigmoid.apply(input);
        let result: Vec<f32> = output.to_data().to_vec().unwrap();
        // sigmoid(0) = 0.5, sigmoid(2) ≈ 0.8808, sigmoid(-2) ≈ 0.1192
        assert!((result[0] - 0.5).abs() < 1e-6);
        assert!((result[1] - 0.8808).abs() < 1e-4);
        assert!((result[2] - 0.1192).abs() < 1e-4);
        for value in result {
            assert!(value > 0.0 && value < 1.0);
        }
    }
}
