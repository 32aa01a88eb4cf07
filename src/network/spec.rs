use serde::{Serialize, Deserialize};
use crate::activation::activation::ActivationFunction;
use crate::network::error::ConfigError;

/// Architecture of a fully connected network.
///
/// - `layers`      — neuron count per layer, input first and output last
/// - `activations` — one activation per layer transition, so
///                   `activations.len() == layers.len() - 1`
///
/// A `NetworkSpec` carries no parameters; it can be stored in configuration
/// files and validated before any weights are allocated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub layers: Vec<usize>,
    pub activations: Vec<ActivationFunction>,
}

impl NetworkSpec {
    pub fn new(layers: Vec<usize>, activations: Vec<ActivationFunction>) -> NetworkSpec {
        NetworkSpec { layers, activations }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layers.len() < 2 {
            return Err(ConfigError::TooFewLayers(self.layers.len()));
        }
        if let Some(index) = self.layers.iter().position(|&size| size == 0) {
            return Err(ConfigError::EmptyLayer { index });
        }
        let expected = self.layers.len() - 1;
        if self.activations.len() != expected {
            return Err(ConfigError::ActivationCountMismatch {
                expected,
                got: self.activations.len(),
            });
        }
        Ok(())
    }

    pub fn input_size(&self) -> usize {
        self.layers.first().copied().unwrap_or(0)
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().copied().unwrap_or(0)
    }

    /// Number of weight matrices (and bias vectors).
    pub fn transitions(&self) -> usize {
        self.layers.len().saturating_sub(1)
    }
}
