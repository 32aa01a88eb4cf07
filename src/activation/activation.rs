use serde::{Serialize, Deserialize};

/// Scalar nonlinearity applied to a neuron's weighted input sum.
///
/// `derivative(x)` is the slope of `activate` at `x`; `Sigmoid` and `Tanh`
/// re-apply the function internally to build it. Backpropagation feeds it
/// a neuron's activation, not its weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Relu,
    Sigmoid,
    Linear,
    Tanh,
    LeakyRelu { alpha: f64 },
}

impl ActivationFunction {
    pub fn activate(&self, x: f64) -> f64 {
        match self {
            // NaN falls through unchanged instead of being clamped to 0.
            ActivationFunction::Relu => if x < 0.0 { 0.0 } else { x },
            ActivationFunction::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            ActivationFunction::Linear => x,
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::LeakyRelu { alpha } => if x > 0.0 { x } else { alpha * x },
        }
    }

    /// `Relu` is not differentiable at 0; the convention here is 0.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Relu => if x > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Sigmoid => {
                let s = self.activate(x);
                s * (1.0 - s)
            }
            ActivationFunction::Linear => 1.0,
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
            ActivationFunction::LeakyRelu { alpha } => if x > 0.0 { 1.0 } else { *alpha },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Relu => "relu",
            ActivationFunction::Sigmoid => "sigmoid",
            ActivationFunction::Linear => "linear",
            ActivationFunction::Tanh => "tanh",
            ActivationFunction::LeakyRelu { .. } => "leaky_relu",
        }
    }
}
