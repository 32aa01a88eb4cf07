use rand::Rng;

use crate::activation::activation::ActivationFunction;
use crate::diagnostics::{DiagnosticSink, LogSink, NumericEvent, PassContext, Phase};
use crate::math::matrix::Matrix;
use crate::network::cache::ForwardCache;
use crate::network::error::ConfigError;
use crate::network::spec::NetworkSpec;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// Half-width of the symmetric interval initial weights and biases are drawn from.
pub const INIT_BOUND: f64 = 0.001;

/// Fully connected feed-forward network trained by per-example SGD.
///
/// `weights[i]` connects layer `i` to layer `i + 1` and is stored as
/// `data[from][to]`; `biases[i]` belongs to the neurons of layer `i + 1`.
/// The parameters are owned exclusively by this value and updated in place;
/// clone the network to run independent experiments.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    spec: NetworkSpec,
    weights: Vec<Matrix>,
    biases: Vec<Vec<f64>>,
}

impl Network {
    /// Builds a network with parameters drawn from the thread RNG.
    pub fn new(
        layers: Vec<usize>,
        activations: Vec<ActivationFunction>,
    ) -> Result<Network, ConfigError> {
        Network::with_rng(layers, activations, &mut rand::thread_rng())
    }

    /// Same as `new`, with a caller-supplied RNG for reproducible runs.
    pub fn with_rng<R: Rng>(
        layers: Vec<usize>,
        activations: Vec<ActivationFunction>,
        rng: &mut R,
    ) -> Result<Network, ConfigError> {
        Network::from_spec(NetworkSpec::new(layers, activations), rng)
    }

    pub fn from_spec<R: Rng>(spec: NetworkSpec, rng: &mut R) -> Result<Network, ConfigError> {
        spec.validate()?;

        let mut weights = Vec::with_capacity(spec.transitions());
        let mut biases = Vec::with_capacity(spec.transitions());
        for pair in spec.layers.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            weights.push(Matrix::uniform(from, to, INIT_BOUND, rng));
            biases.push((0..to).map(|_| rng.gen_range(-INIT_BOUND..INIT_BOUND)).collect());
        }

        Ok(Network { spec, weights, biases })
    }

    /// Builds a network around explicit parameters, checking every shape.
    pub fn from_parameters(
        layers: Vec<usize>,
        activations: Vec<ActivationFunction>,
        weights: Vec<Matrix>,
        biases: Vec<Vec<f64>>,
    ) -> Result<Network, ConfigError> {
        let spec = NetworkSpec::new(layers, activations);
        spec.validate()?;

        if weights.len() != spec.transitions() {
            return Err(ConfigError::ShapeMismatch {
                what: "weight matrix count",
                transition: weights.len(),
                expected: (spec.transitions(), 0),
                got: (weights.len(), 0),
            });
        }
        if biases.len() != spec.transitions() {
            return Err(ConfigError::ShapeMismatch {
                what: "bias vector count",
                transition: biases.len(),
                expected: (spec.transitions(), 0),
                got: (biases.len(), 0),
            });
        }
        for (i, pair) in spec.layers.windows(2).enumerate() {
            let expected = (pair[0], pair[1]);
            if weights[i].shape() != expected {
                return Err(ConfigError::ShapeMismatch {
                    what: "weights",
                    transition: i,
                    expected,
                    got: weights[i].shape(),
                });
            }
            if biases[i].len() != pair[1] {
                return Err(ConfigError::ShapeMismatch {
                    what: "biases",
                    transition: i,
                    expected: (1, pair[1]),
                    got: (1, biases[i].len()),
                });
            }
        }

        Ok(Network { spec, weights, biases })
    }

    pub fn spec(&self) -> &NetworkSpec {
        &self.spec
    }

    pub fn layer_sizes(&self) -> &[usize] {
        &self.spec.layers
    }

    pub fn activations(&self) -> &[ActivationFunction] {
        &self.spec.activations
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub fn biases(&self) -> &[Vec<f64>] {
        &self.biases
    }

    pub fn input_size(&self) -> usize {
        self.spec.input_size()
    }

    pub fn output_size(&self) -> usize {
        self.spec.output_size()
    }

    /// Forward pass; NaN sums are reported through the `log` facade.
    pub fn feed_forward(&self, input: &[f64]) -> ForwardCache {
        self.feed_forward_with(input, &mut LogSink, PassContext::default())
    }

    /// Forward pass reporting NaN sums to `sink`.
    ///
    /// `input` must have `input_size()` entries. A layer whose sums contain
    /// NaN produces one `NumericEvent`; the NaN is still propagated.
    pub fn feed_forward_with(
        &self,
        input: &[f64],
        sink: &mut dyn DiagnosticSink,
        ctx: PassContext,
    ) -> ForwardCache {
        let mut activations: Vec<Vec<f64>> = Vec::with_capacity(self.spec.layers.len());
        let mut sums: Vec<Vec<f64>> = Vec::with_capacity(self.weights.len());
        activations.push(input.to_vec());

        for (i, (weights, biases)) in self.weights.iter().zip(&self.biases).enumerate() {
            let activation = self.spec.activations[i];
            let mut layer_sums = biases.clone();
            for (a, row) in activations[i].iter().zip(&weights.data) {
                for (sum, w) in layer_sums.iter_mut().zip(row) {
                    *sum += a * w;
                }
            }

            let nan = layer_sums.iter().filter(|s| s.is_nan()).count();
            if nan > 0 {
                sink.numeric_degeneracy(&NumericEvent::new(Phase::Forward, i + 1, nan, ctx));
            }

            activations.push(layer_sums.iter().map(|&s| activation.activate(s)).collect());
            sums.push(layer_sums);
        }

        ForwardCache { activations, sums }
    }

    /// Inference shorthand: the output layer for `input`.
    pub fn predict(&self, input: &[f64]) -> Vec<f64> {
        self.feed_forward(input).into_output()
    }

    /// One SGD step for the example that produced `cache`.
    pub fn backpropagate(&mut self, cache: ForwardCache, target: &[f64], learning_rate: f64) {
        self.backpropagate_with(cache, target, learning_rate, &mut LogSink, PassContext::default());
    }

    /// Backward pass and in-place parameter update.
    ///
    /// The output error is `output - target`, the gradient of
    /// `½ Σ (output - target)²`; the usual factor 2 of the squared error is
    /// folded into `learning_rate`. Hidden deltas scale the propagated error
    /// by `derivative(a)` of the layer's cached activation `a`; for
    /// `Sigmoid` and `Tanh` hidden layers this is not the exact gradient of
    /// that loss. Every delta is computed from the
    /// pre-update weights before any parameter changes. Gradients are not
    /// clipped: non-finite deltas are reported to `sink` and applied as is.
    pub fn backpropagate_with(
        &mut self,
        cache: ForwardCache,
        target: &[f64],
        learning_rate: f64,
        sink: &mut dyn DiagnosticSink,
        ctx: PassContext,
    ) {
        let last = self.spec.layers.len() - 1;
        debug_assert_eq!(
            cache.layer_count(),
            last + 1,
            "ForwardCache was produced by a network with a different depth"
        );

        let mut deltas: Vec<Vec<f64>> = vec![Vec::new(); last + 1];
        deltas[last] = cache.activations[last]
            .iter()
            .zip(target)
            .map(|(a, t)| a - t)
            .collect();

        for i in (1..last).rev() {
            let activation = self.spec.activations[i - 1];
            let weights = &self.weights[i];
            let above = &deltas[i + 1];
            let layer_deltas: Vec<f64> = cache.activations[i]
                .iter()
                .zip(&weights.data)
                .map(|(&neuron, row)| {
                    let error: f64 = above.iter().zip(row).map(|(d, w)| d * w).sum();
                    error * activation.derivative(neuron)
                })
                .collect();
            deltas[i] = layer_deltas;
        }

        for (layer, layer_deltas) in deltas.iter().enumerate().skip(1) {
            let bad = layer_deltas.iter().filter(|d| !d.is_finite()).count();
            if bad > 0 {
                sink.numeric_degeneracy(&NumericEvent::new(Phase::Backward, layer, bad, ctx));
            }
        }

        for (i, (weights, biases)) in self.weights.iter_mut().zip(&mut self.biases).enumerate() {
            let below = &cache.activations[i];
            let above = &deltas[i + 1];
            for (a, row) in below.iter().zip(&mut weights.data) {
                for (w, d) in row.iter_mut().zip(above) {
                    *w -= learning_rate * d * a;
                }
            }
            for (b, d) in biases.iter_mut().zip(above) {
                *b -= learning_rate * d;
            }
        }
    }

    /// Trains on `inputs`/`targets` in order, reporting progress through the
    /// `log` facade every 10 epochs and on the last one. Returns the final
    /// epoch's mean squared error.
    pub fn train(
        &mut self,
        inputs: &[Vec<f64>],
        targets: &[Vec<f64>],
        epochs: usize,
        learning_rate: f64,
    ) -> f64 {
        let config = TrainConfig::new(epochs, learning_rate);
        train_loop(self, inputs, targets, &config, &mut LogSink)
    }
}
