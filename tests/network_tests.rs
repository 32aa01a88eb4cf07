//! Integration tests for the feed-forward network.
//!
//! These tests verify:
//! - Backpropagation matches a numerical gradient of ½ Σ (out - target)² for
//!   piecewise-linear hidden layers
//! - Backpropagation uses the activations of the cache it is handed
//! - Training on a linear toy dataset lowers the MSE
//! - NaN inputs are reported and do not abort training

use approx::assert_abs_diff_eq;
use forecast_nn::{
    evaluate_mse, train_loop, ActivationFunction, Matrix, Network, Phase, RecordingSink,
    TrainConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use ActivationFunction::{LeakyRelu, Linear, Relu, Sigmoid, Tanh};

/// Network with weights and biases drawn from [-0.5, 0.5) so gradients are
/// not dominated by the tiny default initialization.
fn wide_init(layers: &[usize], activations: Vec<ActivationFunction>, seed: u64) -> Network {
    let mut rng = StdRng::seed_from_u64(seed);
    let weights = layers
        .windows(2)
        .map(|p| Matrix::uniform(p[0], p[1], 0.5, &mut rng))
        .collect();
    let biases = layers
        .windows(2)
        .map(|p| Matrix::uniform(1, p[1], 0.5, &mut rng).data.remove(0))
        .collect();
    Network::from_parameters(layers.to_vec(), activations, weights, biases).unwrap()
}

fn half_squared_error(network: &Network, input: &[f64], target: &[f64]) -> f64 {
    network
        .predict(input)
        .iter()
        .zip(target)
        .map(|(o, t)| 0.5 * (o - t).powi(2))
        .sum()
}

fn rebuild(network: &Network, weights: Vec<Matrix>, biases: Vec<Vec<f64>>) -> Network {
    Network::from_parameters(
        network.layer_sizes().to_vec(),
        network.activations().to_vec(),
        weights,
        biases,
    )
    .unwrap()
}

// ============================================================================
// GRADIENT CHECK
// ============================================================================

#[test]
fn backpropagation_matches_numerical_gradient() {
    // Piecewise-linear hidden layers, whose slope at the activation equals
    // the slope at the weighted sum.
    for hidden in [Relu, LeakyRelu { alpha: 0.1 }] {
        let network = wide_init(&[2, 3, 2], vec![hidden, Linear], 17);
        let input = [0.7, -1.2];
        let target = [0.3, -0.4];
        let lr = 1e-3;
        let eps = 1e-6;

        let mut stepped = network.clone();
        let cache = stepped.feed_forward(&input);
        stepped.backpropagate(cache, &target, lr);

        for t in 0..network.weights().len() {
            let (rows, cols) = network.weights()[t].shape();
            for j in 0..rows {
                for k in 0..cols {
                    let analytic =
                        (network.weights()[t].data[j][k] - stepped.weights()[t].data[j][k]) / lr;

                    let mut plus = network.weights().to_vec();
                    plus[t].data[j][k] += eps;
                    let mut minus = network.weights().to_vec();
                    minus[t].data[j][k] -= eps;
                    let numerical = (half_squared_error(&rebuild(&network, plus, network.biases().to_vec()), &input, &target)
                        - half_squared_error(&rebuild(&network, minus, network.biases().to_vec()), &input, &target))
                        / (2.0 * eps);

                    assert_abs_diff_eq!(analytic, numerical, epsilon = 1e-6);
                }
            }

            for k in 0..network.biases()[t].len() {
                let analytic = (network.biases()[t][k] - stepped.biases()[t][k]) / lr;

                let mut plus = network.biases().to_vec();
                plus[t][k] += eps;
                let mut minus = network.biases().to_vec();
                minus[t][k] -= eps;
                let numerical = (half_squared_error(&rebuild(&network, network.weights().to_vec(), plus), &input, &target)
                    - half_squared_error(&rebuild(&network, network.weights().to_vec(), minus), &input, &target))
                    / (2.0 * eps);

                assert_abs_diff_eq!(analytic, numerical, epsilon = 1e-6);
            }
        }
    }
}

// ============================================================================
// FORWARD CACHE OWNERSHIP
// ============================================================================

#[test]
fn backpropagation_uses_the_cache_it_is_given() {
    let base = wide_init(&[2, 3, 1], vec![Relu, Linear], 23);
    let (x1, t1) = ([1.0, 0.5], [2.0]);
    let x2 = [-0.3, 2.0];
    let lr = 0.05;

    // Forward on x1, then on x2, then backward on x1's cache.
    let mut interleaved = base.clone();
    let cache1 = interleaved.feed_forward(&x1);
    let _cache2 = interleaved.feed_forward(&x2);
    interleaved.backpropagate(cache1, &t1, lr);

    // Forward and backward on x1 back to back.
    let mut sequential = base.clone();
    let cache = sequential.feed_forward(&x1);
    sequential.backpropagate(cache, &t1, lr);

    assert_eq!(interleaved, sequential);

    // Pairing x2's activations with x1's target is a different update: the
    // later forward pass did not overwrite anything the first cache holds.
    let mut mismatched = base.clone();
    let cache = mismatched.feed_forward(&x2);
    mismatched.backpropagate(cache, &t1, lr);
    assert_ne!(mismatched, sequential);
}

#[test]
fn backpropagation_leaves_parameters_alone_on_a_perfect_prediction() {
    let mut network = wide_init(&[3, 4, 2], vec![Sigmoid, Linear], 5);
    let before = network.clone();

    let cache = network.feed_forward(&[0.1, 0.2, 0.3]);
    let target = cache.output().to_vec();
    network.backpropagate(cache, &target, 0.5);

    assert_eq!(network, before);
}

// ============================================================================
// TRAINING
// ============================================================================

#[test]
fn training_reduces_mse_on_a_linear_relation() {
    let inputs = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
    let targets = vec![vec![0.0], vec![2.0], vec![4.0], vec![6.0]];

    let mut network =
        Network::with_rng(vec![1, 4, 1], vec![Relu, Linear], &mut StdRng::seed_from_u64(42)).unwrap();
    let before = evaluate_mse(&network, &inputs, &targets);

    let last_epoch = network.train(&inputs, &targets, 500, 0.01);
    let after = evaluate_mse(&network, &inputs, &targets);

    assert!(after < before, "MSE did not drop: {before} -> {after}");
    assert!(last_epoch < before, "last epoch MSE {last_epoch} not below {before}");
}

#[test]
fn training_is_reproducible_for_a_fixed_seed() {
    let inputs = vec![vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]];
    let targets = vec![vec![1.0], vec![1.0], vec![0.0]];

    let run = || {
        let mut network = Network::with_rng(
            vec![2, 3, 1],
            vec![Tanh, Sigmoid],
            &mut StdRng::seed_from_u64(9),
        )
        .unwrap();
        let mse = train_loop(
            &mut network,
            &inputs,
            &targets,
            &TrainConfig::new(50, 0.1),
            &mut RecordingSink::new(),
        );
        (network, mse)
    };

    let (a, mse_a) = run();
    let (b, mse_b) = run();
    assert_eq!(a, b);
    assert_eq!(mse_a, mse_b);
}

#[test]
fn nan_inputs_are_reported_without_stopping_training() {
    let inputs = vec![vec![1.0], vec![f64::NAN]];
    let targets = vec![vec![1.0], vec![1.0]];
    let mut network =
        Network::with_rng(vec![1, 2, 1], vec![Relu, Linear], &mut StdRng::seed_from_u64(1)).unwrap();
    let mut sink = RecordingSink::new();

    let mse = train_loop(&mut network, &inputs, &targets, &TrainConfig::new(3, 0.01), &mut sink);

    assert!(mse.is_nan());
    // Every epoch still ran and reported.
    assert_eq!(sink.progress.iter().map(|s| s.epoch).collect::<Vec<_>>(), vec![1, 3]);

    let first = sink
        .events
        .iter()
        .find(|e| e.phase == Phase::Forward)
        .expect("forward NaN event");
    assert_eq!(first.layer, 1);
    assert_eq!(first.epoch, Some(0));
    assert_eq!(first.example, Some(1));
}
