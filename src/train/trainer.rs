use crate::{
    diagnostics::{DiagnosticSink, PassContext},
    network::network::Network,
};

/// Mean squared error of one example, averaged over the output units.
pub fn example_mse(output: &[f64], target: &[f64]) -> f64 {
    let n = output.len() as f64;
    output.iter().zip(target.iter())
        .map(|(o, t)| (o - t).powi(2))
        .sum::<f64>() / n
}

/// Runs one epoch of per-example SGD in input order and returns the mean of
/// the per-example MSEs. Each example's error is measured on the output of
/// its own forward pass, before that example's update.
pub fn train_epoch(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    learning_rate: f64,
    epoch: usize,
    sink: &mut dyn DiagnosticSink,
) -> f64 {
    let mut total_error = 0.0;

    for (example, (input, target)) in inputs.iter().zip(targets.iter()).enumerate() {
        let ctx = PassContext::training(epoch, example);

        let cache = network.feed_forward_with(input, sink, ctx);
        total_error += example_mse(cache.output(), target);

        network.backpropagate_with(cache, target, learning_rate, sink, ctx);
    }

    total_error / inputs.len() as f64
}

/// Dataset MSE without touching the parameters.
pub fn evaluate_mse(network: &Network, inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> f64 {
    if inputs.is_empty() {
        return 0.0;
    }
    let total: f64 = inputs.iter().zip(targets.iter())
        .map(|(input, target)| example_mse(&network.predict(input), target))
        .sum();
    total / inputs.len() as f64
}
