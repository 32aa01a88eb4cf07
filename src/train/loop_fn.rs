use std::time::Instant;

use log::debug;

use crate::diagnostics::DiagnosticSink;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_epoch;

/// Trains `network` for `config.epochs` epochs and returns the mean squared
/// error of the **last completed epoch**.
///
/// # Arguments
/// - `network` — mutable reference to the network; modified in place
/// - `inputs`  — training samples, each of length `network.input_size()`
/// - `targets` — corresponding targets, each of length `network.output_size()`
/// - `config`  — epochs, learning rate, reporting cadence, optional channel
/// - `sink`    — receives progress reports and numeric-degeneracy events
///
/// Examples are visited in input order every epoch, so a run is reproducible
/// given the same data and initial parameters. The loop always runs every
/// requested epoch; a NaN MSE does not stop it.
///
/// # Panics
/// Panics if `inputs` is empty or `inputs.len() != targets.len()`.
pub fn train_loop(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    config: &TrainConfig,
    sink: &mut dyn DiagnosticSink,
) -> f64 {
    assert!(!inputs.is_empty(), "inputs must not be empty");
    assert_eq!(
        inputs.len(),
        targets.len(),
        "inputs and targets must have equal length"
    );

    debug!(
        "training {:?} on {} examples for {} epochs (lr = {})",
        network.layer_sizes(),
        inputs.len(),
        config.epochs,
        config.learning_rate,
    );

    let mut last_mse = 0.0;

    for epoch in 0..config.epochs {
        let t_start = Instant::now();

        let mse = train_epoch(network, inputs, targets, config.learning_rate, epoch, sink);
        last_mse = mse;

        if !config.reports(epoch) {
            continue;
        }

        let stats = EpochStats {
            epoch: epoch + 1,
            total_epochs: config.epochs,
            mse,
            percent_complete: (epoch + 1) as f64 / config.epochs as f64 * 100.0,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        sink.epoch_progress(&stats);
        if let Some(ref tx) = config.progress_tx {
            // A dropped receiver only means nobody is listening anymore.
            let _ = tx.send(stats);
        }
    }

    last_mse
}

#[cfg(test)]
mod tests {
    use super::train_loop;
    use crate::activation::ActivationFunction::{Linear, Relu};
    use crate::diagnostics::RecordingSink;
    use crate::network::network::Network;
    use crate::train::train_config::TrainConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::mpsc;

    fn toy_network() -> Network {
        Network::with_rng(vec![1, 3, 1], vec![Relu, Linear], &mut StdRng::seed_from_u64(1)).unwrap()
    }

    #[test]
    fn progress_is_reported_every_ten_epochs_and_on_the_last() {
        let mut network = toy_network();
        let mut sink = RecordingSink::new();
        let config = TrainConfig::new(25, 0.01);

        train_loop(&mut network, &[vec![1.0]], &[vec![2.0]], &config, &mut sink);

        let reported: Vec<usize> = sink.progress.iter().map(|s| s.epoch).collect();
        assert_eq!(reported, vec![1, 11, 21, 25]);
        assert_eq!(sink.progress.last().map(|s| s.percent_complete), Some(100.0));
        assert!(sink.progress.iter().all(|s| s.total_epochs == 25));
    }

    #[test]
    fn progress_channel_receives_reported_epochs() {
        let (tx, rx) = mpsc::channel();
        let mut network = toy_network();
        let config = TrainConfig::new(6, 0.01)
            .with_report_every(2)
            .with_progress_channel(tx);

        train_loop(&mut network, &[vec![1.0]], &[vec![2.0]], &config, &mut RecordingSink::new());
        drop(config);

        let epochs: Vec<usize> = rx.iter().map(|s| s.epoch).collect();
        assert_eq!(epochs, vec![1, 3, 5, 6]);
    }

    #[test]
    fn returns_last_epoch_mse() {
        let mut network = toy_network();
        let mut sink = RecordingSink::new();
        let config = TrainConfig::new(10, 0.01).with_report_every(1);

        let mse = train_loop(&mut network, &[vec![1.0], vec![2.0]], &[vec![1.0], vec![2.0]], &config, &mut sink);

        assert_eq!(sink.progress.len(), 10);
        assert_eq!(sink.progress.last().map(|s| s.mse), Some(mse));
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn mismatched_row_counts_panic() {
        let mut network = toy_network();
        train_loop(
            &mut network,
            &[vec![1.0], vec![2.0]],
            &[vec![1.0]],
            &TrainConfig::new(1, 0.01),
            &mut RecordingSink::new(),
        );
    }
}
