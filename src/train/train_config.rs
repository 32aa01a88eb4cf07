use std::sync::mpsc;
use crate::train::epoch_stats::EpochStats;

pub const DEFAULT_REPORT_EVERY: usize = 10;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`        — total number of full passes over the training data
/// - `learning_rate` — SGD step size
/// - `report_every`  — progress is reported on 0-based epochs divisible by
///                     this value and always on the final epoch
/// - `progress_tx`   — optional channel; every reported `EpochStats` is also
///                     sent here. A dropped receiver is ignored.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub report_every: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` reporting every 10 epochs with no progress channel.
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            report_every: DEFAULT_REPORT_EVERY,
            progress_tx: None,
        }
    }

    pub fn with_report_every(mut self, report_every: usize) -> Self {
        self.report_every = report_every.max(1);
        self
    }

    pub fn with_progress_channel(mut self, tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    /// Whether the 0-based `epoch` gets a progress report.
    pub fn reports(&self, epoch: usize) -> bool {
        epoch % self.report_every.max(1) == 0 || epoch + 1 == self.epochs
    }
}
