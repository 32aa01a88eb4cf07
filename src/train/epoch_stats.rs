use serde::{Serialize, Deserialize};

/// Progress snapshot emitted by `train_loop` on reporting epochs.
///
/// Sent to the `DiagnosticSink` and, when `TrainConfig::progress_tx` is set,
/// over the channel as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean of the per-example mean squared errors over this epoch.
    pub mse: f64,
    /// `epoch / total_epochs * 100`.
    pub percent_complete: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
