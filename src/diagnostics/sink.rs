use log::{info, warn};

use crate::diagnostics::event::{NumericEvent, Phase};
use crate::train::epoch_stats::EpochStats;

const BAR_LENGTH: usize = 30;

/// Receives observability signals from the numeric core.
///
/// The network and training loop never print; whatever implements this trait
/// decides where numeric-degeneracy events and progress reports end up.
pub trait DiagnosticSink {
    fn numeric_degeneracy(&mut self, event: &NumericEvent);

    fn epoch_progress(&mut self, stats: &EpochStats);
}

/// Forwards everything to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn numeric_degeneracy(&mut self, event: &NumericEvent) {
        warn!("{}", degeneracy_message(event));
    }

    fn epoch_progress(&mut self, stats: &EpochStats) {
        info!(
            "Epoch {}/{} [{}] {:.2}% complete - MSE: {:.6}",
            stats.epoch,
            stats.total_epochs,
            progress_bar(stats.percent_complete),
            stats.percent_complete,
            stats.mse,
        );
    }
}

/// Keeps every signal in memory. Useful for monitoring a run from the caller
/// (e.g. aborting once the MSE turns NaN) and in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub events: Vec<NumericEvent>,
    pub progress: Vec<EpochStats>,
}

impl RecordingSink {
    pub fn new() -> RecordingSink {
        RecordingSink::default()
    }
}

impl DiagnosticSink for RecordingSink {
    fn numeric_degeneracy(&mut self, event: &NumericEvent) {
        self.events.push(event.clone());
    }

    fn epoch_progress(&mut self, stats: &EpochStats) {
        self.progress.push(stats.clone());
    }
}

/// Log line for a `NumericEvent`. Forward events only fire on NaN sums;
/// backward events also cover infinite deltas.
pub fn degeneracy_message(event: &NumericEvent) -> String {
    let (what, pass) = match event.phase {
        Phase::Forward => ("NaN", "feed-forward"),
        Phase::Backward => ("Non-finite value", "backpropagation"),
    };
    format!(
        "{what} detected in {pass} pass at layer {} ({} neurons, epoch {:?}, example {:?}, {})",
        event.layer,
        event.neurons,
        event.epoch,
        event.example,
        event.at.to_rfc3339(),
    )
}

/// `#` for the completed share, `-` for the rest.
pub fn progress_bar(percent: f64) -> String {
    let filled = ((BAR_LENGTH as f64 * percent / 100.0) as usize).min(BAR_LENGTH);
    let mut bar = String::with_capacity(BAR_LENGTH);
    for j in 0..BAR_LENGTH {
        bar.push(if j < filled { '#' } else { '-' });
    }
    bar
}
