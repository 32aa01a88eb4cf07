use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Forward,
    Backward,
}

/// Where in a training run a pass happens. Both fields are `None` for
/// stand-alone inference calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassContext {
    /// 0-based epoch index.
    pub epoch: Option<usize>,
    /// 0-based row index into the training inputs.
    pub example: Option<usize>,
}

impl PassContext {
    pub fn training(epoch: usize, example: usize) -> PassContext {
        PassContext { epoch: Some(epoch), example: Some(example) }
    }
}

/// A layer produced NaN (forward sums) or non-finite error signals (backward).
///
/// Computation is not interrupted; the degenerate values keep flowing.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericEvent {
    pub phase: Phase,
    /// Index of the offending layer (1 = first hidden layer).
    pub layer: usize,
    /// How many neurons of that layer were affected.
    pub neurons: usize,
    pub epoch: Option<usize>,
    pub example: Option<usize>,
    pub at: DateTime<Utc>,
}

impl NumericEvent {
    pub fn new(phase: Phase, layer: usize, neurons: usize, ctx: PassContext) -> NumericEvent {
        NumericEvent {
            phase,
            layer,
            neurons,
            epoch: ctx.epoch,
            example: ctx.example,
            at: Utc::now(),
        }
    }
}
