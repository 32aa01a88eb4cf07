use thiserror::Error;

/// Rejected network architecture. Construction never returns a partial network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a network needs at least 2 layers (input and output), got {0}")]
    TooFewLayers(usize),

    #[error("layer {index} has zero neurons")]
    EmptyLayer { index: usize },

    #[error("expected {expected} activation functions (one per layer transition), got {got}")]
    ActivationCountMismatch { expected: usize, got: usize },

    #[error("{what} for transition {transition}: expected shape {expected:?}, got {got:?}")]
    ShapeMismatch {
        what: &'static str,
        transition: usize,
        expected: (usize, usize),
        got: (usize, usize),
    },
}
