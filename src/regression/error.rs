use thiserror::Error;

/// Errors that can occur while fitting or querying a regressor.
///
/// A failed `predict` never modifies the model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegressionError {
    #[error("incorrect number of input features: expected {expected}, but received {got}")]
    FeatureCount { expected: usize, got: usize },

    #[error("x has {x} samples but y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("not enough samples: {rows} rows for {regressors} regressors (need more rows than regressors)")]
    InsufficientData { rows: usize, regressors: usize },

    #[error("polynomial degree must be at least 1")]
    InvalidDegree,

    #[error("x values have zero variance, the slope is undefined")]
    Degenerate,

    #[error("training data contains NaN or infinite values")]
    NonFinite,

    #[error("least squares solve failed: {0}")]
    Solve(String),
}
