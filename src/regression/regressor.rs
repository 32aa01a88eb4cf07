use crate::regression::error::RegressionError;

/// A fitted model mapping a feature vector to a point prediction.
pub trait Regressor {
    /// Number of raw features (before polynomial expansion) the model was fit on.
    fn feature_count(&self) -> usize;

    /// Fails with `RegressionError::FeatureCount` when
    /// `features.len() != self.feature_count()`.
    fn predict_features(&self, features: &[f64]) -> Result<f64, RegressionError>;

    /// Mean squared error of the model over `rows`/`y`.
    fn evaluate_mse(&self, rows: &[Vec<f64>], y: &[f64]) -> Result<f64, RegressionError> {
        if rows.len() != y.len() {
            return Err(RegressionError::LengthMismatch { x: rows.len(), y: y.len() });
        }
        if rows.is_empty() {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for (row, &actual) in rows.iter().zip(y) {
            total += (actual - self.predict_features(row)?).powi(2);
        }
        Ok(total / rows.len() as f64)
    }
}

/// Checks the arity of a prediction input.
pub(crate) fn check_feature_count(expected: usize, features: &[f64]) -> Result<(), RegressionError> {
    if features.len() != expected {
        return Err(RegressionError::FeatureCount { expected, got: features.len() });
    }
    Ok(())
}
