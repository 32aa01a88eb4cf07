use crate::regression::error::RegressionError;
use crate::regression::regressor::{check_feature_count, Regressor};

/// Simple linear regression `y = slope * x + intercept`, fit with the
/// closed-form least squares sums.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression {
    slope: f64,
    intercept: f64,
}

impl LinearRegression {
    pub fn fit(x: &[f64], y: &[f64]) -> Result<LinearRegression, RegressionError> {
        if x.len() != y.len() {
            return Err(RegressionError::LengthMismatch { x: x.len(), y: y.len() });
        }
        if x.len() < 2 {
            return Err(RegressionError::InsufficientData { rows: x.len(), regressors: 1 });
        }

        let n = x.len() as f64;
        let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
        for (&xi, &yi) in x.iter().zip(y) {
            sum_x += xi;
            sum_y += yi;
            sum_xy += xi * yi;
            sum_x2 += xi * xi;
        }

        // n·Σx² − (Σx)² cancels badly, so constant x is detected directly.
        let denominator = n * sum_x2 - sum_x * sum_x;
        if x.iter().all(|&xi| xi == x[0]) || denominator <= 0.0 {
            return Err(RegressionError::Degenerate);
        }
        if !denominator.is_finite() || !sum_xy.is_finite() || !sum_y.is_finite() {
            return Err(RegressionError::NonFinite);
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        Ok(LinearRegression { slope, intercept })
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn mean_squared_error(&self, x: &[f64], y: &[f64]) -> f64 {
        if x.is_empty() {
            return 0.0;
        }
        let total: f64 = x.iter().zip(y)
            .map(|(&xi, &yi)| (yi - self.predict(xi)).powi(2))
            .sum();
        total / x.len() as f64
    }
}

impl Regressor for LinearRegression {
    fn feature_count(&self) -> usize {
        1
    }

    fn predict_features(&self, features: &[f64]) -> Result<f64, RegressionError> {
        check_feature_count(1, features)?;
        Ok(self.predict(features[0]))
    }
}
