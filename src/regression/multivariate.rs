use crate::regression::error::RegressionError;
use crate::regression::features::expand_row;
use crate::regression::ols::{self, OlsFit};
use crate::regression::regressor::{check_feature_count, Regressor};

/// Polynomial regression over several features without interaction terms:
/// each feature contributes its own powers `x_f, x_f², …, x_f^d`.
#[derive(Debug, Clone, PartialEq)]
pub struct MultivariatePolynomialRegression {
    degree: usize,
    num_features: usize,
    fit: OlsFit,
}

impl MultivariatePolynomialRegression {
    /// Fits on `rows` (one feature vector per sample). The feature count is
    /// taken from the rows, which must all have the same length.
    pub fn fit(
        rows: &[Vec<f64>],
        y: &[f64],
        degree: usize,
    ) -> Result<MultivariatePolynomialRegression, RegressionError> {
        if degree == 0 {
            return Err(RegressionError::InvalidDegree);
        }
        let num_features = rows.first().map_or(0, |row| row.len());
        if let Some(row) = rows.iter().find(|row| row.len() != num_features) {
            return Err(RegressionError::FeatureCount { expected: num_features, got: row.len() });
        }

        let design: Vec<Vec<f64>> = rows.iter().map(|row| expand_row(row, degree)).collect();
        let fit = ols::fit(&design, y)?;

        Ok(MultivariatePolynomialRegression { degree, num_features, fit })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn intercept(&self) -> f64 {
        self.fit.intercept
    }

    /// Coefficients grouped per feature: `[f0^1..f0^d, f1^1..f1^d, …]`.
    pub fn coefficients(&self) -> &[f64] {
        &self.fit.coefficients
    }

    pub fn predict(&self, x: &[f64]) -> Result<f64, RegressionError> {
        check_feature_count(self.num_features, x)?;
        Ok(self.fit.predict(&expand_row(x, self.degree)))
    }
}

impl Regressor for MultivariatePolynomialRegression {
    fn feature_count(&self) -> usize {
        self.num_features
    }

    fn predict_features(&self, features: &[f64]) -> Result<f64, RegressionError> {
        self.predict(features)
    }
}
