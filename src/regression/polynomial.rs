use crate::regression::error::RegressionError;
use crate::regression::features::powers;
use crate::regression::ols::{self, OlsFit};
use crate::regression::regressor::{check_feature_count, Regressor};

/// Single-feature polynomial regression
/// `y = intercept + c1*x + c2*x² + … + cd*x^d`, fit by OLS.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialRegression {
    degree: usize,
    fit: OlsFit,
}

impl PolynomialRegression {
    pub fn fit(x: &[f64], y: &[f64], degree: usize) -> Result<PolynomialRegression, RegressionError> {
        if degree == 0 {
            return Err(RegressionError::InvalidDegree);
        }
        let design: Vec<Vec<f64>> = x.iter().map(|&xi| powers(xi, degree)).collect();
        let fit = ols::fit(&design, y)?;
        Ok(PolynomialRegression { degree, fit })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn intercept(&self) -> f64 {
        self.fit.intercept
    }

    /// Coefficients of `x, x², …, x^d`, in that order.
    pub fn coefficients(&self) -> &[f64] {
        &self.fit.coefficients
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.fit.predict(&powers(x, self.degree))
    }
}

impl Regressor for PolynomialRegression {
    fn feature_count(&self) -> usize {
        1
    }

    fn predict_features(&self, features: &[f64]) -> Result<f64, RegressionError> {
        check_feature_count(1, features)?;
        Ok(self.predict(features[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::PolynomialRegression;
    use crate::regression::error::RegressionError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn recovers_a_cubic() {
        // y = 2 - x + 0.5x³
        let x: Vec<f64> = (-3..=3).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|&v| 2.0 - v + 0.5 * v.powi(3)).collect();

        let model = PolynomialRegression::fit(&x, &y, 3).unwrap();

        assert_abs_diff_eq!(model.intercept(), 2.0, epsilon = 1e-8);
        assert_abs_diff_eq!(model.coefficients()[0], -1.0, epsilon = 1e-8);
        assert_abs_diff_eq!(model.coefficients()[1], 0.0, epsilon = 1e-8);
        assert_abs_diff_eq!(model.coefficients()[2], 0.5, epsilon = 1e-8);
        assert_abs_diff_eq!(model.predict(4.0), 2.0 - 4.0 + 32.0, epsilon = 1e-6);
    }

    #[test]
    fn degree_zero_is_rejected() {
        let err = PolynomialRegression::fit(&[1.0, 2.0], &[1.0, 2.0], 0).unwrap_err();
        assert_eq!(err, RegressionError::InvalidDegree);
    }
}
