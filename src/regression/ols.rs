//! Ordinary least squares on a design matrix with an implicit intercept
//! column, solved through `nalgebra`'s SVD.

use nalgebra::{DMatrix, DVector};

use crate::regression::error::RegressionError;

/// Singular values below this are treated as zero by the solver.
const SVD_EPS: f64 = 1e-12;

/// Fitted parameters: `y ≈ intercept + Σ coefficients[i] * x[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct OlsFit {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl OlsFit {
    pub fn predict(&self, terms: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(terms)
                .map(|(c, t)| c * t)
                .sum::<f64>()
    }
}

/// Fits `y` against the regressor rows in `x`.
///
/// Every row must have the same number of regressors, and there must be more
/// rows than regressors.
pub fn fit(x: &[Vec<f64>], y: &[f64]) -> Result<OlsFit, RegressionError> {
    if x.len() != y.len() {
        return Err(RegressionError::LengthMismatch { x: x.len(), y: y.len() });
    }

    let n = x.len();
    let p = x.first().map_or(0, |row| row.len());
    if let Some(row) = x.iter().find(|row| row.len() != p) {
        return Err(RegressionError::FeatureCount { expected: p, got: row.len() });
    }
    if n <= p {
        return Err(RegressionError::InsufficientData { rows: n, regressors: p });
    }
    if x.iter().flatten().chain(y).any(|v| !v.is_finite()) {
        return Err(RegressionError::NonFinite);
    }

    // Column 0 is the intercept.
    let design = DMatrix::from_fn(n, p + 1, |i, j| if j == 0 { 1.0 } else { x[i][j - 1] });
    let target = DVector::from_column_slice(y);

    let beta = design
        .svd(true, true)
        .solve(&target, SVD_EPS)
        .map_err(|e| RegressionError::Solve(e.to_string()))?;

    Ok(OlsFit {
        intercept: beta[0],
        coefficients: beta.iter().skip(1).copied().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::fit;
    use crate::regression::error::RegressionError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn recovers_exact_plane() {
        // y = 1 + 2a - 3b
        let x = vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![2.0, 3.0],
            vec![-1.0, 4.0],
        ];
        let y: Vec<f64> = x.iter().map(|r| 1.0 + 2.0 * r[0] - 3.0 * r[1]).collect();

        let fitted = fit(&x, &y).unwrap();
        assert_abs_diff_eq!(fitted.intercept, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(fitted.coefficients[0], 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(fitted.coefficients[1], -3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(fitted.predict(&[10.0, 1.0]), 18.0, epsilon = 1e-8);
    }

    #[test]
    fn needs_more_rows_than_regressors() {
        let err = fit(&[vec![1.0, 2.0], vec![3.0, 4.0]], &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, RegressionError::InsufficientData { rows: 2, regressors: 2 });
    }

    #[test]
    fn rejects_mismatched_lengths_and_ragged_rows() {
        assert_eq!(
            fit(&[vec![1.0], vec![2.0]], &[1.0]).unwrap_err(),
            RegressionError::LengthMismatch { x: 2, y: 1 }
        );
        assert_eq!(
            fit(&[vec![1.0], vec![2.0, 3.0], vec![4.0]], &[1.0, 2.0, 3.0]).unwrap_err(),
            RegressionError::FeatureCount { expected: 1, got: 2 }
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = fit(&[vec![1.0], vec![f64::NAN], vec![3.0]], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, RegressionError::NonFinite);
    }
}
