//! Closed-form regressors fit by ordinary least squares.

pub mod error;
pub mod features;
pub mod linear;
pub mod multivariate;
pub mod ols;
pub mod polynomial;
pub mod regressor;

pub use error::RegressionError;
pub use linear::LinearRegression;
pub use multivariate::MultivariatePolynomialRegression;
pub use polynomial::PolynomialRegression;
pub use regressor::Regressor;
