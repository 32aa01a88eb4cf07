pub mod math;
pub mod activation;
pub mod network;
pub mod diagnostics;
pub mod train;
pub mod regression;
pub mod data;
pub mod config;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use network::{ConfigError, ForwardCache, Network, NetworkSpec};
pub use diagnostics::{DiagnosticSink, LogSink, NumericEvent, PassContext, Phase, RecordingSink};
pub use train::{evaluate_mse, train_loop, EpochStats, TrainConfig};
pub use regression::{
    LinearRegression, MultivariatePolynomialRegression, PolynomialRegression, RegressionError,
    Regressor,
};
pub use data::{DataError, DataLoader, Dataset, DateConverter};
pub use config::{DataConfig, ExperimentConfig};
