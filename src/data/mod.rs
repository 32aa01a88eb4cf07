//! CSV ingestion and timestamp conversion feeding the regressors.

pub mod dates;
pub mod error;
pub mod loader;

pub use dates::{parse_timestamp, DateConverter};
pub use error::DataError;
pub use loader::{DataLoader, Dataset, INTERVALS_COLUMN};
