use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot parse timestamp '{0}' (expected 'YYYY-MM-DD HH:MM:SS+HH:MM' or 'YYYY-MM-DD')")]
    Timestamp(String),

    #[error("interval width must be positive, got {0} minutes")]
    Interval(i64),

    #[error("column {0} is not found in the CSV file")]
    MissingColumn(String),

    #[error("data row {row}, column {column}: '{value}' is not a number")]
    NotNumeric {
        row: usize,
        column: String,
        value: String,
    },
}
