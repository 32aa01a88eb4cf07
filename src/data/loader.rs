use std::io::Read;
use std::path::Path;

use log::debug;

use crate::data::dates::DateConverter;
use crate::data::error::DataError;

/// Name of the derived time feature; always feature 0 of a `Dataset`.
pub const INTERVALS_COLUMN: &str = "intervals_since_start";

/// Numeric training data extracted from a CSV table.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// One row per CSV record: `[intervals_since_start, extra features…]`.
    pub features: Vec<Vec<f64>>,
    pub targets: Vec<f64>,
    pub feature_names: Vec<String>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Targets as single-element rows, the shape a one-output network trains on.
    pub fn target_rows(&self) -> Vec<Vec<f64>> {
        self.targets.iter().map(|&t| vec![t]).collect()
    }

    /// All values of feature `index`.
    pub fn feature_column(&self, index: usize) -> Vec<f64> {
        self.features.iter().map(|row| row[index]).collect()
    }
}

/// Reads a time-series CSV: converts the date column to intervals since the
/// converter's start, checks that every requested feature column exists, and
/// parses the target and feature cells as numbers.
#[derive(Debug, Clone)]
pub struct DataLoader {
    date_column: String,
    target_column: String,
    feature_columns: Vec<String>,
    converter: DateConverter,
}

impl DataLoader {
    pub fn new(
        date_column: impl Into<String>,
        target_column: impl Into<String>,
        feature_columns: Vec<String>,
        converter: DateConverter,
    ) -> DataLoader {
        DataLoader {
            date_column: date_column.into(),
            target_column: target_column.into(),
            feature_columns,
            converter,
        }
    }

    pub fn converter(&self) -> &DateConverter {
        &self.converter
    }

    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Dataset, DataError> {
        let path = path.as_ref();
        debug!("loading {}", path.display());
        self.load_csv(csv::Reader::from_path(path)?)
    }

    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Dataset, DataError> {
        self.load_csv(csv::Reader::from_reader(reader))
    }

    fn load_csv<R: Read>(&self, mut reader: csv::Reader<R>) -> Result<Dataset, DataError> {
        let headers = reader.headers()?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| DataError::MissingColumn(name.to_string()))
        };

        let date_idx = column(self.date_column.as_str())?;
        let target_idx = column(self.target_column.as_str())?;
        // The interval feature is derived, not read, so it is never duplicated.
        let extra = self
            .feature_columns
            .iter()
            .filter(|name| name.as_str() != INTERVALS_COLUMN)
            .map(|name| Ok((name.clone(), column(name.as_str())?)))
            .collect::<Result<Vec<(String, usize)>, DataError>>()?;

        let mut features = Vec::new();
        let mut targets = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

            let mut values = Vec::with_capacity(1 + extra.len());
            values.push(self.converter.date_to_intervals(cell(date_idx))? as f64);
            for (name, idx) in &extra {
                values.push(parse_number(cell(*idx), row, name)?);
            }

            targets.push(parse_number(cell(target_idx), row, &self.target_column)?);
            features.push(values);
        }

        let mut feature_names = vec![INTERVALS_COLUMN.to_string()];
        feature_names.extend(extra.into_iter().map(|(name, _)| name));
        debug!("loaded {} rows, features {:?}", targets.len(), feature_names);

        Ok(Dataset { features, targets, feature_names })
    }
}

fn parse_number(value: &str, row: usize, column: &str) -> Result<f64, DataError> {
    value.parse::<f64>().map_err(|_| DataError::NotNumeric {
        row,
        column: column.to_string(),
        value: value.to_string(),
    })
}
