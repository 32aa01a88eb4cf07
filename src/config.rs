use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::data::dates::DEFAULT_INTERVAL_MINUTES;
use crate::network::spec::NetworkSpec;
use crate::train::train_config::{TrainConfig, DEFAULT_REPORT_EVERY};

/// Where the training table lives and how to read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    pub path: String,
    pub date_column: String,
    pub target_column: String,
    /// Extra feature columns; the interval feature is always included first.
    #[serde(default)]
    pub feature_columns: Vec<String>,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: i64,
}

/// A neural-network experiment as stored on disk.
///
/// The input width is not part of the file: it is the number of features the
/// data block produces. `activations` has one entry per hidden layer plus one
/// for the single-unit output layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub hidden_layers: Vec<usize>,
    pub activations: Vec<ActivationFunction>,
    pub epochs: usize,
    pub learning_rate: f64,
    #[serde(default = "default_report_every")]
    pub report_every: usize,
    /// Seed for weight initialization; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    pub data: DataConfig,
}

fn default_interval_minutes() -> i64 {
    DEFAULT_INTERVAL_MINUTES
}

fn default_report_every() -> usize {
    DEFAULT_REPORT_EVERY
}

impl ExperimentConfig {
    /// Architecture for `input_size` features and one output.
    pub fn network_spec(&self, input_size: usize) -> NetworkSpec {
        let mut layers = Vec::with_capacity(self.hidden_layers.len() + 2);
        layers.push(input_size);
        layers.extend(&self.hidden_layers);
        layers.push(1);
        NetworkSpec::new(layers, self.activations.clone())
    }

    pub fn train_config(&self) -> TrainConfig {
        TrainConfig::new(self.epochs, self.learning_rate).with_report_every(self.report_every)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes an `ExperimentConfig` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<ExperimentConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
