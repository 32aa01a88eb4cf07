//! forecast-nn command line
//!
//! Fits a feed-forward network (`neural`) or an OLS regressor (`regress`) to a
//! time-series CSV and prints the fitted values.
//!
//!   forecast-nn neural --config experiment.json
//!   forecast-nn regress --data stock.csv --start 2024-01-01 --degree 2

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use forecast_nn::{
    train_loop, DataLoader, Dataset, DateConverter, ExperimentConfig, LinearRegression, LogSink,
    MultivariatePolynomialRegression, Network, PolynomialRegression, Regressor,
};

#[derive(Parser)]
#[command(name = "forecast-nn")]
#[command(about = "Regression and neural-network forecasts for time-series tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level used when RUST_LOG is not set
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a feed-forward network described by a JSON experiment file
    Neural {
        /// Path to the experiment config
        #[arg(short, long)]
        config: String,
    },

    /// Fit an OLS regressor on the time axis and optional extra columns
    Regress {
        /// CSV file with a header row
        #[arg(long)]
        data: String,

        #[arg(long, default_value = "date")]
        date_column: String,

        #[arg(long, default_value = "close")]
        target: String,

        /// Start of the time axis, e.g. "2024-01-01 00:00:00+01:00"
        #[arg(long)]
        start: String,

        /// Extra numeric feature columns, comma separated
        #[arg(long, value_delimiter = ',')]
        features: Vec<String>,

        /// Polynomial degree; 1 with no extra features fits a straight line
        #[arg(long, default_value = "1")]
        degree: usize,

        #[arg(long, default_value = "30")]
        interval_minutes: i64,

        /// Timestamp to forecast; extra features keep their last observed values
        #[arg(long)]
        predict: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level.as_str()),
    )
    .init();

    match cli.command {
        Commands::Neural { config } => run_neural(&config),
        Commands::Regress {
            data,
            date_column,
            target,
            start,
            features,
            degree,
            interval_minutes,
            predict,
        } => {
            let converter = DateConverter::new(&start)?.with_interval_minutes(interval_minutes)?;
            let loader = DataLoader::new(date_column, target, features, converter);
            run_regress(&loader, &data, degree, predict.as_deref())
        }
    }
}

fn load(loader: &DataLoader, path: &str) -> Result<Dataset> {
    let dataset = loader
        .load_path(path)
        .with_context(|| format!("loading {path}"))?;
    if dataset.is_empty() {
        bail!("{path} contains no data rows");
    }
    Ok(dataset)
}

fn run_neural(config_path: &str) -> Result<()> {
    let config = ExperimentConfig::load_json(config_path)
        .with_context(|| format!("reading experiment config {config_path}"))?;

    let mut converter = DateConverter::new(&config.data.start_date)?
        .with_interval_minutes(config.data.interval_minutes)?;
    if let Some(end) = &config.data.end_date {
        converter = converter.with_end(end)?;
    }
    let loader = DataLoader::new(
        config.data.date_column.clone(),
        config.data.target_column.clone(),
        config.data.feature_columns.clone(),
        converter,
    );
    let dataset = load(&loader, &config.data.path)?;

    let spec = config.network_spec(dataset.feature_names.len());
    let mut network = match config.seed {
        Some(seed) => Network::from_spec(spec, &mut StdRng::seed_from_u64(seed))?,
        None => Network::from_spec(spec, &mut rand::thread_rng())?,
    };
    let activations: Vec<&str> = network.activations().iter().map(|a| a.name()).collect();
    info!(
        "network {:?} ({}) on {} rows, features {:?}",
        network.layer_sizes(),
        activations.join(", "),
        dataset.len(),
        dataset.feature_names
    );

    let targets = dataset.target_rows();
    let mse = train_loop(&mut network, &dataset.features, &targets, &config.train_config(), &mut LogSink);
    info!("Training complete! final MSE {mse:.6}");

    println!("Predictions:");
    for (input, actual) in dataset.features.iter().zip(&dataset.targets) {
        let predicted = network.predict(input);
        println!("Actual value: {actual} -> Predicted value: {}", predicted[0]);
    }
    Ok(())
}

fn run_regress(loader: &DataLoader, path: &str, degree: usize, predict: Option<&str>) -> Result<()> {
    let dataset = load(loader, path)?;

    let model: Box<dyn Regressor> = if dataset.feature_names.len() == 1 {
        let x = dataset.feature_column(0);
        if degree == 1 {
            let model = LinearRegression::fit(&x, &dataset.targets)?;
            println!("Slope (m): {}", model.slope());
            println!("Intercept (b): {}", model.intercept());
            Box::new(model)
        } else {
            let model = PolynomialRegression::fit(&x, &dataset.targets, degree)?;
            println!("Intercept: {}", model.intercept());
            println!("Coefficients (x^1..x^{degree}): {:?}", model.coefficients());
            Box::new(model)
        }
    } else {
        let model = MultivariatePolynomialRegression::fit(&dataset.features, &dataset.targets, degree)?;
        println!("Intercept: {}", model.intercept());
        println!(
            "Coefficients per feature {:?} (x^1..x^{degree}): {:?}",
            dataset.feature_names,
            model.coefficients()
        );
        Box::new(model)
    };

    let mse = model.evaluate_mse(&dataset.features, &dataset.targets)?;
    println!("Training MSE: {mse:.6}");

    if let Some(timestamp) = predict {
        let mut features = vec![loader.converter().date_to_intervals(timestamp)? as f64];
        if let Some(last) = dataset.features.last() {
            features.extend(&last[1..]);
        }
        let predicted = model.predict_features(&features)?;
        println!("Predicted value for {timestamp}: {predicted}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn log_level_is_accepted_on_either_side_of_the_subcommand() {
        let before = Cli::try_parse_from(["forecast-nn", "--log-level", "debug", "neural", "--config", "e.json"]).unwrap();
        let after = Cli::try_parse_from(["forecast-nn", "neural", "--config", "e.json", "--log-level", "debug"]).unwrap();

        assert_eq!(before.log_level, "debug");
        assert_eq!(after.log_level, "debug");
        assert!(matches!(after.command, Commands::Neural { ref config } if config == "e.json"));
    }

    #[test]
    fn regress_splits_features_on_commas() {
        let cli = Cli::try_parse_from([
            "forecast-nn", "regress", "--data", "f.csv", "--start", "2024-01-01", "--features", "volume,open", "-l", "warn",
        ])
        .unwrap();

        assert_eq!(cli.log_level, "warn");
        match cli.command {
            Commands::Regress { features, degree, .. } => {
                assert_eq!(features, vec!["volume", "open"]);
                assert_eq!(degree, 1);
            }
            Commands::Neural { .. } => panic!("expected regress"),
        }
    }
}
