use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use consent_filter_sdk::ReleaseOutcome;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;

use config::{AppConfig, LogFormat, LoggingConfig, Overrides};

/// Release a dataset according to purpose, contract and consent rules.
///
/// The dataset is released in full when the query purpose is listed in the
/// purpose catalog or any contract is active. Otherwise each row keeps only
/// the fields its subject consented to.
#[derive(Parser, Debug)]
#[command(name = "consent-filter", version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (JSON or YAML)
    #[arg(short, long, default_value = "parametros.json")]
    config: PathBuf,

    /// Override the query purpose from the configuration
    #[arg(long)]
    purpose: Option<String>,

    /// Override the output path from the configuration
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    match logging.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn run(config: AppConfig) -> anyhow::Result<ReleaseOutcome> {
    let store = csv_store_plugin::Service::from_config(&config.csv_store)
        .context("invalid csv_store configuration")?;
    let service = consent_filter::Service::from_config(config.filter)
        .context("invalid filter configuration")?;

    service.run(&store).context("consent filter run failed")
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let overrides = Overrides {
        query_purpose: cli.purpose,
        output_path: cli.output,
    };

    let config = match config::load(&cli.config, &overrides) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&LoggingConfig::default(), cli.verbose);
            error!("{e:#}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging, cli.verbose);
    info!(config = %cli.config.display(), "Starting consent filter");

    match run(config) {
        Ok(outcome) => {
            info!(
                basis = outcome.basis.as_str(),
                rows = outcome.table.len(),
                columns = outcome.header.len(),
                "Done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
