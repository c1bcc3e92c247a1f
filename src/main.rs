// SliceUtils - main.rs
//
// Command-line entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. Running the step pipeline and printing the result as JSON

use clap::Parser;
use sliceutils::core::pipeline::Pipeline;
use sliceutils::core::seq::Growth;
use sliceutils::platform::config::{self, AppConfig};
use sliceutils::util::constants;
use sliceutils::util::error::{Result, SliceUtilsError};
use sliceutils::util::logging;
use std::path::PathBuf;

/// sliceutils - filter, map and push over an integer sequence.
///
/// Steps run in the order given, for example:
/// `sliceutils 1 2 3 4 5 -s filter:even -s map:mul:2 -s push:100`
#[derive(Parser, Debug)]
#[command(name = "sliceutils", version, about)]
struct Cli {
    /// Input sequence.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Pipeline step (repeatable): filter:<predicate>, map:<transform>, push:<n,...>.
    /// Overrides [pipeline] steps from the config file.
    #[arg(short = 's', long = "step")]
    steps: Vec<String>,

    /// Path to config.toml (defaults to ./config.toml when present).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Capacity growth policy for push steps: amortized or exact.
    #[arg(short = 'g', long = "growth")]
    growth: Option<Growth>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// An explicit --config must load cleanly; the implicit ./config.toml is
/// best-effort.
fn load_config(cli: &Cli) -> Result<(AppConfig, Vec<String>)> {
    let path = config::resolve_path(cli.config.as_deref());
    if cli.config.is_some() {
        Ok((config::load_config_strict(&path)?, Vec::new()))
    } else {
        Ok(config::load_config(&path))
    }
}

fn build_pipeline(cli: &Cli, app_config: &AppConfig) -> Result<Pipeline> {
    let pipeline = if cli.steps.is_empty() {
        app_config.pipeline()?
    } else {
        Pipeline::parse(&cli.steps)?.with_growth(app_config.growth)
    };
    Ok(match cli.growth {
        Some(growth) => pipeline.with_growth(growth),
        None => pipeline,
    })
}

fn run(cli: Cli) -> Result<()> {
    let (app_config, warnings) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            // No config level to honour; start logging so the failure is recorded.
            logging::init(cli.debug, None);
            return Err(e);
        }
    };

    logging::init(cli.debug, app_config.log_level.as_deref());
    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "sliceutils starting"
    );
    for warning in &warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let pipeline = build_pipeline(&cli, &app_config)?;
    if pipeline.is_empty() {
        tracing::info!("No steps configured; echoing input");
    }

    let output = pipeline.run(cli.values)?;
    tracing::info!(len = output.len(), "Pipeline finished");

    let json = serde_json::to_string(&output).map_err(|e| SliceUtilsError::Output { source: e })?;
    println!("{json}");
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "sliceutils failed");
        eprintln!("Error: {e}");
        std::process::exit(constants::EXIT_FAILURE);
    }
}
