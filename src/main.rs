//! Obesity EDA command line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use obesity_eda::config::{DEFAULT_DATA_PATH, DEFAULT_OUT_DIR, DEFAULT_TARGET_COL};
use obesity_eda::{run_eda, EdaConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "obesity-eda", version, about = "Exploratory analysis of the obesity dataset")]
struct Cli {
    /// CSV dataset to analyze
    #[arg(default_value = DEFAULT_DATA_PATH)]
    input: PathBuf,

    /// Class label column
    #[arg(default_value = DEFAULT_TARGET_COL)]
    target: String,

    /// Directory the charts are written to
    #[arg(default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = EdaConfig::default()
        .with_input_path(cli.input)
        .with_target_column(cli.target)
        .with_output_dir(cli.out_dir);
    log::debug!("Running with {:?}", config);

    run_eda(&config).with_context(|| {
        format!("EDA failed for {}", config.input_path.display())
    })?;
    Ok(())
}
