//! Obesity EDA - exploratory analysis of a tabular obesity dataset.
//!
//! Loads a CSV, prints a console summary and renders five PNG charts
//! describing how the features relate to the class label column.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod explorer;
pub mod stats;

pub use config::{Artifact, EdaConfig};
pub use error::{EdaError, Result};
pub use explorer::{EdaReport, Explorer};

/// Load the configured dataset and run the full exploration over it.
pub fn run_eda(config: &EdaConfig) -> Result<EdaReport> {
    let df = data::load_data(&config.input_path)?;
    Explorer::new(&df, &config.target_column, &config.output_dir).run()
}
