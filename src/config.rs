//! Pipeline configuration and fixed output names.

use std::fmt;
use std::path::{Path, PathBuf};

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/raw/ObesityDataSet_raw_and_data_sinthetic.csv";
/// Default class label column.
pub const DEFAULT_TARGET_COL: &str = "NObeyesdad";
/// Default directory for chart images.
pub const DEFAULT_OUT_DIR: &str = "data";

/// Number of categorical columns drawn in the count grid.
pub const MAX_CATEGORICAL_PLOTS: usize = 6;
/// Number of numeric columns drawn in the boxplot grid.
pub const MAX_NUMERIC_PLOTS: usize = 6;
/// Number of numeric columns in the pairwise matrix.
pub const MAX_PAIR_COLUMNS: usize = 4;
/// Upper bound on rows sampled for the pairwise matrix.
pub const PAIR_SAMPLE_SIZE: usize = 800;
/// Seed for the pairwise sample so repeated runs draw the same rows.
pub const SAMPLE_SEED: u64 = 42;
/// Columns listed in the missing-value ranking.
pub const MISSING_REPORT_LIMIT: usize = 30;

/// One output image of the exploration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    TargetDistribution,
    CategoricalImpact,
    NumericalBoxplots,
    MultivariatePairplot,
    CorrelationHeatmap,
}

impl Artifact {
    /// All artifacts, in the order the pipeline produces them.
    pub const ALL: [Artifact; 5] = [
        Artifact::TargetDistribution,
        Artifact::CategoricalImpact,
        Artifact::NumericalBoxplots,
        Artifact::MultivariatePairplot,
        Artifact::CorrelationHeatmap,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Artifact::TargetDistribution => "target_distribution.png",
            Artifact::CategoricalImpact => "categorical_impact.png",
            Artifact::NumericalBoxplots => "numerical_boxplots.png",
            Artifact::MultivariatePairplot => "multivariate_pairplot.png",
            Artifact::CorrelationHeatmap => "correlation_heatmap.png",
        }
    }

    pub fn path_in(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(self.file_name())
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Inputs of a single exploration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdaConfig {
    pub input_path: PathBuf,
    pub target_column: String,
    pub output_dir: PathBuf,
}

impl Default for EdaConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_DATA_PATH),
            target_column: DEFAULT_TARGET_COL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl EdaConfig {
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_target_column(mut self, target: impl Into<String>) -> Self {
        self.target_column = target.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dataset_layout() {
        let config = EdaConfig::default();
        assert_eq!(
            config.input_path,
            PathBuf::from("data/raw/ObesityDataSet_raw_and_data_sinthetic.csv")
        );
        assert_eq!(config.target_column, "NObeyesdad");
        assert_eq!(config.output_dir, PathBuf::from("data"));
    }

    #[test]
    fn builder_overrides_fields() {
        let config = EdaConfig::default()
            .with_input_path("in.csv")
            .with_target_column("label")
            .with_output_dir("out");
        assert_eq!(config.input_path, PathBuf::from("in.csv"));
        assert_eq!(config.target_column, "label");
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn artifact_names_are_fixed() {
        let names: Vec<&str> = Artifact::ALL.iter().map(|a| a.file_name()).collect();
        assert_eq!(
            names,
            vec![
                "target_distribution.png",
                "categorical_impact.png",
                "numerical_boxplots.png",
                "multivariate_pairplot.png",
                "correlation_heatmap.png",
            ]
        );
        assert_eq!(
            Artifact::CorrelationHeatmap.path_in(Path::new("out")),
            PathBuf::from("out/correlation_heatmap.png")
        );
    }
}
