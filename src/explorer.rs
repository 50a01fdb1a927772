//! Exploration pipeline: console summary plus the five chart artifacts.

use crate::charts::{
    draw_categorical_impact, draw_correlation_heatmap, draw_numeric_boxplots, draw_pairplot,
    draw_target_distribution, BoxPanel, CountPanel, PairData,
};
use crate::config::{
    Artifact, MAX_CATEGORICAL_PLOTS, MAX_NUMERIC_PLOTS, MAX_PAIR_COLUMNS, MISSING_REPORT_LIMIT,
    PAIR_SAMPLE_SIZE, SAMPLE_SEED,
};
use crate::data::{ensure_dir, resolve_path, ColumnKinds, DataProcessor};
use crate::error::{EdaError, Result};
use crate::stats::StatsCalculator;
use polars::prelude::DataFrame;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdaReport {
    /// Absolute output directory.
    pub output_dir: PathBuf,
    /// Artifacts rendered by this run, in pipeline order.
    pub written: Vec<Artifact>,
    /// Artifacts present in the output directory after the run.
    pub present: Vec<Artifact>,
}

/// Runs the exploration steps over one loaded dataset.
pub struct Explorer<'a> {
    df: &'a DataFrame,
    target: String,
    out_dir: PathBuf,
    kinds: ColumnKinds,
}

impl<'a> Explorer<'a> {
    pub fn new(df: &'a DataFrame, target: &str, out_dir: &Path) -> Self {
        Self {
            df,
            target: target.to_string(),
            out_dir: out_dir.to_path_buf(),
            kinds: DataProcessor::classify_columns(df, target),
        }
    }

    pub fn column_kinds(&self) -> &ColumnKinds {
        &self.kinds
    }

    /// Print the summary, check the target column, then render every
    /// artifact whose preconditions hold.
    pub fn run(&self) -> Result<EdaReport> {
        print!("{}", self.summary());

        if self.df.column(&self.target).is_err() {
            return Err(EdaError::MissingTargetColumn(self.target.clone()));
        }

        ensure_dir(&self.out_dir)?;

        let labels = DataProcessor::category_strings(self.df, &self.target)?;
        let classes = DataProcessor::first_appearance_order(&labels);

        let mut written = vec![self.target_distribution(&labels)?];
        written.extend(self.categorical_impact(&labels, &classes)?);
        written.extend(self.numerical_boxplots(&labels, &classes)?);
        written.extend(self.multivariate_pairplot(&classes)?);
        written.extend(self.correlation_heatmap()?);

        Ok(self.finish(written))
    }

    /// Shape, columns, dtypes and missing-value ranking as printed to stdout.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let names: Vec<String> = self
            .df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        let width = names.iter().map(String::len).max().unwrap_or(0);

        let _ = writeln!(out, "--- Dataset Shape ---");
        let _ = writeln!(out, "{:?}", self.df.shape());

        let _ = writeln!(out, "\n--- Columns ---");
        let _ = writeln!(out, "{:?}", names);

        let _ = writeln!(out, "\n--- Dtypes ---");
        for column in self.df.get_columns() {
            let _ = writeln!(
                out,
                "{:<width$}    {}",
                column.name().as_str(),
                column.dtype(),
            );
        }

        let _ = writeln!(out, "\n--- Missing Values ---");
        for (name, count) in DataProcessor::missing_value_ranking(self.df, MISSING_REPORT_LIMIT) {
            let _ = writeln!(out, "{:<width$}    {}", name, count);
        }
        out
    }

    fn artifact_path(&self, artifact: Artifact) -> PathBuf {
        artifact.path_in(&self.out_dir)
    }

    fn target_distribution(&self, labels: &[Option<String>]) -> Result<Artifact> {
        let proportions = StatsCalculator::value_proportions(labels);
        let artifact = Artifact::TargetDistribution;
        draw_target_distribution(&self.artifact_path(artifact), &self.target, &proportions)?;
        Ok(artifact)
    }

    fn categorical_impact(
        &self,
        labels: &[Option<String>],
        classes: &[String],
    ) -> Result<Option<Artifact>> {
        let columns: Vec<&String> = self
            .kinds
            .categorical
            .iter()
            .take(MAX_CATEGORICAL_PLOTS)
            .collect();
        if columns.is_empty() {
            log::debug!("No categorical columns; skipping categorical impact");
            return Ok(None);
        }

        let class_index: HashMap<&str, usize> = classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i))
            .collect();

        let mut panels = Vec::with_capacity(columns.len());
        for column in columns {
            let values = DataProcessor::category_strings(self.df, column)?;
            let categories = DataProcessor::first_appearance_order(&values);
            let category_index: HashMap<&str, usize> = categories
                .iter()
                .enumerate()
                .map(|(i, c)| (c.as_str(), i))
                .collect();

            let mut counts = vec![vec![0usize; classes.len()]; categories.len()];
            for (value, label) in values.iter().zip(labels) {
                if let (Some(v), Some(l)) = (value, label) {
                    if let (Some(&c), Some(&h)) =
                        (category_index.get(v.as_str()), class_index.get(l.as_str()))
                    {
                        counts[c][h] += 1;
                    }
                }
            }

            panels.push(CountPanel {
                column: column.clone(),
                categories,
                counts,
            });
        }

        let artifact = Artifact::CategoricalImpact;
        draw_categorical_impact(&self.artifact_path(artifact), &self.target, classes, &panels)?;
        Ok(Some(artifact))
    }

    fn numerical_boxplots(
        &self,
        labels: &[Option<String>],
        classes: &[String],
    ) -> Result<Option<Artifact>> {
        let columns: Vec<&String> = self.kinds.numeric.iter().take(MAX_NUMERIC_PLOTS).collect();
        if columns.is_empty() {
            log::debug!("No numeric columns; skipping numeric boxplots");
            return Ok(None);
        }

        let mut panels = Vec::with_capacity(columns.len());
        for column in columns {
            let values = DataProcessor::numeric_values(self.df, column)?;
            let boxes = DataProcessor::values_by_group(&values, labels, classes)
                .iter()
                .map(|group| StatsCalculator::box_stats(group))
                .collect();
            panels.push(BoxPanel {
                column: column.clone(),
                boxes,
            });
        }

        let artifact = Artifact::NumericalBoxplots;
        draw_numeric_boxplots(&self.artifact_path(artifact), &self.target, classes, &panels)?;
        Ok(Some(artifact))
    }

    fn multivariate_pairplot(&self, classes: &[String]) -> Result<Option<Artifact>> {
        if self.kinds.numeric.len() < 2 {
            log::debug!("Fewer than 2 numeric columns; skipping pairplot");
            return Ok(None);
        }

        let columns: Vec<String> = self
            .kinds
            .numeric
            .iter()
            .take(MAX_PAIR_COLUMNS)
            .cloned()
            .collect();
        let mut selected = columns.clone();
        selected.push(self.target.clone());
        let sample = DataProcessor::sample_rows(self.df, &selected, PAIR_SAMPLE_SIZE, SAMPLE_SEED)?;

        let values = columns
            .iter()
            .map(|c| DataProcessor::numeric_values(&sample, c))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let data = PairData {
            columns,
            values,
            labels: DataProcessor::category_strings(&sample, &self.target)?,
            classes: classes.to_vec(),
        };

        let artifact = Artifact::MultivariatePairplot;
        draw_pairplot(&self.artifact_path(artifact), &self.target, &data)?;
        Ok(Some(artifact))
    }

    fn correlation_heatmap(&self) -> Result<Option<Artifact>> {
        let columns = &self.kinds.numeric;
        if columns.len() < 2 {
            log::debug!("Fewer than 2 numeric columns; skipping correlation heatmap");
            return Ok(None);
        }

        let values = columns
            .iter()
            .map(|c| DataProcessor::numeric_values(self.df, c))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let matrix = StatsCalculator::correlation_matrix(&values);

        let artifact = Artifact::CorrelationHeatmap;
        draw_correlation_heatmap(&self.artifact_path(artifact), columns, &matrix)?;
        Ok(Some(artifact))
    }

    fn finish(&self, written: Vec<Artifact>) -> EdaReport {
        let output_dir = resolve_path(&self.out_dir);
        println!(
            "\nAdvanced EDA completed. Plots saved in: {}",
            output_dir.display()
        );
        println!("Generated files:");

        let mut present = Vec::new();
        for artifact in Artifact::ALL {
            let path = self.artifact_path(artifact);
            if path.exists() {
                println!(" - {}", path.display());
                present.push(artifact);
            }
        }

        EdaReport {
            output_dir,
            written,
            present,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn obesity_sample() -> DataFrame {
        df!(
            "Gender" => ["Female", "Male", "Male", "Female"],
            "Age" => [21.0, 23.0, 27.0, 22.0],
            "Height" => [1.62, 1.80, 1.80, 1.50],
            "Weight" => [64.0, 77.0, 87.0, 45.0],
            "NObeyesdad" => ["Normal_Weight", "Normal_Weight", "Overweight_Level_I", "Insufficient_Weight"]
        )
        .unwrap()
    }

    #[test]
    fn summary_reports_shape_columns_and_missing() {
        let df = obesity_sample();
        let explorer = Explorer::new(&df, "NObeyesdad", Path::new("unused"));
        let summary = explorer.summary();
        assert!(summary.contains("--- Dataset Shape ---\n(4, 5)\n"));
        assert!(summary.contains(r#"["Gender", "Age", "Height", "Weight", "NObeyesdad"]"#));
        assert!(summary.contains("--- Dtypes ---"));
        assert!(summary.contains("--- Missing Values ---"));
    }

    #[test]
    fn classification_excludes_target() {
        let df = obesity_sample();
        let explorer = Explorer::new(&df, "NObeyesdad", Path::new("unused"));
        assert_eq!(explorer.column_kinds().numeric, vec!["Age", "Height", "Weight"]);
        assert_eq!(explorer.column_kinds().categorical, vec!["Gender"]);
    }

    #[test]
    fn missing_target_fails_before_creating_output() {
        let df = obesity_sample();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("plots");
        let err = Explorer::new(&df, "Class", &out).run().unwrap_err();
        assert!(matches!(err, EdaError::MissingTargetColumn(ref c) if c == "Class"));
        assert!(!out.exists());
    }

    #[test]
    fn run_writes_all_artifacts() {
        let df = obesity_sample();
        let dir = tempfile::tempdir().unwrap();
        let report = Explorer::new(&df, "NObeyesdad", dir.path()).run().unwrap();
        assert_eq!(report.written, Artifact::ALL.to_vec());
        assert_eq!(report.present, Artifact::ALL.to_vec());
        assert!(report.output_dir.is_absolute());
    }
}
