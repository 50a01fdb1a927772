//! Data Processor Module
//! Turns Polars columns into plain values for the statistics and chart layers.

use polars::prelude::*;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),
}

/// Non-target columns split by declared dtype, each in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnKinds {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    dtype.is_primitive_numeric()
}

fn is_categorical_dtype(dtype: &DataType) -> bool {
    dtype.is_string() || dtype.is_bool() || dtype.is_categorical()
}

/// Handles column selection and value extraction.
pub struct DataProcessor;

impl DataProcessor {
    /// Partition every column except `target` into numeric and categorical sets.
    ///
    /// Columns of other dtypes (dates, lists, ...) land in neither set.
    pub fn classify_columns(df: &DataFrame, target: &str) -> ColumnKinds {
        let mut kinds = ColumnKinds::default();
        for column in df.get_columns() {
            let name = column.name().as_str();
            if name == target {
                continue;
            }
            if is_numeric_dtype(column.dtype()) {
                kinds.numeric.push(name.to_string());
            } else if is_categorical_dtype(column.dtype()) {
                kinds.categorical.push(name.to_string());
            }
        }
        kinds
    }

    /// Null count per column, highest first, keeping file order for ties.
    pub fn missing_value_ranking(df: &DataFrame, limit: usize) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = df
            .get_columns()
            .iter()
            .map(|col| (col.name().to_string(), col.null_count()))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(limit);
        counts
    }

    fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, ProcessorError> {
        df.column(name)
            .map_err(|_| ProcessorError::ColumnNotFound(name.to_string()))
    }

    /// Values of a column rendered as strings; nulls stay `None`.
    pub fn category_strings(
        df: &DataFrame,
        name: &str,
    ) -> Result<Vec<Option<String>>, ProcessorError> {
        let column = Self::column(df, name)?;
        let as_str = column.cast(&DataType::String)?;
        let ca = as_str.str()?;
        Ok(ca.into_iter().map(|v| v.map(str::to_string)).collect())
    }

    /// Values of a column as f64; nulls and NaN become `None`.
    pub fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, ProcessorError> {
        let column = Self::column(df, name)?;
        let as_f64 = column.cast(&DataType::Float64).map_err(|e| {
            log::warn!("Column '{}' cannot be read as numbers: {}", name, e);
            e
        })?;
        let ca = as_f64.f64()?;
        Ok(ca
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()))
            .collect())
    }

    /// Distinct non-null values in order of first appearance.
    pub fn first_appearance_order(values: &[Option<String>]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        for value in values.iter().flatten() {
            if seen.insert(value.as_str()) {
                order.push(value.clone());
            }
        }
        order
    }

    /// Numeric values bucketed by their group label, one bucket per entry of
    /// `order`. Rows with a missing value or a missing label are dropped.
    pub fn values_by_group(
        values: &[Option<f64>],
        groups: &[Option<String>],
        order: &[String],
    ) -> Vec<Vec<f64>> {
        let mut buckets = vec![Vec::new(); order.len()];
        for (value, group) in values.iter().zip(groups) {
            if let (Some(v), Some(g)) = (value, group) {
                if let Some(idx) = order.iter().position(|o| o == g) {
                    buckets[idx].push(*v);
                }
            }
        }
        buckets
    }

    /// Seeded simple random sample (without replacement) of at most `n`
    /// rows, restricted to `columns`.
    pub fn sample_rows(
        df: &DataFrame,
        columns: &[String],
        n: usize,
        seed: u64,
    ) -> Result<DataFrame, ProcessorError> {
        for name in columns {
            Self::column(df, name)?;
        }
        let subset = df.select(columns.iter().map(|c| c.as_str()))?;
        let n = n.min(subset.height());
        Ok(subset.sample_n_literal(n, false, false, Some(seed))?)
    }
}
