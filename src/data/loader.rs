//! CSV Data Loader Module
//! Handles dataset loading and output directory preparation using Polars.

use polars::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Rows scanned by the CSV reader to infer column dtypes.
const INFER_SCHEMA_ROWS: usize = 10_000;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Dataset not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Load a CSV file with a header row into a DataFrame.
///
/// Fails with [`LoaderError::NotFound`] carrying the absolute path when the
/// file does not exist. No schema validation is done beyond dtype inference.
pub fn load_data(path: &Path) -> Result<DataFrame, LoaderError> {
    if !path.exists() {
        return Err(LoaderError::NotFound {
            path: resolve_path(path),
        });
    }

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .finish()?
        .collect()?;

    log::info!(
        "Loaded {} ({} rows x {} columns)",
        path.display(),
        df.height(),
        df.width()
    );
    Ok(df)
}

/// Create a directory and any missing parents.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

/// Absolute form of `path`, without requiring it to exist.
pub fn resolve_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_reports_absolute_path() {
        let err = load_data(Path::new("no/such/dir/data.csv")).unwrap_err();
        match err {
            LoaderError::NotFound { path } => {
                assert!(path.is_absolute());
                assert!(path.ends_with("no/such/dir/data.csv"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn not_found_message_names_the_path() {
        let err = LoaderError::NotFound {
            path: PathBuf::from("/tmp/x.csv"),
        };
        assert_eq!(err.to_string(), "Dataset not found: /tmp/x.csv");
    }

    #[test]
    fn loads_csv_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.csv");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "Gender,Age,Label").unwrap();
        writeln!(file, "Male,21.5,A").unwrap();
        writeln!(file, "Female,30,B").unwrap();
        drop(file);

        let df = load_data(&path).unwrap();
        assert_eq!(df.shape(), (2, 3));
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["Gender", "Age", "Label"]);
        assert!(df.column("Age").unwrap().dtype().is_float());
        assert!(df.column("Gender").unwrap().dtype().is_string());
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
