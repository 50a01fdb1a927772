//! Top-level error type of the exploration pipeline.

use crate::charts::ChartError;
use crate::data::{LoaderError, ProcessorError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdaError {
    /// The configured class label column is not in the dataset.
    #[error("Target column '{0}' not found in dataset.")]
    MissingTargetColumn(String),

    #[error(transparent)]
    Loader(#[from] LoaderError),

    #[error(transparent)]
    Processor(#[from] ProcessorError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EdaError {
    /// True when the input dataset file does not exist.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, EdaError::Loader(LoaderError::NotFound { .. }))
    }
}

pub type Result<T> = std::result::Result<T, EdaError>;
