//! Data module - CSV loading and column processing

mod loader;
mod processor;

pub use loader::{ensure_dir, load_data, resolve_path, LoaderError};
pub use processor::{ColumnKinds, DataProcessor, ProcessorError};
