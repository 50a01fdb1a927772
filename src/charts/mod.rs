//! Charts module - Static chart rendering to PNG

mod boxplot;
mod distribution;
mod heatmap;
mod pairplot;
mod palette;
mod renderer;

use plotters::prelude::DrawingAreaErrorKind;
use thiserror::Error;

pub use boxplot::{draw_numeric_boxplots, BoxPanel};
pub use distribution::{draw_categorical_impact, draw_target_distribution, CountPanel};
pub use heatmap::draw_correlation_heatmap;
pub use pairplot::{draw_pairplot, PairData};
pub use palette::{cool_warm, group_color, PALETTE};
pub use renderer::{
    category_label, grid_rows, grid_size, render_png, GRID_COLUMNS, HEATMAP_SIZE,
    TARGET_DISTRIBUTION_SIZE,
};

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to draw chart: {0}")]
    Draw(String),
    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),
    #[error("Pixel buffer does not match image size")]
    Buffer,
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Draw(err.to_string())
    }
}
