//! Static Chart Renderer
//! Draws into an in-memory RGB buffer with plotters and encodes it as PNG.

use super::ChartError;
use image::RgbImage;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

pub const FONT: &str = "sans-serif";

/// Panels per row in the grid charts.
pub const GRID_COLUMNS: usize = 2;

pub const TARGET_DISTRIBUTION_SIZE: (u32, u32) = (1000, 500);
pub const HEATMAP_SIZE: (u32, u32) = (1000, 800);
pub const GRID_WIDTH: u32 = 1600;
pub const GRID_ROW_HEIGHT: u32 = 500;
pub const PAIR_CELL_SIZE: u32 = 250;
pub const PAIR_LEGEND_WIDTH: u32 = 220;

pub type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Render a chart and write it to `path` as PNG, replacing any existing file.
pub fn render_png<F>(path: &Path, (width, height): (u32, u32), draw: F) -> Result<(), ChartError>
where
    F: FnOnce(&Canvas<'_>) -> Result<(), ChartError>,
{
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;
        draw(&root)?;
        root.present()?;
    }

    let image = RgbImage::from_raw(width, height, buffer).ok_or(ChartError::Buffer)?;
    image.save(path)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Rows needed to lay out `panels` in a grid of [`GRID_COLUMNS`] columns.
pub fn grid_rows(panels: usize) -> usize {
    panels.div_ceil(GRID_COLUMNS).max(1)
}

/// Pixel size of a grid chart holding `panels` subplots.
pub fn grid_size(panels: usize) -> (u32, u32) {
    (GRID_WIDTH, GRID_ROW_HEIGHT * grid_rows(panels) as u32)
}

/// Tick label for a categorical axis whose categories sit on integer
/// positions. Ticks between categories stay unlabelled.
pub fn category_label(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

/// Axis range covering `[min, max]` with a relative margin on both sides.
///
/// Degenerate or empty ranges are widened so plotters always gets a
/// non-empty interval.
pub fn padded_range(min: f64, max: f64, pad: f64) -> std::ops::Range<f64> {
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    if span <= f64::EPSILON {
        return (min - 0.5)..(max + 0.5);
    }
    (min - span * pad)..(max + span * pad)
}

/// Minimum and maximum of the present values, ignoring `None`.
pub fn value_bounds<'a, I>(values: I) -> (f64, f64)
where
    I: IntoIterator<Item = &'a Option<f64>>,
{
    values
        .into_iter()
        .flatten()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_rows_round_up() {
        assert_eq!(grid_rows(1), 1);
        assert_eq!(grid_rows(2), 1);
        assert_eq!(grid_rows(3), 2);
        assert_eq!(grid_rows(6), 3);
        assert_eq!(grid_size(5), (1600, 1500));
    }

    #[test]
    fn category_labels_only_on_integer_ticks() {
        let labels = vec!["Female".to_string(), "Male".to_string()];
        assert_eq!(category_label(&labels, 0.0), "Female");
        assert_eq!(category_label(&labels, 1.0), "Male");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, -1.0), "");
        assert_eq!(category_label(&labels, 2.0), "");
    }

    #[test]
    fn padded_range_handles_degenerate_input() {
        assert_eq!(padded_range(2.0, 2.0, 0.1), 1.5..2.5);
        assert_eq!(padded_range(f64::INFINITY, f64::NEG_INFINITY, 0.1), 0.0..1.0);
        let r = padded_range(0.0, 10.0, 0.1);
        assert!((r.start + 1.0).abs() < 1e-12 && (r.end - 11.0).abs() < 1e-12);
    }

    #[test]
    fn value_bounds_skip_missing() {
        let values = vec![Some(3.0), None, Some(-1.0), Some(7.5)];
        assert_eq!(value_bounds(&values), (-1.0, 7.5));
    }

    #[test]
    fn render_png_writes_requested_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.png");
        render_png(&path, (120, 80), |root| {
            root.draw(&Rectangle::new([(10, 10), (50, 50)], RED.filled()))?;
            Ok(())
        })
        .unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (120, 80));
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(20, 20).0, [255, 0, 0]);
    }
}
