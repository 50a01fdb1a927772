//! Annotated correlation heatmap.

use super::palette::cool_warm;
use super::renderer::{category_label, render_png, Canvas, FONT, HEATMAP_SIZE};
use super::ChartError;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const COLORBAR_WIDTH: u32 = 110;
const COLORBAR_STEPS: usize = 100;

/// Above this magnitude the annotation switches to white for contrast.
const LIGHT_TEXT_THRESHOLD: f64 = 0.6;

/// Heatmap of a square correlation `matrix` labelled by `columns`, with
/// each cell annotated to two decimals. NaN cells are left blank.
pub fn draw_correlation_heatmap(
    path: &Path,
    columns: &[String],
    matrix: &[Vec<f64>],
) -> Result<(), ChartError> {
    render_png(path, HEATMAP_SIZE, |root| {
        let titled = root.titled("Numeric Feature Correlation Heatmap", (FONT, 24))?;
        let (plot_area, bar_area) = titled.split_horizontally(HEATMAP_SIZE.0 - COLORBAR_WIDTH);
        draw_cells(&plot_area, columns, matrix)?;
        draw_colorbar(&bar_area)?;
        Ok(())
    })
}

fn draw_cells(
    area: &Canvas<'_>,
    columns: &[String],
    matrix: &[Vec<f64>],
) -> Result<(), ChartError> {
    let n = columns.len().max(1);
    // Row 0 is drawn at the top.
    let row_labels: Vec<String> = columns.iter().rev().cloned().collect();

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(120)
        .build_cartesian_2d(-0.5..(n as f64 - 0.5), -0.5..(n as f64 - 0.5))?;

    let x_formatter = |v: &f64| category_label(columns, *v);
    let y_formatter = |v: &f64| category_label(&row_labels, *v);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .label_style((FONT, 13))
        .draw()?;

    let cells: Vec<(f64, f64, f64)> = matrix
        .iter()
        .enumerate()
        .flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(j, &r)| (j as f64, (n - 1 - i) as f64, r))
        })
        .filter(|(_, _, r)| !r.is_nan())
        .collect();

    chart.draw_series(cells.iter().map(|&(x, y, r)| {
        Rectangle::new([(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)], cool_warm(r).filled())
    }))?;
    chart.draw_series(cells.iter().map(|&(x, y, r)| {
        Rectangle::new([(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)], WHITE.stroke_width(1))
    }))?;

    let centered = Pos::new(HPos::Center, VPos::Center);
    chart.draw_series(cells.iter().map(|&(x, y, r)| {
        let color = if r.abs() > LIGHT_TEXT_THRESHOLD { &WHITE } else { &BLACK };
        Text::new(
            format!("{:.2}", r),
            (x, y),
            (FONT, 14).into_font().color(color).pos(centered),
        )
    }))?;
    Ok(())
}

fn draw_colorbar(area: &Canvas<'_>) -> Result<(), ChartError> {
    let mut chart = ChartBuilder::on(area)
        .margin_top(15)
        .margin_bottom(75)
        .margin_right(15)
        .y_label_area_size(45)
        .build_cartesian_2d(0.0..1.0, -1.0..1.0)?;

    let y_formatter = |v: &f64| format!("{:.1}", v);
    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_labels(5)
        .y_label_formatter(&y_formatter)
        .label_style((FONT, 12))
        .draw()?;

    let step = 2.0 / COLORBAR_STEPS as f64;
    chart.draw_series((0..COLORBAR_STEPS).map(|i| {
        let low = -1.0 + i as f64 * step;
        Rectangle::new(
            [(0.0, low), (1.0, low + step)],
            cool_warm(low + step / 2.0).filled(),
        )
    }))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_matrix_with_undefined_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corr.png");
        let columns = vec!["Age".to_string(), "Height".to_string(), "Flat".to_string()];
        let matrix = vec![
            vec![1.0, -0.42, f64::NAN],
            vec![-0.42, 1.0, f64::NAN],
            vec![f64::NAN, f64::NAN, f64::NAN],
        ];
        draw_correlation_heatmap(&path, &columns, &matrix).unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), HEATMAP_SIZE);
    }
}
