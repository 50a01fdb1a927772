//! Pairwise scatter matrix with per-class density curves on the diagonal.

use super::palette::group_color;
use super::renderer::{
    padded_range, render_png, value_bounds, Canvas, FONT, PAIR_CELL_SIZE, PAIR_LEGEND_WIDTH,
};
use super::ChartError;
use crate::stats::StatsCalculator;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Points evaluated along each density curve.
const KDE_POINTS: usize = 200;

/// Sampled rows feeding the pairwise matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct PairData {
    pub columns: Vec<String>,
    /// `values[column][row]`.
    pub values: Vec<Vec<Option<f64>>>,
    /// Target class of each row.
    pub labels: Vec<Option<String>>,
    /// Legend order of the classes.
    pub classes: Vec<String>,
}

impl PairData {
    /// Complete `(x, y)` pairs of class `class` for two columns.
    fn points(&self, x_col: usize, y_col: usize, class: &str) -> Vec<(f64, f64)> {
        self.values[x_col]
            .iter()
            .zip(&self.values[y_col])
            .zip(&self.labels)
            .filter_map(|((x, y), label)| match (x, y, label) {
                (Some(x), Some(y), Some(l)) if l == class => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Present values of one column for class `class`.
    fn column_values(&self, col: usize, class: &str) -> Vec<f64> {
        self.values[col]
            .iter()
            .zip(&self.labels)
            .filter_map(|(v, label)| match (v, label) {
                (Some(v), Some(l)) if l == class => Some(*v),
                _ => None,
            })
            .collect()
    }

    fn axis_range(&self, col: usize) -> Range<f64> {
        let (lo, hi) = value_bounds(&self.values[col]);
        padded_range(lo, hi, 0.05)
    }
}

/// Scatter matrix of `data.columns`, colored by target class.
pub fn draw_pairplot(path: &Path, target: &str, data: &PairData) -> Result<(), ChartError> {
    let k = data.columns.len().max(1);
    let side = PAIR_CELL_SIZE * k as u32;
    let size = (side + PAIR_LEGEND_WIDTH, side);

    render_png(path, size, |root| {
        let (matrix, legend) = root.split_horizontally(side);
        let cells = matrix.split_evenly((k, k));
        for (idx, cell) in cells.iter().enumerate() {
            let (row, col) = (idx / k, idx % k);
            if row >= data.columns.len() || col >= data.columns.len() {
                continue;
            }
            if row == col {
                draw_density_cell(cell, data, col, row + 1 == k)?;
            } else {
                draw_scatter_cell(cell, data, col, row, row + 1 == k, col == 0)?;
            }
        }
        draw_legend(&legend, target, &data.classes)?;
        Ok(())
    })
}

fn draw_scatter_cell(
    area: &Canvas<'_>,
    data: &PairData,
    x_col: usize,
    y_col: usize,
    bottom: bool,
    left: bool,
) -> Result<(), ChartError> {
    let mut chart = ChartBuilder::on(area)
        .margin(6)
        .x_label_area_size(if bottom { 40 } else { 20 })
        .y_label_area_size(if left { 50 } else { 35 })
        .build_cartesian_2d(data.axis_range(x_col), data.axis_range(y_col))?;

    let mut mesh = chart.configure_mesh();
    mesh.x_labels(4).y_labels(4).label_style((FONT, 10));
    if bottom {
        mesh.x_desc(data.columns[x_col].as_str());
    }
    if left {
        mesh.y_desc(data.columns[y_col].as_str());
    }
    mesh.axis_desc_style((FONT, 13)).draw()?;

    for (h, class) in data.classes.iter().enumerate() {
        let color = group_color(h);
        let points = data.points(x_col, y_col, class);
        chart.draw_series(
            points
                .into_iter()
                .map(|(x, y)| Circle::new((x, y), 2, color.mix(0.7).filled())),
        )?;
    }
    Ok(())
}

fn draw_density_cell(
    area: &Canvas<'_>,
    data: &PairData,
    col: usize,
    bottom: bool,
) -> Result<(), ChartError> {
    let x_range = data.axis_range(col);
    let curves: Vec<Vec<(f64, f64)>> = data
        .classes
        .iter()
        .map(|class| {
            StatsCalculator::gaussian_kde(&data.column_values(col, class), KDE_POINTS)
                .into_iter()
                .filter(|(x, _)| x_range.contains(x))
                .collect()
        })
        .collect();
    let y_max = curves
        .iter()
        .flatten()
        .map(|(_, d)| *d)
        .fold(0.0_f64, f64::max);
    let y_range = if y_max > 0.0 { 0.0..y_max * 1.1 } else { 0.0..1.0 };

    let mut chart = ChartBuilder::on(area)
        .margin(6)
        .x_label_area_size(if bottom { 40 } else { 20 })
        .y_label_area_size(if col == 0 { 50 } else { 35 })
        .build_cartesian_2d(x_range, y_range)?;

    let y_formatter = |v: &f64| format!("{:.2}", v);
    let mut mesh = chart.configure_mesh();
    mesh.x_labels(4)
        .y_labels(3)
        .y_label_formatter(&y_formatter)
        .label_style((FONT, 10));
    if bottom {
        mesh.x_desc(data.columns[col].as_str());
    }
    if col == 0 {
        mesh.y_desc("Density");
    }
    mesh.axis_desc_style((FONT, 13)).draw()?;

    for (h, curve) in curves.into_iter().enumerate() {
        if curve.is_empty() {
            continue;
        }
        chart.draw_series(LineSeries::new(curve, group_color(h).stroke_width(2)))?;
    }
    Ok(())
}

fn draw_legend(area: &Canvas<'_>, target: &str, classes: &[String]) -> Result<(), ChartError> {
    let x = 15;
    let mut y = 30;
    area.draw(&Text::new(target.to_string(), (x, y), (FONT, 16)))?;
    y += 30;
    for (h, class) in classes.iter().enumerate() {
        area.draw(&Rectangle::new(
            [(x, y), (x + 14, y + 14)],
            group_color(h).filled(),
        ))?;
        area.draw(&Text::new(class.clone(), (x + 22, y), (FONT, 14)))?;
        y += 24;
    }
    Ok(())
}
