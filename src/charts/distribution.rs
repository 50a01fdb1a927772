//! Bar charts: target class proportions and per-feature class counts.

use super::palette::group_color;
use super::renderer::{
    category_label, grid_rows, grid_size, render_png, Canvas, FONT, GRID_COLUMNS,
    TARGET_DISTRIBUTION_SIZE,
};
use super::ChartError;
use plotters::prelude::*;
use std::path::Path;

/// Fraction of a category slot covered by its bars.
const GROUP_WIDTH: f64 = 0.8;

/// Class counts for one categorical feature.
#[derive(Debug, Clone, PartialEq)]
pub struct CountPanel {
    pub column: String,
    /// Category values in first-appearance order.
    pub categories: Vec<String>,
    /// `counts[category][class]`.
    pub counts: Vec<Vec<usize>>,
}

impl CountPanel {
    fn max_count(&self) -> usize {
        self.counts
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// Bar chart of target class proportions, in the order given.
pub fn draw_target_distribution(
    path: &Path,
    target: &str,
    proportions: &[(String, f64)],
) -> Result<(), ChartError> {
    let labels: Vec<String> = proportions.iter().map(|(label, _)| label.clone()).collect();
    let slots = proportions.len().max(1);
    let y_max = proportions
        .iter()
        .map(|(_, p)| *p)
        .fold(0.0_f64, f64::max)
        .max(0.01);

    render_png(path, TARGET_DISTRIBUTION_SIZE, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption(format!("Target Proportion ({target})"), (FONT, 24))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(-0.5..(slots as f64 - 0.5), 0.0..(y_max * 1.1))?;

        let x_formatter = |v: &f64| category_label(&labels, *v);
        let y_formatter = |v: &f64| format!("{:.2}", v);
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(slots)
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter)
            .x_desc(target)
            .y_desc("Percentage")
            .axis_desc_style((FONT, 16))
            .label_style((FONT, 13))
            .draw()?;

        let color = group_color(0);
        chart.draw_series(proportions.iter().enumerate().map(|(i, (_, p))| {
            let x = i as f64;
            Rectangle::new(
                [(x - GROUP_WIDTH / 2.0, 0.0), (x + GROUP_WIDTH / 2.0, *p)],
                color.filled(),
            )
        }))?;
        Ok(())
    })
}

/// Grid of grouped count plots, one panel per categorical feature, bars
/// colored by target class. Unused cells of the last row stay blank.
pub fn draw_categorical_impact(
    path: &Path,
    target: &str,
    classes: &[String],
    panels: &[CountPanel],
) -> Result<(), ChartError> {
    render_png(path, grid_size(panels.len()), |root| {
        let cells = root.split_evenly((grid_rows(panels.len()), GRID_COLUMNS));
        for (panel, cell) in panels.iter().zip(cells.iter()) {
            draw_count_panel(cell, target, classes, panel)?;
        }
        Ok(())
    })
}

fn draw_count_panel(
    area: &Canvas<'_>,
    target: &str,
    classes: &[String],
    panel: &CountPanel,
) -> Result<(), ChartError> {
    let slots = panel.categories.len().max(1);
    let y_max = panel.max_count().max(1) as f64;

    let mut chart = ChartBuilder::on(area)
        .caption(format!("{} by {}", target, panel.column), (FONT, 20))
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(-0.5..(slots as f64 - 0.5), 0.0..(y_max * 1.15))?;

    let x_formatter = |v: &f64| category_label(&panel.categories, *v);
    let y_formatter = |v: &f64| format!("{:.0}", v);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .x_desc(panel.column.as_str())
        .y_desc("count")
        .axis_desc_style((FONT, 14))
        .label_style((FONT, 12))
        .draw()?;

    let hues = classes.len().max(1);
    let bar_width = GROUP_WIDTH / hues as f64;
    for (h, class) in classes.iter().enumerate() {
        let color = group_color(h);
        let bars = panel.counts.iter().enumerate().filter_map(|(c, row)| {
            let count = row.get(h).copied().unwrap_or(0);
            if count == 0 {
                return None;
            }
            let left = c as f64 - GROUP_WIDTH / 2.0 + h as f64 * bar_width;
            Some(Rectangle::new(
                [(left, 0.0), (left + bar_width, count as f64)],
                color.filled(),
            ))
        });
        chart
            .draw_series(bars)?
            .label(class.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    if !classes.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .label_font((FONT, 11))
            .draw()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_count_spans_all_classes() {
        let panel = CountPanel {
            column: "Gender".to_string(),
            categories: vec!["Male".to_string(), "Female".to_string()],
            counts: vec![vec![3, 1], vec![0, 7]],
        };
        assert_eq!(panel.max_count(), 7);
    }

    #[test]
    fn draws_distribution_and_count_grid() {
        let dir = tempfile::tempdir().unwrap();
        let dist = dir.path().join("dist.png");
        let props = vec![("A".to_string(), 0.75), ("B".to_string(), 0.25)];
        draw_target_distribution(&dist, "Label", &props).unwrap();
        let img = image::open(&dist).unwrap();
        assert_eq!((img.width(), img.height()), TARGET_DISTRIBUTION_SIZE);

        let grid = dir.path().join("grid.png");
        let classes = vec!["A".to_string(), "B".to_string()];
        let panels: Vec<CountPanel> = ["Gender", "Smoker", "Diet"]
            .iter()
            .map(|name| CountPanel {
                column: name.to_string(),
                categories: vec!["x".to_string(), "y".to_string()],
                counts: vec![vec![2, 1], vec![0, 3]],
            })
            .collect();
        draw_categorical_impact(&grid, "Label", &classes, &panels).unwrap();
        let img = image::open(&grid).unwrap();
        assert_eq!((img.width(), img.height()), (1600, 1000));
    }
}
