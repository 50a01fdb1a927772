//! Box plots of numeric features split by target class.

use super::palette::group_color;
use super::renderer::{
    category_label, grid_rows, grid_size, padded_range, render_png, Canvas, FONT, GRID_COLUMNS,
};
use super::ChartError;
use crate::stats::BoxStats;
use plotters::prelude::*;
use std::path::Path;

const BOX_HALF_WIDTH: f64 = 0.3;
const CAP_HALF_WIDTH: f64 = 0.12;

/// Per-class box summaries for one numeric feature.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPanel {
    pub column: String,
    /// One entry per target class; `None` when the class has no values.
    pub boxes: Vec<Option<BoxStats>>,
}

impl BoxPanel {
    fn value_range(&self) -> (f64, f64) {
        self.boxes
            .iter()
            .flatten()
            .map(BoxStats::extent)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (l, h)| {
                (lo.min(l), hi.max(h))
            })
    }
}

/// Grid of box plots, one panel per numeric feature, one box per class.
pub fn draw_numeric_boxplots(
    path: &Path,
    target: &str,
    classes: &[String],
    panels: &[BoxPanel],
) -> Result<(), ChartError> {
    render_png(path, grid_size(panels.len()), |root| {
        let cells = root.split_evenly((grid_rows(panels.len()), GRID_COLUMNS));
        for (panel, cell) in panels.iter().zip(cells.iter()) {
            draw_box_panel(cell, target, classes, panel)?;
        }
        Ok(())
    })
}

fn draw_box_panel(
    area: &Canvas<'_>,
    target: &str,
    classes: &[String],
    panel: &BoxPanel,
) -> Result<(), ChartError> {
    let slots = classes.len().max(1);
    let (lo, hi) = panel.value_range();

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("{} distribution by {}", panel.column, target),
            (FONT, 20),
        )
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..(slots as f64 - 0.5), padded_range(lo, hi, 0.05))?;

    let x_formatter = |v: &f64| category_label(classes, *v);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&x_formatter)
        .x_desc(target)
        .y_desc(panel.column.as_str())
        .axis_desc_style((FONT, 14))
        .label_style((FONT, 12))
        .draw()?;

    for (i, stats) in panel.boxes.iter().enumerate() {
        let Some(stats) = stats else {
            continue;
        };
        let x = i as f64;
        let color = group_color(i);
        let outline = BLACK.stroke_width(1);

        chart.draw_series([
            Rectangle::new(
                [(x - BOX_HALF_WIDTH, stats.q1), (x + BOX_HALF_WIDTH, stats.q3)],
                color.mix(0.8).filled(),
            ),
            Rectangle::new(
                [(x - BOX_HALF_WIDTH, stats.q1), (x + BOX_HALF_WIDTH, stats.q3)],
                outline,
            ),
        ])?;

        chart.draw_series([
            PathElement::new(
                vec![(x - BOX_HALF_WIDTH, stats.median), (x + BOX_HALF_WIDTH, stats.median)],
                BLACK.stroke_width(2),
            ),
            PathElement::new(vec![(x, stats.q3), (x, stats.whisker_high)], outline),
            PathElement::new(vec![(x, stats.q1), (x, stats.whisker_low)], outline),
            PathElement::new(
                vec![
                    (x - CAP_HALF_WIDTH, stats.whisker_high),
                    (x + CAP_HALF_WIDTH, stats.whisker_high),
                ],
                outline,
            ),
            PathElement::new(
                vec![
                    (x - CAP_HALF_WIDTH, stats.whisker_low),
                    (x + CAP_HALF_WIDTH, stats.whisker_low),
                ],
                outline,
            ),
        ])?;

        chart.draw_series(
            stats
                .outliers
                .iter()
                .map(|&v| Circle::new((x, v), 3, outline)),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatsCalculator;

    #[test]
    fn value_range_includes_outliers_and_skips_empty_boxes() {
        let mut values: Vec<f64> = (1..=9).map(f64::from).collect();
        values.push(100.0);
        let panel = BoxPanel {
            column: "Age".to_string(),
            boxes: vec![
                StatsCalculator::box_stats(&values),
                None,
                StatsCalculator::box_stats(&[-4.0, 0.0]),
            ],
        };
        assert_eq!(panel.value_range(), (-4.0, 100.0));
    }

    #[test]
    fn draws_single_panel_grid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boxes.png");
        let classes = vec!["A".to_string(), "B".to_string()];
        let panels = vec![BoxPanel {
            column: "Age".to_string(),
            boxes: vec![
                StatsCalculator::box_stats(&[20.0, 22.0, 25.0, 60.0]),
                StatsCalculator::box_stats(&[30.0]),
            ],
        }];
        draw_numeric_boxplots(&path, "Label", &classes, &panels).unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (1600, 500));
    }
}
