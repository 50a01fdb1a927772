//! Statistics Calculator Module
//! Frequencies, box plot summaries, correlations and kernel density estimates.

use statrs::distribution::{Continuous, Normal};
use statrs::statistics::Statistics;
use std::collections::HashMap;

/// Whisker reach as a multiple of the interquartile range.
pub const WHISKER_IQR_FACTOR: f64 = 1.5;

/// Kernel density curves extend this many bandwidths past the data.
pub const KDE_CUT: f64 = 3.0;

/// Five-number summary plus outliers for one box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub count: usize,
    pub mean: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Smallest and largest value the box draws, outliers included.
    pub fn extent(&self) -> (f64, f64) {
        let low = self
            .outliers
            .iter()
            .copied()
            .fold(self.whisker_low, f64::min);
        let high = self
            .outliers
            .iter()
            .copied()
            .fold(self.whisker_high, f64::max);
        (low, high)
    }
}

/// Stateless numeric routines shared by the charts.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Proportion of each distinct non-null value, most frequent first.
    ///
    /// Values with equal counts keep their first-appearance order. The
    /// proportions sum to 1 whenever at least one value is present.
    pub fn value_proportions(values: &[Option<String>]) -> Vec<(String, f64)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for value in values.iter().flatten() {
            match index.get(value.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(value.as_str(), counts.len());
                    counts.push((value.clone(), 1));
                }
            }
        }

        let total: usize = counts.iter().map(|(_, c)| c).sum();
        if total == 0 {
            return Vec::new();
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
            .into_iter()
            .map(|(value, count)| (value, count as f64 / total as f64))
            .collect()
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    /// Box plot summary with Tukey whiskers. `None` for an empty group.
    pub fn box_stats(values: &[f64]) -> Option<BoxStats> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let q1 = Self::percentile(&sorted, 25.0);
        let median = Self::percentile(&sorted, 50.0);
        let q3 = Self::percentile(&sorted, 75.0);
        let iqr = q3 - q1;
        let low_fence = q1 - WHISKER_IQR_FACTOR * iqr;
        let high_fence = q3 + WHISKER_IQR_FACTOR * iqr;

        let whisker_low = sorted
            .iter()
            .copied()
            .find(|&v| v >= low_fence)
            .unwrap_or(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= high_fence)
            .unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < whisker_low || v > whisker_high)
            .collect();

        Some(BoxStats {
            count: sorted.len(),
            mean: values.iter().sum::<f64>() / values.len() as f64,
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }

    /// Pearson correlation over the rows where both sides are present.
    ///
    /// NaN when fewer than two complete pairs remain or either side is
    /// constant.
    pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> f64 {
        let pairs: Vec<(f64, f64)> = xs
            .iter()
            .zip(ys)
            .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
            .collect();

        let n = pairs.len();
        if n < 2 {
            return f64::NAN;
        }

        let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n as f64;
        let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n as f64;

        let mut cov = 0.0;
        let mut var_x = 0.0;
        let mut var_y = 0.0;
        for (x, y) in &pairs {
            let dx = x - mean_x;
            let dy = y - mean_y;
            cov += dx * dy;
            var_x += dx * dx;
            var_y += dy * dy;
        }

        if var_x == 0.0 || var_y == 0.0 {
            return f64::NAN;
        }
        (cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0)
    }

    /// Symmetric matrix of pairwise Pearson correlations.
    pub fn correlation_matrix(columns: &[Vec<Option<f64>>]) -> Vec<Vec<f64>> {
        let n = columns.len();
        let mut matrix = vec![vec![f64::NAN; n]; n];
        for i in 0..n {
            for j in i..n {
                let r = Self::pearson(&columns[i], &columns[j]);
                matrix[i][j] = r;
                matrix[j][i] = r;
            }
        }
        matrix
    }

    /// Scott's rule bandwidth: sample standard deviation times n^(-1/5).
    pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
        if values.len() < 2 {
            return None;
        }
        let std = values.iter().std_dev();
        let bw = std * (values.len() as f64).powf(-0.2);
        (bw.is_finite() && bw > 0.0).then_some(bw)
    }

    /// Gaussian kernel density estimate sampled at `points` evenly spaced
    /// positions covering the data plus [`KDE_CUT`] bandwidths on each side.
    ///
    /// Empty when the bandwidth is undefined (fewer than two values or no
    /// spread).
    pub fn gaussian_kde(values: &[f64], points: usize) -> Vec<(f64, f64)> {
        let Some(bw) = Self::scott_bandwidth(values) else {
            return Vec::new();
        };
        let Ok(kernel) = Normal::new(0.0, bw) else {
            return Vec::new();
        };
        if points < 2 {
            return Vec::new();
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let start = min - KDE_CUT * bw;
        let end = max + KDE_CUT * bw;
        let step = (end - start) / (points - 1) as f64;
        let n = values.len() as f64;

        (0..points)
            .map(|i| {
                let x = start + step * i as f64;
                let density = values.iter().map(|v| kernel.pdf(x - v)).sum::<f64>() / n;
                (x, density)
            })
            .collect()
    }
}
