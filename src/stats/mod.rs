//! Stats module - descriptive statistics behind the charts

mod calculator;

pub use calculator::{BoxStats, StatsCalculator, KDE_CUT, WHISKER_IQR_FACTOR};
