//! Charts module - Chart data shaping and rendering

mod builder;
mod plotter;

pub use builder::{BarChartData, ChartBuilder, ChartSeries, LineChartData, BAR_CHART_TITLE};
pub use plotter::ChartPlotter;
