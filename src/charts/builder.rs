//! Chart Builder Module
//! Shapes the top-N table into plain chart data, independent of any drawing backend.

use crate::data::{DataProcessor, ProcessorError, CONFIRMED_COL, DEATHS_COL, RECOVERED_COL};
use polars::prelude::DataFrame;

pub const BAR_CHART_TITLE: &str = "Confirmed vs Deaths vs Recovered";

/// One named series of values, aligned with the chart's categories.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Grouped bar chart: one group of bars per category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarChartData {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// Line chart over a categorical x axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineChartData {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub markers: bool,
}

impl BarChartData {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl LineChartData {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Builds chart data from the ranking table.
pub struct ChartBuilder;

impl ChartBuilder {
    /// Confirmed, Deaths and Recovered per country, in table order.
    pub fn bar_chart(top: &DataFrame) -> Result<BarChartData, ProcessorError> {
        Ok(BarChartData {
            title: BAR_CHART_TITLE.to_string(),
            categories: Self::categories(top)?,
            series: Self::series(top, &[CONFIRMED_COL, DEATHS_COL, RECOVERED_COL])?,
        })
    }

    /// Confirmed and Deaths per country, joined in table order.
    pub fn line_chart(top: &DataFrame, n: usize) -> Result<LineChartData, ProcessorError> {
        Ok(LineChartData {
            title: format!("Confirmed vs Deaths (Top {} Countries)", n),
            categories: Self::categories(top)?,
            series: Self::series(top, &[CONFIRMED_COL, DEATHS_COL])?,
            markers: true,
        })
    }

    fn categories(top: &DataFrame) -> Result<Vec<String>, ProcessorError> {
        Ok(DataProcessor::countries(top)?
            .into_iter()
            .map(|c| c.unwrap_or_default().to_string())
            .collect())
    }

    fn series(top: &DataFrame, columns: &[&str]) -> Result<Vec<ChartSeries>, ProcessorError> {
        columns
            .iter()
            .map(|&name| {
                Ok(ChartSeries {
                    name: name.to_string(),
                    values: DataProcessor::count_values(top, name)?,
                })
            })
            .collect()
    }
}
