//! Report Module
//! One render pass: filter, rank and chart the dataset for a country selection.

use crate::charts::{BarChartData, ChartBuilder, LineChartData};
use crate::data::{CountrySelection, DataProcessor, Dataset, ProcessorError};
use polars::prelude::*;

/// Display-ready table: header names plus one string per cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn from_frame(df: &DataFrame) -> Result<Self, ProcessorError> {
        let columns = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut rows = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let row = df
                .get_columns()
                .iter()
                .map(|column| column.get(i).map(cell_text))
                .collect::<PolarsResult<Vec<String>>>()?;
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn cell_text(value: AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Everything the dashboard shows for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub selection: CountrySelection,
    pub top_n: usize,
    pub filtered: TableView,
    pub top: TableView,
    pub bar: BarChartData,
    pub line: LineChartData,
}

/// Build the report for `selection`.
///
/// The ranking and both charts always come from the full dataset; only the
/// first table follows the selection. Calling this twice with the same input
/// gives the same view.
pub fn render(
    dataset: &Dataset,
    selection: &CountrySelection,
    top_n: usize,
) -> Result<ReportView, ProcessorError> {
    let filtered = DataProcessor::filter_by_country(dataset, selection)?;
    let top = DataProcessor::top_n(dataset, top_n)?;

    Ok(ReportView {
        selection: selection.clone(),
        top_n,
        filtered: TableView::from_frame(&filtered)?,
        top: TableView::from_frame(&top)?,
        bar: ChartBuilder::bar_chart(&top)?,
        line: ChartBuilder::line_chart(&top, top_n)?,
    })
}
