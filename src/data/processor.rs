//! Data Processor Module
//! Country filtering, top-N ranking and column extraction over the loaded dataset.

use crate::data::loader::{Dataset, CONFIRMED_COL, COUNTRY_COL};
use polars::prelude::*;
use std::fmt;
use thiserror::Error;

/// Selector label that means "no country filter".
pub const ALL_LABEL: &str = "All";

/// Default number of rows in the ranking table and charts.
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Country selector value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CountrySelection {
    #[default]
    All,
    Country(String),
}

impl CountrySelection {
    pub fn label(&self) -> &str {
        match self {
            CountrySelection::All => ALL_LABEL,
            CountrySelection::Country(name) => name,
        }
    }
}

impl fmt::Display for CountrySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for CountrySelection {
    fn from(label: &str) -> Self {
        if label == ALL_LABEL {
            CountrySelection::All
        } else {
            CountrySelection::Country(label.to_string())
        }
    }
}

/// Handles filtering and ranking of the country table.
pub struct DataProcessor;

impl DataProcessor {
    /// Rows matching the selection, in original order.
    ///
    /// `All` returns the whole table. A country with no rows gives an empty
    /// frame with the dataset's schema.
    pub fn filter_by_country(
        dataset: &Dataset,
        selection: &CountrySelection,
    ) -> Result<DataFrame, ProcessorError> {
        match selection {
            CountrySelection::All => Ok(dataset.frame().clone()),
            CountrySelection::Country(name) => {
                let filtered = dataset
                    .frame()
                    .clone()
                    .lazy()
                    .filter(col(COUNTRY_COL).eq(lit(name.as_str())))
                    .collect()?;
                Ok(filtered)
            }
        }
    }

    /// The `n` rows with the most confirmed cases, from the full dataset.
    ///
    /// The sort is stable: rows with equal counts keep their file order.
    pub fn top_n(dataset: &Dataset, n: usize) -> Result<DataFrame, ProcessorError> {
        let sorted = dataset.frame().sort(
            [CONFIRMED_COL],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true)
                .with_multithreaded(false),
        )?;
        Ok(sorted.head(Some(n)))
    }

    /// Selector entries: `All`, then each distinct country in ascending order.
    pub fn country_options(dataset: &Dataset) -> Result<Vec<CountrySelection>, ProcessorError> {
        let mut names: Vec<String> = Self::countries(dataset.frame())?
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect();
        names.sort();
        names.dedup();

        Ok(std::iter::once(CountrySelection::All)
            .chain(names.into_iter().map(CountrySelection::Country))
            .collect())
    }

    /// Country cell of every row, in row order.
    pub fn countries(df: &DataFrame) -> Result<Vec<Option<&str>>, ProcessorError> {
        let countries = df.column(COUNTRY_COL)?.as_materialized_series().str()?;
        Ok(countries.into_iter().collect())
    }

    /// A count column as floats, in row order. Nulls read as zero.
    pub fn count_values(df: &DataFrame, column: &str) -> Result<Vec<f64>, ProcessorError> {
        let values = df.column(column)?.cast(&DataType::Float64)?;
        let values = values.f64()?;
        Ok(values.into_iter().map(|v| v.unwrap_or(0.0)).collect())
    }
}
