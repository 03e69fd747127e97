//! Data module - CSV loading, filtering and ranking

mod loader;
mod processor;

pub use loader::{
    Dataset, DatasetService, LoadError, CONFIRMED_COL, COUNTRY_COL, COUNT_COLUMNS, DEATHS_COL,
    RECOVERED_COL,
};
pub use processor::{CountrySelection, DataProcessor, ProcessorError, ALL_LABEL, DEFAULT_TOP_N};
