//! CSV Data Loader Module
//! Reads the per-country statistics CSV with Polars and caches it for the process lifetime.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info};

pub const COUNTRY_COL: &str = "Country/Region";
pub const CONFIRMED_COL: &str = "Confirmed";
pub const DEATHS_COL: &str = "Deaths";
pub const RECOVERED_COL: &str = "Recovered";

/// Case-count columns; missing entries are replaced with zero at load.
pub const COUNT_COLUMNS: [&str; 3] = [CONFIRMED_COL, DEATHS_COL, RECOVERED_COL];

/// Cell texts read as missing in every column, besides empty cells.
pub const MISSING_MARKERS: [&str; 8] = [
    "NaN", "nan", "NA", "N/A", "null", "NULL", "#N/A", "None",
];

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Data file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// The full, immutable table of per-country records.
#[derive(Debug, Clone)]
pub struct Dataset {
    df: DataFrame,
}

impl Dataset {
    /// Validate the required columns and zero-fill the count columns.
    ///
    /// Present values are kept as they are, negatives included. Float NaN counts
    /// as missing. A count column that Polars inferred as text (all cells empty)
    /// is cast to Float64 first; any non-numeric text in it fails the cast.
    pub fn from_frame(df: DataFrame) -> Result<Self, LoadError> {
        for name in std::iter::once(COUNTRY_COL).chain(COUNT_COLUMNS) {
            if df.column(name).is_err() {
                return Err(LoadError::MissingColumn(name.to_string()));
            }
        }

        let mut exprs = vec![col(COUNTRY_COL).cast(DataType::String)];
        for name in COUNT_COLUMNS {
            let dtype = df.column(name)?.dtype().clone();
            exprs.push(Self::zero_fill(name, &dtype));
        }

        let df = df.lazy().with_columns(exprs).collect()?;
        Ok(Self { df })
    }

    fn zero_fill(name: &str, dtype: &DataType) -> Expr {
        match dtype {
            DataType::Float32 | DataType::Float64 => {
                col(name).fill_nan(lit(0.0)).fill_null(lit(0.0))
            }
            dtype if is_numeric(dtype) => col(name).fill_null(lit(0)),
            _ => col(name)
                .strict_cast(DataType::Float64)
                .fill_nan(lit(0.0))
                .fill_null(lit(0.0)),
        }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// Owns the dataset for the whole process.
///
/// Constructed once at startup and handed to the app. The first successful
/// [`load`](Self::load) reads the file; later calls return the cached dataset
/// without touching the disk until [`reset`](Self::reset) is called.
pub struct DatasetService {
    path: PathBuf,
    dataset: Option<Dataset>,
}

impl DatasetService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dataset: None,
        }
    }

    pub fn load(&mut self) -> Result<&Dataset, LoadError> {
        let dataset = match self.dataset.take() {
            Some(cached) => {
                debug!(path = %self.path.display(), "Using cached dataset");
                cached
            }
            None => Self::read_csv(&self.path).inspect_err(|e| {
                error!(path = %self.path.display(), error = %e, "Failed to load dataset");
            })?,
        };
        Ok(&*self.dataset.insert(dataset))
    }

    /// Drop the cached dataset so the next load re-reads the file.
    pub fn reset(&mut self) {
        self.dataset = None;
    }

    /// The cached dataset, if it has been loaded.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_csv(path: &Path) -> Result<Dataset, LoadError> {
        if !path.is_file() {
            return Err(LoadError::FileNotFound(path.to_path_buf()));
        }

        let start = Instant::now();
        let null_values = MISSING_MARKERS.iter().map(|&m| m.into()).collect();
        // Schema is inferred from every row.
        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(None)
            .with_null_values(Some(NullValues::AllColumns(null_values)))
            .finish()?
            .collect()?;
        let dataset = Dataset::from_frame(df)?;

        info!(
            path = %path.display(),
            rows = dataset.height(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Loaded dataset"
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "covid_dashboard_{}_{}.csv",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    fn values(dataset: &Dataset, column: &str) -> Vec<Option<f64>> {
        dataset
            .frame()
            .column(column)
            .unwrap()
            .cast(&DataType::Float64)
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn missing_counts_become_zero() {
        let path = temp_csv(
            "missing_counts",
            "Country/Region,Confirmed,Deaths,Recovered\n\
             US,100,,50\n\
             UK,,10,\n\
             France,0,-3,7\n",
        );
        let mut service = DatasetService::new(&path);
        let dataset = service.load().unwrap();

        assert_eq!(dataset.height(), 3);
        assert_eq!(
            values(dataset, CONFIRMED_COL),
            vec![Some(100.0), Some(0.0), Some(0.0)]
        );
        assert_eq!(
            values(dataset, DEATHS_COL),
            vec![Some(0.0), Some(10.0), Some(-3.0)]
        );
        assert_eq!(
            values(dataset, RECOVERED_COL),
            vec![Some(50.0), Some(0.0), Some(7.0)]
        );
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_markers_become_zero() {
        let path = temp_csv(
            "missing_markers",
            "Country/Region,Confirmed,Deaths,Recovered\n\
             US,100,5,50\n\
             UK,NaN,1,2\n\
             FR,200,N/A,1\n\
             DE,7,NA,#N/A\n",
        );
        let mut service = DatasetService::new(&path);
        let dataset = service.load().unwrap();

        assert_eq!(
            values(dataset, CONFIRMED_COL),
            vec![Some(100.0), Some(0.0), Some(200.0), Some(7.0)]
        );
        assert_eq!(
            values(dataset, DEATHS_COL),
            vec![Some(5.0), Some(1.0), Some(0.0), Some(0.0)]
        );
        assert_eq!(
            values(dataset, RECOVERED_COL),
            vec![Some(50.0), Some(2.0), Some(1.0), Some(0.0)]
        );
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn nan_count_ranks_as_zero() {
        let path = temp_csv(
            "nan_rank",
            "Country/Region,Confirmed,Deaths,Recovered\nUS,100,5,50\nUK,NaN,1,2\nFR,200,1,1\n",
        );
        let mut service = DatasetService::new(&path);
        let dataset = service.load().unwrap();

        let top = crate::data::DataProcessor::top_n(dataset, 3).unwrap();
        let countries: Vec<Option<&str>> =
            crate::data::DataProcessor::countries(&top).unwrap();
        assert_eq!(countries, vec![Some("FR"), Some("US"), Some("UK")]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn late_decimal_after_many_integer_rows_loads() {
        let mut contents = String::from("Country/Region,Confirmed,Deaths,Recovered\n");
        for i in 0..10_005 {
            contents.push_str(&format!("C{i},{i},1,1\n"));
        }
        contents.push_str("Z,12.5,1,1\n");
        let path = temp_csv("late_decimal", &contents);

        let mut service = DatasetService::new(&path);
        let dataset = service.load().unwrap();

        assert_eq!(dataset.height(), 10_006);
        assert_eq!(values(dataset, CONFIRMED_COL).last(), Some(&Some(12.5)));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn from_frame_fills_float_nan() {
        let df = df!(
            COUNTRY_COL => ["US", "UK"],
            CONFIRMED_COL => [f64::NAN, 3.5],
            DEATHS_COL => [Some(1.0f64), None],
            RECOVERED_COL => [0i64, 2]
        )
        .unwrap();
        let dataset = Dataset::from_frame(df).unwrap();

        assert_eq!(values(&dataset, CONFIRMED_COL), vec![Some(0.0), Some(3.5)]);
        assert_eq!(values(&dataset, DEATHS_COL), vec![Some(1.0), Some(0.0)]);
    }

    #[test]
    fn empty_count_column_is_all_zero() {
        let path = temp_csv(
            "empty_column",
            "Country/Region,Confirmed,Deaths,Recovered\nUS,1,2,\nUK,3,4,\n",
        );
        let mut service = DatasetService::new(&path);
        let dataset = service.load().unwrap();

        assert_eq!(
            values(dataset, RECOVERED_COL),
            vec![Some(0.0), Some(0.0)]
        );
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn extra_columns_pass_through() {
        let path = temp_csv(
            "extra_columns",
            "Country/Region,Confirmed,Deaths,Recovered,WHO Region\nUS,1,2,3,Americas\n",
        );
        let mut service = DatasetService::new(&path);
        let dataset = service.load().unwrap();

        assert_eq!(dataset.frame().width(), 5);
        assert!(dataset.frame().column("WHO Region").is_ok());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_required_column_fails() {
        let path = temp_csv(
            "missing_column",
            "Country/Region,Confirmed,Deaths\nUS,1,2\n",
        );
        let mut service = DatasetService::new(&path);

        match service.load() {
            Err(LoadError::MissingColumn(name)) => assert_eq!(name, RECOVERED_COL),
            other => panic!("expected MissingColumn, got {:?}", other.map(|d| d.height())),
        }
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_fails() {
        let mut service = DatasetService::new("does/not/exist.csv");
        assert!(matches!(service.load(), Err(LoadError::FileNotFound(_))));
        assert!(service.dataset().is_none());
    }

    #[test]
    fn load_is_cached_until_reset() {
        let path = temp_csv(
            "cached",
            "Country/Region,Confirmed,Deaths,Recovered\nUS,1,2,3\nUK,4,5,6\n",
        );
        let mut service = DatasetService::new(&path);
        assert_eq!(service.load().unwrap().height(), 2);

        fs::remove_file(&path).unwrap();
        assert_eq!(service.load().unwrap().height(), 2);
        assert!(service.dataset().is_some());

        service.reset();
        assert!(service.dataset().is_none());
        assert!(matches!(service.load(), Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn from_frame_fills_nulls_in_memory() {
        let df = df!(
            COUNTRY_COL => ["US", "UK"],
            CONFIRMED_COL => [Some(5i64), None],
            DEATHS_COL => [None, Some(-1i64)],
            RECOVERED_COL => [Some(0i64), Some(2)]
        )
        .unwrap();
        let dataset = Dataset::from_frame(df).unwrap();

        assert_eq!(values(&dataset, CONFIRMED_COL), vec![Some(5.0), Some(0.0)]);
        assert_eq!(values(&dataset, DEATHS_COL), vec![Some(0.0), Some(-1.0)]);
        assert_eq!(values(&dataset, RECOVERED_COL), vec![Some(0.0), Some(2.0)]);
    }
}
