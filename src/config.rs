//! Dashboard Configuration
//! Optional JSON settings read from the working directory at startup.

use crate::data::DEFAULT_TOP_N;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "covid_dashboard.json";

/// Dataset read when no config overrides it.
pub const DEFAULT_DATA_PATH: &str = "covid_data.csv";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub top_n: usize,
    /// `tracing_subscriber::EnvFilter` directive, e.g. `info` or `covid_dashboard=debug`.
    pub log_level: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            top_n: DEFAULT_TOP_N,
            log_level: "info".to_string(),
            window_width: 1400.0,
            window_height: 900.0,
        }
    }
}

impl DashboardConfig {
    /// Load the config at `path`, or the defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let config = DashboardConfig::load(Path::new("no/such/covid_dashboard.json")).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.data_path, PathBuf::from("covid_data.csv"));
        assert_eq!(config.top_n, 10);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = DashboardConfig::from_json(r#"{"top_n": 5, "data_path": "data/latest.csv"}"#)
            .unwrap();
        assert_eq!(config.top_n, 5);
        assert_eq!(config.data_path, PathBuf::from("data/latest.csv"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(DashboardConfig::from_json(r#"{"topn": 5}"#).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "covid_dashboard_{}_bad_config.json",
            std::process::id()
        ));
        fs::write(&path, "{ not json").unwrap();

        let result = DashboardConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
        fs::remove_file(path).unwrap();
    }
}
