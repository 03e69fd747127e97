//! COVID-19 Dashboard - Country Wise Tables & Charts
//!
//! Desktop report over a per-country COVID-19 CSV.

use anyhow::{anyhow, Result};
use covid_dashboard::config::{DashboardConfig, CONFIG_FILE};
use covid_dashboard::data::DatasetService;
use covid_dashboard::gui::{DashboardApp, WINDOW_TITLE};
use eframe::egui;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = DashboardConfig::load(Path::new(CONFIG_FILE))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_level)?)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(data_path = %config.data_path.display(), "Starting COVID-19 Dashboard");

    // The dataset is read once here and cached by the service for the whole run
    let service = DatasetService::new(&config.data_path);
    let app = DashboardApp::new(service, &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([900.0, 600.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("Failed to run dashboard: {e}"))
}
