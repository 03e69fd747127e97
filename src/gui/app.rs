//! Dashboard Main Application
//! Main window with the country selector and the report viewer.

use crate::config::DashboardConfig;
use crate::data::{CountrySelection, DataProcessor, DatasetService};
use crate::gui::{ControlPanel, ControlPanelAction, ReportViewer};
use crate::report;
use egui::{Color32, RichText, SidePanel};
use tracing::{debug, error, info};

pub const WINDOW_TITLE: &str = "COVID-19 Dashboard";

/// Main application window.
pub struct DashboardApp {
    service: DatasetService,
    control_panel: ControlPanel,
    report_viewer: ReportViewer,
    top_n: usize,
    load_error: Option<String>,
}

impl DashboardApp {
    /// Load the dataset and render the unfiltered report.
    ///
    /// A load failure is kept and shown instead of the report.
    pub fn new(service: DatasetService, config: &DashboardConfig) -> Self {
        let mut app = Self {
            service,
            control_panel: ControlPanel::new(),
            report_viewer: ReportViewer::new(),
            top_n: config.top_n,
            load_error: None,
        };
        app.load_dataset();
        app
    }

    fn load_dataset(&mut self) {
        let dataset = match self.service.load() {
            Ok(dataset) => dataset,
            Err(e) => {
                self.load_error = Some(e.to_string());
                return;
            }
        };

        match DataProcessor::country_options(dataset) {
            Ok(options) => {
                info!(
                    rows = dataset.height(),
                    countries = options.len().saturating_sub(1),
                    "Dataset ready"
                );
                self.control_panel.update_options(options, dataset.height());
            }
            Err(e) => {
                self.load_error = Some(e.to_string());
                return;
            }
        }

        let selection = self.control_panel.selected.clone();
        self.handle_selection_changed(selection);
    }

    /// Re-run filter and render for a new selection.
    pub fn handle_selection_changed(&mut self, selection: CountrySelection) {
        let Some(dataset) = self.service.dataset() else {
            return;
        };
        debug!(selection = %selection, "Selection changed");
        self.control_panel.selected = selection.clone();

        match report::render(dataset, &selection, self.top_n) {
            Ok(view) => {
                self.control_panel.set_status(&format!(
                    "Showing {} of {} rows",
                    view.filtered.len(),
                    self.control_panel.row_count
                ));
                self.report_viewer.set_view(view);
            }
            Err(e) => {
                error!(selection = %selection, error = %e, "Render failed");
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn report(&self) -> Option<&report::ReportView> {
        self.report_viewer.view.as_ref()
    }

    pub fn control_panel(&self) -> &ControlPanel {
        &self.control_panel
    }

    fn show_load_error(ctx: &egui::Context, message: &str) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new(format!("⚠ Failed to load data\n\n{}", message))
                        .size(18.0)
                        .color(Color32::from_rgb(220, 53, 69)),
                );
            });
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(message) = &self.load_error {
            Self::show_load_error(ctx, message);
            return;
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                let action = self.control_panel.show(ui);

                match action {
                    ControlPanelAction::SelectionChanged(selection) => {
                        self.handle_selection_changed(selection)
                    }
                    ControlPanelAction::None => {}
                }
            });

        // Central panel - Report Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.report_viewer.show(ui);
        });
    }
}
