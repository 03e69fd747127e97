//! Control Panel Widget
//! Left side panel with the country selector and dataset status.

use crate::data::CountrySelection;
use egui::{Color32, ComboBox, RichText};

/// Left side control panel.
pub struct ControlPanel {
    pub options: Vec<CountrySelection>,
    pub selected: CountrySelection,
    pub row_count: usize,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            options: vec![CountrySelection::All],
            selected: CountrySelection::All,
            row_count: 0,
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace selector entries after the dataset is loaded.
    pub fn update_options(&mut self, options: Vec<CountrySelection>, row_count: usize) {
        self.options = options;
        self.row_count = row_count;
        if !self.options.contains(&self.selected) {
            self.selected = CountrySelection::All;
        }
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.add_space(5.0);
        ui.label(RichText::new("Filter Options").size(16.0).strong());
        ui.add_space(8.0);

        ui.label("Select Country / Region");
        ComboBox::from_id_salt("country_selector")
            .width(220.0)
            .selected_text(self.selected.label())
            .show_ui(ui, |ui| {
                for option in &self.options {
                    if ui
                        .selectable_label(self.selected == *option, option.label())
                        .clicked()
                        && self.selected != *option
                    {
                        self.selected = option.clone();
                        action = ControlPanelAction::SelectionChanged(option.clone());
                    }
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(
            RichText::new(format!(
                "{} rows, {} countries",
                self.row_count,
                self.options.len().saturating_sub(1)
            ))
            .size(11.0)
            .color(Color32::GRAY),
        );

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    SelectionChanged(CountrySelection),
}
