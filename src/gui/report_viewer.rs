//! Report Viewer Widget
//! Central scrollable panel with the data tables and the two charts.

use crate::charts::ChartPlotter;
use crate::report::{ReportView, TableView};
use egui::{Color32, RichText, ScrollArea};

const TABLE_HEIGHT: f32 = 280.0;
const SECTION_SPACING: f32 = 12.0;

pub const PAGE_TITLE: &str = "COVID-19 Country Wise Dashboard";
pub const PAGE_CAPTION: &str = "COVID-19 data analysis using tables and visualizations";

/// Scrollable report area.
#[derive(Default)]
pub struct ReportViewer {
    pub view: Option<ReportView>,
}

impl ReportViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_view(&mut self, view: ReportView) {
        self.view = Some(view);
    }

    /// Draw the whole report
    pub fn show(&self, ui: &mut egui::Ui) {
        let Some(view) = &self.view else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .id_salt("report_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::draw_header(ui);

                Self::section(ui, "📋 COVID-19 Data Table");
                ui.label(
                    RichText::new(format!(
                        "{} rows for {}",
                        view.filtered.len(),
                        view.selection.label()
                    ))
                    .size(11.0)
                    .color(Color32::GRAY),
                );
                Self::draw_table(ui, "filtered_table", &view.filtered);
                ui.separator();

                Self::section(
                    ui,
                    &format!("🏆 Top {} Countries by Confirmed Cases", view.top_n),
                );
                Self::draw_table(ui, "top_table", &view.top);
                ui.separator();

                Self::section(
                    ui,
                    &format!("📊 COVID-19 Cases Comparison (Top {})", view.top_n),
                );
                ChartPlotter::draw_bar_chart(ui, &view.bar);
                ui.separator();

                Self::section(ui, "📈 Confirmed vs Deaths Trend");
                ChartPlotter::draw_line_chart(ui, &view.line);
            });
    }

    fn draw_header(ui: &mut egui::Ui) {
        ui.add_space(5.0);
        ui.label(
            RichText::new(format!("🦠 {}", PAGE_TITLE))
                .size(24.0)
                .strong()
                .color(Color32::from_rgb(100, 149, 237)),
        );
        ui.label(RichText::new(PAGE_CAPTION).size(13.0));
        ui.separator();
    }

    fn section(ui: &mut egui::Ui, title: &str) {
        ui.add_space(SECTION_SPACING);
        ui.label(RichText::new(title).size(18.0).strong());
        ui.add_space(6.0);
    }

    /// Striped grid of all rows. Headers are drawn even when there are no rows.
    pub fn draw_table(ui: &mut egui::Ui, id: &str, table: &TableView) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ScrollArea::both()
                    .id_salt(id)
                    .max_height(TABLE_HEIGHT)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        egui::Grid::new(ui.make_persistent_id(id))
                            .striped(true)
                            .min_col_width(70.0)
                            .spacing([12.0, 4.0])
                            .show(ui, |ui| {
                                for column in &table.columns {
                                    ui.label(RichText::new(column).strong().size(12.0));
                                }
                                ui.end_row();

                                for row in &table.rows {
                                    for cell in row {
                                        ui.label(RichText::new(cell).size(12.0));
                                    }
                                    ui.end_row();
                                }
                            });
                    });
            });

        if table.is_empty() {
            ui.label(
                RichText::new("No rows match the current selection")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        }
    }
}
