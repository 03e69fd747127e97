//! Chart Plotter Module
//! Draws bar and line chart data as interactive egui_plot charts.

use crate::charts::{BarChartData, LineChartData};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints, PlotUi, Points};

const CHART_HEIGHT: f32 = 380.0;

/// Total width of one category's bar group, in axis units.
const GROUP_WIDTH: f64 = 0.8;

pub const PALETTE: [Color32; 3] = [
    Color32::from_rgb(99, 110, 250), // Blue
    Color32::from_rgb(239, 85, 59),  // Red
    Color32::from_rgb(0, 204, 150),  // Green
];

/// Draws dashboard charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Get color for a series.
    pub fn series_color(series_index: usize) -> Color32 {
        PALETTE[series_index % PALETTE.len()]
    }

    /// X position of one bar inside its category group.
    pub fn bar_offset(series_index: usize, series_count: usize) -> f64 {
        if series_count == 0 {
            return 0.0;
        }
        let bar_width = GROUP_WIDTH / series_count as f64;
        (series_index as f64 - (series_count as f64 - 1.0) / 2.0) * bar_width
    }

    /// Grouped bars: x is the category index, one colored bar per series.
    pub fn draw_bar_chart(ui: &mut egui::Ui, chart: &BarChartData) {
        ui.label(RichText::new(&chart.title).size(14.0).strong());

        let series_count = chart.series.len();
        let bar_width = GROUP_WIDTH / series_count.max(1) as f64;

        Self::show_category_plot(ui, "bar_chart", &chart.categories, |plot_ui| {
            for (s, series) in chart.series.iter().enumerate() {
                let offset = Self::bar_offset(s, series_count);
                let bars: Vec<Bar> = series
                    .values
                    .iter()
                    .zip(chart.categories.iter())
                    .enumerate()
                    .map(|(i, (&value, country))| {
                        Bar::new(i as f64 + offset, value)
                            .width(bar_width)
                            .name(format!("{} - {}", country, series.name))
                    })
                    .collect();

                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .color(Self::series_color(s))
                        .name(&series.name),
                );
            }
        });
    }

    /// One line per series with a marker at each category.
    pub fn draw_line_chart(ui: &mut egui::Ui, chart: &LineChartData) {
        ui.label(RichText::new(&chart.title).size(14.0).strong());

        Self::show_category_plot(ui, "line_chart", &chart.categories, |plot_ui| {
            for (s, series) in chart.series.iter().enumerate() {
                let color = Self::series_color(s);
                let points: Vec<[f64; 2]> = series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, &value)| [i as f64, value])
                    .collect();

                plot_ui.line(
                    Line::new(PlotPoints::from_iter(points.iter().copied()))
                        .color(color)
                        .width(2.0)
                        .name(&series.name),
                );

                if chart.markers {
                    plot_ui.points(
                        Points::new(PlotPoints::from_iter(points.iter().copied()))
                            .radius(4.0)
                            .color(color)
                            .name(&series.name),
                    );
                }
            }
        });
    }

    /// Plot with one labelled x tick per category.
    fn show_category_plot(
        ui: &mut egui::Ui,
        id: &str,
        categories: &[String],
        add_contents: impl FnOnce(&mut PlotUi),
    ) {
        let x_labels = categories.to_vec();
        let tick_count = categories.len();

        Plot::new(id)
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label("Country/Region")
            .include_y(0.0)
            .x_grid_spacer(move |_input| {
                (0..tick_count)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx >= 0.0 && (idx - mark.value).abs() < 1e-6 {
                    x_labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .y_axis_label("Cases")
            .show(ui, add_contents);
    }
}
