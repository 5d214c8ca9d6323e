// src/gui/components/results.rs
//
// Word cloud, top list and the selected chart for the last run.
// A failed fetch shows only the error; no partial output.

use eframe::egui::{self, Color32, RichText};
use crate::gui::app::App;
use super::{chart_view, cloud_view, top_table};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if let Some(err) = &app.error {
        ui.label(RichText::new(format!("Could not fetch the page: {err}")).color(Color32::LIGHT_RED));
        return;
    }

    let Some(result) = &app.result else {
        if !app.running {
            ui.weak("Enter an article URL and press Analyze.");
        }
        return;
    };

    if result.is_empty() {
        ui.label("No results: the page has no countable words.");
        return;
    }

    if let Some(cloud) = &result.cloud {
        ui.heading("Word cloud");
        cloud_view::draw(ui, cloud);
        ui.separator();
    }

    ui.heading(format!("Top {} words", result.top.len()));
    top_table::draw(ui, &result.top);
    ui.separator();

    if let Some(chart) = &result.chart {
        ui.heading(chart.title());
        chart_view::draw(ui, chart);
    }
}
