// src/gui/components/chart_picker.rs
//
// Left panel: chart kind selector. Switching kinds only redraws the chart.

use eframe::egui;
use crate::{config::options::ChartKind, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Chart type");
    ui.separator();

    let mut picked = app.state.gui.chart_kind;
    for kind in ChartKind::ALL {
        ui.selectable_value(&mut picked, kind, kind.label());
    }
    app.set_chart_kind(picked);

    ui.separator();
    ui.label(format!("Selected: {}", app.state.gui.chart_kind.label()));
}
