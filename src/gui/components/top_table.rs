// src/gui/components/top_table.rs
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use crate::{analysis::RankedList, cli::top_lines};

pub fn draw(ui: &mut egui::Ui, ranked: &RankedList) {
    let lines = top_lines(ranked);

    if ui.button("Copy").clicked() {
        ui.ctx().copy_text(lines.join("\n"));
        logf!("UI: Copied top list ({} lines)", lines.len());
    }

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::exact(32.0))
        .column(Column::remainder().at_least(160.0))
        .header(20.0, |mut header| {
            header.col(|ui| { ui.strong("#"); });
            header.col(|ui| { ui.strong("Word: count"); });
        })
        .body(|body| {
            body.rows(18.0, lines.len(), |mut row| {
                let ix = row.index();
                row.col(|ui| { ui.label((ix + 1).to_string()); });
                row.col(|ui| { ui.label(&lines[ix]); });
            });
        });
}
