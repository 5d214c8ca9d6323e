// src/gui/components/url_bar.rs
use eframe::egui::{self, widgets::Spinner};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut submit = false;

    ui.horizontal(|ui| {
        ui.label("Article URL:");
        let edit = egui::TextEdit::singleline(&mut app.state.gui.url_text)
            .hint_text("https://…")
            .desired_width(ui.available_width() - 110.0);
        let resp = ui.add_enabled(!app.running, edit);
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        if ui.add_enabled(!app.running, egui::Button::new("Analyze")).clicked() {
            submit = true;
        }
        if app.running {
            ui.add(Spinner::new());
        }
    });

    ui.label(format!("Status: {}", app.status_text()));

    if submit {
        app.start_analysis(ui.ctx());
    }
}
