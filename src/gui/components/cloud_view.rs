// src/gui/components/cloud_view.rs
//
// Paints a laid-out WordCloud, scaled to the available width.

use eframe::egui::{self, Align2, FontId, Sense, Vec2};
use crate::{chart::WordCloud, gui::palette};

pub fn draw(ui: &mut egui::Ui, cloud: &WordCloud) {
    let scale = (ui.available_width() / cloud.width).clamp(0.3, 1.0);
    let size = Vec2::new(cloud.width, cloud.height) * scale;

    let (resp, painter) = ui.allocate_painter(size, Sense::hover());
    let origin = resp.rect.min;
    painter.rect_filled(resp.rect, 4.0, ui.visuals().extreme_bg_color);

    let mut hovered = None;
    for (i, w) in cloud.words.iter().enumerate() {
        let pos = origin + Vec2::new(w.x, w.y) * scale;
        let rect = painter.text(
            pos,
            Align2::LEFT_TOP,
            &w.text,
            FontId::proportional(w.size * scale),
            palette::series(i),
        );
        if resp.hover_pos().is_some_and(|p| rect.contains(p)) {
            hovered = Some(w);
        }
    }

    if let Some(w) = hovered {
        resp.on_hover_text(format!("{}: {}", w.text, w.count));
    }
}
