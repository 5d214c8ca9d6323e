// src/gui/fonts.rs
//
// egui's bundled fonts have no Han glyphs. Borrow the first CJK font the
// system has and append it as a fallback to both families.

use std::sync::Arc;

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

use crate::config::consts::CJK_FONT_CANDIDATES;

const FALLBACK_NAME: &str = "cjk_fallback";

pub fn install_cjk_fallback(ctx: &egui::Context) {
    for path in CJK_FONT_CANDIDATES {
        let Ok(bytes) = std::fs::read(path) else { continue };

        let mut fonts = FontDefinitions::default();
        fonts
            .font_data
            .insert(s!(FALLBACK_NAME), Arc::new(FontData::from_owned(bytes)));
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            fonts.families.entry(family).or_default().push(s!(FALLBACK_NAME));
        }
        ctx.set_fonts(fonts);

        logf!("Fonts: CJK fallback from {}", path);
        return;
    }
    logd!("Fonts: no CJK font found, Han text will show as boxes");
}
