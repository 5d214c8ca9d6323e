// src/gui/palette.rs
use eframe::egui::Color32;

/// Series colours, cycled by index.
pub const SERIES: [Color32; 9] = [
    Color32::from_rgb(0x54, 0x70, 0xc6),
    Color32::from_rgb(0x91, 0xcc, 0x75),
    Color32::from_rgb(0xfa, 0xc8, 0x58),
    Color32::from_rgb(0xee, 0x66, 0x66),
    Color32::from_rgb(0x73, 0xc0, 0xde),
    Color32::from_rgb(0x3b, 0xa2, 0x72),
    Color32::from_rgb(0xfc, 0x84, 0x52),
    Color32::from_rgb(0x9a, 0x60, 0xb4),
    Color32::from_rgb(0xea, 0x7c, 0xcc),
];

pub const HEAT_LOW: Color32 = Color32::from_rgb(0x44, 0x01, 0x54);
pub const HEAT_HIGH: Color32 = Color32::from_rgb(0xfd, 0xe7, 0x25);

#[inline]
pub fn series(i: usize) -> Color32 {
    SERIES[i % SERIES.len()]
}

/// Linear blend, t in 0..=1.
pub fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let ch = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(ch(a.r(), b.r()), ch(a.g(), b.g()), ch(a.b(), b.b()))
}
