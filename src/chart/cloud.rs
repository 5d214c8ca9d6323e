// src/chart/cloud.rs
//
// Word cloud: font size scaled linearly from count into [CLOUD_SIZE_MIN,
// CLOUD_SIZE_MAX], then placed largest-first along an Archimedean spiral from
// the canvas centre. A word that finds no free spot inside the canvas is left
// out. Text extents are estimated (0.6 em per narrow char, 1 em per wide char)
// so the layout stays independent of any font backend.

use crate::{
    analysis::rank::RankedList,
    config::consts::{CLOUD_HEIGHT, CLOUD_SIZE_MAX, CLOUD_SIZE_MIN, CLOUD_WIDTH},
    core::segment::is_han,
};

const SPIRAL_STEP_RAD: f32 = 0.1;
const SPIRAL_SPACING: f32 = 4.0; // px per radian
const GAP: f32 = 2.0;

#[derive(Clone, Debug, PartialEq)]
pub struct CloudWord {
    pub text: String,
    pub count: u64,
    /// Font size in px
    pub size: f32,
    /// Top-left corner and extent on the canvas
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl CloudWord {
    fn overlaps(&self, x: f32, y: f32, w: f32, h: f32) -> bool {
        x < self.x + self.w + GAP
            && self.x < x + w + GAP
            && y < self.y + self.h + GAP
            && self.y < y + h + GAP
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WordCloud {
    pub width: f32,
    pub height: f32,
    pub words: Vec<CloudWord>,
}

/// `None` when the list is empty.
pub fn word_cloud(ranked: &RankedList) -> Option<WordCloud> {
    if ranked.is_empty() {
        return None;
    }

    let lo = ranked.iter().map(|(_, c)| c).min().unwrap_or(0);
    let hi = ranked.iter().map(|(_, c)| c).max().unwrap_or(0);

    let mut words: Vec<CloudWord> = Vec::with_capacity(ranked.len());
    for (token, count) in ranked.iter() {
        let size = font_size(count, lo, hi);
        let (w, h) = estimate_extent(token, size);
        match find_spot(&words, w, h) {
            Some((x, y)) => words.push(CloudWord { text: s!(token), count, size, x, y, w, h }),
            None => logd!("Cloud: no room for {:?} ({}px)", token, size),
        }
    }

    Some(WordCloud { width: CLOUD_WIDTH, height: CLOUD_HEIGHT, words })
}

/// Linear map of `count` from [lo, hi] into the size range; midpoint when lo == hi.
pub fn font_size(count: u64, lo: u64, hi: u64) -> f32 {
    if hi <= lo {
        return (CLOUD_SIZE_MIN + CLOUD_SIZE_MAX) / 2.0;
    }
    let t = (count.saturating_sub(lo)) as f32 / (hi - lo) as f32;
    CLOUD_SIZE_MIN + t.clamp(0.0, 1.0) * (CLOUD_SIZE_MAX - CLOUD_SIZE_MIN)
}

fn is_wide(c: char) -> bool {
    is_han(c)
        || matches!(c,
            '\u{3000}'..='\u{30FF}'   // CJK punctuation, kana
            | '\u{AC00}'..='\u{D7AF}' // Hangul
            | '\u{FF00}'..='\u{FFEF}' // full-width forms
        )
}

fn estimate_extent(text: &str, size: f32) -> (f32, f32) {
    let ems: f32 = text.chars().map(|c| if is_wide(c) { 1.0 } else { 0.6 }).sum();
    (ems * size, size * 1.2)
}

fn find_spot(placed: &[CloudWord], w: f32, h: f32) -> Option<(f32, f32)> {
    if w > CLOUD_WIDTH || h > CLOUD_HEIGHT {
        return None;
    }
    let (cx, cy) = (CLOUD_WIDTH / 2.0, CLOUD_HEIGHT / 2.0);
    let max_r = (cx * cx + cy * cy).sqrt();

    let mut theta = 0.0f32;
    loop {
        let r = SPIRAL_SPACING * theta;
        if r > max_r {
            return None;
        }
        let x = cx + r * theta.cos() - w / 2.0;
        let y = cy + r * theta.sin() - h / 2.0;

        let inside = x >= 0.0 && y >= 0.0 && x + w <= CLOUD_WIDTH && y + h <= CLOUD_HEIGHT;
        if inside && !placed.iter().any(|p| p.overlaps(x, y, w, h)) {
            return Some((x, y));
        }
        theta += SPIRAL_STEP_RAD;
    }
}
