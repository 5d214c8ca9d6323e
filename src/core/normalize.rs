// src/core/normalize.rs
//
// Punctuation/whitespace stripping ahead of segmentation.
// Order matters: symbols go first, then whitespace runs collapse, then the
// remaining single spaces are dropped. The output keeps no word boundaries at
// all; the segmenter is responsible for finding them again.

use std::sync::LazyLock;

use regex::Regex;

use super::html::PlainText;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());
static WS_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Text made only of word characters (Unicode `\w`), no whitespace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str { &self.0 }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn into_string(self) -> String { self.0 }
}

pub fn normalize(text: &PlainText) -> NormalizedText {
    NormalizedText(normalize_str(text.as_str()))
}

pub fn normalize_str(s: &str) -> String {
    let no_symbols = NON_WORD.replace_all(s, "");
    let collapsed = WS_RUN.replace_all(&no_symbols, " ");
    collapsed.trim().replace(' ', "")
}
