// src/core/segment.rs
//
// Word segmentation for unspaced text.
//
// Input is split into script runs first:
//   Han      → jieba (prefix dictionary + HMM for unseen words)
//   digits   → one token per run
//   Latin    → minimum-cost split over the ranked lexicon
//   kana, Hangul, Cyrillic, Greek, anything else → one token per run
// Whitespace and '_' only separate runs.

use jieba_rs::Jieba;

use crate::config::consts::{ UNKNOWN_RUN_PER_CHAR, UNKNOWN_RUN_START };

use super::lexicon::Lexicon;
use super::normalize::NormalizedText;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Script {
    Han,
    Digit,
    Latin,
    Kana,
    Hangul,
    Cyrillic,
    Greek,
    Other,
    Gap,
}

fn script_of(c: char) -> Script {
    if is_han(c) {
        Script::Han
    } else if c.is_ascii_digit() {
        Script::Digit
    } else if c.is_whitespace() || c == '_' {
        Script::Gap
    } else if is_latin(c) {
        Script::Latin
    } else {
        match c {
            '\u{3040}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' | '\u{FF66}'..='\u{FF9F}' => Script::Kana,
            '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}' => Script::Hangul,
            '\u{0400}'..='\u{052F}' => Script::Cyrillic,
            '\u{0370}'..='\u{03FF}' => Script::Greek,
            _ => Script::Other,
        }
    }
}

fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(c, '\u{0300}'..='\u{036F}' | '\u{1E00}'..='\u{1EFF}')
        || (matches!(c, '\u{00C0}'..='\u{024F}') && c.is_alphabetic())
}

pub fn is_han(c: char) -> bool {
    matches!(c,
        '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2A6DF}'
        | '\u{2A700}'..='\u{2EBEF}'
        | '\u{30000}'..='\u{3134F}'
    )
}

/// Maximal same-script slices of `s`, in order.
fn script_runs(s: &str) -> Vec<(Script, &str)> {
    let mut runs = Vec::new();
    let mut cur: Option<(Script, usize)> = None;

    for (i, c) in s.char_indices() {
        let sc = script_of(c);
        match cur {
            Some((prev, _)) if prev == sc => {}
            Some((prev, start)) => {
                runs.push((prev, &s[start..i]));
                cur = Some((sc, i));
            }
            None => cur = Some((sc, i)),
        }
    }
    if let Some((sc, start)) = cur {
        runs.push((sc, &s[start..]));
    }
    runs
}

pub struct Segmenter {
    jieba: Jieba,
    lexicon: Lexicon,
}

impl Default for Segmenter {
    fn default() -> Self { Self::new() }
}

impl Segmenter {
    /// Loads both dictionaries; do this once and share.
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::english())
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        logd!("Segmenter: lexicon {} words, max cost {:.2}", lexicon.len(), lexicon.max_cost());
        Self { jieba: Jieba::new(), lexicon }
    }

    pub fn segment<'a>(&self, text: &'a NormalizedText) -> Vec<&'a str> {
        self.segment_str(text.as_str())
    }

    pub fn segment_str<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut out = Vec::new();
        for (script, run) in script_runs(text) {
            match script {
                Script::Han => out.extend(self.jieba.cut(run, true)),
                Script::Latin => self.split_latin_run(run, &mut out),
                Script::Gap => {}
                Script::Digit
                | Script::Kana
                | Script::Hangul
                | Script::Cyrillic
                | Script::Greek
                | Script::Other => out.push(run),
            }
        }
        out
    }

    /// Cheapest split of `run` into lexicon words and unknown stretches.
    ///
    /// Two states per char boundary: `known[i]` ends on a lexicon word,
    /// `unknown[i]` ends inside an unknown stretch. A stretch pays
    /// `UNKNOWN_RUN_START` once and `UNKNOWN_RUN_PER_CHAR` per char, so
    /// neighbouring unknown chars merge into one token.
    fn split_latin_run<'a>(&self, run: &'a str, out: &mut Vec<&'a str>) {
        let bounds: Vec<usize> = run
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(run.len()))
            .collect();
        let n = bounds.len() - 1;
        let window = self.lexicon.max_chars();

        let mut known = vec![f64::INFINITY; n + 1];
        let mut unknown = vec![f64::INFINITY; n + 1];
        // length of the word ending at i (known), and whether the stretch
        // ending at i was started right after a word (unknown)
        let mut word_len = vec![0usize; n + 1];
        let mut starts_stretch = vec![false; n + 1];
        known[0] = 0.0;

        for i in 1..=n {
            let extend = unknown[i - 1] + UNKNOWN_RUN_PER_CHAR;
            let start = known[i - 1] + UNKNOWN_RUN_START + UNKNOWN_RUN_PER_CHAR;
            if extend < start {
                unknown[i] = extend;
            } else {
                unknown[i] = start;
                starts_stretch[i] = true;
            }

            for k in 1..=i.min(window) {
                let piece = &run[bounds[i - k]..bounds[i]];
                let Some(cost) = self.lexicon.cost(piece) else { continue };
                let c = known[i - k].min(unknown[i - k]) + cost;
                if c < known[i] {
                    known[i] = c;
                    word_len[i] = k;
                }
            }
        }

        let first = out.len();
        let mut i = n;
        let mut in_word = known[n] <= unknown[n];
        while i > 0 {
            if in_word {
                let j = i - word_len[i];
                out.push(&run[bounds[j]..bounds[i]]);
                i = j;
                in_word = known[i] <= unknown[i];
            } else {
                let mut j = i;
                loop {
                    let fresh = starts_stretch[j];
                    j -= 1;
                    if fresh {
                        break;
                    }
                }
                out.push(&run[bounds[j]..bounds[i]]);
                i = j;
                in_word = true;
            }
        }
        out[first..].reverse();
    }
}
