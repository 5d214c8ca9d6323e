// src/core/lexicon.rs
// Frequency-ranked word list for unspaced alphabetic text.
// One word per line, most frequent first; the line number is the rank.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

static EN_WORDS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/en_words.txt"));

#[derive(Clone, Debug)]
pub struct Lexicon {
    /// word → Zipf cost, lowercase keys
    costs: HashMap<String, f64>,
    max_chars: usize,
    max_cost: f64,
}

impl Lexicon {
    /// The embedded English list.
    pub fn english() -> Self {
        Self::from_ranked(EN_WORDS.lines())
    }

    /// Build from words in descending frequency. Repeats keep their first rank.
    pub fn from_ranked<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ranked: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for w in words {
            let w = w.trim().to_lowercase();
            if w.is_empty() || !seen.insert(w.clone()) {
                continue;
            }
            ranked.push(w);
        }

        // ln(N) scales the Zipf curve so costs stay comparable across list sizes
        let ln_n = (ranked.len().max(2) as f64).ln();
        let mut max_chars = 0;
        let mut max_cost = 0.0f64;
        let costs = ranked
            .into_iter()
            .enumerate()
            .map(|(rank, w)| {
                let cost = ((rank + 1) as f64 * ln_n).ln();
                max_chars = max_chars.max(w.chars().count());
                max_cost = max_cost.max(cost);
                (w, cost)
            })
            .collect();

        Self { costs, max_chars, max_cost }
    }

    pub fn len(&self) -> usize { self.costs.len() }
    pub fn is_empty(&self) -> bool { self.costs.is_empty() }
    pub fn max_chars(&self) -> usize { self.max_chars }

    /// Cost of the rarest word.
    pub fn max_cost(&self) -> f64 { self.max_cost }

    pub fn contains(&self, word: &str) -> bool {
        self.cost(word).is_some()
    }

    /// Cost of emitting `word` as one token; `None` when it is not listed.
    pub fn cost(&self, word: &str) -> Option<f64> {
        let key = if word.chars().any(char::is_uppercase) {
            Cow::Owned(word.to_lowercase())
        } else {
            Cow::Borrowed(word)
        };
        self.costs.get(key.as_ref()).copied()
    }
}
