// src/analysis/rank.rs
use super::frequency::FrequencyTable;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedEntry {
    pub token: String,
    pub count: u64,
}

/// Top entries by count, descending; equal counts keep first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RankedList {
    entries: Vec<RankedEntry>,
}

/// Top `n` of `table`. An empty table gives an empty list.
pub fn rank(table: &FrequencyTable, n: usize) -> RankedList {
    let mut all: Vec<RankedEntry> = table
        .iter()
        .map(|(token, count)| RankedEntry { token: s!(token), count })
        .collect();
    // sort_by is stable: ties stay in counting order
    all.sort_by(|a, b| b.count.cmp(&a.count));
    all.truncate(n);
    RankedList { entries: all }
}

impl RankedList {
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn entries(&self) -> &[RankedEntry] { &self.entries }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|e| (e.token.as_str(), e.count))
    }

    pub fn tokens(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.token.clone()).collect()
    }

    pub fn counts(&self) -> Vec<u64> {
        self.entries.iter().map(|e| e.count).collect()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Count for `token`, if it made the list.
    pub fn get(&self, token: &str) -> Option<u64> {
        self.entries.iter().find(|e| e.token == token).map(|e| e.count)
    }

    /// First `n` entries, re-sorted descending (stable).
    pub fn top(&self, n: usize) -> RankedList {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(n);
        RankedList { entries }
    }
}
