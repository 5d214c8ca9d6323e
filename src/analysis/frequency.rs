// src/analysis/frequency.rs
use std::collections::HashMap;

/// token → count, remembering the order tokens were first seen.
/// Built once per run and only read afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Count tokens in encounter order.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for t in tokens {
            table.add(t.as_ref(), 1);
        }
        table
    }

    /// Accumulate pre-counted pairs; a repeated token adds to its first slot.
    pub fn from_counts<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for (t, n) in pairs {
            table.add(t.as_ref(), n);
        }
        table
    }

    fn add(&mut self, token: &str, n: u64) {
        match self.index.get(token) {
            Some(&ix) => self.entries[ix].1 += n,
            None => {
                self.index.insert(s!(token), self.entries.len());
                self.entries.push((s!(token), n));
            }
        }
    }

    pub fn get(&self, token: &str) -> u64 {
        self.index.get(token).map(|&ix| self.entries[ix].1).unwrap_or(0)
    }

    /// Distinct tokens.
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(t, n)| (t.as_str(), *n))
    }
}
