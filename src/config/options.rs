// src/config/options.rs
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub fetch: FetchOptions,
    /// Entries in the headline list (and the chart input).
    pub top_n: usize,
    pub cloud_max_words: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            fetch: FetchOptions::default(),
            top_n: TOP_N,
            cloud_max_words: CLOUD_MAX_WORDS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChartKind {
    #[default]
    Bar,
    Pie,
    Line,
    Scatter,
    Radar,
    Funnel,
    Heatmap,
}

impl ChartKind {
    /// Selector order shown to the user.
    pub const ALL: [ChartKind; 7] = [
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Line,
        ChartKind::Scatter,
        ChartKind::Radar,
        ChartKind::Funnel,
        ChartKind::Heatmap,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar     => "Bar chart",
            ChartKind::Pie     => "Pie chart",
            ChartKind::Line    => "Line chart",
            ChartKind::Scatter => "Scatter chart",
            ChartKind::Radar   => "Radar chart",
            ChartKind::Funnel  => "Funnel chart",
            ChartKind::Heatmap => "Heatmap",
        }
    }

    /// Short lowercase name used on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            ChartKind::Bar     => "bar",
            ChartKind::Pie     => "pie",
            ChartKind::Line    => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Radar   => "radar",
            ChartKind::Funnel  => "funnel",
            ChartKind::Heatmap => "heatmap",
        }
    }

    pub fn from_key(s: &str) -> Option<ChartKind> {
        let lc = s.trim().to_ascii_lowercase();
        ChartKind::ALL.into_iter().find(|k| k.key() == lc)
    }

    /// Category cap for kinds that cannot take the whole headline list.
    pub fn input_cap(&self) -> Option<usize> {
        match self {
            ChartKind::Funnel => Some(FUNNEL_N),
            _ => None,
        }
    }
}
