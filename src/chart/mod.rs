// src/chart/mod.rs
//
// Toolkit-free chart descriptions. Each variant carries exactly the data its
// drawing needs; the GUI paints them, the CLI prints them.

pub mod cloud;
pub mod render;

pub use cloud::{word_cloud, CloudWord, WordCloud};
pub use render::{render, ChartRequest};

use crate::config::options::ChartKind;

#[derive(Clone, Debug, PartialEq)]
pub enum Chart {
    Bar(SeriesChart),
    Line(SeriesChart),
    Scatter(SeriesChart),
    Pie(PieChart),
    Radar(RadarChart),
    Funnel(FunnelChart),
    Heatmap(HeatmapChart),
}

impl Chart {
    pub fn kind(&self) -> ChartKind {
        match self {
            Chart::Bar(_)     => ChartKind::Bar,
            Chart::Line(_)    => ChartKind::Line,
            Chart::Scatter(_) => ChartKind::Scatter,
            Chart::Pie(_)     => ChartKind::Pie,
            Chart::Radar(_)   => ChartKind::Radar,
            Chart::Funnel(_)  => ChartKind::Funnel,
            Chart::Heatmap(_) => ChartKind::Heatmap,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Chart::Bar(c) | Chart::Line(c) | Chart::Scatter(c) => &c.title,
            Chart::Pie(c)     => &c.title,
            Chart::Radar(c)   => &c.title,
            Chart::Funnel(c)  => &c.title,
            Chart::Heatmap(c) => &c.title,
        }
    }
}

/// Categories on x, one value series on y.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesChart {
    pub title: String,
    pub series_name: String,
    pub categories: Vec<String>,
    pub values: Vec<u64>,
}

impl SeriesChart {
    pub fn max_value(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
    /// Share of the whole pie, 0..=100
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadarIndicator {
    pub name: String,
    pub max: u64,
}

/// One axis per indicator, each scaled to its own `max`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarChart {
    pub title: String,
    pub indicators: Vec<RadarIndicator>,
    pub values: Vec<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunnelStage {
    pub name: String,
    pub value: u64,
}

/// Stages ordered from the highest value to the lowest.
#[derive(Clone, Debug, PartialEq)]
pub struct FunnelChart {
    pub title: String,
    pub series_name: String,
    pub stages: Vec<FunnelStage>,
}

/// Square matrix, `cells[row][col]`.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapChart {
    pub title: String,
    pub cells: Vec<Vec<u64>>,
}

impl HeatmapChart {
    pub fn size(&self) -> usize { self.cells.len() }

    pub fn max_value(&self) -> u64 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }
}
