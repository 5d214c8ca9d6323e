// src/chart/render.rs
use crate::{
    analysis::rank::RankedList,
    config::{
        consts::{FUNNEL_N, FUNNEL_SERIES_NAME, SERIES_NAME},
        options::ChartKind,
    },
};

use super::{
    Chart, FunnelChart, FunnelStage, HeatmapChart, PieChart, PieSlice, RadarChart,
    RadarIndicator, SeriesChart,
};

/// What to draw and the ranked data to draw it from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub ranked: RankedList,
}

impl ChartRequest {
    /// Applies the kind's category cap (funnel: top 10).
    pub fn new(kind: ChartKind, ranked: &RankedList) -> Self {
        let ranked = match kind.input_cap() {
            Some(n) => ranked.top(n),
            None => ranked.clone(),
        };
        Self { kind, ranked }
    }
}

/// `None` when there is nothing to draw.
pub fn render(req: &ChartRequest) -> Option<Chart> {
    let ranked = &req.ranked;
    if ranked.is_empty() {
        return None;
    }
    let title = s!(req.kind.label());

    let chart = match req.kind {
        ChartKind::Bar     => Chart::Bar(series(title, ranked)),
        ChartKind::Line    => Chart::Line(series(title, ranked)),
        ChartKind::Scatter => Chart::Scatter(series(title, ranked)),
        ChartKind::Pie     => Chart::Pie(pie(title, ranked)),
        ChartKind::Radar   => Chart::Radar(radar(title, ranked)),
        ChartKind::Funnel  => Chart::Funnel(funnel(title, ranked)),
        ChartKind::Heatmap => Chart::Heatmap(heatmap(title, ranked)),
    };
    logd!("Render: {} ({} entries)", chart.title(), ranked.len());
    Some(chart)
}

fn series(title: String, ranked: &RankedList) -> SeriesChart {
    SeriesChart {
        title,
        series_name: s!(SERIES_NAME),
        categories: ranked.tokens(),
        values: ranked.counts(),
    }
}

fn pie(title: String, ranked: &RankedList) -> PieChart {
    let total = ranked.total();
    let slices = ranked
        .iter()
        .map(|(token, count)| PieSlice {
            label: s!(token),
            value: count,
            percent: if total == 0 { 0.0 } else { count as f64 * 100.0 / total as f64 },
        })
        .collect();
    PieChart { title, slices }
}

// Every axis is scaled to its own single data point, so the polygon always
// touches the rim.
fn radar(title: String, ranked: &RankedList) -> RadarChart {
    let indicators = ranked
        .iter()
        .map(|(token, count)| RadarIndicator { name: s!(token), max: count })
        .collect();
    RadarChart { title, indicators, values: ranked.counts() }
}

fn funnel(title: String, ranked: &RankedList) -> FunnelChart {
    let stages = ranked
        .top(FUNNEL_N)
        .iter()
        .map(|(token, count)| FunnelStage { name: s!(token), value: count })
        .collect();
    FunnelChart { title, series_name: s!(FUNNEL_SERIES_NAME), stages }
}

// Placeholder grid: (n+1)² zero cells. No co-occurrence data is computed.
fn heatmap(title: String, ranked: &RankedList) -> HeatmapChart {
    let size = ranked.len() + 1;
    HeatmapChart { title, cells: vec![vec![0; size]; size] }
}
