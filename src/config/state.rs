// src/config/state.rs
use super::options::{AnalysisOptions, ChartKind};

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Contents of the URL text field
    pub url_text: String,

    /// Sidebar chart selection
    pub chart_kind: ChartKind,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            url_text: s!(),
            chart_kind: ChartKind::default(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AnalysisOptions,
    pub gui: GuiState,
}
