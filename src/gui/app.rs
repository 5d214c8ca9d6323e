// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::{self, Receiver, TryRecvError}, Arc, Mutex},
    thread,
};

use eframe::egui;

use crate::{
    analysis::{AnalysisRequest, AnalysisResult, Analyzer},
    chart::Chart,
    config::{options::ChartKind, state::AppState},
    core::net::{Fetch, FetchError, HttpFetcher},
};

use super::{components, fonts, progress::GuiProgress};

pub type RunOutcome = Result<AnalysisResult, FetchError>;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let state = AppState::default();
    let analyzer = Analyzer::http(state.options.clone())?;
    logf!("Init: analyzer ready (top_n={})", state.options.top_n);

    eframe::run_native(
        "Page Word Frequency",
        options,
        Box::new(move |cc| {
            fonts::install_cjk_fallback(&cc.egui_ctx);
            Ok(Box::new(App::new(state, analyzer)))
        }),
    )?;
    Ok(())
}

pub struct App<F: Fetch = HttpFetcher> {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub analyzer: Arc<Analyzer<F>>,

    // last finished run; replaced wholesale by the next one
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pending: Option<Receiver<RunOutcome>>,
}

impl<F: Fetch + Send + Sync + 'static> App<F> {
    pub fn new(state: AppState, analyzer: Analyzer<F>) -> Self {
        Self {
            state,
            analyzer: Arc::new(analyzer),
            result: None,
            error: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            pending: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Kick off a full run for the URL in the text field.
    /// Every submission fetches again; nothing is reused from earlier runs.
    pub fn start_analysis(&mut self, ctx: &egui::Context) {
        if self.running {
            return;
        }
        let url = self.state.gui.url_text.trim().to_owned();
        if url.is_empty() {
            self.status("Enter a URL first");
            return;
        }

        let req = AnalysisRequest::new(url, self.state.gui.chart_kind);
        logf!("UI: Analyze {:?}", req);

        self.running = true;
        self.result = None;
        self.error = None;

        let analyzer = Arc::clone(&self.analyzer);
        let status = Arc::clone(&self.status);
        let ctx2 = ctx.clone();
        let (tx, rx) = mpsc::channel::<RunOutcome>();
        self.pending = Some(rx);

        thread::spawn(move || {
            let mut prog = GuiProgress::new(status);
            let outcome = analyzer.analyze(&req, Some(&mut prog));
            let _ = tx.send(outcome);
            ctx2.request_repaint();
        });
    }

    /// Pick up a finished run, if any. Returns true when one was applied.
    pub fn poll_worker(&mut self) -> bool {
        let Some(rx) = &self.pending else { return false };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                loge!("UI: analysis worker exited without a result");
                self.pending = None;
                self.running = false;
                self.error = Some(s!("Analysis stopped unexpectedly"));
                self.status("Error");
                return true;
            }
        };

        self.finish_run(outcome);
        true
    }

    /// Apply a finished run: a result replaces the last one, a fetch error
    /// leaves no result (and no chart) behind.
    pub fn finish_run(&mut self, outcome: RunOutcome) {
        self.pending = None;
        self.running = false;

        match outcome {
            Ok(result) => {
                let msg = if result.is_empty() {
                    s!("Ready: no words found")
                } else {
                    format!(
                        "Ready: {} tokens, {} distinct{}",
                        result.stats.tokens,
                        result.stats.distinct,
                        if result.stats.degraded { " (markup recovered)" } else { "" }
                    )
                };
                self.status(msg);
                self.result = Some(result);
            }
            Err(e) => {
                self.status("Fetch failed");
                self.result = None;
                self.error = Some(e.to_string());
            }
        }
    }

    /// Sidebar selection changed: redraw the chart from the ranked list we hold.
    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        if self.state.gui.chart_kind == kind {
            return;
        }
        logf!("UI: Chart {:?} → {:?}", self.state.gui.chart_kind, kind);
        self.state.gui.chart_kind = kind;
        if let Some(result) = self.result.as_mut() {
            result.chart = result.chart_for(kind);
        }
    }

    /// Chart currently on screen, if any.
    pub fn chart(&self) -> Option<&Chart> {
        self.result.as_ref().and_then(|r| r.chart.as_ref())
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        egui::SidePanel::left("chart_kinds")
            .resizable(false)
            .show(ctx, |ui| {
                components::chart_picker::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Page word frequency & word cloud");
            components::url_bar::draw(ui, self);

            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("results_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    components::results::draw(ui, self);
                });
        });
    }
}
