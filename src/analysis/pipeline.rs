// src/analysis/pipeline.rs
//
// AnalysisRequest → AnalysisResult, one linear pass:
//   fetch → extract → normalize → segment/count → rank → render
// Only a fetch failure stops the run. Everything after it degrades to empty
// results instead of failing. Nothing is kept between runs.

use crate::{
    chart::{self, Chart, ChartRequest, WordCloud},
    config::options::{AnalysisOptions, ChartKind},
    core::{
        html::{self, Extraction, PlainText},
        net::{Fetch, FetchError, HttpFetcher},
        normalize::{self, NormalizedText},
        segment::Segmenter,
    },
    progress::{Progress, Stage},
};

use super::{
    frequency::FrequencyTable,
    rank::{rank, RankedList},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub url: String,
    pub chart: ChartKind,
}

impl AnalysisRequest {
    pub fn new(url: impl Into<String>, chart: ChartKind) -> Self {
        Self { url: url.into(), chart }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisStats {
    pub text_chars: usize,
    pub normalized_chars: usize,
    pub tokens: usize,
    pub distinct: usize,
    /// Markup was malformed; text is best-effort.
    pub degraded: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    pub url: String,
    /// Headline list (top 20 by default)
    pub top: RankedList,
    pub cloud: Option<WordCloud>,
    pub chart: Option<Chart>,
    pub stats: AnalysisStats,
}

impl AnalysisResult {
    /// Nothing countable was found on the page.
    pub fn is_empty(&self) -> bool { self.top.is_empty() }

    /// Chart of another kind from the same ranked list.
    pub fn chart_for(&self, kind: ChartKind) -> Option<Chart> {
        chart::render(&ChartRequest::new(kind, &self.top))
    }
}

fn report(progress: &mut Option<&mut dyn Progress>, stage: Stage) {
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done(stage);
    }
}

pub struct Analyzer<F: Fetch> {
    fetcher: F,
    segmenter: Segmenter,
    options: AnalysisOptions,
}

impl Analyzer<HttpFetcher> {
    /// Real HTTP transport plus the embedded dictionaries.
    pub fn http(options: AnalysisOptions) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(&options.fetch)?;
        Ok(Self::new(fetcher, Segmenter::new(), options))
    }
}

impl<F: Fetch> Analyzer<F> {
    pub fn new(fetcher: F, segmenter: Segmenter, options: AnalysisOptions) -> Self {
        Self { fetcher, segmenter, options }
    }

    pub fn options(&self) -> &AnalysisOptions { &self.options }

    pub fn analyze(
        &self,
        req: &AnalysisRequest,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<AnalysisResult, FetchError> {
        logf!("Analyze: begin url={} chart={:?}", req.url, req.chart);
        if let Some(p) = progress.as_deref_mut() {
            p.begin(Stage::ALL.len());
            p.log(&format!("Fetching {}…", req.url));
        }

        let doc = match self.fetcher.fetch(&req.url) {
            Ok(doc) => doc,
            Err(e) => {
                loge!("Analyze: fetch failed url={}: {}", req.url, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Error: {e}"));
                    p.finish();
                }
                return Err(e);
            }
        };
        report(&mut progress, Stage::Fetch);

        let extraction = html::extract_text(doc);
        report(&mut progress, Stage::Extract);

        let result = self.analyze_extraction(&req.url, extraction, req.chart, &mut progress);

        logf!(
            "Analyze: OK url={} tokens={} distinct={} degraded={}",
            result.url, result.stats.tokens, result.stats.distinct, result.stats.degraded
        );
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        Ok(result)
    }

    /// Everything after extraction, for text that is already markup-free.
    pub fn analyze_text(&self, text: PlainText, chart: ChartKind) -> AnalysisResult {
        let extraction = Extraction { text, degraded: false };
        self.analyze_extraction("", extraction, chart, &mut None)
    }

    /// Segment and count.
    pub fn count(&self, text: &NormalizedText) -> FrequencyTable {
        FrequencyTable::from_tokens(self.segmenter.segment(text))
    }

    fn analyze_extraction(
        &self,
        url: &str,
        extraction: Extraction,
        chart_kind: ChartKind,
        progress: &mut Option<&mut dyn Progress>,
    ) -> AnalysisResult {
        let Extraction { text, degraded } = extraction;

        let normalized = normalize::normalize(&text);
        report(progress, Stage::Normalize);

        let table = self.count(&normalized);
        report(progress, Stage::Tokenize);
        if table.is_empty() {
            logd!("Analyze: no tokens after normalization");
        }

        let top = rank(&table, self.options.top_n);
        let cloud_list = rank(&table, self.options.cloud_max_words);
        report(progress, Stage::Rank);

        let cloud = chart::word_cloud(&cloud_list);
        let chart = chart::render(&ChartRequest::new(chart_kind, &top));
        report(progress, Stage::Render);

        AnalysisResult {
            url: s!(url),
            stats: AnalysisStats {
                text_chars: text.as_str().chars().count(),
                normalized_chars: normalized.as_str().chars().count(),
                tokens: table.total() as usize,
                distinct: table.len(),
                degraded,
            },
            top,
            cloud,
            chart,
        }
    }
}
