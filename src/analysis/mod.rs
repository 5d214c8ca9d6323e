// src/analysis/mod.rs
pub mod frequency;
pub mod pipeline;
pub mod rank;

pub use frequency::FrequencyTable;
pub use pipeline::{AnalysisRequest, AnalysisResult, AnalysisStats, Analyzer};
pub use rank::{rank, RankedEntry, RankedList};
