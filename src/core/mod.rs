// src/core/mod.rs

pub mod html;
pub mod lexicon;
pub mod net;
pub mod normalize;
pub mod segment;

pub use html::{Extraction, PlainText};
pub use net::{Fetch, FetchError, HttpFetcher, RawDocument};
pub use normalize::NormalizedText;
pub use segment::Segmenter;
