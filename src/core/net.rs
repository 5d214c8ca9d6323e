// src/core/net.rs
// Page fetcher: one blocking HTTP GET per analysis run, no retries.

use std::string::FromUtf8Error;

use thiserror::Error;

use crate::config::options::FetchOptions;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no URL given")]
    EmptyUrl,

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("response from {url} is not valid UTF-8: {source}")]
    Decode {
        url: String,
        #[source]
        source: FromUtf8Error,
    },
}

/// Body of one fetched page. Consumed by extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawDocument {
    pub url: String,
    pub body: String,
}

impl RawDocument {
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self { url: url.into(), body: body.into() }
    }
}

/// Transport seam. Shells use `HttpFetcher`; tests plug in canned pages or failures.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<RawDocument, FetchError>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<RawDocument, FetchError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(FetchError::EmptyUrl);
        }

        logd!("Fetch: GET {}", url);
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Network { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }

        let bytes = resp
            .bytes()
            .map_err(|source| FetchError::Network { url: s!(url), source })?;
        let body = String::from_utf8(bytes.to_vec())
            .map_err(|source| FetchError::Decode { url: s!(url), source })?;

        logd!("Fetch: {} → {} bytes", url, body.len());
        Ok(RawDocument::new(url, body))
    }
}
