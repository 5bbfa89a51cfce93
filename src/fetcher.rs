//! HTTP retrieval of listing pages.
//!
//! The pipeline only depends on the [`PageFetcher`] trait; [`HttpFetcher`] is
//! the `reqwest`-backed implementation used by the binary.

use crate::config::PipelineConfig;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, StatusCode};
use std::error::Error;
use std::fmt;
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// Something that can fetch the markup of a page.
pub trait PageFetcher {
    /// Fetch `url` and return its body.
    ///
    /// Any failure (network error, timeout, non-success status) is an `Err`;
    /// callers decide how to recover.
    async fn fetch_page(&self, url: &str) -> Result<String, Box<dyn Error>>;
}

/// A listing page answered with a non-success status.
#[derive(Debug)]
pub struct HttpStatusError {
    pub url: String,
    pub status: StatusCode,
}

impl fmt::Display for HttpStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status == StatusCode::FORBIDDEN {
            write!(f, "{} refused the request (403 Forbidden)", self.url)
        } else {
            write!(f, "{} returned HTTP {}", self.url, self.status)
        }
    }
}

impl Error for HttpStatusError {}

/// [`PageFetcher`] backed by a shared `reqwest` client.
///
/// The client sends a browser-like header set and enforces the configured
/// timeout on every request.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher from the pipeline settings.
    pub fn new(config: &PipelineConfig) -> Result<Self, Box<dyn Error>> {
        let client = client_builder(config).build()?;
        Ok(Self { client })
    }
}

/// Client settings shared by every listing request.
fn client_builder(config: &PipelineConfig) -> ClientBuilder {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .timeout(config.timeout())
}

impl PageFetcher for HttpFetcher {
    #[instrument(level = "info", skip(self))]
    async fn fetch_page(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let t0 = Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, elapsed_ms = t0.elapsed().as_millis() as u64, "Listing request failed");
            return Err(Box::new(HttpStatusError {
                url: url.to_string(),
                status,
            }));
        }

        let body = response.text().await?;
        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched listing page"
        );
        Ok(body)
    }
}
