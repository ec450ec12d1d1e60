//! HTTP fetch client for scrape targets.
//!
//! Sends a single GET with browser-like headers and a bounded timeout.
//! 4xx responses come back as normal pages for the caller to inspect;
//! only timeouts, connection failures and 5xx responses surface as a
//! [`FetchError`]. Retrying is the orchestrator's job, not ours.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use thiserror::Error;

use crate::Result;

/// Per-request timeout for scrape fetches.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// A fetched page: status plus raw body text.
#[derive(Debug, Clone)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

/// Network-level failure during a scrape attempt. Absorbed by the
/// refresh retry loop, never surfaced to API callers.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("server error: HTTP {0}")]
    Server(u16),
}

/// Seam between the refresh orchestrator and the network.
pub trait PageFetcher: Send + Sync {
    fn fetch_page(
        &self,
        url: &str,
    ) -> impl Future<Output = std::result::Result<Page, FetchError>> + Send;
}

/// Real fetcher backed by reqwest.
pub struct FetchClient {
    client: reqwest::Client,
}

impl FetchClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .default_headers(browser_headers())
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

/// Header set imitating a desktop Chrome session. Scrape targets tend to
/// reject clients without these.
fn browser_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    h.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
        ),
    );
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h.insert("DNT", HeaderValue::from_static("1"));
    h.insert("Upgrade-Insecure-Requests", HeaderValue::from_static("1"));
    h
}

impl PageFetcher for FetchClient {
    async fn fetch_page(&self, url: &str) -> std::result::Result<Page, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        if status >= 500 {
            return Err(FetchError::Server(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Page { status, body })
    }
}
