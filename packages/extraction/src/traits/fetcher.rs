//! Fetcher trait for pluggable document retrieval.
//!
//! Extractors never perform I/O. A `Fetcher` turns a URL into raw markup, and
//! the site scrapers hand that markup to the pure extraction functions.
//!
//! # Usage
//!
//! ```rust,ignore
//! use extraction::{Fetcher, HttpFetcher};
//!
//! let fetcher = HttpFetcher::new()?;
//! let page = fetcher.fetch("https://news.ycombinator.com").await?;
//! println!("{} bytes", page.content_length());
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchResult;

/// A document as returned by the transport, before any parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedPage {
    /// URL that was requested
    pub url: String,

    /// Raw response body
    pub body: String,

    /// HTTP status code of the response
    pub status: u16,

    /// When the document was fetched
    pub fetched_at: DateTime<Utc>,
}

impl FetchedPage {
    /// Create a successful (200) page.
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
            status: 200,
            fetched_at: Utc::now(),
        }
    }

    /// Set the status code.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Set the fetched timestamp.
    pub fn with_fetched_at(mut self, fetched_at: DateTime<Utc>) -> Self {
        self.fetched_at = fetched_at;
        self
    }

    /// Get body length in bytes.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }

    /// Check if this page has a non-blank body.
    pub fn has_content(&self) -> bool {
        !self.body.trim().is_empty()
    }
}

/// Retrieves raw markup for a URL.
///
/// Implementations:
/// - `HttpFetcher` - reqwest with a bounded timeout
/// - `MockFetcher` - canned responses for tests
///
/// Implementations never retry; a failed fetch is reported once and the
/// caller decides what to do with it.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch a single URL.
    ///
    /// Returns an error for transport failures, timeouts and non-success
    /// status codes.
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage>;

    /// Get the fetcher name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
