//! Mock fetcher for testing.
//!
//! Provides a configurable mock implementation of the Fetcher trait.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::{FetchedPage, Fetcher};

#[derive(Debug, Clone)]
enum CannedResponse {
    Body(String),
    Status(u16),
    Timeout,
}

/// Mock fetcher for testing.
///
/// Returns canned bodies or canned failures per URL and records every URL it
/// was asked for. Unknown URLs fail with [`FetchError::NotConfigured`].
///
/// # Example
///
/// ```rust
/// use extraction::fetchers::MockFetcher;
///
/// let mock = MockFetcher::new()
///     .with_body("https://example.com", "<html></html>")
///     .with_status("https://example.com/down", 503);
/// ```
#[derive(Default)]
pub struct MockFetcher {
    responses: Arc<RwLock<HashMap<String, CannedResponse>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create a new mock with no responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200 for `url`.
    pub fn add_body(&self, url: impl Into<String>, body: impl Into<String>) {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), CannedResponse::Body(body.into()));
    }

    /// Fail `url` with the given HTTP status.
    pub fn add_status(&self, url: impl Into<String>, status: u16) {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), CannedResponse::Status(status));
    }

    /// Fail `url` with a timeout.
    pub fn add_timeout(&self, url: impl Into<String>) {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), CannedResponse::Timeout);
    }

    /// Builder form of [`add_body`](Self::add_body).
    pub fn with_body(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.add_body(url, body);
        self
    }

    /// Builder form of [`add_status`](Self::add_status).
    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.add_status(url, status);
        self
    }

    /// Builder form of [`add_timeout`](Self::add_timeout).
    pub fn with_timeout(self, url: impl Into<String>) -> Self {
        self.add_timeout(url);
        self
    }

    /// Get the number of fetches performed.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Get the URLs that were fetched, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Clear recorded calls.
    pub fn reset_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

impl Clone for MockFetcher {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        self.calls.write().unwrap().push(url.to_string());

        let response = self.responses.read().unwrap().get(url).cloned();
        match response {
            Some(CannedResponse::Body(body)) => Ok(FetchedPage::new(url, body)),
            Some(CannedResponse::Status(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status,
            }),
            Some(CannedResponse::Timeout) => Err(FetchError::Timeout {
                url: url.to_string(),
            }),
            None => Err(FetchError::NotConfigured {
                url: url.to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
