//! Site scrapers: a fetcher bound to a URL plus the matching extractor.
//!
//! `scrape` never fails. A failed fetch or a malformed document is logged and
//! reported as an empty list, which is what the HTTP API hands back.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::{ExtractionError, Result};
use crate::pipeline::{extract_listings, extract_stories, FEED_ORIGIN};
use crate::traits::fetcher::Fetcher;
use crate::types::query::SortMode;
use crate::types::record::{ListingRecord, StoryRecord};

/// Default job board location.
pub const JOBS_URL: &str = "https://realpython.github.io/fake-jobs/";

/// Default discussion feed location.
pub const HACKER_NEWS_URL: &str = FEED_ORIGIN;

fn log_failure(site: &str, url: &str, err: &ExtractionError) {
    match err {
        ExtractionError::Fetch(fetch) => warn!(
            site,
            url = %url,
            status = ?fetch.status(),
            error = %fetch,
            "Failed to fetch page"
        ),
        other => error!(site, url = %url, error = %other, "Page has unexpected structure"),
    }
}

/// Job listings from the fake-jobs board.
#[derive(Clone)]
pub struct JobBoard {
    fetcher: Arc<dyn Fetcher>,
    url: String,
}

impl JobBoard {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            url: JOBS_URL.to_string(),
        }
    }

    /// Point at a different board URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and extract, surfacing errors.
    pub async fn try_scrape(&self, search_term: Option<&str>) -> Result<Vec<ListingRecord>> {
        let page = self.fetcher.fetch(&self.url).await?;
        extract_listings(&page.body, search_term)
    }

    /// Fetch and extract; failures are logged and yield an empty list.
    pub async fn scrape(&self, search_term: Option<&str>) -> Vec<ListingRecord> {
        match self.try_scrape(search_term).await {
            Ok(listings) => {
                info!(url = %self.url, count = listings.len(), search = ?search_term, "Scraped job board");
                listings
            }
            Err(e) => {
                log_failure("jobs", &self.url, &e);
                Vec::new()
            }
        }
    }
}

/// Stories from the Hacker News front page.
#[derive(Clone)]
pub struct HackerNews {
    fetcher: Arc<dyn Fetcher>,
    url: String,
}

impl HackerNews {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            url: HACKER_NEWS_URL.to_string(),
        }
    }

    /// Point at a different feed URL. Relative item links are still resolved
    /// against [`FEED_ORIGIN`].
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and extract, surfacing fetch errors.
    pub async fn try_scrape(
        &self,
        search_term: Option<&str>,
        sort: SortMode,
    ) -> Result<Vec<StoryRecord>> {
        let page = self.fetcher.fetch(&self.url).await?;
        Ok(extract_stories(&page.body, search_term, sort))
    }

    /// Fetch and extract; failures are logged and yield an empty list.
    pub async fn scrape(&self, search_term: Option<&str>, sort: SortMode) -> Vec<StoryRecord> {
        match self.try_scrape(search_term, sort).await {
            Ok(stories) => {
                info!(url = %self.url, count = stories.len(), search = ?search_term, sort = %sort, "Scraped discussion feed");
                stories
            }
            Err(e) => {
                log_failure("hackernews", &self.url, &e);
                Vec::new()
            }
        }
    }
}
