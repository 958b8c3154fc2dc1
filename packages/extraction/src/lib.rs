//! Listing and discussion-feed extraction.
//!
//! Turns two kinds of public pages into structured records:
//!
//! - a job board (cards with title, company, location and an "Apply" link)
//! - the Hacker News front page (stories with score, author, age and comments)
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use extraction::{HackerNews, HttpFetcher, SortMode};
//!
//! let fetcher = Arc::new(HttpFetcher::new()?);
//! let feed = HackerNews::new(fetcher);
//!
//! // Newest first, only stories mentioning "rust"
//! let stories = feed.scrape(Some("rust"), SortMode::Newest).await;
//! ```
//!
//! # Modules
//!
//! - [`pipeline`] - Pure extractors and the relative-time normalizer
//! - [`sites`] - Fetcher + extractor pairs for each supported site
//! - [`fetchers`] - HTTP and mock page fetchers
//! - [`dom`] - Thin element-query layer over `scraper`
//! - [`types`] - Records and query parameters
//! - [`testing`] - HTML fixture builders

pub mod dom;
pub mod error;
pub mod fetchers;
pub mod pipeline;
pub mod sites;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ExtractionError, FetchError, FetchResult, Result};
pub use traits::fetcher::{FetchedPage, Fetcher};
pub use types::{
    query::{SearchFilter, SortMode},
    record::{ListingRecord, StoryRecord},
};

// Re-export pipeline components
pub use pipeline::{extract_listings, extract_stories, normalize_age, sort_stories, FEED_ORIGIN};

// Re-export fetchers and sites
pub use fetchers::{HttpFetcher, MockFetcher};
pub use sites::{HackerNews, JobBoard, HACKER_NEWS_URL, JOBS_URL};
