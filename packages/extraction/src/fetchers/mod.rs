//! Fetcher implementations.
//!
//! # Available Fetchers
//!
//! - `HttpFetcher` - reqwest GET with a bounded timeout
//! - `MockFetcher` - For testing

mod http;
mod mock;

pub use http::{HttpFetcher, DEFAULT_TIMEOUT};
pub use mock::MockFetcher;

// Re-export from traits for convenience
pub use crate::traits::fetcher::{FetchedPage, Fetcher};
