//! Typed errors for the extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can tell a
//! transport failure apart from a document that does not have the expected
//! structure.

use thiserror::Error;

/// Errors raised while turning a fetched document into records.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// A block was detected but one of its required fields is missing.
    #[error("{block} #{index} has no {field} element")]
    MissingField {
        block: &'static str,
        field: &'static str,
        index: usize,
    },

    /// The document could not be fetched.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

/// Errors raised by a [`Fetcher`](crate::traits::fetcher::Fetcher).
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status code.
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The request did not complete within the configured timeout.
    #[error("timeout fetching: {url}")]
    Timeout { url: String },

    /// Any other transport failure (DNS, TLS, connection reset, body decode).
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// No canned response was registered for this URL.
    #[error("no response configured for: {url}")]
    NotConfigured { url: String },
}

impl FetchError {
    /// HTTP status code carried by this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
