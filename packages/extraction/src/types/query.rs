//! Caller-supplied options: search filter and sort order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering applied to discussion-feed stories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Keep the feed's own ranking (document order).
    #[default]
    Default,
    /// Most recent first (ascending age).
    Newest,
    /// Least recent first (descending age).
    Oldest,
}

impl SortMode {
    /// Interpret a query parameter. Absent or unrecognized values fall back
    /// to [`SortMode::Default`].
    pub fn from_param(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortMode::Default),
            "newest" => Ok(SortMode::Newest),
            "oldest" => Ok(SortMode::Oldest),
            other => Err(format!("unknown sort mode: {}", other)),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive substring filter over a record's searchable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    /// Build a filter from an optional term. An absent or empty term means
    /// "no filter" and yields `None`.
    pub fn new(term: Option<&str>) -> Option<Self> {
        match term {
            Some(term) if !term.is_empty() => Some(Self {
                needle: term.to_lowercase(),
            }),
            _ => None,
        }
    }

    /// True if the term occurs in at least one of `fields`.
    pub fn matches_any<'f>(&self, fields: impl IntoIterator<Item = &'f str>) -> bool {
        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}
