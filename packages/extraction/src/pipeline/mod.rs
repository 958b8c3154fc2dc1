//! Pure extraction functions: raw markup in, records out.
//!
//! Nothing here performs I/O or keeps state between calls.

pub mod age;
pub mod listings;
pub mod stories;

pub use age::{normalize_age, UnitRule, UNIT_RULES};
pub use listings::extract_listings;
pub use stories::{absolutize_url, extract_stories, sort_stories, StoryUnit, FEED_ORIGIN};
