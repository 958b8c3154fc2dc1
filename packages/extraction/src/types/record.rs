//! Records produced by the extractors.
//!
//! Field names follow the domain; the serialized names are the ones the
//! browser UI and existing API clients read.

use serde::{Deserialize, Serialize};

/// One job listing card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub title: String,

    /// Hiring organization.
    #[serde(rename = "company")]
    pub organization: String,

    pub location: String,

    /// Target of the card's "Apply" link, empty when the card has none.
    #[serde(rename = "apply_link")]
    pub action_link: String,
}

impl ListingRecord {
    /// Fields the search filter looks at.
    pub fn searchable_fields(&self) -> [&str; 3] {
        [&self.title, &self.organization, &self.location]
    }
}

/// One story from a discussion feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRecord {
    pub title: String,

    /// Absolute link target.
    pub url: String,

    /// Domain label shown next to the title, may be empty.
    pub site: String,

    #[serde(rename = "points")]
    pub points_text: String,

    pub author: String,

    /// Relative age as displayed ("3 hours ago").
    #[serde(rename = "time_ago")]
    pub age_text: String,

    /// `age_text` normalized to minutes.
    #[serde(rename = "minutes_ago")]
    pub age_minutes: u64,

    /// Comment link label ("42 comments", "discuss"), may be empty.
    #[serde(rename = "comments")]
    pub comment_text: String,
}

impl StoryRecord {
    /// Fields the search filter looks at.
    pub fn searchable_fields(&self) -> [&str; 3] {
        [&self.title, &self.site, &self.author]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_serializes_with_wire_names() {
        let listing = ListingRecord {
            title: "Energy engineer".into(),
            organization: "Vasquez-Davidson".into(),
            location: "Christopherville, AA".into(),
            action_link: "https://example.com/apply".into(),
        };

        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["company"], "Vasquez-Davidson");
        assert_eq!(json["apply_link"], "https://example.com/apply");
        assert!(json.get("organization").is_none());
    }

    #[test]
    fn test_story_serializes_with_wire_names() {
        let story = StoryRecord {
            title: "Show HN: a thing".into(),
            url: "https://example.com".into(),
            site: "example.com".into(),
            points_text: "12 points".into(),
            author: "pg".into(),
            age_text: "2 hours ago".into(),
            age_minutes: 120,
            comment_text: "3 comments".into(),
        };

        let json = serde_json::to_value(&story).unwrap();
        assert_eq!(json["points"], "12 points");
        assert_eq!(json["time_ago"], "2 hours ago");
        assert_eq!(json["minutes_ago"], 120);
        assert_eq!(json["comments"], "3 comments");
    }
}
