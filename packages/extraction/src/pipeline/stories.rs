//! Discussion-feed (Hacker News) story extraction.
//!
//! The feed is a table where every story spans two rows: a `tr.athing` row
//! with the title link and, directly after it, a sibling row whose
//! `td.subtext` cell carries score, author, age and the comment link. Rows
//! are paired into [`StoryUnit`]s first and each unit is parsed on its own.

use scraper::Selector;
use std::sync::LazyLock;
use tracing::debug;

use super::age::normalize_age;
use crate::dom::{Document, Element};
use crate::types::query::{SearchFilter, SortMode};
use crate::types::record::StoryRecord;

/// Origin prepended to relative item links.
pub const FEED_ORIGIN: &str = "https://news.ycombinator.com";

const RELATIVE_ITEM_PREFIX: &str = "item?";
const ROW_TAG: &str = "tr";
const DEFAULT_POINTS: &str = "0 points";

/// Substrings that mark a subtext link as the comment link.
const COMMENT_KEYWORDS: &[&str] = &["comment", "discuss"];

static STORY_ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr.athing").unwrap());
static TITLE_LINE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.titleline").unwrap());
static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static SITE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.sitestr").unwrap());
static SUBTEXT: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td.subtext").unwrap());
static SCORE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.score").unwrap());
static AUTHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a.hnuser").unwrap());
static AGE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.age").unwrap());

/// A primary story row together with the row that follows it.
#[derive(Debug, Clone, Copy)]
pub struct StoryUnit<'a> {
    pub primary: Element<'a>,
    pub subtext_row: Option<Element<'a>>,
}

impl<'a> StoryUnit<'a> {
    /// Pair every `tr.athing` with its next sibling `tr`.
    pub fn pair_rows(document: &'a Document) -> Vec<StoryUnit<'a>> {
        document
            .find_all(&STORY_ROW)
            .into_iter()
            .map(|primary| StoryUnit {
                primary,
                subtext_row: primary.next_sibling_element(ROW_TAG),
            })
            .collect()
    }

    /// Build the record for this unit.
    ///
    /// Returns `None` when the title container or its link is missing. Missing
    /// metadata never drops the story.
    pub fn parse(&self) -> Option<StoryRecord> {
        let title_line = self.primary.find_first(&TITLE_LINE)?;
        let link = title_line.find_first(&LINK)?;

        let site = title_line
            .find_first(&SITE)
            .map(|el| el.text())
            .unwrap_or_default();
        let meta = Metadata::read(self.subtext_row);

        Some(StoryRecord {
            title: link.text(),
            url: absolutize_url(link.attr("href").unwrap_or_default()),
            site,
            points_text: meta.points,
            author: meta.author,
            age_minutes: normalize_age(&meta.age_text),
            age_text: meta.age_text,
            comment_text: meta.comments,
        })
    }
}

/// Fields read from the subtext cell.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Metadata {
    points: String,
    author: String,
    age_text: String,
    comments: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            points: DEFAULT_POINTS.to_string(),
            author: String::new(),
            age_text: String::new(),
            comments: String::new(),
        }
    }
}

impl Metadata {
    fn read(subtext_row: Option<Element<'_>>) -> Self {
        let Some(cell) = subtext_row.and_then(|row| row.find_first(&SUBTEXT)) else {
            return Self::default();
        };

        let text_of = |selector: &Selector| cell.find_first(selector).map(|el| el.text());

        Self {
            points: text_of(&SCORE).unwrap_or_else(|| DEFAULT_POINTS.to_string()),
            author: text_of(&AUTHOR).unwrap_or_default(),
            age_text: text_of(&AGE).unwrap_or_default(),
            comments: comment_label(cell),
        }
    }
}

/// Text of the last link in `cell` that looks like a comment link.
///
/// The subtext cell can hold both an early "discuss" link and a later
/// "N comments" link; the last match in document order wins.
fn comment_label(cell: Element<'_>) -> String {
    cell.find_all(&LINK)
        .into_iter()
        .filter(|link| {
            let text = link.raw_text();
            COMMENT_KEYWORDS.iter().any(|keyword| text.contains(keyword))
        })
        .last()
        .map(|link| link.text())
        .unwrap_or_default()
}

/// Rewrite relative item links (`item?id=42`) against [`FEED_ORIGIN`]; any
/// other href is returned unchanged.
pub fn absolutize_url(raw: &str) -> String {
    if raw.starts_with(RELATIVE_ITEM_PREFIX) {
        format!("{}/{}", FEED_ORIGIN, raw)
    } else {
        raw.to_string()
    }
}

/// Order stories in place. Both sorts are stable, so stories with equal ages
/// keep their feed order.
pub fn sort_stories(stories: &mut [StoryRecord], mode: SortMode) {
    match mode {
        SortMode::Default => {}
        SortMode::Newest => stories.sort_by_key(|s| s.age_minutes),
        SortMode::Oldest => stories.sort_by(|a, b| b.age_minutes.cmp(&a.age_minutes)),
    }
}

/// Extract every story from a discussion-feed document.
///
/// Stories whose title link is missing are skipped. With a non-empty
/// `search_term`, only stories whose title, site or author contain the term
/// (ignoring case) are kept. The result is then ordered by `sort`.
pub fn extract_stories(
    markup: &str,
    search_term: Option<&str>,
    sort: SortMode,
) -> Vec<StoryRecord> {
    let document = Document::parse(markup);
    let filter = SearchFilter::new(search_term);

    let units = StoryUnit::pair_rows(&document);
    let total = units.len();

    let mut stories: Vec<StoryRecord> = units
        .iter()
        .filter_map(StoryUnit::parse)
        .filter(|story| {
            filter
                .as_ref()
                .map_or(true, |f| f.matches_any(story.searchable_fields()))
        })
        .collect();

    sort_stories(&mut stories, sort);

    debug!(rows = total, kept = stories.len(), sort = %sort, "Extracted stories");
    stories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(rows: &str) -> String {
        format!("<html><body><table>{}</table></body></html>", rows)
    }

    const FULL_STORY: &str = r#"
        <tr class="athing submission" id="1">
          <td class="title"><span class="titleline">
            <a href="https://example.com/post">  A great post </a>
            <span class="sitebit comhead"> (<a href="from?site=example.com"><span class="sitestr">example.com</span></a>)</span>
          </span></td>
        </tr>
        <tr>
          <td colspan="2"></td>
          <td class="subtext"><span class="subline">
            <span class="score" id="score_1">118 points</span> by
            <a href="user?id=alice" class="hnuser">alice</a>
            <span class="age" title="2024-01-01T00:00:00"><a href="item?id=1">3 hours ago</a></span>
            | <a href="hide?id=1">hide</a> |
            <a href="item?id=1">42&nbsp;comments</a>
          </span></td>
        </tr>
        <tr class="spacer"></tr>
    "#;

    #[test]
    fn test_full_story() {
        let stories = extract_stories(&feed(FULL_STORY), None, SortMode::Default);

        assert_eq!(stories.len(), 1);
        let story = &stories[0];
        assert_eq!(story.title, "A great post");
        assert_eq!(story.url, "https://example.com/post");
        assert_eq!(story.site, "example.com");
        assert_eq!(story.points_text, "118 points");
        assert_eq!(story.author, "alice");
        assert_eq!(story.age_text, "3 hours ago");
        assert_eq!(story.age_minutes, 180);
        assert_eq!(story.comment_text, "42\u{a0}comments");
    }

    #[test]
    fn test_relative_item_url_is_absolutized() {
        assert_eq!(
            absolutize_url("item?id=42"),
            "https://news.ycombinator.com/item?id=42"
        );
        assert_eq!(absolutize_url("https://a.com/x"), "https://a.com/x");
        assert_eq!(absolutize_url("mailto:x@y.z"), "mailto:x@y.z");
        assert_eq!(absolutize_url(""), "");
    }

    #[test]
    fn test_missing_title_link_is_skipped() {
        let rows = r#"
            <tr class="athing"><td><span class="titleline">no link here</span></td></tr>
            <tr><td class="subtext"><span class="score">5 points</span></td></tr>
            <tr class="athing"><td>no titleline</td></tr>
            <tr class="athing"><td><span class="titleline"><a href="item?id=7">Ask HN: kept</a></span></td></tr>
        "#;

        let stories = extract_stories(&feed(rows), None, SortMode::Default);

        assert_eq!(stories.len(), 1);
        assert_eq!(stories[0].title, "Ask HN: kept");
        assert_eq!(stories[0].url, "https://news.ycombinator.com/item?id=7");
    }

    #[test]
    fn test_missing_subtext_row_uses_defaults() {
        let rows = r#"<tr class="athing"><td><span class="titleline"><a href="https://x.dev">Lonely</a></span></td></tr>"#;

        let stories = extract_stories(&feed(rows), None, SortMode::Default);

        let story = &stories[0];
        assert_eq!(story.points_text, "0 points");
        assert_eq!(story.author, "");
        assert_eq!(story.age_text, "");
        assert_eq!(story.age_minutes, 0);
        assert_eq!(story.comment_text, "");
        assert_eq!(story.site, "");
    }

    #[test]
    fn test_subtext_row_without_cell_uses_defaults() {
        let rows = r#"
            <tr class="athing"><td><span class="titleline"><a href="https://x.dev">Job post</a></span></td></tr>
            <tr><td>nothing here</td></tr>
        "#;

        let story = &extract_stories(&feed(rows), None, SortMode::Default)[0];
        assert_eq!(story.points_text, "0 points");
        assert_eq!(story.author, "");
    }

    #[test]
    fn test_subtext_without_score_defaults_points() {
        let rows = r#"
            <tr class="athing"><td><span class="titleline"><a href="https://x.dev">Hiring</a></span></td></tr>
            <tr><td class="subtext"><span class="age"><a href="item?id=3">9 hours ago</a></span></td></tr>
        "#;

        let story = &extract_stories(&feed(rows), None, SortMode::Default)[0];
        assert_eq!(story.points_text, "0 points");
        assert_eq!(story.age_minutes, 540);
    }

    #[test]
    fn test_last_comment_link_wins() {
        let rows = r#"
            <tr class="athing"><td><span class="titleline"><a href="https://x.dev">Two links</a></span></td></tr>
            <tr><td class="subtext">
              <a href="item?id=1">discuss</a> |
              <a href="item?id=1"> 7 comments </a> |
              <a href="hide?id=1">hide</a>
            </td></tr>
        "#;

        let story = &extract_stories(&feed(rows), None, SortMode::Default)[0];
        assert_eq!(story.comment_text, "7 comments");
    }

    #[test]
    fn test_filter_checks_title_site_and_author() {
        let stories = extract_stories(&feed(FULL_STORY), Some("ALICE"), SortMode::Default);
        assert_eq!(stories.len(), 1);

        let stories = extract_stories(&feed(FULL_STORY), Some("example.COM"), SortMode::Default);
        assert_eq!(stories.len(), 1);

        // points and age are not searchable
        let stories = extract_stories(&feed(FULL_STORY), Some("118"), SortMode::Default);
        assert!(stories.is_empty());
    }

    fn story_rows(ages: &[(&str, &str)]) -> String {
        ages.iter()
            .map(|(title, age)| {
                format!(
                    r#"<tr class="athing"><td><span class="titleline"><a href="https://x.dev/{title}">{title}</a></span></td></tr>
                       <tr><td class="subtext"><span class="age"><a>{age}</a></span></td></tr>"#
                )
            })
            .collect()
    }

    #[test]
    fn test_sort_modes_are_stable() {
        let rows = story_rows(&[
            ("a", "2 hours ago"),
            ("b", "5 minutes ago"),
            ("c", "120 minutes ago"),
            ("d", "1 day ago"),
        ]);
        let titles = |mode| -> Vec<String> {
            extract_stories(&feed(&rows), None, mode)
                .into_iter()
                .map(|s| s.title)
                .collect()
        };

        assert_eq!(titles(SortMode::Default), vec!["a", "b", "c", "d"]);
        assert_eq!(titles(SortMode::Newest), vec!["b", "a", "c", "d"]);
        assert_eq!(titles(SortMode::Oldest), vec!["d", "a", "c", "b"]);
    }

    #[test]
    fn test_pairing_survives_skipped_rows() {
        // The first unit has no title link; the second must still pair with its own subtext.
        let rows = r#"
            <tr class="athing"><td><span class="titleline"></span></td></tr>
            <tr><td class="subtext"><a class="hnuser">wrong</a></td></tr>
            <tr class="athing"><td><span class="titleline"><a href="https://x.dev">Right</a></span></td></tr>
            <tr><td class="subtext"><a class="hnuser">right</a></td></tr>
        "#;

        let doc = Document::parse(&feed(rows));
        let units = StoryUnit::pair_rows(&doc);
        assert_eq!(units.len(), 2);

        let stories = extract_stories(&feed(rows), None, SortMode::Default);
        assert_eq!(stories.len(), 1);
        assert_eq!(stories[0].author, "right");
    }
}
