//! Integration tests for the site scrapers.
//!
//! These tests drive the public API end to end against canned pages:
//! 1. Serve fixture markup through the mock fetcher
//! 2. Scrape with search terms and sort modes
//! 3. Check records, ordering and failure handling

use std::sync::Arc;

use extraction::{
    testing::{listing_page, story_page, ListingFixture, StoryFixture},
    HackerNews, JobBoard, MockFetcher, SortMode, HACKER_NEWS_URL, JOBS_URL,
};

fn job_board_page() -> String {
    listing_page(&[
        ListingFixture::new("Senior Python Developer", "Payne, Roberts and Davis", "Stewartbury, AA")
            .apply("https://realpython.github.io/fake-jobs/jobs/senior-python-developer-0.html"),
        ListingFixture::new("Energy engineer", "Vasquez-Davidson", "Christopherville, AA")
            .apply("https://realpython.github.io/fake-jobs/jobs/energy-engineer-1.html"),
        ListingFixture::new("Legal executive", "Jackson, Chambers and Levy", "Port Ericaburgh, AA"),
    ])
}

fn front_page() -> String {
    story_page(&[
        StoryFixture::new("Show HN: A tiny Rust database", "https://github.com/ferris/db")
            .site("github.com")
            .points("120 points")
            .author("ferris")
            .age("5 hours ago")
            .link("hide")
            .link("34 comments"),
        StoryFixture::new("Ask HN: What are you reading?", "item?id=4242")
            .points("15 points")
            .author("reader")
            .age("2 days ago")
            .link("discuss"),
        StoryFixture::new("Postgres tips", "https://example.com/pg")
            .site("example.com")
            .points("8 points")
            .author("elephant")
            .age("12 minutes ago"),
        StoryFixture::new("We're hiring", "https://jobs.example.com").without_subtext(),
    ])
}

fn job_board() -> JobBoard {
    let mock = MockFetcher::new().with_body(JOBS_URL, job_board_page());
    JobBoard::new(Arc::new(mock))
}

fn hacker_news() -> HackerNews {
    let mock = MockFetcher::new().with_body(HACKER_NEWS_URL, front_page());
    HackerNews::new(Arc::new(mock))
}

#[tokio::test]
async fn test_all_listings_in_page_order() {
    let listings = job_board().scrape(None).await;

    let titles: Vec<_> = listings.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Senior Python Developer", "Energy engineer", "Legal executive"]
    );
    assert_eq!(listings[2].action_link, "");
}

#[tokio::test]
async fn test_listing_search_is_case_insensitive() {
    let board = job_board();

    assert_eq!(board.scrape(Some("python")).await.len(), 1);
    assert_eq!(board.scrape(Some("DAVIDSON")).await.len(), 1);
    assert_eq!(board.scrape(Some("aa")).await.len(), 3);
    assert!(board.scrape(Some("cobol")).await.is_empty());
}

#[tokio::test]
async fn test_stories_keep_feed_order_by_default() {
    let stories = hacker_news().scrape(None, SortMode::Default).await;

    assert_eq!(stories.len(), 4);
    assert_eq!(stories[0].title, "Show HN: A tiny Rust database");
    assert_eq!(stories[0].age_minutes, 300);
    assert_eq!(stories[0].comment_text, "34 comments");
    assert_eq!(stories[1].url, "https://news.ycombinator.com/item?id=4242");
    assert_eq!(stories[1].comment_text, "discuss");
    assert_eq!(stories[3].points_text, "0 points");
    assert_eq!(stories[3].age_minutes, 0);
}

#[tokio::test]
async fn test_stories_sorted_newest_and_oldest() {
    let feed = hacker_news();

    let newest: Vec<u64> = feed
        .scrape(None, SortMode::Newest)
        .await
        .iter()
        .map(|s| s.age_minutes)
        .collect();
    assert_eq!(newest, vec![0, 12, 300, 2880]);

    let oldest: Vec<u64> = feed
        .scrape(None, SortMode::Oldest)
        .await
        .iter()
        .map(|s| s.age_minutes)
        .collect();
    assert_eq!(oldest, vec![2880, 300, 12, 0]);
}

#[tokio::test]
async fn test_story_search_covers_title_site_and_author() {
    let feed = hacker_news();

    assert_eq!(feed.scrape(Some("rust"), SortMode::Default).await.len(), 1);
    assert_eq!(feed.scrape(Some("EXAMPLE.COM"), SortMode::Default).await.len(), 1);
    assert_eq!(feed.scrape(Some("reader"), SortMode::Default).await.len(), 1);
    assert_eq!(feed.scrape(Some(""), SortMode::Default).await.len(), 4);
}

#[tokio::test]
async fn test_unreachable_sites_yield_empty_lists() {
    let mock = Arc::new(MockFetcher::new());

    assert!(JobBoard::new(mock.clone()).scrape(None).await.is_empty());
    assert!(HackerNews::new(mock.clone())
        .scrape(None, SortMode::Default)
        .await
        .is_empty());
    assert_eq!(mock.call_count(), 2);
}
