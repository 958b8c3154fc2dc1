//! JSON endpoints over the site scrapers.
//!
//! Both endpoints always answer 200. Fetch and parse failures are logged by
//! the scrapers and show up here as an empty list.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use extraction::SortMode;

use crate::server::app::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ScrapeQuery {
    /// Search term, echoed back as `search`.
    q: Option<String>,
    /// `default`, `newest` or `oldest`; anything else means `default`.
    sort: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/jobs", get(jobs_handler))
        .route("/api/hackernews", get(hacker_news_handler))
}

async fn jobs_handler(State(state): State<AppState>, Query(query): Query<ScrapeQuery>) -> Json<Value> {
    let jobs = state.jobs.scrape(query.q.as_deref()).await;
    Json(json!({
        "count": jobs.len(),
        "search": query.q,
        "jobs": jobs,
    }))
}

async fn hacker_news_handler(
    State(state): State<AppState>,
    Query(query): Query<ScrapeQuery>,
) -> Json<Value> {
    let sort = SortMode::from_param(query.sort.as_deref());
    let stories = state.hacker_news.scrape(query.q.as_deref(), sort).await;
    Json(json!({
        "count": stories.len(),
        "search": query.q,
        "stories": stories,
    }))
}
