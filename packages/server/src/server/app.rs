//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use extraction::{Fetcher, HackerNews, HttpFetcher, JobBoard};

use crate::common::{MemoryStore, Store};
use crate::config::Config;
use crate::domains::{motivation, scraping, tasks, todos, workouts};
use crate::domains::{tasks::Task, todos::Todo, workouts::Workout};
use crate::server::routes::{api_index_handler, health_handler};
use crate::server::static_files::{serve_scraper_ui, serve_workout_log};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub jobs: JobBoard,
    pub hacker_news: HackerNews,
    pub tasks: Arc<dyn Store<Task>>,
    pub todos: Arc<dyn Store<Todo>>,
    pub workouts: Arc<dyn Store<Workout>>,
}

impl AppState {
    /// Scrapers on the given fetcher, empty in-memory stores.
    pub fn new(fetcher: Arc<dyn Fetcher>, config: &Config) -> Self {
        Self {
            jobs: JobBoard::new(fetcher.clone()).with_url(&config.jobs_url),
            hacker_news: HackerNews::new(fetcher).with_url(&config.hacker_news_url),
            tasks: Arc::new(MemoryStore::<Task>::new()),
            todos: Arc::new(MemoryStore::<Todo>::new()),
            workouts: Arc::new(MemoryStore::<Workout>::new()),
        }
    }

    /// State backed by a real HTTP fetcher.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher =
            HttpFetcher::with_timeout(config.fetch_timeout).context("Failed to build HTTP client")?;
        Ok(Self::new(Arc::new(fetcher), config))
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    // CORS: the browser pages may be opened from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // Browser pages
        .route("/", get(serve_scraper_ui))
        .route("/log", get(serve_workout_log))
        // Service endpoints
        .route("/api", get(api_index_handler))
        .route("/health", get(health_handler))
        .merge(scraping::routes())
        .merge(tasks::routes())
        .merge(todos::routes())
        .merge(workouts::routes())
        .merge(motivation::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
