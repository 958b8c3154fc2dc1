// Job Scraper - API Core
//
// HTTP facade over the extraction library plus the small in-memory
// services (tasks, todos, workouts) served from the same process.
//
// Each service lives in domains/<name>/ with its models and edges (handlers).

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
