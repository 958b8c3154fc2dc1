pub mod edges;

pub use edges::{routes, ScrapeQuery};
