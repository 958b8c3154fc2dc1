// Common types and utilities shared across domains

pub mod error;
pub mod fields;
pub mod store;

pub use error::{read_body, ApiError, ApiResult};
pub use store::{Entity, MemoryStore, Store};
