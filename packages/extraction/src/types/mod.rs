//! Data types for the extraction library.

pub mod query;
pub mod record;
