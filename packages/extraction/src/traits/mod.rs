//! Core trait abstractions for the extraction library.
//!
//! Applications implement these to plug in how documents are retrieved.

pub mod fetcher;
