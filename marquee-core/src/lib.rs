//! Core library for the Marquee catalog service.
//!
//! Holds the in-memory [`Catalog`] of movies and TV shows, the loader that
//! builds it from JSON, and the domain errors surfaced to the HTTP layer.
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod loader;

pub use catalog::{Catalog, CatalogSummary, DISCOVER_LIMIT};
pub use error::{CatalogError, Result};
