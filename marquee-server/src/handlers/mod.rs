//! HTTP request handlers organized by functionality

pub mod discover;
pub mod meta;
pub mod popularity;

// Re-export commonly used handlers
pub use discover::discover_handler;
pub use meta::{fallback_handler, home_handler, status_handler};
pub use popularity::update_popularity_handler;
