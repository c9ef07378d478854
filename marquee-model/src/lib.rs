//! Core data model definitions shared across Marquee crates.
#![allow(missing_docs)]

pub mod api;
pub mod media;
pub mod media_id;
pub mod media_type;
pub mod popularity;

// Intentionally curated re-exports for downstream consumers.
pub use api::{
    DiscoverQuery, ErrorBody, UpdatePopularityRequest,
    UpdatePopularityResponse,
};
pub use media::{GenreId, MediaItem};
pub use media_id::MediaId;
pub use media_type::MediaType;
pub use popularity::RawPopularity;
