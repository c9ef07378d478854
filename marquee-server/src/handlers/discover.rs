use axum::{
    Json,
    extract::{Query, State},
};
use tracing::debug;

use marquee_model::{DiscoverQuery, GenreId, MediaItem, MediaType};

use crate::infra::app_state::AppState;

/// List up to twenty catalog items of one media type, optionally narrowed
/// to a genre.
///
/// A missing or unknown `type` yields an empty list rather than an error,
/// and a `genre` that is not an integer is ignored. Repeated keys use their
/// first value.
pub async fn discover_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<MediaItem>> {
    let query = DiscoverQuery::from_pairs(pairs);
    let Some(media_type) = query
        .media_type
        .as_deref()
        .and_then(|raw| raw.parse::<MediaType>().ok())
    else {
        debug!(media_type = ?query.media_type, "discover without a known media type");
        return Json(Vec::new());
    };

    let genre = query
        .genre
        .as_deref()
        .and_then(|raw| raw.trim().parse::<GenreId>().ok());

    let items = state.catalog().find(media_type, genre);
    debug!(%media_type, ?genre, returned = items.len(), "discover");

    Json(items)
}
