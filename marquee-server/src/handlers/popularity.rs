use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{info, warn};

use marquee_model::{UpdatePopularityRequest, UpdatePopularityResponse};

use crate::infra::{app_state::AppState, errors::AppResult};

/// Set the popularity of one catalog item.
pub async fn update_popularity_handler(
    State(state): State<AppState>,
    payload: Result<Json<UpdatePopularityRequest>, JsonRejection>,
) -> AppResult<Json<UpdatePopularityResponse>> {
    let Json(request) = payload.inspect_err(|rejection| {
        warn!(reason = %rejection.body_text(), "rejected popularity update body");
    })?;

    let media_id = request.media_id();
    let popularity = request.popularity();
    let updated = state
        .catalog()
        .update_popularity(media_id.as_ref(), popularity.as_ref())
        .inspect_err(|err| {
            warn!(
                movie_id = ?request.movie_id,
                popularity = ?popularity,
                error = %err,
                "popularity update rejected"
            );
        })?;

    info!(id = %updated.id, popularity = updated.popularity, "popularity updated");

    Ok(Json(UpdatePopularityResponse::success(updated.popularity)))
}
