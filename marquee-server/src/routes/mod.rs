use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    handlers::{
        discover_handler, fallback_handler, home_handler, status_handler,
        update_popularity_handler,
    },
    infra::app_state::AppState,
};

pub const HOME: &str = "/";
pub const DISCOVER: &str = "/discover";
pub const UPDATE_POPULARITY: &str = "/updatePopularity";
pub const STATUS: &str = "/status";

/// Create the public API router
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route(HOME, get(home_handler))
        .route(DISCOVER, get(discover_handler))
        .route(UPDATE_POPULARITY, post(update_popularity_handler))
        .route(STATUS, get(status_handler))
        .fallback(fallback_handler)
}
