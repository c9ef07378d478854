use axum::http::Uri;

use crate::infra::errors::AppError;

pub const HOME_MESSAGE: &str = "This app is an API for discovering movies and TV shows. \
Use GET /discover?type=movie|tv&genre=<id> to browse the catalog, \
POST /updatePopularity with {\"movieId\", \"popularity\"} to adjust a popularity score, \
and GET /status for a liveness check.";

pub async fn home_handler() -> &'static str {
    HOME_MESSAGE
}

/// Liveness probe; the body is exactly `OK`.
pub async fn status_handler() -> &'static str {
    "OK"
}

pub async fn fallback_handler(uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {}", uri.path()))
}
