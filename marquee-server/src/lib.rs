//! # Marquee Server
//!
//! HTTP service over a fixed, in-memory catalog of movies and TV shows.
//!
//! - `GET /` describes the API
//! - `GET /discover` lists up to twenty items of one media type, optionally by genre
//! - `POST /updatePopularity` adjusts the popularity score of one item
//! - `GET /status` is a liveness probe
//!
//! The catalog is loaded once at startup and shared with every handler
//! through [`AppState`].

pub mod app;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use app::create_app;
pub use infra::app_state::AppState;
