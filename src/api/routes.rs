//! API route configuration.

use crate::api::handlers::{
    method_not_allowed_handler, redirect_query_handler, shorten_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shorten/redirect gateway routes.
///
/// Mounted both at the root and under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`            - Create a short link
/// - `GET  /redirect?code=...`  - Redirect by query parameter
///
/// Any other method on these paths answers `405` with a JSON error.
pub fn gateway_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shorten",
            post(shorten_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/redirect",
            get(redirect_query_handler).fallback(method_not_allowed_handler),
        )
}

/// Read-only inspection routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET /stats/{code}` - Record with its current click count (no increment)
pub fn stats_routes() -> Router<AppState> {
    Router::new().route("/stats/{code}", get(stats_handler))
}
