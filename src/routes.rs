//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`               - Short link redirect
//! - `POST /shorten`              - Create a short link
//! - `GET  /redirect?code=`       - Short link redirect by query
//! - `GET  /health`               - Health check (store connectivity)
//! - `/api/shorten`, `/api/redirect` - Same gateway under the `/api` prefix
//! - `GET  /api/stats/{code}`     - Record lookup without counting a click
//!
//! Static paths take precedence over `/{code}`, so `health`, `shorten` and
//! `redirect` are never treated as short codes.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling (applied in [`crate::server`])

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let api_router = api::routes::gateway_routes().merge(api::routes::stats_routes());

    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::gateway_routes())
        .nest("/api", api_router)
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}
