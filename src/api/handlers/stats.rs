//! Handler for reading a single link's click count.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::shorten::ShortUrlResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a short link record without counting a click.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Clients use this to refresh locally cached click counts; the counter kept
/// by the registry is the only source of truth.
///
/// # Errors
///
/// Returns 404 Not Found if the code was never issued.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let record = state.registry.lookup(&code).await?;
    let short_url = state.short_url(&record.code);

    Ok(Json(ShortUrlResponse::from_record(record, short_url)))
}
