//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortUrlResponse, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /shorten` (also `POST /api/shorten`)
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com/very/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "aB3xY9",
///   "shortUrl": "https://sho.rt/aB3xY9",
///   "originalUrl": "https://example.com/very/long/path",
///   "title": "example.com",
///   "clicks": 0,
///   "createdAt": "2025-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is missing or malformed, the field is
/// missing or empty, or the URL is not absolute. The store is not touched.
/// Returns 503 if the store cannot be reached.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Request body must be a JSON object with an originalUrl field",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let original_url = payload.original_url.as_deref().unwrap_or_default().trim();

    let record = state.registry.create(original_url).await?;
    let short_url = state.short_url(&record.code);

    Ok(Json(ShortUrlResponse::from_record(record, short_url)))
}
