//! Handlers for short URL redirect.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use url::Url;

use crate::api::dto::redirect::RedirectQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code taken from the path.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code through the registry (counts one click atomically)
/// 2. Return `302 Found` with `Location` set to the original URL
///
/// # Errors
///
/// Returns 404 Not Found with a JSON body if the code was never issued.
/// Returns 503 if the store cannot be reached.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    redirect_to(&state, &code).await
}

/// Redirects a short code taken from the query string.
///
/// # Endpoint
///
/// `GET /redirect?code={code}` (also `GET /api/redirect?code={code}`)
///
/// # Errors
///
/// Returns 400 Bad Request if `code` is missing or blank; otherwise the same
/// as [`redirect_handler`]. The code is matched exactly as given, like the
/// path form.
pub async fn redirect_query_handler(
    State(state): State<AppState>,
    Query(query): Query<RedirectQuery>,
) -> Result<Response, AppError> {
    let code = query
        .code
        .as_deref()
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::bad_request("Short code required", json!({})))?;

    redirect_to(&state, code).await
}

async fn redirect_to(state: &AppState, code: &str) -> Result<Response, AppError> {
    let record = state.registry.resolve(code).await?;
    let location = location_header(&record.original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` value for a stored URL.
///
/// ASCII URLs are sent exactly as stored; anything else is re-serialized
/// through the URL parser, which percent-encodes non-ASCII characters.
fn location_header(target: &str) -> Result<HeaderValue, AppError> {
    let value = if target.is_ascii() {
        HeaderValue::from_str(target).ok()
    } else {
        Url::parse(target)
            .ok()
            .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
    };

    value.ok_or_else(|| {
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({}),
        )
    })
}
