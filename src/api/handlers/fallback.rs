//! Method fallback for gateway routes.

use axum::http::{Method, Uri};
use serde_json::json;

use crate::error::AppError;

/// Answers requests whose path exists but whose method does not.
///
/// Attached with `MethodRouter::fallback` so that, for example, `GET /shorten`
/// receives the same JSON error shape as every other failure instead of
/// axum's empty 405 body.
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> AppError {
    AppError::method_not_allowed(
        format!("Method {} not allowed", method),
        json!({ "method": method.as_str(), "path": uri.path() }),
    )
}
