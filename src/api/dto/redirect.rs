//! DTOs for the redirect endpoint.

use serde::Deserialize;

/// Query string of `GET /redirect?code=...`.
#[derive(Debug, Deserialize)]
pub struct RedirectQuery {
    pub code: Option<String>,
}
