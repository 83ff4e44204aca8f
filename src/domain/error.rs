//! Typed errors produced by the registry and its storage backends.

use crate::utils::url_validator::UrlValidationError;

/// Errors returned by [`crate::application::services::Registry`] and
/// [`crate::domain::repositories::UrlRepository`] implementations.
///
/// The HTTP layer maps each variant to a distinct status code
/// (see [`crate::error::AppError`]). `StoreUnavailable` and `NotFound` are
/// never conflated: a store that cannot be reached is a 503, not a 404.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Malformed URL or short code supplied by the caller.
    #[error("{0}")]
    InvalidInput(String),

    /// No record exists for the given short code.
    #[error("Short code '{0}' not found")]
    NotFound(String),

    /// The short code is already occupied. Consumed by the registry's
    /// regeneration loop and never surfaced to clients.
    #[error("Short code '{0}' is already taken")]
    Conflict(String),

    /// The backing store could not be reached or timed out.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Internal store error: {0}")]
    Internal(String),
}

impl From<UrlValidationError> for RegistryError {
    fn from(e: UrlValidationError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}
