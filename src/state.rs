//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::Registry;
use crate::domain::repositories::UrlRepository;

/// State shared by all request handlers.
///
/// Cheap to clone: the registry is reference-counted and the base URL is an
/// `Arc<str>`.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry<dyn UrlRepository>>,
    pub base_url: Arc<str>,
}

impl AppState {
    /// Creates the state from a registry and the public base URL of the service.
    pub fn new(registry: Arc<Registry<dyn UrlRepository>>, base_url: impl AsRef<str>) -> Self {
        Self {
            registry,
            base_url: Arc::from(base_url.as_ref().trim_end_matches('/')),
        }
    }

    /// Builds the fully-qualified short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
