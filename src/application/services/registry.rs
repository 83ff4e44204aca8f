//! Short code allocation and resolution service.

use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::error::RegistryError;
use crate::domain::repositories::{StoreSummary, UrlRepository};
use crate::utils::code_generator::{generate_code, validate_lookup_code};
use crate::utils::url_validator::{derive_title, validate_absolute_url};
use tracing::{debug, info, warn};

/// Maximum number of generated codes tried before giving up on a create.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Sole authority over code generation, storage and resolution.
///
/// The registry owns the record store through an injected [`UrlRepository`],
/// so the same logic runs against the in-memory map in tests and PostgreSQL
/// in production.
pub struct Registry<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UrlRepository + ?Sized> Registry<R> {
    /// Creates a new registry over the given store.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Shortens `original_url`.
    ///
    /// The URL is stored exactly as given. A fresh 6-character code is drawn
    /// for every call, so shortening the same URL twice yields two records.
    ///
    /// # Code Generation
    ///
    /// The store performs an atomic insert-if-absent. When the drawn code is
    /// already occupied a new one is generated, up to [`MAX_CODE_ATTEMPTS`]
    /// times; an existing record is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidInput`] if the URL is not absolute
    /// (scheme + host). Nothing is stored in that case.
    ///
    /// Returns [`RegistryError::Internal`] if every attempt collided, and
    /// propagates store failures unchanged.
    pub async fn create(&self, original_url: &str) -> Result<UrlRecord, RegistryError> {
        let parsed = validate_absolute_url(original_url)?;
        let title = derive_title(&parsed);

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let record =
                UrlRecord::fresh(generate_code(), original_url.to_string(), title.clone());

            match self.repository.insert(record).await {
                Ok(stored) => {
                    info!(code = %stored.code, title = %stored.title, "Short link created");
                    metrics::counter!("shortly_links_created_total").increment(1);
                    return Ok(stored);
                }
                Err(RegistryError::Conflict(code)) => {
                    warn!(%code, attempt, "Short code collision, regenerating");
                    metrics::counter!("shortly_code_collisions_total").increment(1);
                }
                Err(e) => return Err(e),
            }
        }

        Err(RegistryError::Internal(format!(
            "Failed to allocate a unique short code after {} attempts",
            MAX_CODE_ATTEMPTS
        )))
    }

    /// Resolves `code` and counts the visit.
    ///
    /// The click increment is performed by the store as a single atomic
    /// operation; the returned record carries the post-increment count.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidInput`] for an empty code and
    /// [`RegistryError::NotFound`] if no record matches.
    pub async fn resolve(&self, code: &str) -> Result<UrlRecord, RegistryError> {
        validate_lookup_code(code)?;

        match self.repository.increment_clicks(code).await? {
            Some(record) => {
                debug!(code, clicks = record.clicks, "Short code resolved");
                metrics::counter!("shortly_redirects_total").increment(1);
                Ok(record)
            }
            None => {
                debug!(code, "Short code not found");
                metrics::counter!("shortly_redirect_misses_total").increment(1);
                Err(RegistryError::NotFound(code.to_string()))
            }
        }
    }

    /// Reads a record without counting a click.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve`].
    pub async fn lookup(&self, code: &str) -> Result<UrlRecord, RegistryError> {
        validate_lookup_code(code)?;

        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| RegistryError::NotFound(code.to_string()))
    }

    /// Returns record and click totals for the whole store.
    pub async fn summary(&self) -> Result<StoreSummary, RegistryError> {
        self.repository.summary().await
    }

    /// Checks that the underlying store is reachable.
    pub async fn ping(&self) -> Result<(), RegistryError> {
        self.repository.ping().await
    }

    /// Name of the storage backend in use.
    pub fn backend_name(&self) -> &'static str {
        self.repository.backend_name()
    }
}
