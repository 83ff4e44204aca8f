//! Repository trait for short code storage.

use crate::domain::entities::UrlRecord;
use crate::domain::error::RegistryError;
use async_trait::async_trait;

/// Aggregate figures over the whole store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreSummary {
    pub records: i64,
    pub clicks: i64,
}

/// Key-value store of [`UrlRecord`]s keyed by short code.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - DashMap-backed store
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Concurrency
///
/// Implementations must be safe to share across request tasks.
/// [`UrlRepository::insert`] is an atomic insert-if-absent and
/// [`UrlRepository::increment_clicks`] is linearizable per code: concurrent
/// increments of the same code never lose an update.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores a new record unless its code is already occupied.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Conflict`] if a record with the same code exists.
    /// The existing record is left untouched.
    ///
    /// Returns [`RegistryError::StoreUnavailable`] or [`RegistryError::Internal`]
    /// on backend failures.
    async fn insert(&self, record: UrlRecord) -> Result<UrlRecord, RegistryError>;

    /// Finds a record by exact code match without modifying it.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, RegistryError>;

    /// Atomically increments the click counter of `code` by one.
    ///
    /// Returns the post-increment record, or `Ok(None)` if the code is unknown.
    async fn increment_clicks(&self, code: &str) -> Result<Option<UrlRecord>, RegistryError>;

    /// Counts stored records and the sum of their clicks.
    async fn summary(&self) -> Result<StoreSummary, RegistryError>;

    /// Verifies the backend is reachable.
    async fn ping(&self) -> Result<(), RegistryError>;

    /// Short backend identifier used in logs and health output.
    fn backend_name(&self) -> &'static str;
}
