//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::UrlRecord;
use crate::domain::error::RegistryError;
use crate::domain::repositories::{StoreSummary, UrlRepository};

/// Process-local store backed by a sharded concurrent map.
///
/// Records live for the lifetime of the process. Insert-if-absent goes
/// through the entry API and click increments mutate the record under the
/// shard's write lock, so both are atomic with respect to other requests.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    records: DashMap<String, UrlRecord>,
}

impl InMemoryUrlRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn insert(&self, record: UrlRecord) -> Result<UrlRecord, RegistryError> {
        match self.records.entry(record.code.clone()) {
            Entry::Occupied(_) => Err(RegistryError::Conflict(record.code)),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, RegistryError> {
        Ok(self.records.get(code).map(|entry| entry.value().clone()))
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<UrlRecord>, RegistryError> {
        Ok(self.records.get_mut(code).map(|mut entry| {
            let record = entry.value_mut();
            record.clicks += 1;
            record.clone()
        }))
    }

    async fn summary(&self) -> Result<StoreSummary, RegistryError> {
        let mut summary = StoreSummary::default();

        for entry in self.records.iter() {
            summary.records += 1;
            summary.clicks += entry.value().clicks;
        }

        Ok(summary)
    }

    async fn ping(&self) -> Result<(), RegistryError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, url: &str) -> UrlRecord {
        UrlRecord::fresh(code.to_string(), url.to_string(), "example.com".to_string())
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryUrlRepository::new();

        repo.insert(record("abc123", "https://example.com/a"))
            .await
            .unwrap();

        let found = repo.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://example.com/a");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_insert_conflict_keeps_existing_record() {
        let repo = InMemoryUrlRepository::new();

        repo.insert(record("abc123", "https://first.com"))
            .await
            .unwrap();

        let result = repo.insert(record("abc123", "https://second.com")).await;
        assert!(matches!(result, Err(RegistryError::Conflict(code)) if code == "abc123"));

        let found = repo.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://first.com");
    }

    #[tokio::test]
    async fn test_find_is_case_sensitive() {
        let repo = InMemoryUrlRepository::new();

        repo.insert(record("AbC123", "https://example.com"))
            .await
            .unwrap();

        assert!(repo.find_by_code("abc123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_increment_clicks() {
        let repo = InMemoryUrlRepository::new();
        repo.insert(record("abc123", "https://example.com"))
            .await
            .unwrap();

        let first = repo.increment_clicks("abc123").await.unwrap().unwrap();
        let second = repo.increment_clicks("abc123").await.unwrap().unwrap();

        assert_eq!(first.clicks, 1);
        assert_eq!(second.clicks, 2);
    }

    #[tokio::test]
    async fn test_increment_unknown_code() {
        let repo = InMemoryUrlRepository::new();

        assert!(repo.increment_clicks("nope00").await.unwrap().is_none());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_summary() {
        let repo = InMemoryUrlRepository::new();
        repo.insert(record("aaaaaa", "https://a.com")).await.unwrap();
        repo.insert(record("bbbbbb", "https://b.com")).await.unwrap();
        repo.increment_clicks("aaaaaa").await.unwrap();
        repo.increment_clicks("aaaaaa").await.unwrap();
        repo.increment_clicks("bbbbbb").await.unwrap();

        let summary = repo.summary().await.unwrap();

        assert_eq!(summary, StoreSummary { records: 2, clicks: 3 });
    }
}
