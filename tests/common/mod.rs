#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use shortly::application::services::Registry;
use shortly::domain::RegistryError;
use shortly::domain::entities::UrlRecord;
use shortly::domain::repositories::{StoreSummary, UrlRepository};
use shortly::infrastructure::persistence::InMemoryUrlRepository;
use shortly::routes::app_router;
use shortly::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "https://sho.rt";

/// Builds state over a fresh in-memory store; the store handle is returned
/// so tests can seed or inspect it directly.
pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let registry: Arc<Registry<dyn UrlRepository>> =
        Arc::new(Registry::new(repository.clone() as Arc<dyn UrlRepository>));

    (AppState::new(registry, BASE_URL), repository)
}

/// Full application router over a fresh in-memory store.
pub fn create_test_server() -> (TestServer, Arc<InMemoryUrlRepository>) {
    let (state, repository) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    (server, repository)
}

/// Full application router over a store that fails every call.
pub fn create_unavailable_server() -> TestServer {
    let registry: Arc<Registry<dyn UrlRepository>> = Arc::new(Registry::new(
        Arc::new(UnavailableRepository) as Arc<dyn UrlRepository>,
    ));

    TestServer::new(app_router(AppState::new(registry, BASE_URL))).unwrap()
}

pub async fn seed_record(repository: &InMemoryUrlRepository, code: &str, url: &str) -> UrlRecord {
    let record = UrlRecord::new(
        code.to_string(),
        url.to_string(),
        "example.com".to_string(),
        0,
        Utc::now(),
    );

    repository.insert(record).await.unwrap()
}

/// Store stand-in whose backend is always down.
pub struct UnavailableRepository;

fn unavailable() -> RegistryError {
    RegistryError::StoreUnavailable("connection refused".to_string())
}

#[async_trait]
impl UrlRepository for UnavailableRepository {
    async fn insert(&self, _record: UrlRecord) -> Result<UrlRecord, RegistryError> {
        Err(unavailable())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<UrlRecord>, RegistryError> {
        Err(unavailable())
    }

    async fn increment_clicks(&self, _code: &str) -> Result<Option<UrlRecord>, RegistryError> {
        Err(unavailable())
    }

    async fn summary(&self) -> Result<StoreSummary, RegistryError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), RegistryError> {
        Err(unavailable())
    }

    fn backend_name(&self) -> &'static str {
        "unavailable"
    }
}
