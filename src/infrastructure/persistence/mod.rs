//! Storage backends implementing [`crate::domain::repositories::UrlRepository`].
//!
//! # Repositories
//!
//! - [`InMemoryUrlRepository`] - DashMap-backed store, used by default and in tests
//! - [`PgUrlRepository`] - PostgreSQL store using SQLx

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
