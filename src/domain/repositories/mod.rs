//! Repository trait definitions for the domain layer.
//!
//! The registry depends on [`UrlRepository`] only; concrete stores live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_url.rs` for the PostgreSQL backend.

pub mod url_repository;

pub use url_repository::{StoreSummary, UrlRepository};

#[cfg(test)]
pub use url_repository::MockUrlRepository;
