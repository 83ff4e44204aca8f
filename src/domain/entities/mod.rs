//! Core domain entities.
//!
//! - [`UrlRecord`] - A short code, its target URL and click counter

pub mod url_record;

pub use url_record::UrlRecord;
