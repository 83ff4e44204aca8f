//! URL record entity representing one shortened URL.

use chrono::{DateTime, Utc};

/// A shortened URL together with its click counter.
///
/// Records are created once by [`crate::application::services::Registry`] and
/// afterwards only ever mutated by the click increment performed on resolution.
/// `original_url` and `created_at` never change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub code: String,
    pub original_url: String,
    /// Host of `original_url` with a leading `www.` removed. Display only.
    pub title: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        code: String,
        original_url: String,
        title: String,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            original_url,
            title,
            clicks,
            created_at,
        }
    }

    /// Builds a record that has never been visited, stamped with the current time.
    pub fn fresh(code: String, original_url: String, title: String) -> Self {
        Self::new(code, original_url, title, 0, Utc::now())
    }
}
