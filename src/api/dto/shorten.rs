//! DTOs for the shorten endpoint and record views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlRecord;

/// Request to shorten a single URL.
///
/// The field is named `originalUrl`; `url` is accepted as an alias for older
/// clients.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    #[serde(default, alias = "url")]
    #[validate(
        required(message = "originalUrl is required"),
        length(min = 1, message = "originalUrl must not be empty")
    )]
    pub original_url: Option<String>,
}

/// A stored short link as returned to clients.
///
/// Used by both `POST /shorten` and `GET /api/stats/{code}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlResponse {
    pub code: String,
    pub short_url: String,
    pub original_url: String,
    pub title: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortUrlResponse {
    pub fn from_record(record: UrlRecord, short_url: String) -> Self {
        Self {
            code: record.code,
            short_url,
            original_url: record.original_url,
            title: record.title,
            clicks: record.clicks,
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_reads_camel_case_field() {
        let req: ShortenRequest =
            serde_json::from_value(json!({ "originalUrl": "https://example.com" })).unwrap();

        assert_eq!(req.original_url.as_deref(), Some("https://example.com"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_request_accepts_url_alias() {
        let req: ShortenRequest =
            serde_json::from_value(json!({ "url": "https://example.com" })).unwrap();

        assert_eq!(req.original_url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_request_missing_field_fails_validation() {
        let req: ShortenRequest = serde_json::from_value(json!({})).unwrap();

        assert!(req.original_url.is_none());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_request_empty_field_fails_validation() {
        let req: ShortenRequest = serde_json::from_value(json!({ "originalUrl": "" })).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let record = UrlRecord::fresh(
            "aB3xY9".to_string(),
            "https://example.com/a".to_string(),
            "example.com".to_string(),
        );

        let value =
            serde_json::to_value(ShortUrlResponse::from_record(record, "https://sho.rt/aB3xY9".into()))
                .unwrap();

        assert_eq!(value["code"], "aB3xY9");
        assert_eq!(value["shortUrl"], "https://sho.rt/aB3xY9");
        assert_eq!(value["originalUrl"], "https://example.com/a");
        assert_eq!(value["title"], "example.com");
        assert_eq!(value["clicks"], 0);
        assert!(value["createdAt"].is_string());
    }
}
