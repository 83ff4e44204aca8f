//! URL validation and title derivation.
//!
//! Submitted URLs are validated but stored verbatim: the registry must hand
//! back exactly the string it was given.

use url::Url;

/// Errors that can occur while validating a submitted URL.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must be absolute and include a host")]
    MissingHost,
}

/// Parses `input` as an absolute URL with a scheme and a non-empty host.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for blank input,
/// [`UrlValidationError::InvalidFormat`] for strings the URL parser rejects
/// (including relative references such as `example.com/path`) or that
/// contain control characters, and
/// [`UrlValidationError::MissingHost`] for host-less URLs like `mailto:`.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_absolute_url("https://example.com/very/long/path").is_ok());
/// assert!(validate_absolute_url("example.com").is_err());
/// ```
pub fn validate_absolute_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    // The parser silently drops tabs and newlines, but the stored string must
    // stay usable as a `Location` header value.
    if input.chars().any(char::is_control) {
        return Err(UrlValidationError::InvalidFormat(
            "URL must not contain control characters".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlValidationError::MissingHost),
    }
}

/// Derives the display title of a URL: its host with a leading `www.` removed.
///
/// Only the literal prefix is stripped; `www` elsewhere in the host is kept.
pub fn derive_title(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    host.strip_prefix("www.").unwrap_or(host).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_simple_https() {
        let url = validate_absolute_url("https://example.com/very/long/path").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_validate_rejects_control_characters() {
        for input in [
            "https://example.com/a\nb",
            "https://example.com/a\tb",
            "https://exa\rmple.com",
            "https://example.com/\u{7f}",
        ] {
            assert!(matches!(
                validate_absolute_url(input),
                Err(UrlValidationError::InvalidFormat(_))
            ));
        }
    }

    #[test]
    fn test_validate_with_port_and_query() {
        assert!(validate_absolute_url("http://localhost:8080/search?q=rust").is_ok());
    }

    #[test]
    fn test_validate_ip_host() {
        assert!(validate_absolute_url("http://192.168.1.1/admin").is_ok());
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(validate_absolute_url(""), Err(UrlValidationError::Empty));
        assert_eq!(validate_absolute_url("   "), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_validate_missing_scheme() {
        let result = validate_absolute_url("example.com/path");
        assert!(matches!(result, Err(UrlValidationError::InvalidFormat(_))));
    }

    #[test]
    fn test_validate_plain_text() {
        let result = validate_absolute_url("not a url");
        assert!(matches!(result, Err(UrlValidationError::InvalidFormat(_))));
    }

    #[test]
    fn test_validate_scheme_without_host() {
        assert!(validate_absolute_url("http://").is_err());
    }

    #[test]
    fn test_validate_hostless_scheme() {
        assert_eq!(
            validate_absolute_url("mailto:someone@example.com"),
            Err(UrlValidationError::MissingHost)
        );
    }

    #[test]
    fn test_title_strips_leading_www() {
        let url = Url::parse("https://www.example.com/page").unwrap();
        assert_eq!(derive_title(&url), "example.com");
    }

    #[test]
    fn test_title_without_www() {
        let url = Url::parse("https://docs.rs/tokio").unwrap();
        assert_eq!(derive_title(&url), "docs.rs");
    }

    #[test]
    fn test_title_keeps_inner_www() {
        let url = Url::parse("https://api.www.example.com").unwrap();
        assert_eq!(derive_title(&url), "api.www.example.com");
    }

    #[test]
    fn test_title_lowercases_host() {
        let url = Url::parse("https://WWW.Example.COM/Path").unwrap();
        assert_eq!(derive_title(&url), "example.com");
    }
}
