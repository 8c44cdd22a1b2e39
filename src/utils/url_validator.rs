//! URL 验证模块
//!
//! Only absolute http/https URLs with a host may be bookmarked.

use url::Url;

use crate::errors::ServiceError;

/// Schemes rejected outright, before any parsing
const BLOCKED_SCHEMES: &[&str] = &["javascript", "data", "file", "vbscript", "about", "blob"];

#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    /// Scheme other than http/https, or none at all
    UnsupportedScheme(String),
    BlockedScheme(String),
    Malformed(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::UnsupportedScheme(_) => write!(f, "URL must start with http:// or https://"),
            Self::BlockedScheme(scheme) => write!(f, "URL scheme '{}' is not allowed", scheme),
            Self::Malformed(reason) => write!(f, "Invalid URL: {}", reason),
        }
    }
}

impl std::error::Error for UrlValidationError {}

impl From<UrlValidationError> for ServiceError {
    fn from(err: UrlValidationError) -> Self {
        ServiceError::bad_request(err.to_string())
    }
}

/// Check a submitted URL and return it without surrounding whitespace
pub fn validate_url(raw: &str) -> Result<&str, UrlValidationError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let scheme = url
        .split_once(':')
        .map(|(scheme, _)| scheme.to_ascii_lowercase())
        .unwrap_or_default();

    match scheme.as_str() {
        "http" | "https" => {}
        s if BLOCKED_SCHEMES.contains(&s) => {
            return Err(UrlValidationError::BlockedScheme(scheme));
        }
        _ => return Err(UrlValidationError::UnsupportedScheme(scheme)),
    }

    let parsed = Url::parse(url).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlValidationError::Malformed("missing host".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        for url in [
            "http://example.com",
            "https://example.com/path?query=1#frag",
            "http://localhost:8080",
            "HTTPS://EXAMPLE.COM/",
        ] {
            assert_eq!(validate_url(url), Ok(url), "{}", url);
        }
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(
            validate_url("  https://example.com \n"),
            Ok("https://example.com")
        );
    }

    #[test]
    fn test_blocked_schemes() {
        assert_eq!(
            validate_url("JavaScript:alert(1)"),
            Err(UrlValidationError::BlockedScheme("javascript".to_string()))
        );
        assert!(matches!(
            validate_url("data:text/html,hi"),
            Err(UrlValidationError::BlockedScheme(_))
        ));
    }

    #[test]
    fn test_unsupported_schemes() {
        for url in ["ftp://example.com", "mailto:a@b.c", "example.com", "not a url"] {
            assert!(
                matches!(validate_url(url), Err(UrlValidationError::UnsupportedScheme(_))),
                "{}",
                url
            );
        }
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(validate_url("http://"), Err(UrlValidationError::Malformed(_))));
        assert!(matches!(
            validate_url("http://exa mple.com"),
            Err(UrlValidationError::Malformed(_))
        ));
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate_url("   "), Err(UrlValidationError::EmptyUrl));
    }

    #[test]
    fn test_error_is_bad_request() {
        let err: ServiceError = validate_url("ftp://x").unwrap_err().into();
        assert!(matches!(err, ServiceError::BadRequest(_)));
    }
}
