//! AI engine base URL derivation.
//!
//! The engine's address is configured as its health-check URL
//! (e.g. `http://127.0.0.1:15000/health`). The management endpoints live
//! next to it, so the base is that URL with a trailing `health` path
//! segment removed. Only an exact final segment is removed: `/healthz`
//! or `/health/extra` are left as they are, and a URL with no `/health`
//! suffix is used unchanged.

use std::fmt;
use thiserror::Error;
use url::Url;

const HEALTH_SEGMENT: &str = "health";

/// Why a health-check URL could not be turned into a base URL.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BaseUrlError {
    #[error("invalid URL: {0}")]
    Invalid(#[from] url::ParseError),

    #[error("unsupported scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    #[error("'{0}' is a dot segment and cannot be sent as a path segment")]
    DotSegment(String),
}

/// Root URL of the AI engine service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    url: Url,
}

impl BaseUrl {
    /// Base URL rendered without a trailing slash.
    pub fn as_str(&self) -> &str {
        self.url.as_str().trim_end_matches('/')
    }

    /// Build an endpoint URL by appending path segments to the base.
    ///
    /// Each segment is percent-encoded as a single segment, so an opaque
    /// identifier containing `/` or `?` reaches the engine intact instead
    /// of reshaping the path.
    ///
    /// `.` and `..` are rejected: URL parsing resolves them (and their
    /// `%2E` spellings) against the path, so they would be dropped.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, BaseUrlError> {
        if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(BaseUrlError::DotSegment(dot.to_string()));
        }

        let mut url = self.url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the engine base URL from its health-check URL.
pub fn derive_base_url(health_url: &str) -> Result<BaseUrl, BaseUrlError> {
    let mut url = Url::parse(health_url.trim())?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(BaseUrlError::UnsupportedScheme(other.to_string())),
    }

    url.set_query(None);
    url.set_fragment(None);

    // http(s) URLs always have a path, so path_segments_mut cannot fail here.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty();
    }
    if url.path_segments().and_then(|mut s| s.next_back()) == Some(HEALTH_SEGMENT) {
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop();
        }
    }

    Ok(BaseUrl { url })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(input: &str) -> String {
        derive_base_url(input).unwrap().to_string()
    }

    #[test]
    fn test_strips_health_suffix() {
        assert_eq!(base("http://host:1234/health"), "http://host:1234");
        assert_eq!(base("http://127.0.0.1:15000/health"), "http://127.0.0.1:15000");
        assert_eq!(base("https://engine.internal/health/"), "https://engine.internal");
    }

    #[test]
    fn test_without_suffix_is_unchanged() {
        assert_eq!(base("http://host:1234"), "http://host:1234");
        assert_eq!(base("http://host:1234/"), "http://host:1234");
        assert_eq!(base("http://host:1234/engine"), "http://host:1234/engine");
    }

    #[test]
    fn test_only_exact_segment_removed() {
        assert_eq!(base("http://host:1234/healthz"), "http://host:1234/healthz");
        assert_eq!(base("http://host:1234/health/live"), "http://host:1234/health/live");
        assert_eq!(base("http://health:1234/health"), "http://health:1234");
    }

    #[test]
    fn test_keeps_path_prefix() {
        assert_eq!(base("http://gw:80/ai/health"), "http://gw/ai");
        assert_eq!(base("http://gw:8000/ai/health?probe=1#x"), "http://gw:8000/ai");
    }

    #[test]
    fn test_endpoint_appends_segments() {
        let b = derive_base_url("http://host:1234/health").unwrap();
        assert_eq!(b.endpoint(&["mcp", "status"]).unwrap().as_str(), "http://host:1234/mcp/status");

        let b = derive_base_url("http://host:1234/ai/health").unwrap();
        assert_eq!(
            b.endpoint(&["mcp", "test", "srv-1"]).unwrap().as_str(),
            "http://host:1234/ai/mcp/test/srv-1"
        );
    }

    #[test]
    fn test_endpoint_encodes_opaque_ids() {
        let b = derive_base_url("http://host:1234/health").unwrap();
        assert_eq!(
            b.endpoint(&["mcp", "test", "a/b?c"]).unwrap().as_str(),
            "http://host:1234/mcp/test/a%2Fb%3Fc"
        );
    }

    #[test]
    fn test_endpoint_rejects_dot_segments() {
        let b = derive_base_url("http://host:1234/health").unwrap();
        assert_eq!(
            b.endpoint(&["mcp", "test", ".."]),
            Err(BaseUrlError::DotSegment("..".into()))
        );
        assert_eq!(
            b.endpoint(&["mcp", "test", "."]),
            Err(BaseUrlError::DotSegment(".".into()))
        );
        assert_eq!(
            b.endpoint(&["mcp", "test", "...", "a.b"]).unwrap().as_str(),
            "http://host:1234/mcp/test/.../a.b"
        );
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(derive_base_url("not a url"), Err(BaseUrlError::Invalid(_))));
        assert_eq!(
            derive_base_url("ftp://host/health"),
            Err(BaseUrlError::UnsupportedScheme("ftp".into()))
        );
    }
}
