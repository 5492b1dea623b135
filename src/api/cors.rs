//! CORS negotiation for the contact endpoint.

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashSet};

pub const ALLOW_METHODS: &str = "POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";
pub const MAX_AGE_SECS: u32 = 3600;

static ALLOWED_ORIGINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "https://paper-plane-studio.vercel.app",
        "https://yanszi01.github.io",
        "https://yanzi01.github.io",
        "http://localhost:8000",
    ]
    .into_iter()
    .collect()
});

#[must_use]
pub fn is_allowed_origin(origin: &str) -> bool {
    ALLOWED_ORIGINS.contains(origin)
}

/// Response headers for a request from `origin`.
///
/// The origin is echoed back only when it is on the allow-list; every
/// other header is sent unconditionally.
#[must_use]
pub fn cors_headers(origin: Option<&str>) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    if let Some(origin) = origin.filter(|o| is_allowed_origin(o)) {
        headers.insert(
            "Access-Control-Allow-Origin".to_string(),
            origin.to_string(),
        );
    }
    headers.insert("Vary".to_string(), "Origin".to_string());
    headers.insert(
        "Access-Control-Allow-Methods".to_string(),
        ALLOW_METHODS.to_string(),
    );
    headers.insert(
        "Access-Control-Allow-Headers".to_string(),
        ALLOW_HEADERS.to_string(),
    );
    headers.insert(
        "Access-Control-Max-Age".to_string(),
        MAX_AGE_SECS.to_string(),
    );
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_origin_is_echoed() {
        let headers = cors_headers(Some("https://paper-plane-studio.vercel.app"));
        assert_eq!(
            headers.get("Access-Control-Allow-Origin").map(String::as_str),
            Some("https://paper-plane-studio.vercel.app")
        );
        assert_eq!(headers["Vary"], "Origin");
        assert_eq!(headers["Access-Control-Allow-Methods"], "POST, OPTIONS");
        assert_eq!(headers["Access-Control-Allow-Headers"], "Content-Type");
        assert_eq!(headers["Access-Control-Max-Age"], "3600");
    }

    #[test]
    fn test_unknown_origin_gets_no_allow_header() {
        let headers = cors_headers(Some("https://evil.example"));
        assert!(!headers.contains_key("Access-Control-Allow-Origin"));
        assert_eq!(headers["Vary"], "Origin");
    }

    #[test]
    fn test_origin_match_is_exact() {
        assert!(is_allowed_origin("http://localhost:8000"));
        assert!(!is_allowed_origin("http://localhost:8000/"));
        assert!(!is_allowed_origin("HTTPS://YANZI01.GITHUB.IO"));
        assert!(!cors_headers(None).contains_key("Access-Control-Allow-Origin"));
    }
}
