//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and request headers.

use std::collections::BTreeMap;

/// Build a full API URL from a base URL and a path
///
/// Trailing slashes of the base and a missing leading slash of the path
/// are normalized.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(
///     api_url("http://localhost:5000/", "api/Medicine"),
///     "http://localhost:5000/api/Medicine"
/// );
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Append an encoded query string to the URL (no-op for empty params)
pub fn with_query(url: &str, params: &BTreeMap<String, String>) -> Result<String, serde_qs::Error> {
    if params.is_empty() {
        return Ok(url.to_string());
    }
    let query = serde_qs::to_string(params)?;
    Ok(format!("{}?{}", url, query))
}

/// Value for the `Authorization` header
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(api_url("http://h:1", "/api/x"), "http://h:1/api/x");
        assert_eq!(api_url("http://h:1/", "/api/x"), "http://h:1/api/x");
        assert_eq!(api_url("http://h:1", "api/x"), "http://h:1/api/x");
    }

    #[test]
    fn test_with_query() {
        let mut params = BTreeMap::new();
        assert_eq!(with_query("http://h/api", &params).unwrap(), "http://h/api");

        params.insert("pageSize".to_string(), "10".to_string());
        params.insert("page".to_string(), "2".to_string());
        params.insert("search".to_string(), "al ex".to_string());
        let url = with_query("http://h/api", &params).unwrap();
        assert!(url.starts_with("http://h/api?page=2&pageSize=10&search=al"));
    }

    #[test]
    fn test_bearer() {
        assert_eq!(bearer("abc"), "Bearer abc");
    }
}
