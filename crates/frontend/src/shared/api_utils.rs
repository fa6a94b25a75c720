//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Base URL baked in at build time, e.g. `CHAT_API_BASE=https://api.example.com`.
const CONFIGURED_BASE: Option<&str> = option_env!("CHAT_API_BASE");

/// Get the base URL for API requests
///
/// Uses `CHAT_API_BASE` when the bundle was built with it, otherwise the
/// origin the page was served from.
///
/// # Returns
/// - API base URL like "https://shop.example" (no trailing slash)
/// - Empty string if window is not available, which keeps paths relative
pub fn api_base() -> String {
    let origin = web_sys::window().and_then(|w| w.location().origin().ok());
    resolve_base(CONFIGURED_BASE, origin)
}

fn resolve_base(configured: Option<&str>, origin: Option<String>) -> String {
    let base = configured
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(str::to_string)
        .or(origin)
        .unwrap_or_default();
    base.trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/ask");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_base_wins() {
        assert_eq!(
            resolve_base(Some("https://api.example.com/"), Some("http://localhost:8080".into())),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_falls_back_to_origin() {
        assert_eq!(
            resolve_base(Some("  "), Some("http://localhost:8080".into())),
            "http://localhost:8080"
        );
        assert_eq!(resolve_base(None, None), "");
    }
}
