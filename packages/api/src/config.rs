//! Client configuration.
//!
//! Native builds read `.env` (via `dotenvy`) and the process environment:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SCHOOLMONEY_API_BASE_URL` | `http://localhost:8080` |
//! | `SCHOOLMONEY_API_TIMEOUT_SECS` | `30` |
//!
//! Web builds take `SCHOOLMONEY_API_BASE_URL` at compile time and otherwise use the
//! page origin, which the dev server proxies to the API host.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const XSRF_COOKIE_NAME: &str = "XSRF-TOKEN";
pub const XSRF_HEADER_NAME: &str = "X-XSRF-TOKEN";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute base URL without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
    pub xsrf_cookie_name: String,
    pub xsrf_header_name: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base(&base_url.into()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            xsrf_cookie_name: XSRF_COOKIE_NAME.to_string(),
            xsrf_header_name: XSRF_HEADER_NAME.to_string(),
        }
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from the environment (native targets).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("SCHOOLMONEY_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_secs = std::env::var("SCHOOLMONEY_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(base_url).with_timeout(Duration::from_secs(timeout_secs))
    }

    /// Compile-time base URL, else the current page origin (web targets).
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        let base_url = match option_env!("SCHOOLMONEY_API_BASE_URL") {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };
        Self::new(base_url)
    }

    /// Absolute URL for an API path such as `/api/user/`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Resolve an avatar reference returned by the backend.
    ///
    /// Absolute `http(s)` URLs pass through, relative paths are prefixed with the base
    /// URL (a leading slash is added when missing), an empty value stays empty.
    pub fn resolve_asset(&self, raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() || raw.starts_with("http") {
            return raw.to_string();
        }
        let path = if raw.starts_with('/') {
            raw.to_string()
        } else {
            format!("/{raw}")
        };
        format!("{}{}", self.base_url, path)
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.url("/api/user/"), "https://api.example.com/api/user/");
        assert_eq!(config.url("csrf"), "https://api.example.com/csrf");
    }

    #[test]
    fn test_resolve_asset() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(
            config.resolve_asset("uploads/a.png"),
            "https://api.example.com/uploads/a.png"
        );
        assert_eq!(
            config.resolve_asset("/uploads/a.png"),
            "https://api.example.com/uploads/a.png"
        );
        assert_eq!(
            config.resolve_asset("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(config.resolve_asset(""), "");
    }

    #[test]
    fn test_resolve_asset_without_base() {
        let config = ApiConfig::new("");
        assert_eq!(config.resolve_asset("uploads/a.png"), "/uploads/a.png");
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.xsrf_cookie_name, "XSRF-TOKEN");
        assert_eq!(config.xsrf_header_name, "X-XSRF-TOKEN");
    }
}
