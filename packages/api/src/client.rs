//! # HTTP transport — `reqwest`
//!
//! [`HttpClient`] is the production [`Transport`]. One instance is shared by the whole
//! app (it is cheap to clone; `reqwest::Client` is reference counted).
//!
//! - **Base URL**: every [`ApiRequest`] path is resolved against [`ApiConfig::base_url`].
//! - **Credentials**: natively a cookie jar keeps the session cookie; in the browser
//!   requests use `credentials: include`.
//! - **CSRF**: on state-changing requests the `XSRF-TOKEN` cookie is mirrored into the
//!   `X-XSRF-TOKEN` header. When no token is known yet, `/csrf` is fetched once first;
//!   a token in that response body is remembered for origins whose cookies are not
//!   readable from script.
//! - **Timeout**: [`ApiConfig::timeout`] on native targets. Browser fetch has no
//!   per-request timeout in `reqwest`.
//! - **Errors**: see [`ApiError::from_response`]. Nothing is retried.

use std::sync::{Arc, Mutex};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::transport::{ApiRequest, Method, Transport};

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: ApiConfig,
    csrf_token: Arc<Mutex<Option<String>>>,
    #[cfg(not(target_arch = "wasm32"))]
    jar: Arc<reqwest::cookie::Jar>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        #[cfg(not(target_arch = "wasm32"))]
        {
            let jar = Arc::new(reqwest::cookie::Jar::default());
            let client = Client::builder()
                .default_headers(headers)
                .timeout(config.timeout)
                .cookie_provider(jar.clone())
                .build()
                .map_err(|e| ApiError::network(format!("Failed to build HTTP client: {e}")))?;
            Ok(Self {
                client,
                config,
                csrf_token: Arc::new(Mutex::new(None)),
                jar,
            })
        }

        #[cfg(target_arch = "wasm32")]
        {
            let client = Client::builder()
                .default_headers(headers)
                .build()
                .map_err(|e| ApiError::network(format!("Failed to build HTTP client: {e}")))?;
            Ok(Self {
                client,
                config,
                csrf_token: Arc::new(Mutex::new(None)),
            })
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn builder(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let builder = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    /// Current CSRF token: the cookie if readable, else the last `/csrf` body token.
    fn xsrf_token(&self) -> Option<String> {
        self.xsrf_cookie().or_else(|| {
            self.csrf_token
                .lock()
                .ok()
                .and_then(|token| token.clone())
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn xsrf_cookie(&self) -> Option<String> {
        use reqwest::cookie::CookieStore;

        let url = reqwest::Url::parse(&self.config.url("/")).ok()?;
        let header = self.jar.cookies(&url)?;
        cookie_value(header.to_str().ok()?, &self.config.xsrf_cookie_name)
    }

    #[cfg(target_arch = "wasm32")]
    fn xsrf_cookie(&self) -> Option<String> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
        let cookies = html.cookie().ok()?;
        cookie_value(&cookies, &self.config.xsrf_cookie_name)
    }

    /// Ask the backend to issue a CSRF token. Failures are logged, not returned: the
    /// following request will surface the real error.
    async fn prime_csrf(&self) {
        let url = self.config.url("/csrf");
        let response = match self.builder(Method::Get, &url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Failed to initialize CSRF token: {e}");
                return;
            }
        };
        let Ok(body) = response.json::<Value>().await else {
            return;
        };
        if let Some(token) = body.get("token").and_then(Value::as_str) {
            if let Ok(mut cached) = self.csrf_token.lock() {
                *cached = Some(token.to_string());
            }
        }
    }
}

impl Transport for HttpClient {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let state_changing = request.method.is_state_changing();
        if state_changing && self.xsrf_token().is_none() {
            self.prime_csrf().await;
        }

        let url = self.config.url(&request.path);
        let mut builder = self.builder(request.method, &url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if state_changing {
            if let Some(token) = self.xsrf_token() {
                builder = builder.header(self.config.xsrf_header_name.as_str(), token.as_str());
            }
        }
        if let Some(file) = request.file {
            let part = Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.content_type)
                .map_err(|e| ApiError::validation(format!("Invalid file type: {e}")))?;
            builder = builder.multipart(Form::new().part(file.field, part));
        } else if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(method = request.method.as_str(), path = %request.path, "api request");

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        if !status.is_success() {
            let err = ApiError::from_response(status.as_u16(), &bytes);
            tracing::warn!(
                method = request.method.as_str(),
                path = %request.path,
                status = status.as_u16(),
                "api request failed: {err}"
            );
            return Err(err);
        }

        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Find `name` in a `Cookie` header style string (`a=1; b=2`).
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value() {
        let cookies = "JSESSIONID=abc; XSRF-TOKEN=4f1c-99; theme=dark";
        assert_eq!(
            cookie_value(cookies, "XSRF-TOKEN").as_deref(),
            Some("4f1c-99")
        );
        assert_eq!(cookie_value(cookies, "theme").as_deref(), Some("dark"));
        assert!(cookie_value(cookies, "missing").is_none());
        assert!(cookie_value("XSRF-TOKEN=", "XSRF-TOKEN").is_none());
        assert!(cookie_value("", "XSRF-TOKEN").is_none());
    }

    #[test]
    fn test_client_builds_with_defaults() {
        let client = HttpClient::new(ApiConfig::default()).expect("client");
        assert_eq!(client.config().base_url, "http://localhost:8080");
        assert!(client.xsrf_token().is_none());
    }
}
