//! # Use-case services
//!
//! [`SchoolMoney`] is the single entry point the UI talks to. Every method follows the
//! same contract:
//!
//! 1. validate inputs locally, failing with [`ApiError::Validation`] before any request;
//! 2. call one or more endpoint functions from [`crate::resources`];
//! 3. decode the envelope into DTOs (relative avatar paths resolved);
//! 4. on failure return the uniform [`ApiError`], with a per-use-case fallback message
//!    when the error carries none.
//!
//! The `*_and_reload` workflows perform a write followed by exactly one full list
//! fetch. Lists are small, so nothing is patched locally. Once the write has gone
//! through the workflow succeeds; a failed refetch only yields `None` for the list.

mod auth;
mod class;
mod finance;
mod student;
mod user;

pub use user::MAX_AVATAR_BYTES;

use std::future::Future;

use serde_json::Value;

use crate::client::HttpClient;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::Envelope;
use crate::transport::Transport;

/// Services backed by the production HTTP client.
pub type Api = SchoolMoney<HttpClient>;

#[derive(Clone)]
pub struct SchoolMoney<T: Transport = HttpClient> {
    transport: T,
    config: ApiConfig,
}

impl<T: Transport> SchoolMoney<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl SchoolMoney<HttpClient> {
    /// Build from [`ApiConfig::from_env`].
    pub fn from_env() -> ApiResult<Self> {
        Self::connect(ApiConfig::from_env())
    }

    pub fn connect(config: ApiConfig) -> ApiResult<Self> {
        let transport = HttpClient::new(config.clone())?;
        Ok(Self::new(transport, config))
    }
}

impl<T: Transport> PartialEq for SchoolMoney<T> {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

/// Log a failed use case and apply its fallback message.
fn failed(action: &'static str, fallback: &'static str) -> impl FnOnce(ApiError) -> ApiError {
    move |err| {
        if err.is_validation() {
            tracing::debug!("{action} rejected: {err}");
        } else {
            tracing::error!("{action} failed: {err}");
        }
        err.or_message(fallback)
    }
}

/// Refetch after a write that already went through.
async fn reload_after<P>(action: &'static str, list: impl Future<Output = ApiResult<P>>) -> Option<P> {
    match list.await {
        Ok(page) => Some(page),
        Err(err) => {
            tracing::warn!("{action} succeeded but the list reload failed: {err}");
            None
        }
    }
}

/// The server's `message` from an envelope whose payload the caller does not need.
fn envelope_message(value: Value) -> ApiResult<String> {
    Ok(Envelope::<Value>::from_value(value)?.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;

    #[test]
    fn test_envelope_message() {
        let message =
            envelope_message(serde_json::json!({ "message": "Class created", "data": null }))
                .unwrap();
        assert_eq!(message, "Class created");
        assert_eq!(envelope_message(Value::Null).unwrap(), "");
    }

    #[test]
    fn test_failed_applies_fallback() {
        let err = failed("Logout", "Logout failed. Please try again.")(ApiError::Http {
            message: " ".to_string(),
            status: Some(500),
        });
        assert_eq!(err.to_string(), "Logout failed. Please try again.");
        assert_eq!(err.http_status(), Some(500));
    }

    #[test]
    fn test_equality_by_config() {
        let a = SchoolMoney::new(MockTransport::empty(), ApiConfig::new("http://a"));
        let b = SchoolMoney::new(MockTransport::empty(), ApiConfig::new("http://a"));
        assert!(a == b);
    }
}
