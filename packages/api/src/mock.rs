//! Scripted in-memory transport for service and session tests.

use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::ApiResult;
use crate::transport::{ApiRequest, Method, Transport};

type Handler = dyn Fn(&ApiRequest) -> ApiResult<Value> + Send + Sync;

/// Records every request and answers it with `handler`.
#[derive(Clone)]
pub struct MockTransport {
    handler: Arc<Handler>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new(handler: impl Fn(&ApiRequest) -> ApiResult<Value> + Send + Sync + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answers every request with `Value::Null`.
    pub fn empty() -> Self {
        Self::new(|_| Ok(Value::Null))
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of recorded requests matching `method` and `path`.
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let response = (self.handler)(&request);
        self.requests.lock().unwrap().push(request);
        response
    }
}

/// Value of query parameter `key`, if present.
pub fn query<'a>(request: &'a ApiRequest, key: &str) -> Option<&'a str> {
    request
        .query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
