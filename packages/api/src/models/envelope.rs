use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::nullable;
use crate::error::{ApiError, ApiResult};

/// The `{ data, message, httpStatus }` wrapper around every backend response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub data: Option<T>,
    #[serde(deserialize_with = "nullable")]
    pub message: String,
    /// Status name as sent by the backend, e.g. `"OK"` or `"CREATED"`.
    #[serde(deserialize_with = "status_text")]
    pub http_status: String,
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            data: None,
            message: String::new(),
            http_status: String::new(),
        }
    }
}

impl<T> Envelope<T> {
    /// Parse an envelope from a transport payload. A `null` payload is an empty envelope.
    pub fn from_value(value: Value) -> ApiResult<Self>
    where
        T: for<'de> Deserialize<'de>,
    {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// The payload, or a decode error naming `what` when the backend sent none.
    pub fn require_data(self, what: &str) -> ApiResult<T> {
        self.data
            .ok_or_else(|| ApiError::Decode(format!("No {what} data returned from API")))
    }
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(deserialize_with = "nullable")]
    pub count: u64,
    #[serde(deserialize_with = "nullable")]
    pub data: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            count: 0,
            data: Vec::new(),
        }
    }
}

fn status_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default() {
        let env: Envelope<Page<u32>> = Envelope::from_value(json!({})).unwrap();
        assert!(env.data.is_none());
        assert_eq!(env.message, "");
        assert_eq!(env.http_status, "");
    }

    #[test]
    fn test_null_payload_is_empty_envelope() {
        let env: Envelope<u32> = Envelope::from_value(Value::Null).unwrap();
        assert_eq!(env, Envelope::default());
    }

    #[test]
    fn test_page_with_null_items() {
        let env: Envelope<Page<u32>> = Envelope::from_value(json!({
            "data": { "count": null, "data": null },
            "message": null,
            "httpStatus": 200
        }))
        .unwrap();
        let page = env.data.unwrap();
        assert_eq!(page.count, 0);
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_require_data() {
        let env: Envelope<u32> = Envelope::default();
        let err = env.require_data("finance account").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected response: No finance account data returned from API"
        );
    }
}
