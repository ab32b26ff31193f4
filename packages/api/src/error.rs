//! # Uniform client error
//!
//! Every failure a caller can see is an [`ApiError`]: local validation, a non-2xx
//! response, a network failure, or a payload that did not match the expected DTO.
//! Each exposes a human-readable message (`to_string()`) and, when one is known, the
//! HTTP status via [`ApiError::http_status`].
//!
//! [`ApiError::from_response`] normalises the backend's error bodies. The backend wraps
//! everything in a `CustomResponse` envelope, but proxies and the framework's default
//! error page use other shapes, so the message is taken from the first present of
//! `message`, `error`, then the transport reason; the status from `httpStatus`
//! (number, numeric string or status name such as `"NOT_FOUND"`), then the HTTP code.

use serde_json::Value;

pub const DEFAULT_MESSAGE: &str = "An error occurred";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Input rejected locally, before any request was made.
    #[error("{0}")]
    Validation(String),

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Http { message: String, status: Option<u16> },

    /// The request never produced a response (DNS, refused, timeout, CORS).
    #[error("{0}")]
    Network(String),

    /// A 2xx body that could not be mapped onto the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// HTTP status associated with this error, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }

    /// True when the server rejected the session (401 or 403).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.http_status(), Some(401) | Some(403))
    }

    /// Replace an empty message with `fallback`, keeping variant and status.
    pub(crate) fn or_message(self, fallback: &str) -> Self {
        match self {
            ApiError::Validation(m) if m.trim().is_empty() => ApiError::Validation(fallback.into()),
            ApiError::Http { message, status } if message.trim().is_empty() => ApiError::Http {
                message: fallback.into(),
                status,
            },
            ApiError::Network(m) if m.trim().is_empty() => ApiError::Network(fallback.into()),
            other => other,
        }
    }

    /// Build the uniform error for a non-2xx response with the given raw body.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed: Option<Value> = serde_json::from_slice(body).ok();
        let text_field = |key: &str| -> Option<String> {
            parsed
                .as_ref()?
                .get(key)?
                .as_str()
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        };

        let message = text_field("message")
            .or_else(|| text_field("error"))
            .unwrap_or_else(|| format!("Request failed with status code {status}"));

        let body_status = parsed
            .as_ref()
            .and_then(|v| v.get("httpStatus"))
            .and_then(parse_status);

        ApiError::Http {
            message,
            status: body_status.or(Some(status)),
        }
    }

    /// Build the uniform error for a request that produced no response.
    pub fn network(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        if reason.trim().is_empty() {
            ApiError::Network(DEFAULT_MESSAGE.to_string())
        } else {
            ApiError::Network(reason)
        }
    }
}

fn parse_status(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok().or_else(|| status_from_name(s.trim())),
        _ => None,
    }
}

/// Map a Spring `HttpStatus` enum name onto its numeric code.
fn status_from_name(name: &str) -> Option<u16> {
    let code = match name.to_ascii_uppercase().as_str() {
        "OK" => 200,
        "CREATED" => 201,
        "ACCEPTED" => 202,
        "NO_CONTENT" => 204,
        "BAD_REQUEST" => 400,
        "UNAUTHORIZED" => 401,
        "FORBIDDEN" => 403,
        "NOT_FOUND" => 404,
        "METHOD_NOT_ALLOWED" => 405,
        "CONFLICT" => 409,
        "GONE" => 410,
        "PAYLOAD_TOO_LARGE" => 413,
        "UNSUPPORTED_MEDIA_TYPE" => 415,
        "UNPROCESSABLE_ENTITY" => 422,
        "TOO_MANY_REQUESTS" => 429,
        "INTERNAL_SERVER_ERROR" => 500,
        "BAD_GATEWAY" => 502,
        "SERVICE_UNAVAILABLE" => 503,
        "GATEWAY_TIMEOUT" => 504,
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_preferred_over_error() {
        let err = ApiError::from_response(
            400,
            br#"{"message":"Name taken","error":"Bad Request","httpStatus":"CONFLICT"}"#,
        );
        assert_eq!(err.to_string(), "Name taken");
        assert_eq!(err.http_status(), Some(409));
    }

    #[test]
    fn test_error_field_used_when_message_missing() {
        let err = ApiError::from_response(404, br#"{"error":"Not Found","status":404}"#);
        assert_eq!(err.to_string(), "Not Found");
        assert_eq!(err.http_status(), Some(404));
    }

    #[test]
    fn test_numeric_http_status_in_body() {
        let err = ApiError::from_response(400, br#"{"message":"Expired","httpStatus":410}"#);
        assert_eq!(err.http_status(), Some(410));

        let err = ApiError::from_response(400, br#"{"message":"Expired","httpStatus":"410"}"#);
        assert_eq!(err.http_status(), Some(410));
    }

    #[test]
    fn test_unknown_status_name_falls_back_to_code() {
        let err = ApiError::from_response(418, br#"{"message":"Teapot","httpStatus":"I_AM_A_TEAPOT"}"#);
        assert_eq!(err.http_status(), Some(418));
    }

    #[test]
    fn test_non_json_body() {
        let err = ApiError::from_response(502, b"<html>Bad gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status code 502");
        assert_eq!(err.http_status(), Some(502));
    }

    #[test]
    fn test_blank_message_is_skipped() {
        let err = ApiError::from_response(500, br#"{"message":"  ","error":"Boom"}"#);
        assert_eq!(err.to_string(), "Boom");
    }

    #[test]
    fn test_network_error_has_no_status() {
        let err = ApiError::network("");
        assert_eq!(err.to_string(), DEFAULT_MESSAGE);
        assert_eq!(err.http_status(), None);
    }

    #[test]
    fn test_or_message_keeps_status() {
        let err = ApiError::Http {
            message: String::new(),
            status: Some(409),
        }
        .or_message("Failed to create a class.");
        assert_eq!(err.to_string(), "Failed to create a class.");
        assert_eq!(err.http_status(), Some(409));
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::from_response(401, b"").is_unauthorized());
        assert!(ApiError::from_response(403, b"").is_unauthorized());
        assert!(!ApiError::from_response(404, b"").is_unauthorized());
        assert!(!ApiError::network("offline").is_unauthorized());
    }
}
