// SPDX-License-Identifier: MPL-2.0
//! Failure taxonomy for remote API calls.
//!
//! Every failed call is reduced to one human-readable message so the views
//! can surface it uniformly, whatever went wrong underneath.

use serde_json::Value;
use std::fmt;

/// Message used when a failure carries no text at all.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Error returned by [`StudioApi`](super::StudioApi) implementations.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-success status and a structured body.
    Status {
        /// HTTP status code.
        status: u16,
        /// Parsed response body (`{"detail": ...}` for the studio API).
        body: Value,
    },
    /// Transport-level failure (connection refused, timeout, ...).
    Transport {
        /// Description of the failure, if the transport provided one.
        message: Option<String>,
    },
    /// A success response whose body did not match the expected shape.
    Decode(String),
}

impl ApiError {
    /// Creates a structured failure.
    pub fn status(status: u16, body: Value) -> Self {
        ApiError::Status { status, body }
    }

    /// Creates a transport failure with a message.
    pub fn transport(message: impl Into<String>) -> Self {
        ApiError::Transport {
            message: Some(message.into()),
        }
    }

    /// Returns the HTTP status code for structured failures.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Extracts the user-facing message.
    ///
    /// Structured failures use the body's `detail` field when present (as-is
    /// for strings, pretty-printed JSON otherwise) and fall back to the whole
    /// body. Other failures use their own text or [`UNKNOWN_ERROR`].
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ApiError::Status { body, .. } => {
                let detail = match body {
                    Value::Object(map) => map.get("detail").filter(|d| !d.is_null()),
                    _ => None,
                };
                let text = render_json(detail.unwrap_or(body));
                if text.trim().is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    text
                }
            }
            ApiError::Transport { message } => match message.as_deref() {
                Some(text) if !text.is_empty() => text.to_string(),
                _ => UNKNOWN_ERROR.to_string(),
            },
            ApiError::Decode(text) if !text.is_empty() => text.clone(),
            ApiError::Decode(_) => UNKNOWN_ERROR.to_string(),
        }
    }
}

fn render_json(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_detail_is_used_verbatim() {
        let err = ApiError::status(422, json!({ "detail": "Email already registered" }));
        assert_eq!(err.message(), "Email already registered");
        assert_eq!(err.status_code(), Some(422));
    }

    #[test]
    fn structured_detail_is_rendered_as_json() {
        let err = ApiError::status(422, json!({ "detail": { "field": "email", "msg": "invalid" } }));
        let message = err.message();

        assert!(message.contains("\"field\": \"email\""));
        assert!(message.contains("\"msg\": \"invalid\""));
        assert_ne!(message, "[object Object]");
    }

    #[test]
    fn list_detail_is_rendered_as_json() {
        let err = ApiError::status(422, json!({ "detail": [{ "loc": ["body", "email"] }] }));
        assert!(err.message().starts_with('['));
    }

    #[test]
    fn body_without_detail_is_rendered_whole() {
        let err = ApiError::status(500, json!({ "error": "boom" }));
        assert!(err.message().contains("\"error\": \"boom\""));
    }

    #[test]
    fn plain_string_body_is_used_verbatim() {
        let err = ApiError::status(502, Value::String("Bad gateway".into()));
        assert_eq!(err.message(), "Bad gateway");
    }

    #[test]
    fn empty_status_body_falls_back() {
        let err = ApiError::status(502, Value::String(String::new()));
        assert_eq!(err.message(), UNKNOWN_ERROR);

        let blank_detail = ApiError::status(500, json!({ "detail": "  " }));
        assert_eq!(blank_detail.message(), UNKNOWN_ERROR);
    }

    #[test]
    fn transport_without_message_falls_back() {
        let err = ApiError::Transport { message: None };
        assert_eq!(err.message(), UNKNOWN_ERROR);

        let empty = ApiError::Transport {
            message: Some(String::new()),
        };
        assert_eq!(empty.message(), UNKNOWN_ERROR);
    }

    #[test]
    fn transport_message_is_kept() {
        let err = ApiError::transport("connection refused");
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.status_code(), None);
    }
}
