//! Response envelope and error type shared by all endpoints.
//!
//! Every endpoint answers `{ "ok": true, "data": ... }` on success. Failures
//! come back either as `{ "ok": false, ... }` or as a bare error object such
//! as `{ "detail": "..." }`.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Ошибки обращения к API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("{0}")]
    Network(String),

    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: String },

    /// The server answered with a non-success envelope; holds the raw JSON.
    #[error("Server error: {0}")]
    Application(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Status code and body text of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the envelope regardless of the HTTP status.
    ///
    /// Used by the ask flow, which renders whatever JSON the server sent back
    /// when `ok` is not true.
    pub fn envelope<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let value: Value = match serde_json::from_str(&self.body) {
            Ok(v) => v,
            Err(e) => {
                if self.is_success() {
                    return Err(ApiError::Decode(e.to_string()));
                }
                return Err(ApiError::Http {
                    status: self.status,
                    detail: self.detail(),
                });
            }
        };

        if value.get("ok").and_then(Value::as_bool) != Some(true) {
            return Err(ApiError::Application(value.to_string()));
        }

        let data = value.get("data").cloned().unwrap_or(Value::Null);
        serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Reject non-2xx statuses first, then decode the envelope.
    pub fn checked_envelope<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(ApiError::Http {
                status: self.status,
                detail: self.detail(),
            });
        }
        self.envelope()
    }

    fn detail(&self) -> String {
        let trimmed = self.body.trim();
        if trimmed.is_empty() {
            "no details".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Primary {
        primary: String,
    }

    #[test]
    fn test_success_envelope() {
        let resp = ApiResponse::new(200, r#"{"ok":true,"data":{"primary":"ACME 14"}}"#);
        assert_eq!(
            resp.envelope::<Primary>().unwrap(),
            Primary {
                primary: "ACME 14".into()
            }
        );
    }

    #[test]
    fn test_not_ok_keeps_raw_json() {
        let resp = ApiResponse::new(500, r#"{"detail":"boom"}"#);
        let err = resp.envelope::<Primary>().unwrap_err();
        assert_eq!(err, ApiError::Application(r#"{"detail":"boom"}"#.into()));
    }

    #[test]
    fn test_checked_envelope_reports_status() {
        let resp = ApiResponse::new(502, "Bad Gateway");
        assert_eq!(
            resp.checked_envelope::<Primary>().unwrap_err(),
            ApiError::Http {
                status: 502,
                detail: "Bad Gateway".into()
            }
        );

        let empty = ApiResponse::new(500, "  ");
        assert_eq!(
            empty.checked_envelope::<Primary>().unwrap_err().to_string(),
            "HTTP 500: no details"
        );
    }

    #[test]
    fn test_garbage_body() {
        let resp = ApiResponse::new(200, "<html>");
        assert!(matches!(
            resp.envelope::<Primary>(),
            Err(ApiError::Decode(_))
        ));
    }
}
