//! Relay Error Taxonomy
//!
//! Every failure the relay can report, with its HTTP mapping. All error
//! responses share one wire shape: a JSON object with a single `error` key.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Max characters of a raw upstream body quoted back to the client
pub const BODY_SNIPPET_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum RelayError {
    /// Request body had no usable prompt
    #[error("Prompt is required")]
    MissingPrompt,
    /// Neither the request nor the environment supplied a key
    #[error("API key is required")]
    MissingApiKey,
    /// Router body was not JSON; carries a snippet of the raw text
    #[error("Invalid response from router: {0}")]
    InvalidUpstreamBody(String),
    /// Router reported an error; carries the `error` field verbatim
    #[error("Router error: {0}")]
    UpstreamError(Value),
    /// Router JSON had no choices[0].message.content
    #[error("No content in router response")]
    MissingContent,
    /// Transport faults and anything else without a dedicated variant
    #[error("{0}")]
    Internal(String),
}

impl RelayError {
    /// Build an `InvalidUpstreamBody` from the raw router text, keeping
    /// only the first [`BODY_SNIPPET_CHARS`] characters (not bytes, so a
    /// multibyte body never splits a code point).
    pub fn invalid_body(raw: &str) -> Self {
        Self::InvalidUpstreamBody(raw.chars().take(BODY_SNIPPET_CHARS).collect())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingPrompt => StatusCode::BAD_REQUEST,
            Self::MissingApiKey => StatusCode::UNAUTHORIZED,
            Self::InvalidUpstreamBody(_) | Self::UpstreamError(_) | Self::MissingContent => {
                StatusCode::BAD_GATEWAY
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        // The router's own error value passes through untouched (it may be
        // a string or an object); everything else reports its message.
        let error = match self {
            Self::UpstreamError(value) => value,
            other => Value::String(other.to_string()),
        };
        (status, Json(json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(RelayError::MissingPrompt.status(), StatusCode::BAD_REQUEST);
        assert_eq!(RelayError::MissingApiKey.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            RelayError::InvalidUpstreamBody("x".to_string()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            RelayError::UpstreamError(json!("quota exceeded")).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(RelayError::MissingContent.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            RelayError::Internal("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_match_wire_contract() {
        assert_eq!(RelayError::MissingPrompt.to_string(), "Prompt is required");
        assert_eq!(RelayError::MissingApiKey.to_string(), "API key is required");
        assert_eq!(
            RelayError::MissingContent.to_string(),
            "No content in router response"
        );
        assert_eq!(
            RelayError::invalid_body("<html>oops</html>").to_string(),
            "Invalid response from router: <html>oops</html>"
        );
    }

    #[test]
    fn test_invalid_body_truncates_by_chars() {
        let raw = "é".repeat(500);
        let err = RelayError::invalid_body(&raw);
        match err {
            RelayError::InvalidUpstreamBody(snippet) => {
                assert_eq!(snippet.chars().count(), BODY_SNIPPET_CHARS);
                assert_eq!(snippet, "é".repeat(BODY_SNIPPET_CHARS));
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_short_body_is_kept_whole() {
        let err = RelayError::invalid_body("oops");
        match err {
            RelayError::InvalidUpstreamBody(snippet) => assert_eq!(snippet, "oops"),
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
