//! Error types for scripture API operations.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during scripture API operations.
#[derive(Debug, Error)]
pub enum ScriptureError {
    /// HTTP transport could not complete the request (DNS, connect, TLS, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-2xx status or a body that is not JSON.
    #[error("Scripture API request failed: {message}")]
    ApiRequest {
        message: String,
        status_code: Option<u16>,
        /// Decoded error body returned by the API, when it was JSON.
        payload: Option<Value>,
    },

    /// A parameter value has a shape the client can reject locally.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ScriptureError {
    /// HTTP status reported by the API, if the request got that far.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ScriptureError::ApiRequest { status_code, .. } => *status_code,
            ScriptureError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Error body the API sent back, if any.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            ScriptureError::ApiRequest { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }

    /// Returns true for failures reported by the remote API rather than the transport.
    pub fn is_api_error(&self) -> bool {
        matches!(self, ScriptureError::ApiRequest { .. })
    }
}

/// Result type alias for scripture API operations.
pub type Result<T> = core::result::Result<T, ScriptureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_accessors() {
        let err = ScriptureError::ApiRequest {
            message: "not found".to_string(),
            status_code: Some(404),
            payload: Some(serde_json::json!({"error": "not found"})),
        };

        assert!(err.is_api_error());
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.payload(), Some(&serde_json::json!({"error": "not found"})));
        assert_eq!(err.to_string(), "Scripture API request failed: not found");
    }

    #[test]
    fn test_invalid_parameter_has_no_status() {
        let err = ScriptureError::InvalidParameter("content-type 'xml'".to_string());
        assert!(!err.is_api_error());
        assert_eq!(err.status_code(), None);
        assert!(err.payload().is_none());
    }
}
