//! Proxy error types.
//!
//! Every failure is terminal for the request. Each variant knows its HTTP
//! status and the JSON body the dashboard expects.

use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Plausible API key not configured")]
    MissingApiKey,

    #[error("Plausible API error ({status}): {detail}")]
    Upstream { status: u16, detail: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ProxyError {
    /// HTTP status code for this failure.
    pub fn status(&self) -> u16 {
        match self {
            ProxyError::MethodNotAllowed => 405,
            ProxyError::Unauthorized => 401,
            ProxyError::MissingApiKey => 500,
            ProxyError::Upstream { status, .. } => *status,
            ProxyError::Internal(_) => 500,
        }
    }

    /// JSON response body for this failure.
    pub fn to_body(&self) -> Value {
        match self {
            ProxyError::MethodNotAllowed => json!({ "error": "Method not allowed" }),
            ProxyError::Unauthorized => json!({ "error": "Unauthorized" }),
            ProxyError::MissingApiKey => json!({ "error": "Plausible API key not configured" }),
            ProxyError::Upstream { status, detail } => json!({
                "error": "Plausible API error",
                "status": status,
                "detail": detail,
            }),
            ProxyError::Internal(detail) => json!({
                "error": "Internal server error",
                "detail": detail,
            }),
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for ProxyError {
    fn from(err: serde_json::Error) -> Self {
        ProxyError::Internal(err.to_string())
    }
}

/// Result type alias for proxy operations.
pub type ProxyResult<T> = Result<T, ProxyError>;
