//! Unified error handling for suite endpoint clients
//!
//! Every wrapper surfaces failures through [`ClientError`], so apps can treat
//! them uniformly (or collapse them into an `ApiReply` error field).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for suite clients
pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "error_type", content = "details")]
pub enum ClientError {
    /// Input rejected before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Connection, DNS or TLS failure
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    /// Backend answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// Backend reported `success: false` in its envelope
    #[error("API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// HTTP status code best describing this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Transport(_) => 503,
            Self::Timeout(_) => 504,
            Self::Http { status, .. } => *status,
            Self::Decode(_) => 502,
            Self::Api(_) => 502,
            Self::Configuration(_) => 500,
        }
    }

    /// Check if this is a retryable error
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Timeout(_) => true,
            Self::Http { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(err.to_string())
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ClientError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
