//! Shared response shapes for suite backends
//!
//! Backends answer either with a bare JSON payload or with the
//! `{ success, data, error }` envelope. Consumers that must never fail get
//! the "value or error field" shape through [`ApiReply`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, Result};

// ============================================================================
// RESPONSE ENVELOPE
// ============================================================================

/// Standard response envelope used by the operations and auth backends
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    pub fn into_result(self) -> Result<Option<T>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ClientError::Api(
                self.error.unwrap_or_else(|| "Unknown error".to_string()),
            ))
        }
    }
}

fn is_envelope(value: &Value) -> bool {
    value.get("success").is_some_and(Value::is_boolean)
}

/// Decode a response body that may or may not be enveloped.
///
/// An envelope with `success: true` and no `data` is decoded from the body
/// itself, then from JSON `null` (so `()` works).
pub fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let value: Value = serde_json::from_slice(bytes)?;
    if !is_envelope(&value) {
        return Ok(serde_json::from_value(value)?);
    }

    let envelope: ApiEnvelope<Value> = serde_json::from_value(value.clone())?;
    match envelope.into_result()? {
        Some(data) if !data.is_null() => Ok(serde_json::from_value(data)?),
        _ => serde_json::from_value(value)
            .or_else(|_| serde_json::from_value(Value::Null))
            .map_err(ClientError::from),
    }
}

// ============================================================================
// FALLBACK REPLY
// ============================================================================

/// Value-or-error shape returned to callers that must never throw.
///
/// A set `error` means "skip rendering".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiReply<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiReply<T> {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl<T> From<Result<T>> for ApiReply<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self {
                data: Some(data),
                error: None,
            },
            Err(err) => Self {
                data: None,
                error: Some(err.to_string()),
            },
        }
    }
}

pub trait ResultExt<T> {
    /// Collapse into the fallback shape
    fn into_reply(self) -> ApiReply<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_reply(self) -> ApiReply<T> {
        ApiReply::from(self)
    }
}
