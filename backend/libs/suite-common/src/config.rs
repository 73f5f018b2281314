//! Client configuration
//!
//! Loaded from `SUITE__*` environment variables (and `.env`) with defaults
//! suitable for a local backend.

use serde::Deserialize;
use std::time::Duration;

use crate::error::{ClientError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL shared by the auth, payments and operations backends
    pub api_base_url: String,
    /// Application identifier sent with every request
    pub app_id: String,
    pub request_timeout_ms: u64,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            app_id: app_id.into(),
            request_timeout_ms: 10_000,
        }
    }

    pub fn from_env() -> std::result::Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .set_default("api_base_url", "http://localhost:8080")?
            .set_default("app_id", "")?
            .set_default("request_timeout_ms", 10_000)?
            .add_source(
                config::Environment::with_prefix("SUITE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn validate(&self) -> Result<()> {
        if self.app_id.trim().is_empty() {
            return Err(ClientError::Configuration("app_id is required".to_string()));
        }

        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(ClientError::Configuration(format!(
                "api_base_url must be an http(s) URL, got {}",
                self.api_base_url
            )));
        }

        if self.request_timeout_ms == 0 {
            return Err(ClientError::Configuration(
                "request_timeout_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
