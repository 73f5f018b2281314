//! JSON-over-HTTP client shared by every endpoint wrapper
//!
//! One request per call, no retries. Non-success statuses and undecodable
//! bodies come back as typed [`ClientError`]s.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::models::decode_body;

/// Header carrying the calling application's id
pub const APP_ID_HEADER: &str = "X-App-Id";

/// Backend client bound to one base URL and application id
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    app_id: String,
}

impl ApiClient {
    /// Create a client from validated configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ClientError::Configuration(format!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            app_id: config.app_id.clone(),
        })
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str, bearer: Option<&str>) -> RequestBuilder {
        let builder = self
            .client
            .request(method, self.url(path))
            .header(APP_ID_HEADER, &self.app_id);

        match bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// GET `path` and decode the JSON response
    pub async fn get_json<Res>(&self, path: &str, bearer: Option<&str>) -> Result<Res>
    where
        Res: DeserializeOwned,
    {
        self.send(path, self.request(Method::GET, path, bearer)).await
    }

    /// POST `body` as JSON to `path` and decode the JSON response
    pub async fn post_json<Req, Res>(&self, path: &str, body: &Req, bearer: Option<&str>) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        self.send(path, self.request(Method::POST, path, bearer).json(body))
            .await
    }

    async fn send<Res>(&self, path: &str, builder: RequestBuilder) -> Result<Res>
    where
        Res: DeserializeOwned,
    {
        let response = builder.send().await.map_err(|e| {
            warn!(endpoint = path, error = %e, "Request failed");
            ClientError::from(e)
        })?;

        let status = response.status();
        debug!(endpoint = path, status = status.as_u16(), "Backend responded");

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(endpoint = path, status = status.as_u16(), "Backend returned error status");
            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            // 204-style replies decode as JSON null
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }

        decode_body(&bytes)
    }
}
