use serde::de::IgnoredAny;
use suite_common::{ApiClient, ClientError, Result};
use tracing::info;

use crate::models::{AppScoped, Session, SignInRequest, SignUpRequest};

/// Identity backend client
///
/// Every call is keyed by the application id of the underlying [`ApiClient`].
/// Session semantics belong to the backend; this client only carries them.
#[derive(Debug, Clone)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Resolve the session behind `access_token`
    pub async fn get_session(&self, access_token: &str) -> Result<Session> {
        require("access_token", access_token)?;
        self.api.get_json("/auth/session", Some(access_token)).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        require("email", email)?;
        require("password", password)?;

        let body = SignInRequest {
            app_id: self.api.app_id(),
            email,
            password,
        };
        let session: Session = self.api.post_json("/auth/sign-in", &body, None).await?;
        info!(app_id = self.api.app_id(), user_id = %session.user.id, "Signed in");
        Ok(session)
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<Session> {
        require("email", email)?;
        require("password", password)?;
        if !email.contains('@') {
            return Err(ClientError::Validation(format!("invalid email: {}", email)));
        }

        let body = SignUpRequest {
            app_id: self.api.app_id(),
            email,
            password,
            display_name,
        };
        let session: Session = self.api.post_json("/auth/sign-up", &body, None).await?;
        info!(app_id = self.api.app_id(), user_id = %session.user.id, "Signed up");
        Ok(session)
    }

    pub async fn sign_out(&self, access_token: &str) -> Result<()> {
        require("access_token", access_token)?;

        let body = AppScoped {
            app_id: self.api.app_id().to_string(),
        };
        let _: IgnoredAny = self
            .api
            .post_json("/auth/sign-out", &body, Some(access_token))
            .await?;
        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation(format!("{} is required", field)));
    }
    Ok(())
}
