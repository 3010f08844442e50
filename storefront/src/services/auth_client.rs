//! Authentication calls against the backend.

use anyhow::Result;

use super::backend::{Backend, MessageResponse};
use crate::models::user::{CurrentUser, LoginCredentials, LoginResponse, Registration};

#[derive(Clone)]
pub struct AuthClient {
    backend: Backend,
}

impl AuthClient {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// `POST /login`. On success the backend sets its session cookie on the
    /// shared transport and returns the operator identity.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<CurrentUser> {
        let response: LoginResponse = self.backend.post_json("/login", credentials).await?;
        tracing::info!(username = %response.user.username, "logged in");
        Ok(response.user)
    }

    /// `POST /logout`.
    pub async fn logout(&self) -> Result<()> {
        let _: MessageResponse = self
            .backend
            .post_json("/logout", &serde_json::json!({}))
            .await?;
        Ok(())
    }

    /// `POST /register`. Returns the backend's confirmation message.
    pub async fn register(&self, registration: &Registration) -> Result<String> {
        let response: MessageResponse = self.backend.post_json("/register", registration).await?;
        Ok(response.message)
    }
}
