//! Shared JSON transport for the IT Planet backend API.

use anyhow::{anyhow, Result};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::BackendSettings;

/// HTTP transport shared by the typed clients.
///
/// The backend authenticates with a session cookie set by `/login`, so the
/// cookie store is enabled on the underlying client.
#[derive(Clone)]
pub struct Backend {
    client: Client,
    base_url: String,
}

/// Mutation responses carry a confirmation message.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

impl Backend {
    pub fn new(settings: BackendSettings) -> Result<Self> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            base_url: settings.url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("GET {} failed: {}", url, e);
            anyhow!("HTTP request failed: {e}")
        })?;
        Self::decode(&url, response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        let response = self.client.post(&url).json(body).send().await.map_err(|e| {
            tracing::error!("POST {} failed: {}", url, e);
            anyhow!("HTTP request failed: {e}")
        })?;
        Self::decode(&url, response).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        let response = self.client.put(&url).json(body).send().await.map_err(|e| {
            tracing::error!("PUT {} failed: {}", url, e);
            anyhow!("HTTP request failed: {e}")
        })?;
        Self::decode(&url, response).await
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = self.client.delete(&url).send().await.map_err(|e| {
            tracing::error!("DELETE {} failed: {}", url, e);
            anyhow!("HTTP request failed: {e}")
        })?;
        Self::decode(&url, response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a JSON body on success; surface the backend's `message` field
    /// verbatim on failure.
    async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, url = %url, "backend response");

        if status.is_success() {
            serde_json::from_str(&body)
                .map_err(|e| anyhow!("Unexpected response from backend: {e}"))
        } else {
            Err(anyhow!(Self::error_message(status, &body)))
        }
    }

    fn error_message(status: StatusCode, body: &str) -> String {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: String,
        }
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(err) => err.message,
            Err(_) => format!("Backend returned {status}"),
        }
    }
}
