//! Implements TransportPort over reqwest.
//!
//! Attaches the API key as a query parameter and the per-client signature
//! as the Authorization header. Maps HTTP failures to ClientError.

use crate::domain::ClientError;
use crate::ports::TransportPort;
use crate::shared::config::ClientConfig;
use reqwest::header::AUTHORIZATION;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};

/// Signed HTTP transport for the feeds API.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    /// Create a transport against `base_url` (e.g. a `/api/v1.0/` root).
    ///
    /// # Arguments
    /// * `base_url` - API endpoint root; a trailing slash is not required
    /// * `api_key` - application key sent with every request
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a transport from configuration. Fails when no API key is set
    /// or the underlying client cannot be constructed.
    pub fn from_config(cfg: &ClientConfig) -> Result<Self, ClientError> {
        let api_key = cfg.api_key().ok_or_else(|| {
            ClientError::Validation("API key not configured (set FEEDKIT_API_KEY)".to_string())
        })?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms_or_default()))
            .build()
            .map_err(|e| ClientError::Transport(format!("build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: cfg.api_url_or_default(),
            api_key,
        })
    }

    fn endpoint(&self, url: &str) -> String {
        join_url(&self.base_url, url)
    }

    async fn handle(&self, response: reqwest::Response) -> Result<Value, ClientError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(format!("read response body: {}", e)))?;

        if !status.is_success() {
            warn!(status = %status, body = %text.chars().take(200).collect::<String>(), "feeds API returned error");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: text.chars().take(200).collect(),
            });
        }

        // DELETE success responses can be empty; surface them as {}.
        if text.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        serde_json::from_str(&text)
            .map_err(|e| ClientError::Serde(format!("parse response JSON: {}", e)))
    }
}

/// Join the API root and a request path, normalizing slashes.
fn join_url(base: &str, url: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        url.trim_start_matches('/')
    )
}

#[async_trait::async_trait]
impl TransportPort for HttpTransport {
    async fn get(
        &self,
        url: &str,
        qs: &[(String, String)],
        signature: &str,
    ) -> Result<Value, ClientError> {
        debug!(url, params = qs.len(), "GET");
        let response = self
            .client
            .get(self.endpoint(url))
            .query(&[("api_key", self.api_key.as_str())])
            .query(qs)
            .header(AUTHORIZATION, signature)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("HTTP request failed: {}", e)))?;
        self.handle(response).await
    }

    async fn post(&self, url: &str, body: Value, signature: &str) -> Result<Value, ClientError> {
        debug!(url, "POST");
        let response = self
            .client
            .post(self.endpoint(url))
            .query(&[("api_key", self.api_key.as_str())])
            .header(AUTHORIZATION, signature)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("HTTP request failed: {}", e)))?;
        self.handle(response).await
    }

    async fn put(&self, url: &str, body: Value, signature: &str) -> Result<Value, ClientError> {
        debug!(url, "PUT");
        let response = self
            .client
            .put(self.endpoint(url))
            .query(&[("api_key", self.api_key.as_str())])
            .header(AUTHORIZATION, signature)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("HTTP request failed: {}", e)))?;
        self.handle(response).await
    }

    async fn delete(&self, url: &str, signature: &str) -> Result<Value, ClientError> {
        debug!(url, "DELETE");
        let response = self
            .client
            .delete(self.endpoint(url))
            .query(&[("api_key", self.api_key.as_str())])
            .header(AUTHORIZATION, signature)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("HTTP request failed: {}", e)))?;
        self.handle(response).await
    }
}
