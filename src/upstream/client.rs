use super::types::GenerateRequest;
use crate::{Error, Result, config::UpstreamConfig};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait GenerateBackend: Send + Sync {
    /// Sends a completion request and returns the upstream JSON payload
    /// verbatim. No schema is imposed on the response body.
    async fn generate(&self, request: GenerateRequest) -> Result<serde_json::Value>;
}

pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl GenerateBackend for OllamaClient {
    async fn generate(&self, request: GenerateRequest) -> Result<serde_json::Value> {
        let url = format!("{}/api/generate", self.base_url);

        debug!("Forwarding prompt to {} with model {}", url, request.model);

        let response = self.client.post(&url).json(&request).send().await?;

        debug!("Upstream responded with status {}", response.status());

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| Error::upstream(format!("invalid JSON from upstream: {}", e)))?;

        Ok(body)
    }
}
