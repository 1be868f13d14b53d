use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    analysis::ports::PromptGateway, common::entities::app_errors::CoreError,
    proxy::value_objects::ForwardPromptInput,
};

/// Posts prompts to the proxy endpoint.
#[derive(Debug, Clone)]
pub struct HttpPromptGateway {
    endpoint: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ProxyReply {
    text: String,
}

impl HttpPromptGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

impl PromptGateway for HttpPromptGateway {
    async fn complete(&self, input: ForwardPromptInput) -> Result<String, CoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&input)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Proxy request failed: {}", e);
                CoreError::AnalysisFailed
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Proxy returned error: {} - {}", status, error_text);
            return Err(CoreError::AnalysisFailed);
        }

        let reply: ProxyReply = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse proxy reply: {}", e);
            CoreError::AnalysisFailed
        })?;

        Ok(reply.text)
    }
}
