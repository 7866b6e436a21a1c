use super::types::{CompletionMessage, CompletionRequest, CompletionResponse};
use super::CompletionConnector;
use crate::connectors::config::CompletionConfig;
use crate::connectors::errors::ConnectorError;
use std::time::Duration;
use tracing::Instrument;

/// HTTP client for the chat-completions endpoint
pub struct CompletionClient {
    endpoint: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    api_key: String,
    http_client: reqwest::Client,
}

impl CompletionClient {
    pub fn new(config: CompletionConfig) -> Result<Self, ConnectorError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConnectorError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: format!(
                "{}/v1/chat/completions",
                config.base_url.trim_end_matches('/')
            ),
            model: config.model,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            api_key: config.api_key,
            http_client,
        })
    }
}

#[async_trait::async_trait]
impl CompletionConnector for CompletionClient {
    async fn complete(&self, messages: &[CompletionMessage]) -> Result<String, ConnectorError> {
        let span = tracing::info_span!(
            "completion_request",
            model = %self.model,
            messages = messages.len()
        );

        let payload = CompletionRequest {
            model: &self.model,
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let resp = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .instrument(span)
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            tracing::error!("Completion endpoint returned {}", status);
            return Err(ConnectorError::from_status(status, text));
        }

        let body: CompletionResponse = serde_json::from_str(&text)
            .map_err(|e| ConnectorError::InvalidResponse(format!("{}: {}", e, text)))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ConnectorError::InvalidResponse("no choices in completion".to_string()))
    }
}
