use super::{CompletionConnector, CompletionMessage};
use crate::connectors::errors::ConnectorError;
use std::sync::Mutex;

/// Canned completion connector. Records every conversation it receives.
pub struct MockCompletionConnector {
    reply: Option<String>,
    received: Mutex<Vec<Vec<CompletionMessage>>>,
}

impl MockCompletionConnector {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with an upstream HTTP error.
    pub fn failing() -> Self {
        Self {
            reply: None,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<Vec<CompletionMessage>> {
        self.received
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl CompletionConnector for MockCompletionConnector {
    async fn complete(&self, messages: &[CompletionMessage]) -> Result<String, ConnectorError> {
        if let Ok(mut calls) = self.received.lock() {
            calls.push(messages.to_vec());
        }
        self.reply
            .clone()
            .ok_or_else(|| ConnectorError::HttpError("503 Service Unavailable".to_string()))
    }
}
