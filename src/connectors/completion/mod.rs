//! Hosted language-model connector (chat-completions style API).

mod client;
pub mod mock;
mod types;

pub use client::CompletionClient;
pub use types::{CompletionMessage, CompletionRole};

use crate::connectors::errors::ConnectorError;

#[async_trait::async_trait]
pub trait CompletionConnector: Send + Sync {
    /// Send the whole conversation and return the text of the first candidate.
    async fn complete(&self, messages: &[CompletionMessage]) -> Result<String, ConnectorError>;
}
