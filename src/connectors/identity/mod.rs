//! Third-party identity provider (Google ID tokens).

mod client;
pub mod mock;

pub use client::GoogleIdentityClient;

use crate::connectors::errors::ConnectorError;
use serde::{Deserialize, Serialize};

/// Verified identity extracted from a provider token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityProfile {
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

#[async_trait::async_trait]
pub trait IdentityConnector: Send + Sync {
    /// Rejected or foreign tokens yield `ConnectorError::Unauthorized`.
    async fn verify_id_token(&self, id_token: &str) -> Result<IdentityProfile, ConnectorError>;
}
