use super::{IdentityConnector, IdentityProfile};
use crate::connectors::errors::ConnectorError;

/// Accepts exactly one token and maps it to a fixed profile.
pub struct MockIdentityConnector {
    pub token: String,
    pub profile: IdentityProfile,
}

#[async_trait::async_trait]
impl IdentityConnector for MockIdentityConnector {
    async fn verify_id_token(&self, id_token: &str) -> Result<IdentityProfile, ConnectorError> {
        if id_token == self.token {
            Ok(self.profile.clone())
        } else {
            Err(ConnectorError::Unauthorized("unknown token".to_string()))
        }
    }
}
