use super::{IdentityConnector, IdentityProfile};
use crate::connectors::config::IdentityConfig;
use crate::connectors::errors::ConnectorError;
use serde::Deserialize;
use std::time::Duration;
use tracing::Instrument;

const TRUSTED_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

#[derive(Debug, Deserialize)]
struct TokenInfo {
    aud: String,
    #[serde(default)]
    iss: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

/// Verifies Google ID tokens with the token-info endpoint
pub struct GoogleIdentityClient {
    tokeninfo_url: String,
    client_id: String,
    http_client: reqwest::Client,
}

impl GoogleIdentityClient {
    pub fn new(config: IdentityConfig) -> Result<Self, ConnectorError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConnectorError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            tokeninfo_url: config.tokeninfo_url,
            client_id: config.client_id,
            http_client,
        })
    }
}

#[async_trait::async_trait]
impl IdentityConnector for GoogleIdentityClient {
    async fn verify_id_token(&self, id_token: &str) -> Result<IdentityProfile, ConnectorError> {
        let span = tracing::info_span!("identity_verify_token");

        let resp = self
            .http_client
            .get(&self.tokeninfo_url)
            .query(&[("id_token", id_token)])
            .send()
            .instrument(span)
            .await?;

        let status = resp.status();
        if status.is_client_error() {
            return Err(ConnectorError::Unauthorized(format!(
                "identity provider rejected token: {}",
                status
            )));
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ConnectorError::from_status(status, body));
        }

        let info: TokenInfo = resp
            .json()
            .await
            .map_err(|e| ConnectorError::InvalidResponse(e.to_string()))?;

        if info.aud != self.client_id {
            return Err(ConnectorError::Unauthorized(
                "token was issued for another client".to_string(),
            ));
        }
        if let Some(iss) = info.iss.as_deref() {
            if !TRUSTED_ISSUERS.contains(&iss) {
                return Err(ConnectorError::Unauthorized(format!("untrusted issuer {}", iss)));
            }
        }

        let email = info
            .email
            .filter(|email| !email.trim().is_empty())
            .ok_or_else(|| ConnectorError::Unauthorized("token carries no email".to_string()))?;

        Ok(IdentityProfile {
            email,
            name: info.name,
            picture: info.picture,
        })
    }
}
