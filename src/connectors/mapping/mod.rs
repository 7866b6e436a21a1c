//! Mapping provider: forward geocoding and nearby points of interest.

mod client;
pub mod mock;
mod types;

pub use client::GeoapifyClient;
pub use types::{Coordinates, NearbyQuery, ProviderPlace};

use crate::connectors::errors::ConnectorError;

#[async_trait::async_trait]
pub trait MappingConnector: Send + Sync {
    /// Best match for a free-text query, `None` when the provider found nothing.
    async fn geocode(&self, query: &str) -> Result<Option<Coordinates>, ConnectorError>;

    async fn nearby(&self, query: &NearbyQuery<'_>) -> Result<Vec<ProviderPlace>, ConnectorError>;
}
